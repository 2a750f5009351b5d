#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/cities_and_edges.json")
        .canonicalize()
        .expect("fixture graph present")
}

pub fn cli() -> Command {
    cargo_bin_cmd!("cityroute")
}

/// Command pointed at the fixture graph through the environment, with quiet logs.
pub fn prepare_command() -> Command {
    let mut cmd = cli();
    cmd.env("CITYROUTE_GRAPH", fixture_path())
        .env("RUST_LOG", "error")
        .env_remove("NO_COLOR")
        .arg("--no-color");
    cmd
}
