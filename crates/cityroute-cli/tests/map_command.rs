mod common;

use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

use common::prepare_command;

#[test]
fn map_lists_every_direction_in_id_order() {
    let mut cmd = prepare_command();
    cmd.arg("map");

    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).expect("utf8 output");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("Graph Layout (9 cities, 22 directed edges):")
    );
    assert_eq!(
        lines.next(),
        Some("Delhi -> Agra (Base: 200, Traffic (Morning): 40, Afternoon: 20, Evening: 60)")
    );
    assert!(text.contains(
        "Agra -> Delhi (Base: 200, Traffic (Morning): 40, Afternoon: 20, Evening: 60)"
    ));
    assert!(!text.contains("Shimla ->"));
}

#[test]
fn map_json_is_machine_readable() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json", "map"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["cities"], 9);
    assert_eq!(value["entries"].as_array().map(Vec::len), Some(22));
}

#[test]
fn incomplete_traffic_aborts_loading() {
    let temp = tempdir().expect("create temp dir");
    let path = temp.path().join("cities_and_edges.json");
    fs::write(
        &path,
        r#"{"cities":[{"id":0,"name":"A"},{"id":1,"name":"B"}],
            "edges":[{"u":0,"v":1,"base":5,"traffic":{"morning":2,"afternoon":1}}]}"#,
    )
    .expect("write graph");

    let mut cmd = prepare_command();
    cmd.arg("--graph").arg(temp.path()).arg("map");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing the evening traffic weight"));
}
