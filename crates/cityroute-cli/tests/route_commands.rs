mod common;

use predicates::prelude::*;

use common::prepare_command;

#[test]
fn text_route_lists_steps_and_total() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Delhi", "--to", "Varanasi", "--time", "morning"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Route from Delhi to Varanasi (3 hops; time: morning; algorithm: bellman-ford):",
        ))
        .stdout(predicate::str::contains(" - Agra (+240)"))
        .stdout(predicate::str::contains("Total cost: 950"));
}

#[test]
fn basic_format_outputs_minimal_path() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "basic"])
        .args(["route", "--from", "Delhi", "--to", "Varanasi", "--time", "evening"]);

    cmd.assert()
        .success()
        .stdout("+ Delhi\n| Agra\n| Lucknow\n- Varanasi\n");
}

#[test]
fn json_format_reports_cost_and_slot() {
    let mut cmd = prepare_command();
    cmd.args(["--format", "json"])
        .args(["route", "--from", "Delhi", "--to", "Bhopal", "--time", "afternoon"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(value["total_cost"], 785);
    assert_eq!(value["slot"], "afternoon");
    assert_eq!(value["hops"], 3);
    assert_eq!(value["goal"]["name"], "Bhopal");
}

#[test]
fn dijkstra_algorithm_is_supported() {
    let mut cmd = prepare_command();
    cmd.args(["--algorithm", "dijkstra"])
        .args(["route", "--from", "Delhi", "--to", "Varanasi", "--time", "afternoon"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("algorithm: dijkstra"))
        .stdout(predicate::str::contains("Total cost: 910"));
}

#[test]
fn graph_flag_overrides_environment() {
    let mut cmd = prepare_command();
    cmd.env("CITYROUTE_GRAPH", "/nonexistent/cities_and_edges.json")
        .arg("--graph")
        .arg(common::fixture_path())
        .args(["route", "--from", "Delhi", "--to", "Agra", "--time", "morning"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total cost: 240"));
}

#[test]
fn unknown_city_suggests_alternatives() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Dehli", "--to", "Agra", "--time", "morning"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown city 'Dehli'."))
        .stderr(predicate::str::contains("'Delhi'"));
}

#[test]
fn isolated_city_reports_no_route() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Delhi", "--to", "Shimla", "--time", "evening"]);

    cmd.assert().failure().stderr(predicate::str::contains(
        "No route found from Delhi to Shimla in the evening.",
    ));
}

#[test]
fn time_of_day_is_case_sensitive() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "Delhi", "--to", "Agra", "--time", "Morning"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time of day 'Morning'."));
}

#[test]
fn missing_graph_file_is_reported() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let mut cmd = prepare_command();
    cmd.arg("--graph")
        .arg(temp.path())
        .args(["route", "--from", "Delhi", "--to", "Agra", "--time", "morning"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn capacity_below_largest_id_is_rejected() {
    let mut cmd = prepare_command();
    cmd.args(["--capacity", "5", "map"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("outside the vertex capacity of 5"));
}

#[test]
fn oversized_capacity_is_refused() {
    let mut cmd = prepare_command();
    cmd.args(["--capacity", "18446744073709551615", "map"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the limit of 1024"));
}
