mod common;

use predicates::prelude::*;

use common::prepare_command;

#[test]
fn session_answers_queries_until_exit() {
    let mut cmd = prepare_command();
    cmd.arg("interactive")
        .write_stdin("Delhi\nVaranasi\nmorning\nDelhi\nShimla\nevening\nexit\nDelhi\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Shortest distance (with traffic for morning): 950",
        ))
        .stdout(predicate::str::contains(
            "Path: Delhi -> Agra -> Lucknow -> Varanasi",
        ))
        .stdout(predicate::str::contains("No route found from Delhi to Shimla"))
        .stdout(predicate::str::contains("Enter destination city name: ").count(2));
}

#[test]
fn session_recovers_from_bad_input() {
    let mut cmd = prepare_command();
    cmd.arg("interactive")
        .write_stdin("Dehli\nAgra\nmorning\nDelhi\nAgra\ndusk\nDelhi\nAgra\nafternoon\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Invalid city name(s): Unknown city 'Dehli'."))
        .stdout(predicate::str::contains("Invalid time of day 'dusk'."))
        .stdout(predicate::str::contains(
            "Shortest distance (with traffic for afternoon): 220",
        ));
}

#[test]
fn default_mode_prints_map_then_prompts() {
    let mut cmd = prepare_command();
    cmd.write_stdin("");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Graph Layout (9 cities"))
        .stdout(predicate::str::contains(
            "Enter start city name (or 'exit' to quit): ",
        ));
}
