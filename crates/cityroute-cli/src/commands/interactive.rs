//! Interactive prompt loop: start city, destination, time of day, repeat.
//!
//! Rejected input never ends the session. Only `exit` at the start prompt or
//! end of input does.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use cityroute_lib::{
    parse_time_slot, plan_route, Error as RouteError, Graph, RouteAlgorithm, RouteRequest,
    RouteSummary, TimeSlot, Weight,
};

use crate::commands::route::{format_invalid_time_message, format_unknown_city_message};
use crate::terminal::ColorPalette;

const EXIT_COMMAND: &str = "exit";

enum Answer {
    Route {
        slot: TimeSlot,
        cost: Weight,
        path: String,
    },
    NoRoute {
        start: String,
        goal: String,
    },
}

/// Run the prompt loop until `exit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    graph: &Graph,
    algorithm: RouteAlgorithm,
    palette: &ColorPalette,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let mut queries = 0usize;
    loop {
        let Some(start) = prompt(
            &mut input,
            out,
            palette,
            "\nEnter start city name (or 'exit' to quit): ",
        )?
        else {
            break;
        };
        if start == EXIT_COMMAND {
            break;
        }
        let Some(goal) = prompt(&mut input, out, palette, "Enter destination city name: ")? else {
            break;
        };
        let Some(time) = prompt(
            &mut input,
            out,
            palette,
            "Enter time of day (morning/afternoon/evening): ",
        )?
        else {
            break;
        };

        queries += 1;
        match answer(graph, algorithm, &start, &goal, &time) {
            Ok(Answer::Route { slot, cost, path }) => {
                writeln!(
                    out,
                    "{}Shortest distance (with traffic for {}): {}{}",
                    palette.green, slot, cost, palette.reset
                )?;
                writeln!(out, "Path: {}", path)?;
            }
            Ok(Answer::NoRoute { start, goal }) => {
                writeln!(out, "No route found from {} to {}", start, goal)?;
            }
            Err(message) => {
                writeln!(out, "{}{} Try again.{}", palette.red, message, palette.reset)?;
            }
        }
    }

    debug!(queries, "interactive session finished");
    out.flush().context("failed to flush interactive output")?;
    Ok(())
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    palette: &ColorPalette,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}{}{}", palette.gray, text, palette.reset)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn answer(
    graph: &Graph,
    algorithm: RouteAlgorithm,
    start: &str,
    goal: &str,
    time: &str,
) -> std::result::Result<Answer, String> {
    let mut unknown = Vec::new();
    for name in [start, goal] {
        match graph.resolve_city_id(name) {
            Ok(_) => {}
            Err(RouteError::UnknownCity { name, suggestions }) => {
                unknown.push(format_unknown_city_message(&name, &suggestions));
            }
            Err(other) => return Err(other.to_string()),
        }
    }
    if !unknown.is_empty() {
        return Err(format!("Invalid city name(s): {}", unknown.join(" ")));
    }

    let slot = parse_time_slot(time).map_err(|_| format_invalid_time_message(time))?;
    let request = RouteRequest::new(start, goal, slot).with_algorithm(algorithm);

    match plan_route(graph, &request) {
        Ok(plan) => {
            let summary = RouteSummary::from_plan(graph, &plan).map_err(|err| err.to_string())?;
            Ok(Answer::Route {
                slot,
                cost: plan.cost,
                path: summary.path_line(),
            })
        }
        Err(RouteError::RouteNotFound { start, goal, .. }) => Ok(Answer::NoRoute { start, goal }),
        Err(other) => Err(other.to_string()),
    }
}
