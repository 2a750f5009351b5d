//! Route command handler for computing paths between cities.

use std::io::Write;

use anyhow::{Context, Result};

use cityroute_lib::{
    parse_time_slot, plan_route, Error as RouteError, Graph, RouteAlgorithm, RouteRequest,
    RouteSummary, TimeSlot,
};

use crate::output::OutputFormat;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting city name.
    pub from: String,
    /// Destination city name.
    pub to: String,
    /// Time of day, as typed by the user.
    pub time: String,
    /// Algorithm to use when planning the route.
    pub algorithm: RouteAlgorithm,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> Result<RouteRequest> {
        let slot = parse_time_slot(&self.time).map_err(friendly_error)?;
        Ok(RouteRequest::new(self.from.clone(), self.to.clone(), slot).with_algorithm(self.algorithm))
    }
}

/// Handle the `route` subcommand.
pub fn handle_route_command<W: Write>(
    graph: &Graph,
    args: &RouteCommandArgs,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let request = args.to_request()?;
    let plan = plan_route(graph, &request).map_err(friendly_error)?;
    let summary =
        RouteSummary::from_plan(graph, &plan).context("failed to build route summary for display")?;

    format
        .write_route(out, &summary)
        .context("failed to write route output")?;
    Ok(())
}

/// Map a library error into the message shown to the user.
pub(crate) fn friendly_error(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownCity { name, suggestions } => {
            anyhow::anyhow!(format_unknown_city_message(&name, &suggestions))
        }
        RouteError::RouteNotFound { start, goal, slot } => {
            anyhow::anyhow!(format_route_not_found_message(&start, &goal, slot))
        }
        RouteError::InvalidTimeSlot { value } => {
            anyhow::anyhow!(format_invalid_time_message(&value))
        }
        other => anyhow::Error::new(other),
    }
}

pub(crate) fn format_unknown_city_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown city '{}'.", name);
    let formatted = match suggestions {
        [] => None,
        [only] => Some(format!("Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!("Did you mean one of: {}?", joined))
        }
    };
    if let Some(formatted) = formatted {
        message.push(' ');
        message.push_str(&formatted);
    }
    message
}

fn format_route_not_found_message(start: &str, goal: &str, slot: TimeSlot) -> String {
    format!("No route found from {} to {} in the {}.", start, goal, slot)
}

pub(crate) fn format_invalid_time_message(value: &str) -> String {
    let expected = TimeSlot::ALL
        .iter()
        .map(|slot| slot.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Invalid time of day '{}'. Expected one of: {}.", value, expected)
}
