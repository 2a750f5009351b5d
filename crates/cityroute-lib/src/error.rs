use std::path::PathBuf;

use thiserror::Error;

use crate::graph::{CityId, Weight};
use crate::time_slot::TimeSlot;

/// Convenient result alias for the cityroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a city id or name is registered twice.
    #[error("duplicate city {name} (id {id})")]
    DuplicateCity { id: CityId, name: String },

    /// Raised when a city name could not be resolved.
    #[error("unknown city name: {name}{}", format_suggestions(.suggestions))]
    UnknownCity {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a city id is not registered in the graph.
    #[error("unknown city id: {id}")]
    UnknownCityId { id: CityId },

    /// Raised when a city id does not fit the declared vertex capacity.
    #[error("city id {id} is outside the vertex capacity of {capacity}")]
    CityIdOutOfRange { id: CityId, capacity: usize },

    /// Raised when a requested vertex capacity dwarfs the declared cities.
    #[error("vertex capacity {capacity} exceeds the limit of {limit} for this graph")]
    CapacityTooLarge { capacity: usize, limit: usize },

    /// Raised when an edge does not define a weight for every time slot.
    #[error("edge {from} - {to} is missing the {missing} traffic weight")]
    IncompleteTraffic {
        from: CityId,
        to: CityId,
        missing: TimeSlot,
    },

    /// Raised when text does not name a known time slot.
    #[error("invalid time of day '{value}'; expected morning, afternoon or evening")]
    InvalidTimeSlot { value: String },

    /// Raised when a predecessor walk cannot reach the source.
    #[error("city {to} is unreachable from city {from}")]
    Unreachable { from: CityId, to: CityId },

    /// Raised by the query façade when no route exists between two named cities.
    #[error("no route found from {start} to {goal} in the {slot}")]
    RouteNotFound {
        start: String,
        goal: String,
        slot: TimeSlot,
    },

    /// Raised when a computed route plan lacks any cities.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised by engines that require non-negative edge costs.
    #[error("edge {from} -> {to} has negative cost {cost} in the {slot}")]
    NegativeEdgeCost {
        from: CityId,
        to: CityId,
        slot: TimeSlot,
        cost: Weight,
    },

    /// Raised when a predecessor map loops without reaching the source.
    #[error("predecessor chain for city {destination} contains a cycle")]
    PredecessorCycle { destination: CityId },

    /// Graph document could not be located at the resolved path.
    #[error("graph file not found at {path}")]
    GraphFileNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the default graph file")]
    ProjectDirsUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_city_without_suggestions() {
        let err = Error::UnknownCity {
            name: "Atlantis".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown city name: Atlantis");
    }

    #[test]
    fn unknown_city_with_single_suggestion() {
        let err = Error::UnknownCity {
            name: "Delhy".to_string(),
            suggestions: vec!["Delhi".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown city name: Delhy. Did you mean 'Delhi'?"
        );
    }

    #[test]
    fn unknown_city_with_many_suggestions() {
        let err = Error::UnknownCity {
            name: "Pun".to_string(),
            suggestions: vec!["Pune".to_string(), "Puri".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown city name: Pun. Did you mean one of: 'Pune', 'Puri'?"
        );
    }

    #[test]
    fn incomplete_traffic_names_missing_slot() {
        let err = Error::IncompleteTraffic {
            from: 0,
            to: 1,
            missing: TimeSlot::Evening,
        };
        assert_eq!(
            err.to_string(),
            "edge 0 - 1 is missing the evening traffic weight"
        );
    }
}
