use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Time of day that selects which traffic weight applies to an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    /// Every slot, in declaration order.
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    /// Lowercase name accepted by [`parse_time_slot`].
    pub fn as_str(self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_time_slot(s)
    }
}

/// Parse a time slot from its exact, case-sensitive lowercase name.
///
/// Anything else (including `"MORNING"` or `"noon"`) is rejected with
/// [`Error::InvalidTimeSlot`] rather than falling back to a default slot.
pub fn parse_time_slot(text: &str) -> Result<TimeSlot> {
    TimeSlot::ALL
        .into_iter()
        .find(|slot| slot.as_str() == text)
        .ok_or_else(|| Error::InvalidTimeSlot {
            value: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_slot_name() {
        assert_eq!(parse_time_slot("morning").unwrap(), TimeSlot::Morning);
        assert_eq!(parse_time_slot("afternoon").unwrap(), TimeSlot::Afternoon);
        assert_eq!(parse_time_slot("evening").unwrap(), TimeSlot::Evening);
    }

    #[test]
    fn rejects_wrong_case_and_unknown_names() {
        for text in ["MORNING", "Morning", "noon", "", " morning"] {
            let err = parse_time_slot(text).unwrap_err();
            assert!(
                matches!(err, Error::InvalidTimeSlot { ref value } if value == text),
                "unexpected error for {text:?}: {err}"
            );
        }
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for slot in TimeSlot::ALL {
            assert_eq!(slot.to_string().parse::<TimeSlot>().unwrap(), slot);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&TimeSlot::Afternoon).unwrap();
        assert_eq!(json, "\"afternoon\"");
    }
}
