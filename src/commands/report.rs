//! End-of-game statistics
//!
//! Append-only round history, rendered as JSON when the game ends.

use serde::Serialize;

/// One round of the game: which word was guessed and how big the candidate
/// pool was before the guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundRecord {
    pub round: usize,
    pub guess: String,
    pub pool_size: usize,
}

/// Full game outcome with the ordered round history
#[derive(Debug, Clone, Serialize)]
pub struct GameReport {
    pub solved: bool,
    pub rounds: Vec<RoundRecord>,
}

impl GameReport {
    #[must_use]
    pub const fn new(solved: bool, rounds: Vec<RoundRecord>) -> Self {
        Self { solved, rounds }
    }

    /// Render the report as pretty-printed JSON
    ///
    /// # Errors
    /// Returns a serialization error if the report cannot be encoded, which
    /// does not happen for these plain data types.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_rounds_in_order() {
        let report = GameReport::new(
            true,
            vec![
                RoundRecord {
                    round: 1,
                    guess: "slate".to_string(),
                    pool_size: 488,
                },
                RoundRecord {
                    round: 2,
                    guess: "crane".to_string(),
                    pool_size: 12,
                },
            ],
        );

        let json = report.to_json().unwrap();
        assert!(json.contains("\"solved\": true"));

        let slate = json.find("slate").unwrap();
        let crane = json.find("crane").unwrap();
        assert!(slate < crane, "rounds must keep their order");
    }

    #[test]
    fn report_round_trip_fields() {
        let report = GameReport::new(false, vec![]);
        let json = report.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["solved"], serde_json::json!(false));
        assert!(value["rounds"].as_array().unwrap().is_empty());
    }

    #[test]
    fn record_serializes_all_fields() {
        let record = RoundRecord {
            round: 3,
            guess: "irate".to_string(),
            pool_size: 7,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["round"], 3);
        assert_eq!(value["guess"], "irate");
        assert_eq!(value["pool_size"], 7);
    }
}
