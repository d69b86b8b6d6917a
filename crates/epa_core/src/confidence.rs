use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How much weight a generated statement can carry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Activity-based confidence: enough events spread over enough minutes.
    pub fn from_activity(events: u32, active_minutes: u32) -> Self {
        if events >= 5 && active_minutes >= 10 {
            Confidence::High
        } else if events >= 3 && active_minutes >= 5 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    /// Sample-size confidence for multi-match aggregates.
    pub fn from_match_count(matches: usize) -> Self {
        match matches {
            5.. => Confidence::High,
            3..=4 => Confidence::Medium,
            _ => Confidence::Low,
        }
    }
}
