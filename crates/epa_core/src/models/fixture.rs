use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Finished,
    Cancelled,
}

/// A single football match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: Uuid,
    pub kickoff_time: DateTime<Utc>,
    #[serde(default)]
    pub status: MatchStatus,
}

impl Match {
    pub fn new(id: Uuid, kickoff_time: DateTime<Utc>) -> Self {
        Self { id, kickoff_time, status: MatchStatus::Finished }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// Team participation in a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchParticipant {
    pub match_id: Uuid,
    pub team_id: Uuid,
    pub side: Side,
}
