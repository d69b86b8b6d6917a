use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Kind of a discrete match event.
///
/// Unknown strings coming from importers land in [`EventType::Other`]
/// instead of failing the whole dataset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Pass,
    Shot,
    Goal,
    Assist,
    Turnover,
    Recovery,
    Tackle,
    Interception,
    Clearance,
    Duel,
    Foul,
    Pressure,
    Card,
    YellowCard,
    RedCard,
    Corner,
    FreeKick,
    Penalty,
    #[serde(other)]
    Other,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Pass => "pass",
            EventType::Shot => "shot",
            EventType::Goal => "goal",
            EventType::Assist => "assist",
            EventType::Turnover => "turnover",
            EventType::Recovery => "recovery",
            EventType::Tackle => "tackle",
            EventType::Interception => "interception",
            EventType::Clearance => "clearance",
            EventType::Duel => "duel",
            EventType::Foul => "foul",
            EventType::Pressure => "pressure",
            EventType::Card => "card",
            EventType::YellowCard => "yellow_card",
            EventType::RedCard => "red_card",
            EventType::Corner => "corner",
            EventType::FreeKick => "free_kick",
            EventType::Penalty => "penalty",
            EventType::Other => "other",
        }
    }

    /// Tackles and interceptions: the actions used for defensive line height
    /// and high-zone pressing counts.
    pub fn is_ball_winning(&self) -> bool {
        matches!(self, EventType::Tackle | EventType::Interception)
    }

    /// Actions counted in the PPDA denominator.
    pub fn is_pressing_action(&self) -> bool {
        matches!(self, EventType::Tackle | EventType::Interception | EventType::Foul)
    }

    /// Events that approximate having the ball (match dashboard possession).
    pub fn is_ball_control(&self) -> bool {
        matches!(self, EventType::Pass | EventType::Shot)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Fail,
    #[default]
    Unknown,
}

fn default_period() -> u8 {
    1
}

/// Atomic football event within a match.
///
/// Pitch coordinates are normalized to `[0, 100]` from the acting team's
/// perspective; `sequence` is the creation order used to break timestamp ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Event {
    pub id: Uuid,
    pub match_id: Uuid,
    pub team_id: Uuid,
    #[serde(default)]
    pub player_id: Option<Uuid>,
    pub event_type: EventType,
    #[serde(default)]
    pub timestamp_ms: Option<u64>,
    #[serde(default = "default_period")]
    pub period: u8,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub x: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub y: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub outcome: Outcome,
    #[serde(default)]
    pub secondary_player_id: Option<Uuid>,
    #[serde(default)]
    pub related_event_id: Option<Uuid>,
    #[serde(default)]
    pub sequence: u64,
}

impl Event {
    pub fn new(match_id: Uuid, team_id: Uuid, event_type: EventType) -> Self {
        Self {
            id: Uuid::new_v4(),
            match_id,
            team_id,
            player_id: None,
            event_type,
            timestamp_ms: None,
            period: 1,
            x: None,
            y: None,
            confidence: None,
            outcome: Outcome::Unknown,
            secondary_player_id: None,
            related_event_id: None,
            sequence: 0,
        }
    }

    pub fn with_player(mut self, player_id: Uuid) -> Self {
        self.player_id = Some(player_id);
        self
    }

    pub fn at_ms(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    pub fn at_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }

    /// Sort key for timelines: timestamp first, untimed events last,
    /// creation order breaks ties.
    pub fn timeline_key(&self) -> (bool, u64, u64) {
        (self.timestamp_ms.is_none(), self.timestamp_ms.unwrap_or(0), self.sequence)
    }

    /// Whether this event hands the ball to the opponent.
    pub fn is_turnover(&self) -> bool {
        match self.event_type {
            EventType::Turnover => true,
            EventType::Pass | EventType::Duel => self.outcome == Outcome::Fail,
            _ => false,
        }
    }

    pub fn x_at_least(&self, min_x: f64) -> bool {
        self.x.is_some_and(|x| x >= min_x)
    }
}

/// Sort events into timeline order in place.
pub fn sort_timeline(events: &mut [&Event]) {
    events.sort_by_key(|e| e.timeline_key());
}
