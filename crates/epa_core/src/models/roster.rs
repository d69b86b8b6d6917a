use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Primary position code. Percentile populations are scoped by it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum Position {
    GK,
    DF,
    MF,
    FW,
    /// Anything an importer could not map to the four codes above.
    #[serde(other)]
    Unknown,
}

impl Position {
    pub fn is_known(&self) -> bool {
        !matches!(self, Position::Unknown)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub primary_position: Position,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Player participation in one match. Unique per (player, match).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub player_id: Uuid,
    pub match_id: Uuid,
    pub team_id: Uuid,
    pub minutes_played: u16,
    #[serde(default)]
    pub started: bool,
}

impl Appearance {
    pub fn new(player_id: Uuid, match_id: Uuid, team_id: Uuid, minutes_played: u16) -> Self {
        Self { player_id, match_id, team_id, minutes_played, started: false }
    }

    pub fn starter(mut self) -> Self {
        self.started = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parsing() {
        let fw: Position = serde_json::from_str("\"FW\"").unwrap();
        assert_eq!(fw, Position::FW);
        let odd: Position = serde_json::from_str("\"CB\"").unwrap();
        assert_eq!(odd, Position::Unknown);
        assert!(!odd.is_known());
    }

    #[test]
    fn test_full_name() {
        let p = Player {
            id: Uuid::new_v4(),
            first_name: "Eldor".into(),
            last_name: "Shomurodov".into(),
            primary_position: Position::FW,
        };
        assert_eq!(p.full_name(), "Eldor Shomurodov");
    }
}
