use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::Serialize;
use uuid::Uuid;

use crate::models::Appearance;

/// Squad rotation over the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Usage {
    /// Distinct players with minutes > 0
    pub players_used: usize,
    pub starts: u32,
}

pub fn calculate_usage(players_used: usize, starts: u32) -> Usage {
    Usage { players_used, starts }
}

pub fn build_usage(team_id: Uuid, appearances: &[Appearance]) -> Usage {
    let team = appearances.iter().filter(|a| a.team_id == team_id);

    let mut players = BTreeSet::new();
    let mut starts = 0;
    for appearance in team {
        if appearance.minutes_played > 0 {
            players.insert(appearance.player_id);
        }
        if appearance.started {
            starts += 1;
        }
    }

    calculate_usage(players.len(), starts)
}
