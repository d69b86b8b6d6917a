//! Minutes workload of the squad over the window.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::buckets::{round_to, safe_divide};
use crate::config::{AnalyticsConfig, CoachThresholds};
use crate::models::Appearance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoadLevel {
    Low,
    Medium,
    High,
}

impl LoadLevel {
    pub fn from_ratio(ratio: f64, thresholds: &CoachThresholds) -> Self {
        if ratio >= thresholds.load_high_ratio {
            LoadLevel::High
        } else if ratio >= thresholds.load_medium_ratio {
            LoadLevel::Medium
        } else {
            LoadLevel::Low
        }
    }

    pub(crate) fn narrative_key(&self) -> &'static str {
        match self {
            LoadLevel::High => "narrative-load-high",
            LoadLevel::Medium => "narrative-load-medium",
            LoadLevel::Low => "narrative-load-low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Load {
    pub total_minutes: u32,
    /// players_used x matches x nominal match minutes
    pub expected_minutes: u32,
    pub players_used: usize,
    pub load_ratio: f64,
    pub load_level: LoadLevel,
}

pub fn calculate_load(
    total_minutes: u32,
    players_used: usize,
    matches_count: usize,
    config: &AnalyticsConfig,
) -> Load {
    let expected_minutes =
        players_used as u32 * matches_count as u32 * config.window.match_duration_min;
    let ratio = safe_divide(total_minutes as f64, expected_minutes as f64);

    Load {
        total_minutes,
        expected_minutes,
        players_used,
        load_ratio: round_to(ratio, 2),
        load_level: LoadLevel::from_ratio(ratio, &config.coach),
    }
}

/// Load of `team_id` from appearances already scoped to the window.
pub fn build_load(
    team_id: Uuid,
    appearances: &[Appearance],
    matches_count: usize,
    config: &AnalyticsConfig,
) -> Load {
    let mut total_minutes = 0u32;
    let mut players = BTreeSet::new();

    for appearance in appearances.iter().filter(|a| a.team_id == team_id) {
        total_minutes += appearance.minutes_played as u32;
        if appearance.minutes_played > 0 {
            players.insert(appearance.player_id);
        }
    }

    calculate_load(total_minutes, players.len(), matches_count, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_levels() {
        let config = AnalyticsConfig::default();

        // 14 players x 3 matches x 90 = 3780
        let high = calculate_load(3402, 14, 3, &config);
        assert_eq!(high.expected_minutes, 3780);
        assert_eq!(high.load_ratio, 0.9);
        assert_eq!(high.load_level, LoadLevel::High);

        assert_eq!(calculate_load(2500, 14, 3, &config).load_level, LoadLevel::Medium);
        assert_eq!(calculate_load(1000, 14, 3, &config).load_level, LoadLevel::Low);
    }

    #[test]
    fn test_load_zero_expected_minutes() {
        let load = calculate_load(0, 0, 0, &AnalyticsConfig::default());
        assert_eq!(load.expected_minutes, 0);
        assert_eq!(load.load_ratio, 0.0);
        assert_eq!(load.load_level, LoadLevel::Low);
    }

    #[test]
    fn test_build_load_ignores_other_team_and_unused_players() {
        let (m, us, them) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let (a, b, bench) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let appearances = vec![
            Appearance::new(a, m, us, 90),
            Appearance::new(b, m, us, 72),
            Appearance::new(bench, m, us, 0),
            Appearance::new(Uuid::new_v4(), m, them, 90),
        ];

        let load = build_load(us, &appearances, 1, &AnalyticsConfig::default());
        assert_eq!(load.total_minutes, 162);
        assert_eq!(load.players_used, 2);
        assert_eq!(load.expected_minutes, 180);
        assert_eq!(load.load_ratio, 0.9);
        assert_eq!(load.load_level, LoadLevel::High);
    }

    #[test]
    fn test_load_serialized_shape() {
        let load = calculate_load(900, 10, 1, &AnalyticsConfig::default());
        let json = serde_json::to_value(&load).unwrap();
        assert_eq!(json["total_minutes"], 900);
        assert_eq!(json["expected_minutes"], 900);
        assert_eq!(json["players_used"], 10);
        assert_eq!(json["load_ratio"], 1.0);
        assert_eq!(json["load_level"], "high");
    }
}
