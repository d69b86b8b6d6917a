//! # Tactical Identity
//!
//! Describes HOW a team plays, not how well: pressing intensity (PPDA),
//! possession share, defensive line height and passing tempo. Each metric is
//! a value, a bucket label and a fixed explanation.
//!
//! | Metric | Buckets |
//! |--------|---------|
//! | PPDA | high `[0,8)`, medium `[8,12)`, low `[12,∞)` |
//! | Possession % | reactive `[0,45)`, balanced `[45,55)`, dominant `[55,100]` |
//! | Defensive line x | deep `[0,45)`, medium `[45,60)`, high `[60,100]` |
//! | Passes per minute | slow `[0,11)`, normal `[11,15)`, fast `[15,∞)` |

use schemars::JsonSchema;
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::buckets::{safe_divide, Bucket, BucketLabel, LabeledMetric};
use crate::config::TacticsConfig;
use crate::models::{Event, EventType};

// ============================================================================
// Labels
// ============================================================================

/// Pressing intensity from PPDA (lower PPDA = more pressing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PressingLabel {
    High,
    Medium,
    #[default]
    Low,
}

impl BucketLabel for PressingLabel {
    const BUCKETS: &'static [Bucket<Self>] = &[
        Bucket { label: PressingLabel::High, min: 0.0, max: 8.0 },
        Bucket { label: PressingLabel::Medium, min: 8.0, max: 12.0 },
        Bucket { label: PressingLabel::Low, min: 12.0, max: f64::INFINITY },
    ];

    fn explanation(&self) -> &'static str {
        match self {
            PressingLabel::High => "Aggressive pressing in opponent half",
            PressingLabel::Medium => "Moderate pressing intensity",
            PressingLabel::Low => "Low pressing, compact defensive shape",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PossessionLabel {
    Reactive,
    Balanced,
    #[default]
    Dominant,
}

impl BucketLabel for PossessionLabel {
    const BUCKETS: &'static [Bucket<Self>] = &[
        Bucket { label: PossessionLabel::Reactive, min: 0.0, max: 45.0 },
        Bucket { label: PossessionLabel::Balanced, min: 45.0, max: 55.0 },
        Bucket { label: PossessionLabel::Dominant, min: 55.0, max: 100.0 },
    ];

    fn explanation(&self) -> &'static str {
        match self {
            PossessionLabel::Dominant => "Controls the game through possession",
            PossessionLabel::Balanced => "Balanced possession approach",
            PossessionLabel::Reactive => "Plays mostly without the ball",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DefensiveLineLabel {
    Deep,
    Medium,
    #[default]
    High,
}

impl BucketLabel for DefensiveLineLabel {
    const BUCKETS: &'static [Bucket<Self>] = &[
        Bucket { label: DefensiveLineLabel::Deep, min: 0.0, max: 45.0 },
        Bucket { label: DefensiveLineLabel::Medium, min: 45.0, max: 60.0 },
        Bucket { label: DefensiveLineLabel::High, min: 60.0, max: 100.0 },
    ];

    fn explanation(&self) -> &'static str {
        match self {
            DefensiveLineLabel::High => "High defensive line",
            DefensiveLineLabel::Medium => "Mid-block defensive structure",
            DefensiveLineLabel::Deep => "Deep defensive block",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TempoLabel {
    Slow,
    Normal,
    #[default]
    Fast,
}

impl BucketLabel for TempoLabel {
    const BUCKETS: &'static [Bucket<Self>] = &[
        Bucket { label: TempoLabel::Slow, min: 0.0, max: 11.0 },
        Bucket { label: TempoLabel::Normal, min: 11.0, max: 15.0 },
        Bucket { label: TempoLabel::Fast, min: 15.0, max: f64::INFINITY },
    ];

    fn explanation(&self) -> &'static str {
        match self {
            TempoLabel::Fast => "Fast ball circulation",
            TempoLabel::Normal => "Normal game tempo",
            TempoLabel::Slow => "Slow build-up play",
        }
    }
}

// ============================================================================
// Metric evaluation (pure)
// ============================================================================

/// Opponent passes in the pressing zone per own defensive action there.
pub fn evaluate_ppda(opponent_passes: u32, defensive_actions: u32) -> LabeledMetric<PressingLabel> {
    let value = safe_divide(opponent_passes as f64, defensive_actions as f64);
    LabeledMetric::evaluate(value, 2)
}

pub fn evaluate_possession(team_passes: u32, opponent_passes: u32) -> LabeledMetric<PossessionLabel> {
    let total = team_passes as f64 + opponent_passes as f64;
    let possession = safe_divide(team_passes as f64, total) * 100.0;
    LabeledMetric::evaluate(possession, 1)
}

pub fn evaluate_defensive_line(avg_x: f64) -> LabeledMetric<DefensiveLineLabel> {
    LabeledMetric::evaluate(avg_x, 1)
}

/// Own passes per nominal minute across the window.
pub fn evaluate_tempo(
    team_passes: u32,
    matches_count: usize,
    match_duration_min: u32,
) -> LabeledMetric<TempoLabel> {
    let total_minutes = matches_count as f64 * match_duration_min as f64;
    LabeledMetric::evaluate(safe_divide(team_passes as f64, total_minutes), 2)
}

// ============================================================================
// Inputs
// ============================================================================

/// Event counts the tactical metrics are computed from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TacticalCounts {
    /// Opponent passes with x >= press zone
    pub opponent_passes_in_zone: u32,
    /// Own tackles, interceptions and fouls with x >= press zone
    pub defensive_actions_in_zone: u32,
    pub team_passes: u32,
    pub opponent_passes: u32,
    /// Mean x of own tackles and interceptions (0.0 when none carry x)
    pub defensive_line_x: f64,
    pub matches_count: usize,
}

impl TacticalCounts {
    /// Count over events already scoped to the analysed matches.
    pub fn from_events(
        team_id: Uuid,
        events: &[Event],
        matches_count: usize,
        config: &TacticsConfig,
    ) -> Self {
        let zone = config.press_zone_min_x;
        let mut counts = TacticalCounts { matches_count, ..Default::default() };
        let mut line_sum = 0.0;
        let mut line_n = 0u32;

        for event in events {
            let own = event.team_id == team_id;

            if event.event_type == EventType::Pass {
                if own {
                    counts.team_passes += 1;
                } else {
                    counts.opponent_passes += 1;
                    if event.x_at_least(zone) {
                        counts.opponent_passes_in_zone += 1;
                    }
                }
            }

            if own && event.event_type.is_pressing_action() && event.x_at_least(zone) {
                counts.defensive_actions_in_zone += 1;
            }

            if own && event.event_type.is_ball_winning() {
                if let Some(x) = event.x {
                    line_sum += x;
                    line_n += 1;
                }
            }
        }

        counts.defensive_line_x = safe_divide(line_sum, line_n as f64);
        counts
    }
}

// ============================================================================
// Tactical identity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct TacticalIdentity {
    pub ppda: LabeledMetric<PressingLabel>,
    pub possession: LabeledMetric<PossessionLabel>,
    pub defensive_line: LabeledMetric<DefensiveLineLabel>,
    pub tempo: LabeledMetric<TempoLabel>,
}

pub fn build_tactical_identity(counts: &TacticalCounts, match_duration_min: u32) -> TacticalIdentity {
    TacticalIdentity {
        ppda: evaluate_ppda(counts.opponent_passes_in_zone, counts.defensive_actions_in_zone),
        possession: evaluate_possession(counts.team_passes, counts.opponent_passes),
        defensive_line: evaluate_defensive_line(counts.defensive_line_x),
        tempo: evaluate_tempo(counts.team_passes, counts.matches_count, match_duration_min),
    }
}
