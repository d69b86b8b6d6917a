//! # Analysis Module
//!
//! Population-relative statistics and team behaviour metrics.
//!
//! ## Submodules
//!
//! - `buckets` - Threshold-bucket classification and zero-safe arithmetic
//! - `normalization` - Position-scoped percentile ranks
//! - `performance_index` - Explainable Performance Index (median percentile)
//! - `tactics` - Tactical identity (PPDA, possession, defensive line, tempo)
//! - `team_metrics` - Single-match possession, turnovers, tempo, per-90 rates

pub mod buckets;
pub mod normalization;
pub mod performance_index;
pub mod tactics;
pub mod team_metrics;

pub use buckets::{label_by_thresholds, round_to, safe_divide, Bucket, BucketLabel, LabeledMetric};
pub use normalization::{
    normalize_player_metrics, percentile_rank, MetricValue, NormalizedProfile, PlayerMetricValues,
};
pub use performance_index::{calculate_epi, median_percentile, EpiExplanation, PerformanceIndex};
pub use tactics::{
    build_tactical_identity, evaluate_defensive_line, evaluate_possession, evaluate_ppda,
    evaluate_tempo, DefensiveLineLabel, PossessionLabel, PressingLabel, TacticalCounts,
    TacticalIdentity, TempoLabel,
};
pub use team_metrics::{event_tempo, player_events_per_90, team_possession, team_turnovers};
