//! # Player Match Profile
//!
//! One player's match: event counts, position-aware metric cards, timeline,
//! phase micro-metrics and rule-based insights.
//!
//! ## Submodules
//!
//! - `tables` - Event to phase/description lookups and phase counters
//! - `timeline` - Ordered, phase-tagged event entries
//! - `phases` - Per-phase event totals, active minutes and counters
//! - `metrics` - Event summary and position metric cards
//! - `insights` - Tagged insight rules, priority ordering
//! - `builder` - Profile assembly and store-backed service

pub mod builder;
pub mod insights;
pub mod metrics;
pub mod phases;
pub mod tables;
pub mod timeline;

pub use builder::{
    build_player_match_profile, get_player_match_profile, MatchContext, PlayerInfo,
    PlayerMatchProfile, Reliability, ReliabilityLevel,
};
pub use insights::{
    generate_insights, has_blocking_insight, sort_insights_by_priority, EventBound, Insight,
    InsightCode, InsightInput, InsightRule, InsightSources, DEFAULT_INSIGHT_RULES,
};
pub use metrics::{position_metric_cards, EventsSummary, MetricCard, SummaryMetric};
pub use phases::{phase_micro_metrics, PhaseBreakdown, PhaseMetrics};
pub use tables::{description_of, phase_of, Phase, PhaseCounter};
pub use timeline::{build_timeline, TimelineEntry};
