//! # epa_core
//!
//! Explainable performance analytics over football match events.
//!
//! ## Modules
//!
//! - `analysis` - Percentile normalization, EPI, tactical identity, team rates
//! - `coach_summary` - Recent-window team summary for coaches
//! - `player_profile` - Single-match player profile with insights
//! - `dashboard` - Match-level team comparison
//! - `store` - Read-only record access and the JSON dataset store
//! - `config`, `localization`, `schema`, `error` - Ambient plumbing
//!
//! Every computation is a pure function of records already fetched through
//! an [`EventStore`]. Missing or zero data resolves to documented defaults;
//! only lookups and loading return errors.

pub mod analysis;
pub mod coach_summary;
pub mod confidence;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod localization;
pub mod models;
pub mod player_profile;
pub mod schema;
pub mod store;

pub use coach_summary::{get_coach_summary, CoachSummary};
pub use confidence::Confidence;
pub use config::AnalyticsConfig;
pub use dashboard::{get_match_dashboard, MatchDashboard};
pub use error::{AnalyticsError, Result};
pub use localization::Localizer;
pub use player_profile::{get_player_match_profile, PlayerMatchProfile};
pub use store::{Dataset, EventStore, InMemoryStore};

/// Version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
