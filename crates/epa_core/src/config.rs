//! Analytics configuration.
//!
//! Every threshold the rule layers compare against lives here instead of in
//! the rule bodies. Values can come from a preset, a YAML document or the
//! environment.
//!
//! ## Usage
//!
//! ```rust
//! use epa_core::config::AnalyticsConfig;
//!
//! let config = AnalyticsConfig::default();
//! assert_eq!(config.window.recent_matches, 5);
//!
//! let strict = AnalyticsConfig::strict();
//! assert!(strict.coach.possession_pct > config.coach.possession_pct);
//! ```
//!
//! ## Environment Variables
//!
//! - `EPA_PROFILE`: preset (`default`, `strict`, `lenient`)
//! - `EPA_LOCALE`: output language (`ru-RU`, `en-US`)
//! - `EPA_RECENT_MATCHES`: coach summary window size

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

/// Complete analytics configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub window: WindowConfig,
    pub coach: CoachThresholds,
    pub tactics: TacticsConfig,
    pub dashboard: DashboardThresholds,
    /// Output language for generated texts.
    pub locale: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            coach: CoachThresholds::default(),
            tactics: TacticsConfig::default(),
            dashboard: DashboardThresholds::default(),
            locale: crate::localization::DEFAULT_LOCALE.to_string(),
        }
    }
}

impl AnalyticsConfig {
    /// Higher bars before a strength is claimed.
    pub fn strict() -> Self {
        Self {
            coach: CoachThresholds {
                possession_pct: 58.0,
                high_press_actions: 20,
                turnovers: 15,
                ..CoachThresholds::default()
            },
            ..Self::default()
        }
    }

    /// Friendlier bars for short windows or sparse event feeds.
    pub fn lenient() -> Self {
        Self {
            coach: CoachThresholds {
                possession_pct: 52.0,
                high_press_actions: 10,
                turnovers: 25,
                ..CoachThresholds::default()
            },
            ..Self::default()
        }
    }

    pub fn from_profile(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "strict" => Self::strict(),
            "lenient" => Self::lenient(),
            _ => Self::default(),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Build from `EPA_PROFILE`, then apply `EPA_LOCALE` and
    /// `EPA_RECENT_MATCHES` overrides.
    pub fn from_env_or_default() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env_or_default`](Self::from_env_or_default) with
    /// variables read through `lookup`. Blank values are ignored, as is a
    /// window size that is zero or not a number.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
        };

        let mut config = Self::from_profile(&var("EPA_PROFILE").unwrap_or_default());

        if let Some(locale) = var("EPA_LOCALE") {
            config.locale = locale;
        }

        if let Some(n) = var("EPA_RECENT_MATCHES")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n > 0)
        {
            config.window.recent_matches = n;
        }

        config
    }

    /// Reject values that would make every rule fire or none.
    pub fn check(&self) -> Result<()> {
        if self.window.recent_matches == 0 {
            return Err(AnalyticsError::Config("window.recent_matches must be > 0".into()));
        }
        if self.window.match_duration_min == 0 {
            return Err(AnalyticsError::Config("window.match_duration_min must be > 0".into()));
        }
        if !(0.0..=100.0).contains(&self.coach.possession_pct) {
            return Err(AnalyticsError::Config(format!(
                "coach.possession_pct out of range: {}",
                self.coach.possession_pct
            )));
        }
        if self.coach.load_medium_ratio > self.coach.load_high_ratio {
            return Err(AnalyticsError::Config(
                "coach.load_medium_ratio must not exceed coach.load_high_ratio".into(),
            ));
        }
        Ok(())
    }
}

/// Match window used by the coach summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Most recent N matches considered
    pub recent_matches: usize,
    /// Nominal match length in minutes
    pub match_duration_min: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { recent_matches: 5, match_duration_min: 90 }
    }
}

/// Coach summary rule thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachThresholds {
    /// POSSESSION_CONTROL when possession % is at least this
    pub possession_pct: f64,
    /// HIGH_PRESS_ACTIVITY when high-zone tackles + interceptions reach this
    pub high_press_actions: u32,
    /// Pitch x from which a defensive action counts as high
    pub high_press_min_x: f64,
    /// HIGH_TURNOVERS when turnovers reach this
    pub turnovers: u32,
    /// LOW_TEMPO when events per played minute fall below this
    pub low_tempo_events_per_min: f64,
    /// Load ratio at or above which load is high
    pub load_high_ratio: f64,
    /// Load ratio at or above which load is medium
    pub load_medium_ratio: f64,
}

impl Default for CoachThresholds {
    fn default() -> Self {
        Self {
            possession_pct: 55.0,
            high_press_actions: 15,
            high_press_min_x: 60.0,
            turnovers: 20,
            low_tempo_events_per_min: 0.2,
            load_high_ratio: 0.85,
            load_medium_ratio: 0.60,
        }
    }
}

/// Tactical identity inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TacticsConfig {
    /// Pitch x from which passes and pressing actions enter PPDA
    pub press_zone_min_x: f64,
}

impl Default for TacticsConfig {
    fn default() -> Self {
        Self { press_zone_min_x: 40.0 }
    }
}

/// Match dashboard key insight thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardThresholds {
    /// POSSESSION_ADVANTAGE when the home side holds more than this
    pub possession_advantage_pct: f64,
    /// LOW_TEMPO when match events per minute fall below this
    pub low_tempo_events_per_min: f64,
}

impl Default for DashboardThresholds {
    fn default() -> Self {
        Self { possession_advantage_pct: 55.0, low_tempo_events_per_min: 0.2 }
    }
}
