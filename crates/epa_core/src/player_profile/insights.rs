//! # Player Insights
//!
//! Rule-driven statements about one player's match. Rules are data: a
//! tagged [`InsightRule`] list evaluated through one dispatch.
//!
//! ## Evaluation order
//!
//! 1. Minutes rules (data sufficiency warnings, always `high` confidence)
//! 2. Phase and metric rules in table order
//!
//! Rules are independent; none suppresses another.
//!
//! ## Default rules
//!
//! | Code | Rule |
//! |------|------|
//! | `ATTACK_FOCUS` | attack events >= 5 |
//! | `LOW_DEFENSIVE_INVOLVEMENT` | defence events <= 1 |
//! | `DISCIPLINE_ISSUE` | discipline events >= 1 |
//! | `LOW_SAMPLE_SIZE` | minutes played <= 10 |
//! | `HIGH_INVOLVEMENT` | passes >= 30 (high confidence from 40) |

use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::confidence::Confidence;
use crate::localization::Localizer;
use crate::player_profile::metrics::{EventsSummary, SummaryMetric};
use crate::player_profile::phases::PhaseBreakdown;
use crate::player_profile::tables::Phase;

// ============================================================================
// Codes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightCode {
    AttackFocus,
    LowDefensiveInvolvement,
    DisciplineIssue,
    LowSampleSize,
    HighInvolvement,
    DataIncomplete,
    PositionMismatch,
    RoleUncertain,
}

impl InsightCode {
    fn text_key(&self) -> &'static str {
        match self {
            InsightCode::AttackFocus => "insight-attack-focus",
            InsightCode::LowDefensiveInvolvement => "insight-low-defensive-involvement",
            InsightCode::DisciplineIssue => "insight-discipline-issue",
            InsightCode::LowSampleSize => "insight-low-sample-size",
            InsightCode::HighInvolvement => "insight-high-involvement",
            InsightCode::DataIncomplete => "insight-data-incomplete",
            InsightCode::PositionMismatch => "insight-position-mismatch",
            InsightCode::RoleUncertain => "insight-role-uncertain",
        }
    }

    /// Display priority; higher first.
    pub fn priority(&self) -> u8 {
        match self {
            InsightCode::LowSampleSize => 100,
            InsightCode::DataIncomplete => 90,
            InsightCode::PositionMismatch => 80,
            InsightCode::RoleUncertain => 70,
            _ => 0,
        }
    }

    /// Codes that invalidate the rest of the profile.
    pub fn is_blocking(&self) -> bool {
        matches!(self, InsightCode::LowSampleSize | InsightCode::DataIncomplete)
    }
}

// ============================================================================
// Rules
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventBound {
    AtLeast(u32),
    AtMost(u32),
}

impl EventBound {
    pub fn holds(&self, value: u32) -> bool {
        match *self {
            EventBound::AtLeast(min) => value >= min,
            EventBound::AtMost(max) => value <= max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InsightRule {
    MinutesThreshold {
        code: InsightCode,
        max_minutes: u16,
    },
    PhaseThreshold {
        code: InsightCode,
        phase: Phase,
        bound: EventBound,
    },
    MetricThreshold {
        code: InsightCode,
        metric: SummaryMetric,
        min_value: u32,
        high_confidence_from: u32,
    },
}

impl InsightRule {
    pub fn code(&self) -> InsightCode {
        match self {
            InsightRule::MinutesThreshold { code, .. }
            | InsightRule::PhaseThreshold { code, .. }
            | InsightRule::MetricThreshold { code, .. } => *code,
        }
    }

    fn is_minutes_rule(&self) -> bool {
        matches!(self, InsightRule::MinutesThreshold { .. })
    }

    /// Confidence and evidence when the rule fires.
    fn evaluate(&self, input: &InsightInput<'_>) -> Option<(Confidence, InsightSources)> {
        match *self {
            InsightRule::MinutesThreshold { max_minutes, .. } => {
                (input.minutes_played <= max_minutes).then_some((
                    Confidence::High,
                    InsightSources::Minutes {
                        minutes_played: input.minutes_played,
                        threshold_minutes: max_minutes,
                    },
                ))
            }
            InsightRule::PhaseThreshold { phase, bound, .. } => {
                // A phase without events counts as zero events.
                let (events, minutes_active) = input
                    .phases
                    .get(&phase)
                    .map_or((0, 0), |m| (m.events, m.minutes_active));
                bound.holds(events).then(|| {
                    (
                        Confidence::from_activity(events, minutes_active),
                        InsightSources::Phase { phase, events, minutes_active },
                    )
                })
            }
            InsightRule::MetricThreshold { metric, min_value, high_confidence_from, .. } => {
                let value = input.events.get(metric);
                (value >= min_value).then(|| {
                    let confidence = if value >= high_confidence_from {
                        Confidence::High
                    } else {
                        Confidence::Medium
                    };
                    (confidence, InsightSources::Metric { metric, value })
                })
            }
        }
    }
}

pub static DEFAULT_INSIGHT_RULES: Lazy<Vec<InsightRule>> = Lazy::new(|| {
    vec![
        InsightRule::PhaseThreshold {
            code: InsightCode::AttackFocus,
            phase: Phase::Attack,
            bound: EventBound::AtLeast(5),
        },
        InsightRule::PhaseThreshold {
            code: InsightCode::LowDefensiveInvolvement,
            phase: Phase::Defence,
            bound: EventBound::AtMost(1),
        },
        InsightRule::PhaseThreshold {
            code: InsightCode::DisciplineIssue,
            phase: Phase::Discipline,
            bound: EventBound::AtLeast(1),
        },
        InsightRule::MinutesThreshold { code: InsightCode::LowSampleSize, max_minutes: 10 },
        InsightRule::MetricThreshold {
            code: InsightCode::HighInvolvement,
            metric: SummaryMetric::Passes,
            min_value: 30,
            high_confidence_from: 40,
        },
    ]
});

// ============================================================================
// Insights
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum InsightSources {
    Minutes { minutes_played: u16, threshold_minutes: u16 },
    Phase { phase: Phase, events: u32, minutes_active: u32 },
    Metric { metric: SummaryMetric, value: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Insight {
    pub code: InsightCode,
    pub text: String,
    pub confidence: Confidence,
    pub sources: InsightSources,
}

pub struct InsightInput<'a> {
    pub minutes_played: u16,
    pub events: &'a EventsSummary,
    pub phases: &'a PhaseBreakdown,
}

pub fn generate_insights(
    rules: &[InsightRule],
    input: &InsightInput<'_>,
    localizer: &Localizer,
) -> Vec<Insight> {
    let minutes_rules = rules.iter().filter(|r| r.is_minutes_rule());
    let other_rules = rules.iter().filter(|r| !r.is_minutes_rule());

    minutes_rules
        .chain(other_rules)
        .filter_map(|rule| {
            rule.evaluate(input).map(|(confidence, sources)| Insight {
                code: rule.code(),
                text: localizer.text(rule.code().text_key()),
                confidence,
                sources,
            })
        })
        .collect()
}

/// Stable sort, highest priority first.
pub fn sort_insights_by_priority(insights: &mut [Insight]) {
    insights.sort_by_key(|i| std::cmp::Reverse(i.code.priority()));
}

pub fn has_blocking_insight(insights: &[Insight]) -> bool {
    insights.iter().any(|i| i.code.is_blocking())
}
