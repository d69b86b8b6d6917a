//! Strength and weakness findings shared by both rule sets.

use schemars::JsonSchema;
use serde::Serialize;

use crate::localization::Localizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingCode {
    PossessionControl,
    HighPressActivity,
    HighTurnovers,
    LowTempo,
}

impl FindingCode {
    fn text_key(&self) -> &'static str {
        match self {
            FindingCode::PossessionControl => "strength-possession-control",
            FindingCode::HighPressActivity => "strength-high-press-activity",
            FindingCode::HighTurnovers => "weakness-high-turnovers",
            FindingCode::LowTempo => "weakness-low-tempo",
        }
    }

    /// Short noun phrase used inside the narrative.
    pub(crate) fn label_key(&self) -> &'static str {
        match self {
            FindingCode::PossessionControl => "strength-label-possession-control",
            FindingCode::HighPressActivity => "strength-label-high-press-activity",
            FindingCode::HighTurnovers => "weakness-label-high-turnovers",
            FindingCode::LowTempo => "weakness-label-low-tempo",
        }
    }
}

/// Numeric evidence behind a finding.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Evidence {
    Possession { possession_pct: f64 },
    HighPress { def_actions_high_zone: u32 },
    Turnovers { turnovers: u32 },
    Tempo { events_per_min: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Finding {
    pub code: FindingCode,
    pub text: String,
    pub evidence: Evidence,
}

impl Finding {
    pub fn new(code: FindingCode, evidence: Evidence, localizer: &Localizer) -> Self {
        Self { code, text: localizer.text(code.text_key()), evidence }
    }
}
