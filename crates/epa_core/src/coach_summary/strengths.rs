use crate::analysis::buckets::{round_to, safe_divide};
use crate::coach_summary::counts::TeamWindowCounts;
use crate::coach_summary::findings::{Evidence, Finding, FindingCode};
use crate::config::CoachThresholds;
use crate::localization::Localizer;

/// Rules are independent; any subset may fire.
pub fn evaluate_strengths(
    counts: &TeamWindowCounts,
    thresholds: &CoachThresholds,
    localizer: &Localizer,
) -> Vec<Finding> {
    let mut strengths = Vec::new();

    let total_passes = counts.team_passes as f64 + counts.opponent_passes as f64;
    let possession_pct = safe_divide(counts.team_passes as f64, total_passes) * 100.0;
    if total_passes > 0.0 && possession_pct >= thresholds.possession_pct {
        strengths.push(Finding::new(
            FindingCode::PossessionControl,
            Evidence::Possession { possession_pct: round_to(possession_pct, 1) },
            localizer,
        ));
    }

    if counts.high_zone_defensive_actions >= thresholds.high_press_actions {
        strengths.push(Finding::new(
            FindingCode::HighPressActivity,
            Evidence::HighPress { def_actions_high_zone: counts.high_zone_defensive_actions },
            localizer,
        ));
    }

    strengths
}
