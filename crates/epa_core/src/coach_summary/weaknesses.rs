use crate::analysis::buckets::round_to;
use crate::coach_summary::counts::TeamWindowCounts;
use crate::coach_summary::findings::{Evidence, Finding, FindingCode};
use crate::config::CoachThresholds;
use crate::localization::Localizer;

pub fn evaluate_weaknesses(
    counts: &TeamWindowCounts,
    thresholds: &CoachThresholds,
    localizer: &Localizer,
) -> Vec<Finding> {
    let mut weaknesses = Vec::new();

    if counts.turnovers >= thresholds.turnovers {
        weaknesses.push(Finding::new(
            FindingCode::HighTurnovers,
            Evidence::Turnovers { turnovers: counts.turnovers },
            localizer,
        ));
    }

    // No minutes means no tempo to judge.
    if counts.total_minutes > 0 {
        let events_per_min = counts.team_events as f64 / counts.total_minutes as f64;
        if events_per_min < thresholds.low_tempo_events_per_min {
            weaknesses.push(Finding::new(
                FindingCode::LowTempo,
                Evidence::Tempo { events_per_min: round_to(events_per_min, 2) },
                localizer,
            ));
        }
    }

    weaknesses
}
