use uuid::Uuid;

use crate::config::CoachThresholds;
use crate::models::{Appearance, Event, EventType};

/// Window aggregates the strength and weakness rules read.
///
/// Built once from window-scoped records so the rules stay pure over plain
/// counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamWindowCounts {
    pub team_passes: u32,
    pub opponent_passes: u32,
    /// Own tackles and interceptions at or beyond the high-press line
    pub high_zone_defensive_actions: u32,
    pub turnovers: u32,
    pub team_events: u32,
    /// Minutes played by the team's appearances
    pub total_minutes: u32,
}

impl TeamWindowCounts {
    pub fn collect(
        team_id: Uuid,
        events: &[Event],
        appearances: &[Appearance],
        thresholds: &CoachThresholds,
    ) -> Self {
        let mut counts = Self::default();

        for event in events {
            let own = event.team_id == team_id;

            if event.event_type == EventType::Pass {
                if own {
                    counts.team_passes += 1;
                } else {
                    counts.opponent_passes += 1;
                }
            }

            if !own {
                continue;
            }

            counts.team_events += 1;
            if event.is_turnover() {
                counts.turnovers += 1;
            }
            if event.event_type.is_ball_winning() && event.x_at_least(thresholds.high_press_min_x) {
                counts.high_zone_defensive_actions += 1;
            }
        }

        counts.total_minutes = appearances
            .iter()
            .filter(|a| a.team_id == team_id)
            .map(|a| a.minutes_played as u32)
            .sum();

        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;

    #[test]
    fn test_collect_counts() {
        let (m, us, them) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let events = vec![
            Event::new(m, us, EventType::Pass),
            Event::new(m, us, EventType::Pass).with_outcome(Outcome::Fail),
            Event::new(m, us, EventType::Duel).with_outcome(Outcome::Fail),
            Event::new(m, us, EventType::Duel).with_outcome(Outcome::Success),
            Event::new(m, us, EventType::Turnover),
            Event::new(m, us, EventType::Tackle).at_x(65.0),
            Event::new(m, us, EventType::Interception).at_x(59.0),
            Event::new(m, us, EventType::Foul).at_x(80.0),
            Event::new(m, them, EventType::Pass),
            Event::new(m, them, EventType::Turnover),
        ];
        let appearances = vec![
            Appearance::new(Uuid::new_v4(), m, us, 90),
            Appearance::new(Uuid::new_v4(), m, us, 45),
            Appearance::new(Uuid::new_v4(), m, them, 90),
        ];

        let counts =
            TeamWindowCounts::collect(us, &events, &appearances, &CoachThresholds::default());

        assert_eq!(counts.team_passes, 2);
        assert_eq!(counts.opponent_passes, 1);
        assert_eq!(counts.turnovers, 3, "turnover plus failed pass and duel");
        assert_eq!(counts.high_zone_defensive_actions, 1);
        assert_eq!(counts.team_events, 8);
        assert_eq!(counts.total_minutes, 135);
    }
}
