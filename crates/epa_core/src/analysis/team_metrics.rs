//! Single-match team and player rates used by the match dashboard.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::analysis::buckets::{round_to, safe_divide};
use crate::models::{Appearance, Event, EventType};

/// Share of ball-control events (passes, shots) per team, in percent with
/// one decimal. Empty when the match has no ball-control events.
pub fn team_possession(events: &[Event]) -> BTreeMap<Uuid, f64> {
    let mut per_team: BTreeMap<Uuid, u32> = BTreeMap::new();
    for event in events.iter().filter(|e| e.event_type.is_ball_control()) {
        *per_team.entry(event.team_id).or_default() += 1;
    }

    let total: u32 = per_team.values().sum();
    if total == 0 {
        return BTreeMap::new();
    }

    per_team
        .into_iter()
        .map(|(team_id, count)| (team_id, round_to(count as f64 / total as f64 * 100.0, 1)))
        .collect()
}

/// Turnover events per team.
pub fn team_turnovers(events: &[Event]) -> BTreeMap<Uuid, u32> {
    let mut turnovers = BTreeMap::new();
    for event in events.iter().filter(|e| e.event_type == EventType::Turnover) {
        *turnovers.entry(event.team_id).or_default() += 1;
    }
    turnovers
}

/// All events per nominal match minute, two decimals.
pub fn event_tempo(events: &[Event], match_duration_min: u32) -> f64 {
    round_to(safe_divide(events.len() as f64, match_duration_min as f64), 2)
}

/// Events per 90 minutes for every player who actually played.
pub fn player_events_per_90(events: &[Event], appearances: &[Appearance]) -> BTreeMap<Uuid, f64> {
    let minutes_by_player: BTreeMap<Uuid, u16> = appearances
        .iter()
        .filter(|a| a.minutes_played > 0)
        .map(|a| (a.player_id, a.minutes_played))
        .collect();

    let mut event_counts: BTreeMap<Uuid, u32> = BTreeMap::new();
    for player_id in events.iter().filter_map(|e| e.player_id) {
        if minutes_by_player.contains_key(&player_id) {
            *event_counts.entry(player_id).or_default() += 1;
        }
    }

    minutes_by_player
        .into_iter()
        .map(|(player_id, minutes)| {
            let count = event_counts.get(&player_id).copied().unwrap_or(0);
            (player_id, round_to(count as f64 / minutes as f64 * 90.0, 2))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_possession_counts_passes_and_shots_only() {
        let (m, home, away) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let mut events = vec![Event::new(m, home, EventType::Pass); 3];
        events.push(Event::new(m, away, EventType::Shot));
        events.push(Event::new(m, away, EventType::Tackle));

        let possession = team_possession(&events);
        assert_eq!(possession[&home], 75.0);
        assert_eq!(possession[&away], 25.0);
    }

    #[test]
    fn test_possession_empty() {
        let (m, home) = (Uuid::new_v4(), Uuid::new_v4());
        assert!(team_possession(&[Event::new(m, home, EventType::Foul)]).is_empty());
    }

    #[test]
    fn test_turnovers() {
        let (m, home, away) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let events = vec![
            Event::new(m, home, EventType::Turnover),
            Event::new(m, home, EventType::Turnover),
            Event::new(m, away, EventType::Pass),
        ];
        let turnovers = team_turnovers(&events);
        assert_eq!(turnovers.get(&home), Some(&2));
        assert_eq!(turnovers.get(&away), None);
    }

    #[test]
    fn test_event_tempo() {
        let (m, home) = (Uuid::new_v4(), Uuid::new_v4());
        let events = vec![Event::new(m, home, EventType::Pass); 100];
        assert_eq!(event_tempo(&events, 90), 1.11);
        assert_eq!(event_tempo(&[], 90), 0.0);
    }

    #[test]
    fn test_events_per_90() {
        let (m, team) = (Uuid::new_v4(), Uuid::new_v4());
        let (full, sub, bench) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let appearances = vec![
            Appearance::new(full, m, team, 90),
            Appearance::new(sub, m, team, 30),
            Appearance::new(bench, m, team, 0),
        ];
        let mut events = vec![Event::new(m, team, EventType::Pass).with_player(full); 45];
        events.extend(vec![Event::new(m, team, EventType::Pass).with_player(sub); 10]);
        events.push(Event::new(m, team, EventType::Pass).with_player(bench));

        let per_90 = player_events_per_90(&events, &appearances);
        assert_eq!(per_90[&full], 45.0);
        assert_eq!(per_90[&sub], 30.0);
        assert!(!per_90.contains_key(&bench), "unused players have no rate");
    }
}
