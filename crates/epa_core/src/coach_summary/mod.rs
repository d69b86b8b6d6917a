//! # Coach Summary
//!
//! Explainable overview of a team's recent matches for the coaching staff.
//!
//! ## Pipeline
//!
//! 1. Select the window: the team's matches by kickoff descending, truncated
//!    to `window.recent_matches`, then put back in chronological order
//! 2. Snapshot, tactical identity, load and usage from window records
//! 3. Strength and weakness rules over [`TeamWindowCounts`]
//! 4. Narrative paragraph from load, usage and finding labels
//!
//! An empty window short-circuits to [`CoachSummary::insufficient_data`].

pub mod counts;
pub mod findings;
pub mod load;
pub mod narrative;
pub mod snapshot;
pub mod strengths;
pub mod summary;
pub mod usage;
pub mod weaknesses;

pub use counts::TeamWindowCounts;
pub use findings::{Evidence, Finding, FindingCode};
pub use load::{build_load, calculate_load, Load, LoadLevel};
pub use narrative::compose_narrative;
pub use snapshot::{
    build_snapshot, calculate_snapshot_from_results, match_goal_counts, MatchGoals, MatchResult,
    Snapshot,
};
pub use strengths::evaluate_strengths;
pub use summary::{build_explainable_summary, CoachSummary, DateRange, SummaryInput, SummaryMeta};
pub use usage::{build_usage, calculate_usage, Usage};
pub use weaknesses::evaluate_weaknesses;

use uuid::Uuid;

use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsError, Result};
use crate::localization::Localizer;
use crate::models::Match;
use crate::store::EventStore;

/// Most recent `limit` matches, returned oldest first.
pub fn select_window(mut matches: Vec<Match>, limit: usize) -> Vec<Match> {
    matches.sort_by(|a, b| b.kickoff_time.cmp(&a.kickoff_time));
    matches.truncate(limit);
    matches.reverse();
    matches
}

/// Summary for `team_id` over its recent matches, optionally restricted to
/// `match_ids`.
pub fn get_coach_summary<S: EventStore + ?Sized>(
    store: &S,
    team_id: Uuid,
    match_ids: Option<&[Uuid]>,
    config: &AnalyticsConfig,
    localizer: &Localizer,
) -> Result<CoachSummary> {
    if store.team(team_id).is_none() {
        return Err(AnalyticsError::not_found("team", team_id));
    }

    let mut candidates = store.team_matches(team_id);
    if let Some(ids) = match_ids {
        candidates.retain(|m| ids.contains(&m.id));
    }
    let window = select_window(candidates, config.window.recent_matches);

    tracing::info!(%team_id, window = window.len(), "building coach summary");

    let window_ids: Vec<Uuid> = window.iter().map(|m| m.id).collect();
    let events = store.events_for_matches(&window_ids);
    let appearances = store.appearances_for_matches(&window_ids);

    let input = SummaryInput {
        team_id,
        matches: &window,
        events: &events,
        appearances: &appearances,
    };
    Ok(build_explainable_summary(input, config, localizer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Event, EventType, MatchParticipant, Side, Team};
    use crate::store::{Dataset, InMemoryStore};
    use chrono::{Duration, TimeZone, Utc};

    fn store_with_matches(count: i64) -> (InMemoryStore, Uuid, Vec<Match>) {
        let team_id = Uuid::new_v4();
        let base = Utc.with_ymd_and_hms(2025, 1, 4, 15, 0, 0).unwrap();
        let matches: Vec<Match> = (0..count)
            .map(|i| Match::new(Uuid::new_v4(), base + Duration::days(7 * i)))
            .collect();

        let dataset = Dataset {
            teams: vec![Team { id: team_id, name: "Team".into() }],
            participants: matches
                .iter()
                .map(|m| MatchParticipant { match_id: m.id, team_id, side: Side::Home })
                .collect(),
            events: matches
                .iter()
                .map(|m| Event::new(m.id, team_id, EventType::Goal))
                .collect(),
            matches: matches.clone(),
            ..Default::default()
        };
        (InMemoryStore::new(dataset), team_id, matches)
    }

    #[test]
    fn test_select_window_keeps_latest_in_chronological_order() {
        let (_, _, matches) = store_with_matches(7);
        let mut shuffled = matches.clone();
        shuffled.reverse();
        shuffled.swap(1, 4);

        let window = select_window(shuffled, 5);
        let expected: Vec<Uuid> = matches[2..].iter().map(|m| m.id).collect();
        assert_eq!(window.iter().map(|m| m.id).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_service_uses_recent_window() {
        let (store, team_id, _) = store_with_matches(7);
        let localizer = Localizer::embedded().unwrap();

        let summary =
            get_coach_summary(&store, team_id, None, &AnalyticsConfig::default(), &localizer)
                .unwrap();
        assert_eq!(summary.meta.matches_count, 5);
        assert_eq!(summary.snapshot.unwrap().wins, 5);
        assert_eq!(summary.limitations.len(), 2);
    }

    #[test]
    fn test_service_restricted_to_match_ids() {
        let (store, team_id, matches) = store_with_matches(4);
        let localizer = Localizer::embedded().unwrap();
        let ids = [matches[0].id];

        let summary =
            get_coach_summary(&store, team_id, Some(&ids), &AnalyticsConfig::default(), &localizer)
                .unwrap();
        assert_eq!(summary.meta.matches_count, 1);
        assert_eq!(summary.confidence, crate::confidence::Confidence::Low);
    }

    #[test]
    fn test_service_empty_window() {
        let (store, team_id, _) = store_with_matches(0);
        let localizer = Localizer::embedded().unwrap();

        let summary =
            get_coach_summary(&store, team_id, None, &AnalyticsConfig::default(), &localizer)
                .unwrap();
        assert_eq!(summary.meta.matches_count, 0);
        assert!(summary.load.is_none());
    }

    #[test]
    fn test_service_unknown_team() {
        let (store, _, _) = store_with_matches(1);
        let localizer = Localizer::embedded().unwrap();

        let err = get_coach_summary(&store, Uuid::new_v4(), None, &AnalyticsConfig::default(), &localizer)
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::NotFound { entity: "team", .. }));
    }
}
