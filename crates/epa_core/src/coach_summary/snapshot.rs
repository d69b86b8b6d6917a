//! Results snapshot: record, goals, points and form over the window.

use schemars::JsonSchema;
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::buckets::{round_to, safe_divide};
use crate::models::{Event, EventType, Match};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub enum MatchResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl MatchResult {
    pub fn from_score(goals_for: u32, goals_against: u32) -> Self {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => MatchResult::Win,
            std::cmp::Ordering::Equal => MatchResult::Draw,
            std::cmp::Ordering::Less => MatchResult::Loss,
        }
    }
}

/// Goals for / against in one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchGoals {
    pub match_id: Uuid,
    pub goals_for: u32,
    pub goals_against: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Snapshot {
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
    pub points_per_match: f64,
    /// Results in chronological order
    pub form: Vec<MatchResult>,
}

/// Fold per-match results (chronological) into a snapshot.
pub fn calculate_snapshot_from_results(results: &[MatchGoals]) -> Snapshot {
    let mut snapshot = Snapshot {
        matches_played: 0,
        wins: 0,
        draws: 0,
        losses: 0,
        goals_for: 0,
        goals_against: 0,
        points: 0,
        points_per_match: 0.0,
        form: Vec::with_capacity(results.len()),
    };

    for r in results {
        snapshot.goals_for += r.goals_for;
        snapshot.goals_against += r.goals_against;

        let result = MatchResult::from_score(r.goals_for, r.goals_against);
        match result {
            MatchResult::Win => snapshot.wins += 1,
            MatchResult::Draw => snapshot.draws += 1,
            MatchResult::Loss => snapshot.losses += 1,
        }
        snapshot.form.push(result);
    }

    snapshot.matches_played = snapshot.form.len() as u32;
    snapshot.points = snapshot.wins * 3 + snapshot.draws;
    snapshot.points_per_match =
        round_to(safe_divide(snapshot.points as f64, snapshot.matches_played as f64), 2);

    snapshot
}

/// Goal events split by team, one entry per match in kickoff order.
pub fn match_goal_counts(team_id: Uuid, matches: &[Match], events: &[Event]) -> Vec<MatchGoals> {
    let mut ordered: Vec<&Match> = matches.iter().collect();
    ordered.sort_by_key(|m| m.kickoff_time);

    ordered
        .into_iter()
        .map(|m| {
            let goals = events
                .iter()
                .filter(|e| e.match_id == m.id && e.event_type == EventType::Goal);
            let (mut goals_for, mut goals_against) = (0, 0);
            for goal in goals {
                if goal.team_id == team_id {
                    goals_for += 1;
                } else {
                    goals_against += 1;
                }
            }
            MatchGoals { match_id: m.id, goals_for, goals_against }
        })
        .collect()
}

pub fn build_snapshot(team_id: Uuid, matches: &[Match], events: &[Event]) -> Snapshot {
    calculate_snapshot_from_results(&match_goal_counts(team_id, matches, events))
}
