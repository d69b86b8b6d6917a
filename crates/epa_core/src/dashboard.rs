//! # Match Dashboard
//!
//! Match-level view: per-team possession, turnovers and average player EPI,
//! match tempo, key insights and fixed limitations.
//!
//! Player EPI comes from events per 90 normalized within position groups of
//! the match. A player's EPI is attributed to the team of their appearance in
//! this match; players without an appearance are not attributed.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::normalization::{normalize_player_metrics, PlayerMetricValues};
use crate::analysis::performance_index::{calculate_epi, PerformanceIndex};
use crate::analysis::team_metrics::{event_tempo, player_events_per_90, team_possession, team_turnovers};
use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsError, Result};
use crate::localization::Localizer;
use crate::models::{Appearance, Event, MatchParticipant, Position, Side};
use crate::store::EventStore;

pub const EVENTS_PER_90: &str = "events_per_90";

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct TeamDashboard {
    pub side: Side,
    pub possession: f64,
    pub turnovers: u32,
    pub epi_avg: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DashboardInsightCode {
    PossessionAdvantage,
    LowTempo,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct KeyInsight {
    pub code: DashboardInsightCode,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct MatchDashboard {
    pub match_id: Uuid,
    pub teams: BTreeMap<Uuid, TeamDashboard>,
    pub tempo: f64,
    pub key_insights: Vec<KeyInsight>,
    pub limitations: Vec<String>,
}

/// Truncated mean EPI per team, joined through appearances.
pub fn team_epi_averages(
    epi: &BTreeMap<Uuid, PerformanceIndex>,
    appearances: &[Appearance],
) -> BTreeMap<Uuid, u8> {
    let mut per_team: BTreeMap<Uuid, Vec<u32>> = BTreeMap::new();
    for appearance in appearances {
        if let Some(index) = epi.get(&appearance.player_id) {
            per_team.entry(appearance.team_id).or_default().push(index.epi as u32);
        }
    }

    per_team
        .into_iter()
        .map(|(team_id, values)| {
            let mean = values.iter().sum::<u32>() / values.len() as u32;
            (team_id, mean as u8)
        })
        .collect()
}

/// Records of one match. `events` and `appearances` belong to `match_id`.
#[derive(Debug, Clone, Copy)]
pub struct DashboardInput<'a> {
    pub match_id: Uuid,
    pub participants: &'a [MatchParticipant],
    pub events: &'a [Event],
    pub appearances: &'a [Appearance],
    pub positions: &'a BTreeMap<Uuid, Position>,
}

pub fn build_match_dashboard(
    input: DashboardInput<'_>,
    config: &AnalyticsConfig,
    localizer: &Localizer,
) -> MatchDashboard {
    let DashboardInput { match_id, participants, events, appearances, positions } = input;

    let possession = team_possession(events);
    let turnovers = team_turnovers(events);
    let tempo = event_tempo(events, config.window.match_duration_min);

    let player_values: PlayerMetricValues = player_events_per_90(events, appearances)
        .into_iter()
        .map(|(player_id, rate)| (player_id, BTreeMap::from([(EVENTS_PER_90.to_string(), rate)])))
        .collect();
    let epi = calculate_epi(&normalize_player_metrics(&player_values, positions));
    let epi_avg = team_epi_averages(&epi, appearances);

    let teams: BTreeMap<Uuid, TeamDashboard> = participants
        .iter()
        .map(|p| {
            (
                p.team_id,
                TeamDashboard {
                    side: p.side,
                    possession: possession.get(&p.team_id).copied().unwrap_or(0.0),
                    turnovers: turnovers.get(&p.team_id).copied().unwrap_or(0),
                    epi_avg: epi_avg.get(&p.team_id).copied(),
                },
            )
        })
        .collect();

    let mut key_insights = Vec::new();
    let home_possession = teams.values().find(|t| t.side == Side::Home).map(|t| t.possession);
    if home_possession.is_some_and(|pct| pct > config.dashboard.possession_advantage_pct) {
        key_insights.push(KeyInsight {
            code: DashboardInsightCode::PossessionAdvantage,
            text: localizer.text("dashboard-possession-advantage"),
        });
    }
    if tempo < config.dashboard.low_tempo_events_per_min {
        key_insights.push(KeyInsight {
            code: DashboardInsightCode::LowTempo,
            text: localizer.text("dashboard-low-tempo"),
        });
    }

    tracing::debug!(%match_id, teams = teams.len(), rated_players = epi.len(), tempo, "match dashboard built");

    MatchDashboard {
        match_id,
        teams,
        tempo,
        key_insights,
        limitations: vec![
            localizer.text("limitation-no-video"),
            localizer.text("limitation-estimated"),
        ],
    }
}

pub fn get_match_dashboard<S: EventStore + ?Sized>(
    store: &S,
    match_id: Uuid,
    config: &AnalyticsConfig,
    localizer: &Localizer,
) -> Result<MatchDashboard> {
    if store.match_by_id(match_id).is_none() {
        return Err(AnalyticsError::not_found("match", match_id));
    }

    tracing::info!(%match_id, "building match dashboard");

    let participants = store.participants(match_id);
    let events = store.events_for_matches(&[match_id]);
    let appearances = store.appearances_for_matches(&[match_id]);

    let player_ids: Vec<Uuid> = appearances.iter().map(|a| a.player_id).collect();
    let positions: BTreeMap<Uuid, Position> = store
        .players(&player_ids)
        .into_iter()
        .map(|p| (p.id, p.primary_position))
        .collect();

    let input = DashboardInput {
        match_id,
        participants: &participants,
        events: &events,
        appearances: &appearances,
        positions: &positions,
    };
    Ok(build_match_dashboard(input, config, localizer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventType;

    struct Fixture {
        match_id: Uuid,
        home: Uuid,
        away: Uuid,
        participants: Vec<MatchParticipant>,
        events: Vec<Event>,
        appearances: Vec<Appearance>,
        positions: BTreeMap<Uuid, Position>,
    }

    impl Fixture {
        fn new() -> Self {
            let (match_id, home, away) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
            Self {
                match_id,
                home,
                away,
                participants: vec![
                    MatchParticipant { match_id, team_id: home, side: Side::Home },
                    MatchParticipant { match_id, team_id: away, side: Side::Away },
                ],
                events: Vec::new(),
                appearances: Vec::new(),
                positions: BTreeMap::new(),
            }
        }

        fn player(&mut self, team: Uuid, position: Position, minutes: u16, passes: usize) -> Uuid {
            let id = Uuid::new_v4();
            self.appearances.push(Appearance::new(id, self.match_id, team, minutes));
            self.positions.insert(id, position);
            for _ in 0..passes {
                self.events.push(Event::new(self.match_id, team, EventType::Pass).with_player(id));
            }
            id
        }

        fn build(&self) -> MatchDashboard {
            let input = DashboardInput {
                match_id: self.match_id,
                participants: &self.participants,
                events: &self.events,
                appearances: &self.appearances,
                positions: &self.positions,
            };
            build_match_dashboard(input, &AnalyticsConfig::default(), &Localizer::embedded().unwrap())
        }
    }

    #[test]
    fn test_epi_attributed_through_appearances() {
        let mut f = Fixture::new();
        // Two midfielders per side: home rates 10 and 20 per 90, away 30 and 40.
        f.player(f.home, Position::MF, 90, 10);
        f.player(f.home, Position::MF, 90, 20);
        f.player(f.away, Position::MF, 90, 30);
        f.player(f.away, Position::MF, 90, 40);

        let dashboard = f.build();

        // Percentiles 25, 50, 75, 100
        assert_eq!(dashboard.teams[&f.home].epi_avg, Some(37));
        assert_eq!(dashboard.teams[&f.away].epi_avg, Some(87));
        assert_eq!(dashboard.teams[&f.home].side, Side::Home);
    }

    #[test]
    fn test_possession_and_key_insights() {
        let mut f = Fixture::new();
        f.player(f.home, Position::FW, 90, 60);
        f.player(f.away, Position::FW, 90, 40);

        let dashboard = f.build();
        assert_eq!(dashboard.teams[&f.home].possession, 60.0);
        assert_eq!(dashboard.teams[&f.away].possession, 40.0);
        assert_eq!(dashboard.tempo, 1.11);

        let codes: Vec<_> = dashboard.key_insights.iter().map(|i| i.code).collect();
        assert_eq!(codes, vec![DashboardInsightCode::PossessionAdvantage]);
        assert_eq!(dashboard.limitations.len(), 2);
    }

    #[test]
    fn test_empty_match() {
        let f = Fixture::new();
        let dashboard = f.build();

        assert_eq!(dashboard.tempo, 0.0);
        assert_eq!(dashboard.teams[&f.home].possession, 0.0);
        assert_eq!(dashboard.teams[&f.away].turnovers, 0);
        assert_eq!(dashboard.teams[&f.away].epi_avg, None);
        let codes: Vec<_> = dashboard.key_insights.iter().map(|i| i.code).collect();
        assert_eq!(codes, vec![DashboardInsightCode::LowTempo]);

        let json = serde_json::to_value(&dashboard).unwrap();
        assert!(json["teams"][f.home.to_string()]["epi_avg"].is_null());
        assert_eq!(json["teams"][f.home.to_string()]["side"], "home");
    }

    #[test]
    fn test_unattributed_players_are_ignored() {
        let mut f = Fixture::new();
        let home_player = f.player(f.home, Position::DF, 90, 5);
        let ghost = Uuid::new_v4();
        f.events.push(Event::new(f.match_id, f.away, EventType::Pass).with_player(ghost));

        let dashboard = f.build();
        assert_eq!(dashboard.teams[&f.home].epi_avg, Some(100));
        assert_eq!(dashboard.teams[&f.away].epi_avg, None);
        assert!(f.positions.contains_key(&home_player));
    }
}
