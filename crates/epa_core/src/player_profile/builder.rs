use schemars::JsonSchema;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AnalyticsError, Result};
use crate::localization::Localizer;
use crate::models::{Appearance, Event, Player, Position};
use crate::player_profile::insights::{generate_insights, Insight, InsightInput, DEFAULT_INSIGHT_RULES};
use crate::player_profile::metrics::{position_metric_cards, EventsSummary, MetricCard};
use crate::player_profile::phases::{phase_micro_metrics, PhaseBreakdown};
use crate::player_profile::timeline::{build_timeline, TimelineEntry};
use crate::store::EventStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReliabilityLevel {
    Limited,
    Medium,
    Reliable,
}

impl ReliabilityLevel {
    pub fn from_minutes(minutes: u32) -> Self {
        match minutes {
            0..=299 => ReliabilityLevel::Limited,
            300..=899 => ReliabilityLevel::Medium,
            _ => ReliabilityLevel::Reliable,
        }
    }

    fn text_key(&self) -> &'static str {
        match self {
            ReliabilityLevel::Limited => "reliability-limited",
            ReliabilityLevel::Medium => "reliability-medium",
            ReliabilityLevel::Reliable => "reliability-reliable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Reliability {
    pub level: ReliabilityLevel,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct PlayerInfo {
    pub id: Uuid,
    pub full_name: String,
    pub position: Position,
    pub team_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct MatchContext {
    pub match_id: Uuid,
    pub minutes_played: u16,
    pub started: bool,
    pub reliability: Reliability,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct PlayerMatchProfile {
    pub player: PlayerInfo,
    pub match_context: MatchContext,
    pub events: EventsSummary,
    pub metrics: Vec<MetricCard>,
    pub timeline: Vec<TimelineEntry>,
    pub phase_metrics: PhaseBreakdown,
    pub insights: Vec<Insight>,
}

/// Profile from one appearance and the match events; events of other
/// players are ignored.
pub fn build_player_match_profile(
    player: &Player,
    appearance: &Appearance,
    match_events: &[Event],
    localizer: &Localizer,
) -> PlayerMatchProfile {
    let own: Vec<&Event> = match_events
        .iter()
        .filter(|e| e.match_id == appearance.match_id && e.player_id == Some(player.id))
        .collect();

    let events = EventsSummary::from_events(own.iter().copied());
    let timeline = build_timeline(&own);
    let phase_metrics = phase_micro_metrics(&timeline);

    let input = InsightInput {
        minutes_played: appearance.minutes_played,
        events: &events,
        phases: &phase_metrics,
    };
    let insights = generate_insights(&DEFAULT_INSIGHT_RULES, &input, localizer);

    let level = ReliabilityLevel::from_minutes(appearance.minutes_played as u32);

    tracing::debug!(
        player_id = %player.id,
        match_id = %appearance.match_id,
        events = own.len(),
        insights = insights.len(),
        "player match profile built"
    );

    PlayerMatchProfile {
        player: PlayerInfo {
            id: player.id,
            full_name: player.full_name(),
            position: player.primary_position,
            team_id: appearance.team_id,
        },
        match_context: MatchContext {
            match_id: appearance.match_id,
            minutes_played: appearance.minutes_played,
            started: appearance.started,
            reliability: Reliability { level, text: localizer.text(level.text_key()) },
        },
        metrics: position_metric_cards(player.primary_position, &events),
        events,
        timeline,
        phase_metrics,
        insights,
    }
}

pub fn get_player_match_profile<S: EventStore + ?Sized>(
    store: &S,
    match_id: Uuid,
    player_id: Uuid,
    localizer: &Localizer,
) -> Result<PlayerMatchProfile> {
    if store.match_by_id(match_id).is_none() {
        return Err(AnalyticsError::not_found("match", match_id));
    }
    let player = store
        .player(player_id)
        .ok_or_else(|| AnalyticsError::not_found("player", player_id))?;
    let appearance = store
        .appearance(match_id, player_id)
        .ok_or_else(|| AnalyticsError::not_found("appearance", format!("{}/{}", match_id, player_id)))?;

    tracing::info!(%match_id, %player_id, "building player match profile");

    let events = store.events_for_matches(&[match_id]);
    Ok(build_player_match_profile(&player, &appearance, &events, localizer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confidence::Confidence;
    use crate::models::{EventType, Match};
    use crate::player_profile::insights::InsightCode;
    use crate::player_profile::tables::Phase;
    use crate::store::{Dataset, InMemoryStore};
    use chrono::{TimeZone, Utc};

    fn midfielder() -> Player {
        Player {
            id: Uuid::new_v4(),
            first_name: "Иван".into(),
            last_name: "Петров".into(),
            primary_position: Position::MF,
        }
    }

    #[test]
    fn test_reliability_levels() {
        assert_eq!(ReliabilityLevel::from_minutes(0), ReliabilityLevel::Limited);
        assert_eq!(ReliabilityLevel::from_minutes(299), ReliabilityLevel::Limited);
        assert_eq!(ReliabilityLevel::from_minutes(300), ReliabilityLevel::Medium);
        assert_eq!(ReliabilityLevel::from_minutes(900), ReliabilityLevel::Reliable);
    }

    #[test]
    fn test_short_cameo_profile() {
        let localizer = Localizer::embedded().unwrap();
        let player = midfielder();
        let (m, team) = (Uuid::new_v4(), Uuid::new_v4());
        let appearance = Appearance::new(player.id, m, team, 8);
        let events = vec![
            Event::new(m, team, EventType::Pass).with_player(player.id).at_ms(5_000_000),
            Event::new(m, team, EventType::Pass).with_player(Uuid::new_v4()).at_ms(5_100_000),
        ];

        let profile = build_player_match_profile(&player, &appearance, &events, &localizer);

        assert_eq!(profile.events.passes, 1, "teammate events are excluded");
        assert_eq!(profile.timeline.len(), 1);
        assert_eq!(profile.insights[0].code, InsightCode::LowSampleSize);
        assert_eq!(profile.insights[0].confidence, Confidence::High);
        assert_eq!(profile.match_context.reliability.level, ReliabilityLevel::Limited);
        assert_eq!(profile.player.full_name, "Иван Петров");
    }

    #[test]
    fn test_full_match_profile_shape() {
        let localizer = Localizer::embedded().unwrap();
        let player = midfielder();
        let (m, team) = (Uuid::new_v4(), Uuid::new_v4());
        let appearance = Appearance::new(player.id, m, team, 90).starter();

        let mut events: Vec<Event> = (0..35u64)
            .map(|i| {
                Event::new(m, team, EventType::Pass)
                    .with_player(player.id)
                    .at_ms(i * 120_000)
                    .with_sequence(i)
            })
            .collect();
        events.push(Event::new(m, team, EventType::Tackle).with_player(player.id).at_ms(600_000));
        events.push(Event::new(m, team, EventType::Interception).with_player(player.id).at_ms(900_000));

        let profile = build_player_match_profile(&player, &appearance, &events, &localizer);

        assert_eq!(profile.metrics.len(), 2);
        assert_eq!(profile.metrics[1].value, 2);
        assert_eq!(profile.phase_metrics[&Phase::Attack].events, 35);
        assert_eq!(profile.phase_metrics[&Phase::Attack].minutes_active, 35);

        let codes: Vec<_> = profile.insights.iter().map(|i| i.code).collect();
        assert_eq!(codes, vec![InsightCode::AttackFocus, InsightCode::HighInvolvement]);

        let json = serde_json::to_value(&profile).unwrap();
        for key in ["player", "match_context", "events", "metrics", "timeline", "phase_metrics", "insights"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(json["match_context"]["started"], true);
        assert_eq!(json["player"]["position"], "MF");
    }

    #[test]
    fn test_service_not_found() {
        let localizer = Localizer::embedded().unwrap();
        let player = midfielder();
        let m = Match::new(Uuid::new_v4(), Utc.with_ymd_and_hms(2025, 5, 1, 19, 0, 0).unwrap());
        let match_id = m.id;
        let store = InMemoryStore::new(Dataset {
            players: vec![player.clone()],
            matches: vec![m],
            ..Default::default()
        });

        let err = get_player_match_profile(&store, match_id, player.id, &localizer).unwrap_err();
        assert!(matches!(err, AnalyticsError::NotFound { entity: "appearance", .. }));

        let err = get_player_match_profile(&store, Uuid::new_v4(), player.id, &localizer).unwrap_err();
        assert!(matches!(err, AnalyticsError::NotFound { entity: "match", .. }));
    }
}
