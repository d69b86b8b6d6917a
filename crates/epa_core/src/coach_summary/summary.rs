//! Coach summary payload and its assembly from window-scoped records.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use fluent::FluentValue;
use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, Schema, SchemaObject, SubschemaValidation};
use schemars::JsonSchema;
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::analysis::tactics::{build_tactical_identity, TacticalCounts, TacticalIdentity};
use crate::coach_summary::counts::TeamWindowCounts;
use crate::coach_summary::findings::Finding;
use crate::coach_summary::load::{build_load, Load};
use crate::coach_summary::narrative::compose_narrative;
use crate::coach_summary::snapshot::{build_snapshot, Snapshot};
use crate::coach_summary::strengths::evaluate_strengths;
use crate::coach_summary::usage::{build_usage, Usage};
use crate::coach_summary::weaknesses::evaluate_weaknesses;
use crate::config::AnalyticsConfig;
use crate::confidence::Confidence;
use crate::localization::Localizer;
use crate::models::{Appearance, Event, Match};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SummaryMeta {
    pub matches_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// Missing blocks serialize as `{}`.
fn empty_object_if_none<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    use serde::ser::SerializeMap;
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

/// `T` or `{}`.
fn block_or_empty<T: JsonSchema>(gen: &mut SchemaGenerator) -> Schema {
    let mut empty = SchemaObject {
        instance_type: Some(InstanceType::Object.into()),
        ..Default::default()
    };
    empty.object().max_properties = Some(0);

    SchemaObject {
        subschemas: Some(Box::new(SubschemaValidation {
            any_of: Some(vec![gen.subschema_for::<T>(), empty.into()]),
            ..Default::default()
        })),
        ..Default::default()
    }
    .into()
}

fn load_schema(gen: &mut SchemaGenerator) -> Schema {
    block_or_empty::<Load>(gen)
}

fn usage_schema(gen: &mut SchemaGenerator) -> Schema {
    block_or_empty::<Usage>(gen)
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CoachSummary {
    pub team_id: Uuid,
    pub meta: SummaryMeta,
    pub range: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Snapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tactical_identity: Option<TacticalIdentity>,
    pub strengths: Vec<Finding>,
    pub weaknesses: Vec<Finding>,
    #[serde(serialize_with = "empty_object_if_none")]
    #[schemars(schema_with = "load_schema")]
    pub load: Option<Load>,
    #[serde(serialize_with = "empty_object_if_none")]
    #[schemars(schema_with = "usage_schema")]
    pub usage: Option<Usage>,
    pub confidence: Confidence,
    pub limitations: Vec<String>,
    pub text: String,
}

impl CoachSummary {
    /// Payload for an empty match window.
    pub fn insufficient_data(team_id: Uuid, localizer: &Localizer) -> Self {
        Self {
            team_id,
            meta: SummaryMeta { matches_count: 0 },
            range: None,
            snapshot: None,
            tactical_identity: None,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            load: None,
            usage: None,
            confidence: Confidence::Low,
            limitations: Vec::new(),
            text: localizer.text("summary-insufficient-data"),
        }
    }
}

/// Records of one team's match window.
///
/// `events` and `appearances` must already be scoped to `matches`.
#[derive(Debug, Clone, Copy)]
pub struct SummaryInput<'a> {
    pub team_id: Uuid,
    pub matches: &'a [Match],
    pub events: &'a [Event],
    pub appearances: &'a [Appearance],
}

fn window_limitations(
    matches_count: usize,
    requested: usize,
    localizer: &Localizer,
) -> Vec<String> {
    let mut limitations = vec![
        localizer.text("limitation-no-video"),
        localizer.text("limitation-estimated"),
    ];
    if matches_count < requested {
        limitations.push(localizer.format(
            "limitation-short-window",
            &[
                ("found", FluentValue::from(matches_count)),
                ("requested", FluentValue::from(requested)),
            ],
        ));
    }
    limitations
}

pub fn build_explainable_summary(
    input: SummaryInput<'_>,
    config: &AnalyticsConfig,
    localizer: &Localizer,
) -> CoachSummary {
    let SummaryInput { team_id, matches, events, appearances } = input;

    let matches_count = matches.iter().map(|m| m.id).collect::<BTreeSet<_>>().len();
    if matches_count == 0 {
        return CoachSummary::insufficient_data(team_id, localizer);
    }

    let range = matches
        .iter()
        .map(|m| m.kickoff_time)
        .min()
        .zip(matches.iter().map(|m| m.kickoff_time).max())
        .map(|(from, to)| DateRange { from, to });

    let snapshot = build_snapshot(team_id, matches, events);

    let tactical_counts = TacticalCounts::from_events(team_id, events, matches_count, &config.tactics);
    let tactical_identity =
        build_tactical_identity(&tactical_counts, config.window.match_duration_min);

    let counts = TeamWindowCounts::collect(team_id, events, appearances, &config.coach);
    let strengths = evaluate_strengths(&counts, &config.coach, localizer);
    let weaknesses = evaluate_weaknesses(&counts, &config.coach, localizer);

    let load = build_load(team_id, appearances, matches_count, config);
    let usage = build_usage(team_id, appearances);

    let text = compose_narrative(load.load_level, usage.players_used, &strengths, &weaknesses, localizer);

    tracing::debug!(
        %team_id,
        matches_count,
        strengths = strengths.len(),
        weaknesses = weaknesses.len(),
        "coach summary built"
    );

    CoachSummary {
        team_id,
        meta: SummaryMeta { matches_count },
        range,
        snapshot: Some(snapshot),
        tactical_identity: Some(tactical_identity),
        strengths,
        weaknesses,
        load: Some(load),
        usage: Some(usage),
        confidence: Confidence::from_match_count(matches_count),
        limitations: window_limitations(matches_count, config.window.recent_matches, localizer),
        text,
    }
}
