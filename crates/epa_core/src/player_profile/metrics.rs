//! Event counts and the position-aware metric cards built from them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{Event, EventType, Position};

/// Per-player event counts for one match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct EventsSummary {
    pub goals: u32,
    pub assists: u32,
    pub passes: u32,
    pub shots: u32,
    pub tackles: u32,
    pub interceptions: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

/// Field of [`EventsSummary`] a metric rule can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMetric {
    Goals,
    Assists,
    Passes,
    Shots,
    Tackles,
    Interceptions,
    YellowCards,
    RedCards,
}

impl EventsSummary {
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a Event>) -> Self {
        let mut summary = Self::default();
        for event in events {
            match event.event_type {
                EventType::Goal => summary.goals += 1,
                EventType::Assist => summary.assists += 1,
                EventType::Pass => summary.passes += 1,
                EventType::Shot => summary.shots += 1,
                EventType::Tackle => summary.tackles += 1,
                EventType::Interception => summary.interceptions += 1,
                EventType::YellowCard => summary.yellow_cards += 1,
                EventType::RedCard => summary.red_cards += 1,
                _ => {}
            }
        }
        summary
    }

    pub fn get(&self, metric: SummaryMetric) -> u32 {
        match metric {
            SummaryMetric::Goals => self.goals,
            SummaryMetric::Assists => self.assists,
            SummaryMetric::Passes => self.passes,
            SummaryMetric::Shots => self.shots,
            SummaryMetric::Tackles => self.tackles,
            SummaryMetric::Interceptions => self.interceptions,
            SummaryMetric::YellowCards => self.yellow_cards,
            SummaryMetric::RedCards => self.red_cards,
        }
    }

    pub fn defensive_actions(&self) -> u32 {
        self.tackles + self.interceptions
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct MetricCard {
    pub key: &'static str,
    pub label: &'static str,
    pub value: u32,
    pub explanation: &'static str,
}

fn card(key: &'static str, label: &'static str, value: u32, explanation: &'static str) -> MetricCard {
    MetricCard { key, label, value, explanation }
}

/// Cards relevant to the player's primary position; empty when unknown.
pub fn position_metric_cards(position: Position, events: &EventsSummary) -> Vec<MetricCard> {
    match position {
        Position::FW => vec![
            card(
                "involvement",
                "Involvement",
                events.passes,
                "Number of passes shows how often the forward was involved in build-up play",
            ),
            card(
                "shooting_activity",
                "Shooting activity",
                events.shots,
                "Shots indicate how often the player attempted to finish attacks",
            ),
            card(
                "goal_output",
                "Goals scored",
                events.goals,
                "Goals represent direct attacking contribution",
            ),
        ],
        Position::MF => vec![
            card(
                "passing_volume",
                "Passing volume",
                events.passes,
                "Shows how actively the midfielder distributed the ball",
            ),
            card(
                "defensive_actions",
                "Defensive actions",
                events.defensive_actions(),
                "Sum of tackles and interceptions reflects defensive contribution",
            ),
        ],
        Position::DF => vec![
            card(
                "defensive_actions",
                "Defensive actions",
                events.defensive_actions(),
                "Core defensive contribution through tackles and interceptions",
            ),
            card(
                "build_up_involvement",
                "Build-up involvement",
                events.passes,
                "Passing volume indicates participation in build-up from the back",
            ),
        ],
        Position::GK => vec![card(
            "distribution",
            "Distribution",
            events.passes,
            "Number of passes reflects goalkeeper involvement in distribution",
        )],
        Position::Unknown => Vec::new(),
    }
}
