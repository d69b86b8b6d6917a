use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::Serialize;

use crate::player_profile::tables::Phase;
use crate::player_profile::timeline::TimelineEntry;

/// Micro-metrics of one phase. Counter names are flattened next to the totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
pub struct PhaseMetrics {
    pub events: u32,
    /// Distinct timed minutes with at least one event
    pub minutes_active: u32,
    #[serde(flatten)]
    pub counters: BTreeMap<String, u32>,
}

impl PhaseMetrics {
    pub fn counter(&self, name: &str) -> u32 {
        self.counters.get(name).copied().unwrap_or(0)
    }
}

pub type PhaseBreakdown = BTreeMap<Phase, PhaseMetrics>;

/// Only phases with at least one event appear.
pub fn phase_micro_metrics(timeline: &[TimelineEntry]) -> PhaseBreakdown {
    let mut breakdown = PhaseBreakdown::new();
    let mut minutes: BTreeMap<Phase, BTreeSet<u32>> = BTreeMap::new();

    for entry in timeline {
        let metrics = breakdown.entry(entry.phase).or_insert_with(|| PhaseMetrics {
            counters: entry.phase.counters().iter().map(|c| (c.name.to_string(), 0)).collect(),
            ..Default::default()
        });

        metrics.events += 1;
        for counter in entry.phase.counters().iter().filter(|c| c.matches(entry.event_type)) {
            *metrics.counters.entry(counter.name.to_string()).or_default() += 1;
        }

        if let Some(minute) = entry.minute {
            minutes.entry(entry.phase).or_default().insert(minute);
        }
    }

    for (phase, metrics) in breakdown.iter_mut() {
        metrics.minutes_active = minutes.get(phase).map_or(0, |m| m.len() as u32);
    }

    breakdown
}
