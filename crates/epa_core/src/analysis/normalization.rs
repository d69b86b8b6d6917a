//! # Percentile Normalization
//!
//! Ranks a player's raw metric against the population of players sharing
//! the same primary position in the current query scope.
//!
//! Percentile = share of population values `<=` the value, floored to an
//! integer in `[0, 100]`. Comparison is count-based, so ties all receive the
//! same percentile and the result does not depend on input order.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::analysis::buckets::round_to;
use crate::models::Position;

/// A raw measurement and its population-relative rank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct MetricValue {
    pub value: f64,
    pub percentile: u8,
}

/// One player's metrics normalized within their position group.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct NormalizedProfile {
    pub position: Position,
    pub metrics: BTreeMap<String, MetricValue>,
}

/// Raw metric values per player: `player_id -> metric name -> value`.
pub type PlayerMetricValues = BTreeMap<Uuid, BTreeMap<String, f64>>;

/// Percentile rank of `value` within `population`; 0 for an empty population.
pub fn percentile_rank(value: f64, population: &[f64]) -> u8 {
    if population.is_empty() {
        return 0;
    }

    let at_or_below = population.iter().filter(|&&x| x <= value).count();
    // Exact floor of count / len * 100
    ((at_or_below * 100) / population.len()).min(100) as u8
}

/// Normalize every player's metrics against their position group.
///
/// Players without a recognized position are dropped. Non-finite values are
/// left out of both the populations and the output.
pub fn normalize_player_metrics(
    player_values: &PlayerMetricValues,
    position_map: &BTreeMap<Uuid, Position>,
) -> BTreeMap<Uuid, NormalizedProfile> {
    let known_position = |player_id: &Uuid| {
        position_map.get(player_id).copied().filter(Position::is_known)
    };

    // Population per position & metric
    let mut population: BTreeMap<Position, BTreeMap<&str, Vec<f64>>> = BTreeMap::new();

    for (player_id, metrics) in player_values {
        let Some(position) = known_position(player_id) else {
            warn!(%player_id, "player without a recognized position left out of normalization");
            continue;
        };

        let by_metric = population.entry(position).or_default();
        for (metric, &value) in metrics {
            if value.is_finite() {
                by_metric.entry(metric.as_str()).or_default().push(value);
            }
        }
    }

    let mut result = BTreeMap::new();

    for (player_id, metrics) in player_values {
        let Some(position) = known_position(player_id) else { continue };
        let Some(by_metric) = population.get(&position) else { continue };

        let normalized = metrics
            .iter()
            .filter(|(_, value)| value.is_finite())
            .map(|(metric, &value)| {
                let values = by_metric.get(metric.as_str()).map(Vec::as_slice).unwrap_or(&[]);
                (
                    metric.clone(),
                    MetricValue { value: round_to(value, 2), percentile: percentile_rank(value, values) },
                )
            })
            .collect();

        result.insert(*player_id, NormalizedProfile { position, metrics: normalized });
    }

    debug!(
        players = player_values.len(),
        normalized = result.len(),
        positions = population.len(),
        "normalized player metrics"
    );

    result
}
