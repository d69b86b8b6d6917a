//! # Explainable Performance Index (EPI)
//!
//! Reduces a player's normalized metrics to one score: the median of their
//! percentiles. Keeping the per-metric percentiles next to the score is what
//! makes it explainable.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::normalization::{MetricValue, NormalizedProfile};
use crate::models::Position;

pub const EPI_METHOD: &str = "median_percentile";

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct EpiExplanation {
    pub method: String,
    pub metric_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct PerformanceIndex {
    pub position: Position,
    pub epi: u8,
    pub metrics: BTreeMap<String, MetricValue>,
    pub explanation: EpiExplanation,
}

/// Statistical median, floored to an integer. Even-length input averages the
/// two middle values.
pub fn median_percentile(percentiles: &[u8]) -> Option<u8> {
    if percentiles.is_empty() {
        return None;
    }

    let mut sorted = percentiles.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as u16 + sorted[mid] as u16) / 2
    } else {
        sorted[mid] as u16
    };

    Some(median as u8)
}

/// EPI per player. Players with no percentiles are left out, not zero-filled.
pub fn calculate_epi(
    normalized: &BTreeMap<Uuid, NormalizedProfile>,
) -> BTreeMap<Uuid, PerformanceIndex> {
    normalized
        .iter()
        .filter_map(|(player_id, profile)| {
            let percentiles: Vec<u8> = profile.metrics.values().map(|m| m.percentile).collect();
            let epi = median_percentile(&percentiles)?;

            Some((
                *player_id,
                PerformanceIndex {
                    position: profile.position,
                    epi,
                    metrics: profile.metrics.clone(),
                    explanation: EpiExplanation {
                        method: EPI_METHOD.to_string(),
                        metric_count: percentiles.len(),
                    },
                },
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(percentiles: &[u8]) -> NormalizedProfile {
        NormalizedProfile {
            position: Position::MF,
            metrics: percentiles
                .iter()
                .enumerate()
                .map(|(i, p)| (format!("m{}", i), MetricValue { value: i as f64, percentile: *p }))
                .collect(),
        }
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median_percentile(&[90, 10, 50]), Some(50));
    }

    #[test]
    fn test_median_even_floors_average() {
        assert_eq!(median_percentile(&[50, 51]), Some(50));
        assert_eq!(median_percentile(&[10, 20, 30, 40]), Some(25));
        assert_eq!(median_percentile(&[100, 100]), Some(100));
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median_percentile(&[]), None);
    }

    #[test]
    fn test_calculate_epi() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let normalized = BTreeMap::from([(a, profile(&[20, 80, 60])), (b, profile(&[]))]);

        let epi = calculate_epi(&normalized);

        assert_eq!(epi.len(), 1, "player without metrics is absent");
        let index = &epi[&a];
        assert_eq!(index.epi, 60);
        assert_eq!(index.explanation.method, "median_percentile");
        assert_eq!(index.explanation.metric_count, 3);
        assert_eq!(index.position, Position::MF);
        assert_eq!(index.metrics.len(), 3);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the median lies between min and max of its inputs
            #[test]
            fn prop_median_within_bounds(
                values in proptest::collection::vec(0u8..=100, 1..40),
            ) {
                let median = median_percentile(&values).unwrap();
                let min = *values.iter().min().unwrap();
                let max = *values.iter().max().unwrap();
                prop_assert!(min <= median && median <= max);
            }
        }
    }
}
