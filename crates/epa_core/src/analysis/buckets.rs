//! # Threshold Buckets
//!
//! Interval classification shared by every labeled metric.
//!
//! A bucket table is an ordered list of half-open intervals `[min, max)`.
//! A value takes the label of the first interval containing it; when none
//! does, it takes the label of the last declared interval. Tables are
//! declared in ascending order, so the catch-all is the top bucket and also
//! absorbs the closed upper edge (possession = 100, line height = 100).

use schemars::JsonSchema;
use serde::Serialize;

/// One labeled half-open interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket<L> {
    pub label: L,
    pub min: f64,
    pub max: f64,
}

impl<L> Bucket<L> {
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value < self.max
    }
}

/// First bucket containing `value`, else the last bucket. `None` only for an
/// empty table.
pub fn label_by_thresholds<L: Copy>(value: f64, buckets: &[Bucket<L>]) -> Option<L> {
    buckets
        .iter()
        .find(|b| b.contains(value))
        .or_else(|| buckets.last())
        .map(|b| b.label)
}

/// A label enum backed by a static bucket table.
///
/// `Default` must be the catch-all (last declared) label.
pub trait BucketLabel: Copy + Default + 'static {
    const BUCKETS: &'static [Bucket<Self>];

    /// Fixed explanation shown next to the label.
    fn explanation(&self) -> &'static str;

    fn classify(value: f64) -> Self {
        label_by_thresholds(value, Self::BUCKETS).unwrap_or_default()
    }
}

/// A raw value with its bucket label and canned explanation.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct LabeledMetric<L> {
    pub value: f64,
    pub label: L,
    pub explanation: String,
}

impl<L: BucketLabel> LabeledMetric<L> {
    /// Classify on the raw value, report the value rounded to `decimals`.
    pub fn evaluate(raw: f64, decimals: u32) -> Self {
        let label = L::classify(raw);
        Self {
            value: round_to(raw, decimals),
            label,
            explanation: label.explanation().to_string(),
        }
    }
}

/// `a / b`, or 0.0 when `b` is zero.
pub fn safe_divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
