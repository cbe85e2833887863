//! Per-pass comparison settings: the positive threshold and the continuous metric

use atomeval_core::{ContinuousMetric, Error, EvaluationConfig, Result};
use derive_builder::Builder;
use serde::Serialize;

/// Binarization cutoff used when none is configured
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Immutable settings for one comparison pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct ComparisonOptions {
    /// Values at or above the threshold are positive
    #[builder(default = "DEFAULT_THRESHOLD")]
    threshold: f64,

    #[builder(default)]
    metric: ContinuousMetric,
}

impl ComparisonOptionsBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        match self.threshold {
            Some(threshold) if !(0.0..=1.0).contains(&threshold) => {
                Err(format!("threshold must be in [0, 1], got {threshold}"))
            }
            _ => Ok(()),
        }
    }
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            metric: ContinuousMetric::default(),
        }
    }
}

impl ComparisonOptions {
    pub fn builder() -> ComparisonOptionsBuilder {
        ComparisonOptionsBuilder::default()
    }

    /// Creates validated options
    pub fn new(threshold: f64, metric: ContinuousMetric) -> Result<Self> {
        Self::builder()
            .threshold(threshold)
            .metric(metric)
            .build()
            .map_err(|e| Error::config(e.to_string()))
    }

    /// Options described by the evaluation section of the configuration
    pub fn from_config(config: &EvaluationConfig) -> Result<Self> {
        Self::new(config.threshold, config.metric)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn metric(&self) -> ContinuousMetric {
        self.metric
    }

    /// Returns a copy with another metric
    pub fn with_metric(self, metric: ContinuousMetric) -> Self {
        Self { metric, ..self }
    }

    pub(crate) fn is_positive(&self, value: f64) -> bool {
        value >= self.threshold
    }
}
