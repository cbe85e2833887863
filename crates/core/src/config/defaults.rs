//! Default values and functions for configuration

use crate::metric::ContinuousMetric;

// Default constants
pub(crate) const DEFAULT_THRESHOLD: f64 = 0.5;
pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";
pub(crate) const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub(crate) fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

pub(crate) fn default_metric() -> ContinuousMetric {
    ContinuousMetric::default()
}

pub(crate) fn default_predicates() -> Vec<String> {
    Vec::new() // Empty = every predicate present in the predictions
}

pub(crate) fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}
