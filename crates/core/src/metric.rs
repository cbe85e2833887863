use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Per-atom error contribution for unthresholded truth values
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ContinuousMetric {
    /// Mean squared error
    #[default]
    #[serde(alias = "mse")]
    #[strum(to_string = "squared_error", serialize = "mse")]
    SquaredError,
    /// Mean absolute error
    #[serde(alias = "mae")]
    #[strum(to_string = "absolute_error", serialize = "mae")]
    AbsoluteError,
}

impl ContinuousMetric {
    /// Error contributed by one atom given `baseline - predicted`
    pub fn apply(self, difference: f64) -> f64 {
        match self {
            ContinuousMetric::SquaredError => difference * difference,
            ContinuousMetric::AbsoluteError => difference.abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(ContinuousMetric::SquaredError.apply(-0.5), 0.25);
        assert_eq!(ContinuousMetric::AbsoluteError.apply(-0.5), 0.5);
    }

    #[test]
    fn test_parse_accepts_short_names() {
        assert_eq!(
            "mse".parse::<ContinuousMetric>().unwrap(),
            ContinuousMetric::SquaredError
        );
        assert_eq!(
            "MAE".parse::<ContinuousMetric>().unwrap(),
            ContinuousMetric::AbsoluteError
        );
        assert_eq!(
            "absolute_error".parse::<ContinuousMetric>().unwrap(),
            ContinuousMetric::AbsoluteError
        );
        assert_eq!(ContinuousMetric::SquaredError.to_string(), "squared_error");
    }
}
