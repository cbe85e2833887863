//! Frozen confusion-matrix counts and the metrics derived from them

use atomeval_core::ContinuousMetric;
use serde::Serialize;
use std::fmt;
use strum_macros::{Display, EnumString};

/// Class whose precision, recall or F1 is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BinaryClass {
    Negative,
    Positive,
}

/// Immutable result of one comparison pass
///
/// Precision and recall of a class with no atoms in the denominator are `1.0`,
/// while accuracy over zero atoms is `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionStatistics {
    true_positives: usize,
    false_positives: usize,
    true_negatives: usize,
    false_negatives: usize,
    threshold: f64,
    metric: ContinuousMetric,
    continuous_score: f64,
}

impl PredictionStatistics {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        true_positives: usize,
        false_positives: usize,
        true_negatives: usize,
        false_negatives: usize,
        threshold: f64,
        metric: ContinuousMetric,
        continuous_score: f64,
    ) -> Self {
        Self {
            true_positives,
            false_positives,
            true_negatives,
            false_negatives,
            threshold,
            metric,
            continuous_score,
        }
    }

    pub fn true_positives(&self) -> usize {
        self.true_positives
    }

    pub fn false_positives(&self) -> usize {
        self.false_positives
    }

    pub fn true_negatives(&self) -> usize {
        self.true_negatives
    }

    pub fn false_negatives(&self) -> usize {
        self.false_negatives
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn metric(&self) -> ContinuousMetric {
        self.metric
    }

    /// Mean per-atom error under [`Self::metric`]; `0.0` when no atom was compared
    pub fn continuous_score(&self) -> f64 {
        self.continuous_score
    }

    pub fn precision(&self, class: BinaryClass) -> f64 {
        match class {
            BinaryClass::Positive => {
                ratio_or_one(self.true_positives, self.true_positives + self.false_positives)
            }
            BinaryClass::Negative => {
                ratio_or_one(self.true_negatives, self.true_negatives + self.false_negatives)
            }
        }
    }

    pub fn recall(&self, class: BinaryClass) -> f64 {
        match class {
            BinaryClass::Positive => {
                ratio_or_one(self.true_positives, self.true_positives + self.false_negatives)
            }
            BinaryClass::Negative => {
                ratio_or_one(self.true_negatives, self.true_negatives + self.false_positives)
            }
        }
    }

    pub fn f1(&self, class: BinaryClass) -> f64 {
        let precision = self.precision(class);
        let recall = self.recall(class);
        let sum = precision + recall;
        if sum == 0.0 {
            return 0.0;
        }
        2.0 * precision * recall / sum
    }

    pub fn accuracy(&self) -> f64 {
        let num_atoms = self.num_atoms();
        if num_atoms == 0 {
            return 0.0;
        }
        (self.true_positives + self.true_negatives) as f64 / num_atoms as f64
    }

    /// Number of misclassified atoms
    pub fn error(&self) -> usize {
        self.false_positives + self.false_negatives
    }

    /// Number of atoms that had a ground-truth counterpart
    pub fn num_atoms(&self) -> usize {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    pub fn is_empty(&self) -> bool {
        self.num_atoms() == 0
    }

    /// Every derived metric, ready for serialization
    pub fn report(&self) -> StatisticsReport {
        StatisticsReport {
            threshold: self.threshold,
            metric: self.metric,
            num_atoms: self.num_atoms(),
            true_positives: self.true_positives,
            false_positives: self.false_positives,
            true_negatives: self.true_negatives,
            false_negatives: self.false_negatives,
            error: self.error(),
            accuracy: self.accuracy(),
            continuous_score: self.continuous_score,
            positive: ClassReport::new(self, BinaryClass::Positive),
            negative: ClassReport::new(self, BinaryClass::Negative),
        }
    }
}

fn ratio_or_one(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 1.0;
    }
    numerator as f64 / denominator as f64
}

impl fmt::Display for PredictionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "atoms={} tp={} fp={} tn={} fn={} accuracy={:.4} f1={:.4} {}={:.6} (threshold {})",
            self.num_atoms(),
            self.true_positives,
            self.false_positives,
            self.true_negatives,
            self.false_negatives,
            self.accuracy(),
            self.f1(BinaryClass::Positive),
            self.metric,
            self.continuous_score,
            self.threshold
        )
    }
}

/// Serializable view of [`PredictionStatistics`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub threshold: f64,
    pub metric: ContinuousMetric,
    pub num_atoms: usize,
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
    pub error: usize,
    pub accuracy: f64,
    pub continuous_score: f64,
    pub positive: ClassReport,
    pub negative: ClassReport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassReport {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl ClassReport {
    fn new(statistics: &PredictionStatistics, class: BinaryClass) -> Self {
        Self {
            precision: statistics.precision(class),
            recall: statistics.recall(class),
            f1: statistics.f1(class),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn stats(tp: usize, fp: usize, tn: usize, fn_: usize) -> PredictionStatistics {
        PredictionStatistics::new(tp, fp, tn, fn_, 0.5, ContinuousMetric::SquaredError, 0.0)
    }

    #[test]
    fn test_precision_recall() {
        let s = stats(6, 2, 9, 3);
        assert!((s.precision(BinaryClass::Positive) - 6.0 / 8.0).abs() < EPSILON);
        assert!((s.recall(BinaryClass::Positive) - 6.0 / 9.0).abs() < EPSILON);
        assert!((s.precision(BinaryClass::Negative) - 9.0 / 12.0).abs() < EPSILON);
        assert!((s.recall(BinaryClass::Negative) - 9.0 / 11.0).abs() < EPSILON);
    }

    #[test]
    fn test_empty_denominators_default_to_one() {
        let s = stats(0, 0, 4, 0);
        assert_eq!(s.precision(BinaryClass::Positive), 1.0);
        assert_eq!(s.recall(BinaryClass::Positive), 1.0);
        assert_eq!(s.f1(BinaryClass::Positive), 1.0);
        assert_eq!(s.accuracy(), 1.0);
    }

    #[test]
    fn test_no_atoms() {
        let s = stats(0, 0, 0, 0);
        assert!(s.is_empty());
        assert_eq!(s.precision(BinaryClass::Negative), 1.0);
        assert_eq!(s.recall(BinaryClass::Negative), 1.0);
        assert_eq!(s.accuracy(), 0.0);
        assert_eq!(s.error(), 0);
    }

    #[test]
    fn test_f1_zero_when_precision_and_recall_zero() {
        // Only wrong answers: one false positive, one false negative
        let s = stats(0, 1, 0, 1);
        assert_eq!(s.precision(BinaryClass::Positive), 0.0);
        assert_eq!(s.recall(BinaryClass::Positive), 0.0);
        assert_eq!(s.f1(BinaryClass::Positive), 0.0);
        assert_eq!(s.error(), 2);
    }

    #[test]
    fn test_f1_harmonic_mean() {
        let s = stats(3, 1, 0, 3);
        // precision 0.75, recall 0.5
        assert!((s.f1(BinaryClass::Positive) - 0.6).abs() < EPSILON);
    }

    #[test]
    fn test_report_matches_accessors() {
        let s = stats(6, 2, 9, 3);
        let report = s.report();
        assert_eq!(report.num_atoms, 20);
        assert_eq!(report.error, 5);
        assert_eq!(report.accuracy, s.accuracy());
        assert_eq!(report.positive.f1, s.f1(BinaryClass::Positive));
        assert_eq!(report.negative.recall, s.recall(BinaryClass::Negative));
    }

    #[test]
    fn test_display() {
        let line = stats(1, 0, 1, 0).to_string();
        assert!(line.starts_with("atoms=2 tp=1 fp=0 tn=1 fn=0"));
        assert!(line.contains("squared_error=0.000000"));
    }
}
