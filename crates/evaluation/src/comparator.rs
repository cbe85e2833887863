//! Comparison of predicted atoms against a ground-truth baseline
//!
//! [`QuickPredictionComparator`] walks the predicted atoms of a predicate once,
//! counting the confusion matrix and the continuous error together without
//! keeping per-atom error or label collections.

use atomeval_core::{
    AtomFilter, AtomLookup, Error, GroundAtom, NoFilter, PredictedAtomSource, Predicate, Result,
};
use tracing::{debug, info};

use crate::options::ComparisonOptions;
use crate::statistics::PredictionStatistics;

// ==== Capabilities ====

/// Produces statistics for a predicate
pub trait PredictionComparator {
    /// Name used in diagnostics
    fn name(&self) -> &'static str;

    fn compare(&self, predicate: &Predicate) -> Result<PredictionStatistics>;

    /// Comparators able to cap the number of baseline atoms return themselves here
    fn as_bounded(&self) -> Option<&dyn BoundedPredictionComparator> {
        None
    }
}

/// Comparison that also accounts for baseline atoms missing from the predictions
pub trait BoundedPredictionComparator: PredictionComparator {
    fn compare_bounded(
        &self,
        predicate: &Predicate,
        max_baseline_atoms: usize,
    ) -> Result<PredictionStatistics>;
}

/// Runs a bounded comparison, failing when the comparator lacks the capability
pub fn compare_bounded(
    comparator: &dyn PredictionComparator,
    predicate: &Predicate,
    max_baseline_atoms: usize,
) -> Result<PredictionStatistics> {
    match comparator.as_bounded() {
        Some(bounded) => bounded.compare_bounded(predicate, max_baseline_atoms),
        None => Err(Error::not_implemented(format!(
            "{} does not support comparison bounded by baseline atom count; \
             use a comparator that records per-atom errors and correct atoms instead",
            comparator.name()
        ))),
    }
}

// ==== Quick comparator ====

/// Single-pass comparator over a predicted and a baseline store
pub struct QuickPredictionComparator<'a> {
    result: &'a dyn PredictedAtomSource,
    baseline: &'a dyn AtomLookup,
    result_filter: Box<dyn AtomFilter + 'a>,
    options: ComparisonOptions,
}

impl<'a> QuickPredictionComparator<'a> {
    /// Starts a builder over the store holding the predictions
    pub fn builder(result: &'a dyn PredictedAtomSource) -> QuickPredictionComparatorBuilder<'a> {
        QuickPredictionComparatorBuilder::new(result)
    }

    pub fn options(&self) -> &ComparisonOptions {
        &self.options
    }

    /// Compares one predicate using `options` instead of the built ones
    pub fn compare_with(
        &self,
        predicate: &Predicate,
        options: &ComparisonOptions,
    ) -> Result<PredictionStatistics> {
        let atoms = self.result_filter.filter(self.result.atoms_for(predicate)?);
        let predicted = atoms.len();

        let mut accumulator = ConfusionAccumulator::new(options);
        for atom in &atoms {
            let Some(baseline) = self.baseline.resolve(atom.predicate(), atom.arguments())? else {
                debug!(atom = %atom, "No baseline atom recorded, skipping");
                continue;
            };
            if !baseline.is_observed() {
                debug!(atom = %atom, "Baseline atom is not observed, skipping");
                continue;
            }
            accumulator.record(atom, baseline.value());
        }

        let statistics = accumulator.finish();
        info!(
            predicate = %predicate,
            predicted,
            compared = statistics.num_atoms(),
            "Compared predictions: {statistics}"
        );
        Ok(statistics)
    }
}

impl PredictionComparator for QuickPredictionComparator<'_> {
    fn name(&self) -> &'static str {
        "QuickPredictionComparator"
    }

    fn compare(&self, predicate: &Predicate) -> Result<PredictionStatistics> {
        self.compare_with(predicate, &self.options)
    }
}

/// Builder for [`QuickPredictionComparator`] with fluent API
pub struct QuickPredictionComparatorBuilder<'a> {
    result: &'a dyn PredictedAtomSource,
    baseline: Option<&'a dyn AtomLookup>,
    result_filter: Box<dyn AtomFilter + 'a>,
    options: ComparisonOptions,
}

impl<'a> QuickPredictionComparatorBuilder<'a> {
    pub fn new(result: &'a dyn PredictedAtomSource) -> Self {
        Self {
            result,
            baseline: None,
            result_filter: Box::new(NoFilter),
            options: ComparisonOptions::default(),
        }
    }

    /// Set the ground-truth store
    pub fn baseline(mut self, baseline: &'a dyn AtomLookup) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Set the filter applied to predicted atoms before comparison
    pub fn result_filter(mut self, filter: impl AtomFilter + 'a) -> Self {
        self.result_filter = Box::new(filter);
        self
    }

    /// Set the default options for [`PredictionComparator::compare`]
    pub fn options(mut self, options: ComparisonOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the comparator; a baseline is required
    pub fn build(self) -> Result<QuickPredictionComparator<'a>> {
        let baseline = self.baseline.ok_or_else(|| {
            Error::config("A baseline must be set before building a comparator")
        })?;

        Ok(QuickPredictionComparator {
            result: self.result,
            baseline,
            result_filter: self.result_filter,
            options: self.options,
        })
    }
}

/// Counters owned by a single comparison pass
struct ConfusionAccumulator<'o> {
    options: &'o ComparisonOptions,
    true_positives: usize,
    false_positives: usize,
    true_negatives: usize,
    false_negatives: usize,
    error_sum: f64,
    compared: usize,
}

impl<'o> ConfusionAccumulator<'o> {
    fn new(options: &'o ComparisonOptions) -> Self {
        Self {
            options,
            true_positives: 0,
            false_positives: 0,
            true_negatives: 0,
            false_negatives: 0,
            error_sum: 0.0,
            compared: 0,
        }
    }

    fn record(&mut self, predicted: &GroundAtom, baseline_value: f64) {
        self.compared += 1;
        self.error_sum += self
            .options
            .metric()
            .apply(baseline_value - predicted.value());

        let actual = self.options.is_positive(predicted.value());
        let expected = self.options.is_positive(baseline_value);
        match (actual, expected) {
            (true, true) => self.true_positives += 1,
            (false, false) => self.true_negatives += 1,
            (true, false) => self.false_positives += 1,
            (false, true) => self.false_negatives += 1,
        }
    }

    fn finish(self) -> PredictionStatistics {
        let continuous_score = if self.compared == 0 {
            debug!("No atoms had an observed baseline, continuous score is 0.0");
            0.0
        } else {
            self.error_sum / self.compared as f64
        };

        PredictionStatistics::new(
            self.true_positives,
            self.false_positives,
            self.true_negatives,
            self.false_negatives,
            self.options.threshold(),
            self.options.metric(),
            continuous_score,
        )
    }
}
