//! Library interface for the atomeval CLI
//!
//! This module exposes the comparison driver for integration testing while keeping
//! argument handling in main.rs.

pub mod dataset;

use anyhow::{bail, Result};
use atomeval_core::{InMemoryDatabase, Predicate};
use atomeval_evaluation::{
    ComparisonOptions, PredictionComparator, PredictionStatistics, QuickPredictionComparator,
    StatisticsReport,
};
use serde::Serialize;

pub use dataset::{load_dataset, parse_dataset, AtomRecord};

/// Statistics for one compared predicate
#[derive(Debug, Clone, Serialize)]
pub struct PredicateReport {
    pub predicate: String,
    #[serde(flatten)]
    pub report: StatisticsReport,
    #[serde(skip)]
    pub statistics: PredictionStatistics,
}

/// Compares the named predicates, or every predicted predicate when none are named
pub fn evaluate(
    predicted: &InMemoryDatabase,
    truth: &InMemoryDatabase,
    predicate_names: &[String],
    options: ComparisonOptions,
) -> Result<Vec<PredicateReport>> {
    let predicates = select_predicates(predicted, truth, predicate_names)?;

    let comparator = QuickPredictionComparator::builder(predicted)
        .baseline(truth)
        .options(options)
        .build()?;

    predicates
        .into_iter()
        .map(|predicate| -> Result<PredicateReport> {
            let statistics = comparator.compare(&predicate)?;
            Ok(PredicateReport {
                predicate: predicate.name,
                report: statistics.report(),
                statistics,
            })
        })
        .collect()
}

fn select_predicates(
    predicted: &InMemoryDatabase,
    truth: &InMemoryDatabase,
    names: &[String],
) -> Result<Vec<Predicate>> {
    if names.is_empty() {
        return Ok(predicted.predicates());
    }

    let mut predicates = Vec::with_capacity(names.len());
    for name in names {
        match predicted.predicate(name).or_else(|| truth.predicate(name)) {
            Some(predicate) => predicates.push(predicate),
            None => bail!("Unknown predicate '{name}': not present in either dump"),
        }
    }
    Ok(predicates)
}
