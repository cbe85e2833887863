//! Evaluation of predicted ground-atom truth values against a baseline
//!
//! This crate provides:
//! - A single-pass comparator producing confusion-matrix counts and a continuous error score
//! - Immutable statistics with precision, recall, F1 and accuracy
//! - Capability traits separating plain and baseline-bounded comparison

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod comparator;
pub mod options;
pub mod statistics;

pub use atomeval_core::ContinuousMetric;
pub use comparator::{
    compare_bounded, BoundedPredictionComparator, PredictionComparator,
    QuickPredictionComparator, QuickPredictionComparatorBuilder,
};
pub use options::{ComparisonOptions, ComparisonOptionsBuilder, DEFAULT_THRESHOLD};
pub use statistics::{BinaryClass, ClassReport, PredictionStatistics, StatisticsReport};
