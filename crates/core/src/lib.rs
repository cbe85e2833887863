//! Core types and traits for evaluating predicted truth values of ground atoms
//!
//! This crate provides the foundational abstractions used by the evaluator:
//!
//! - **Atoms**: predicates, constants and ground atoms with truth values
//! - **Stores**: lookup and enumeration traits plus an in-memory store
//! - **Filters**: narrowing transforms over predicted atoms
//! - **Configuration**: comparison and logging settings
//! - **Error handling**: Unified error types

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod atoms;
pub mod config;
pub mod database;
pub mod error;
pub mod filter;
pub mod metric;

// Re-export main types for convenience
pub use atoms::{AtomStatus, Constant, GroundAtom, Predicate, StoredAtom};
pub use config::{Config, EvaluationConfig, LoggingConfig};
pub use database::{AtomLookup, InMemoryDatabase, PredictedAtomSource};
pub use error::{Error, Result};
pub use filter::{AtomFilter, MaxValueFilter, NoFilter};
pub use metric::ContinuousMetric;
