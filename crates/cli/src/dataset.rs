//! JSON atom dumps loaded into in-memory stores

use anyhow::{Context, Result};
use atomeval_core::{AtomStatus, Constant, GroundAtom, InMemoryDatabase, Predicate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One atom as written in a dump file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomRecord {
    pub predicate: String,
    pub arguments: Vec<Constant>,
    pub value: f64,
    /// Falls back to the loader's default status when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed: Option<bool>,
}

impl AtomRecord {
    fn status(&self, default: AtomStatus) -> AtomStatus {
        match self.observed {
            Some(true) => AtomStatus::Observed,
            Some(false) => AtomStatus::Unobserved,
            None => default,
        }
    }
}

/// Parses a JSON array of [`AtomRecord`]s into a store
pub fn parse_dataset(content: &str, default_status: AtomStatus) -> Result<InMemoryDatabase> {
    let records: Vec<AtomRecord> =
        serde_json::from_str(content).context("Failed to parse atom records")?;

    let mut db = InMemoryDatabase::new();
    for (index, record) in records.into_iter().enumerate() {
        let status = record.status(default_status);
        let predicate = Predicate::new(record.predicate, record.arguments.len());
        let atom = GroundAtom::new(predicate, record.arguments, record.value)
            .with_context(|| format!("Invalid atom record at index {index}"))?;
        db.insert(atom, status)
            .with_context(|| format!("Failed to store atom record at index {index}"))?;
    }

    Ok(db)
}

/// Reads a dump file into a store
pub fn load_dataset(path: &Path, default_status: AtomStatus) -> Result<InMemoryDatabase> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let db = parse_dataset(&content, default_status)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    debug!(path = %path.display(), atoms = db.len(), "Loaded atom dump");
    Ok(db)
}
