//! Atom stores consulted during evaluation
//!
//! [`AtomLookup`] resolves a baseline counterpart by key and
//! [`PredictedAtomSource`] enumerates the atoms of a predicate.
//! [`InMemoryDatabase`] implements both.

use crate::atoms::{AtomStatus, Constant, GroundAtom, Predicate, StoredAtom};
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

// ==== Traits ====

/// Resolves the atom recorded for a predicate and argument tuple
pub trait AtomLookup {
    /// Returns `None` when nothing is recorded. A recorded atom that is not a
    /// ground-truth observation comes back with [`AtomStatus::Unobserved`].
    fn resolve(&self, predicate: &Predicate, arguments: &[Constant]) -> Result<Option<StoredAtom>>;
}

/// Supplies every atom recorded for a predicate
pub trait PredictedAtomSource {
    fn atoms_for(&self, predicate: &Predicate) -> Result<Vec<GroundAtom>>;
}

impl<T: AtomLookup + ?Sized> AtomLookup for &T {
    fn resolve(&self, predicate: &Predicate, arguments: &[Constant]) -> Result<Option<StoredAtom>> {
        (**self).resolve(predicate, arguments)
    }
}

impl<T: PredictedAtomSource + ?Sized> PredictedAtomSource for &T {
    fn atoms_for(&self, predicate: &Predicate) -> Result<Vec<GroundAtom>> {
        (**self).atoms_for(predicate)
    }
}

// ==== In-memory store ====

/// Atom store backed by ordered maps
///
/// Atoms of one predicate are kept ordered by argument tuple so that
/// enumeration order never depends on insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    arities: HashMap<String, usize>,
    atoms: BTreeMap<Predicate, BTreeMap<Vec<Constant>, StoredAtom>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an atom, replacing any atom with the same predicate and arguments
    pub fn insert(&mut self, atom: GroundAtom, status: AtomStatus) -> Result<()> {
        let predicate = atom.predicate().clone();
        match self.arities.get(&predicate.name) {
            Some(&arity) if arity != predicate.arity => {
                return Err(Error::invalid_input(format!(
                    "predicate {} is registered with arity {arity}, got {}",
                    predicate.name, predicate.arity
                )));
            }
            Some(_) => {}
            None => {
                self.arities.insert(predicate.name.clone(), predicate.arity);
            }
        }

        let key = atom.arguments().to_vec();
        let replaced = self
            .atoms
            .entry(predicate)
            .or_default()
            .insert(key, StoredAtom { atom, status });
        if let Some(previous) = replaced {
            debug!(atom = %previous.atom, "Replaced previously recorded atom");
        }
        Ok(())
    }

    pub fn insert_observed(&mut self, atom: GroundAtom) -> Result<()> {
        self.insert(atom, AtomStatus::Observed)
    }

    pub fn insert_unobserved(&mut self, atom: GroundAtom) -> Result<()> {
        self.insert(atom, AtomStatus::Unobserved)
    }

    /// Number of atoms across all predicates
    pub fn len(&self) -> usize {
        self.atoms.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Predicates with at least one recorded atom, in name order
    pub fn predicates(&self) -> Vec<Predicate> {
        self.atoms.keys().cloned().collect()
    }

    /// Looks up a registered predicate by name
    pub fn predicate(&self, name: &str) -> Option<Predicate> {
        self.arities
            .get(name)
            .map(|&arity| Predicate::new(name, arity))
    }
}

impl AtomLookup for InMemoryDatabase {
    fn resolve(&self, predicate: &Predicate, arguments: &[Constant]) -> Result<Option<StoredAtom>> {
        Ok(self
            .atoms
            .get(predicate)
            .and_then(|atoms| atoms.get(arguments))
            .cloned())
    }
}

impl PredictedAtomSource for InMemoryDatabase {
    fn atoms_for(&self, predicate: &Predicate) -> Result<Vec<GroundAtom>> {
        Ok(self
            .atoms
            .get(predicate)
            .map(|atoms| atoms.values().map(|stored| stored.atom.clone()).collect())
            .unwrap_or_default())
    }
}
