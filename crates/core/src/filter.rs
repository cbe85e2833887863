//! Narrowing transforms applied to predicted atoms before comparison

use crate::atoms::{Constant, GroundAtom};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Pure narrowing transform over a sequence of atoms
pub trait AtomFilter {
    fn filter(&self, atoms: Vec<GroundAtom>) -> Vec<GroundAtom>;
}

/// Identity filter
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl AtomFilter for NoFilter {
    fn filter(&self, atoms: Vec<GroundAtom>) -> Vec<GroundAtom> {
        atoms
    }
}

/// Retains the atoms matching a predicate function
impl<F> AtomFilter for F
where
    F: Fn(&GroundAtom) -> bool,
{
    fn filter(&self, atoms: Vec<GroundAtom>) -> Vec<GroundAtom> {
        atoms.into_iter().filter(|atom| self(atom)).collect()
    }
}

/// Keeps one atom per group of atoms that agree on every argument except one
///
/// For a matching predicate such as `Same(a, b)` with `argument_index = 1`,
/// only the highest-valued `b` survives for each `a`. Ties keep the earliest atom.
/// Atoms too short to have the argument pass through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct MaxValueFilter {
    argument_index: usize,
}

impl MaxValueFilter {
    pub fn new(argument_index: usize) -> Self {
        Self { argument_index }
    }

    /// Like [`MaxValueFilter::new`], but checks the index against an arity
    pub fn for_arity(argument_index: usize, arity: usize) -> Result<Self> {
        if argument_index >= arity {
            return Err(Error::invalid_input(format!(
                "argument index {argument_index} out of range for arity {arity}"
            )));
        }
        Ok(Self::new(argument_index))
    }

    fn group_key(&self, atom: &GroundAtom) -> Vec<Constant> {
        atom.arguments()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.argument_index)
            .map(|(_, argument)| argument.clone())
            .collect()
    }
}

impl AtomFilter for MaxValueFilter {
    fn filter(&self, atoms: Vec<GroundAtom>) -> Vec<GroundAtom> {
        let mut kept: Vec<Option<GroundAtom>> = Vec::with_capacity(atoms.len());
        let mut best: HashMap<Vec<Constant>, usize> = HashMap::new();

        for atom in atoms {
            if atom.arity() <= self.argument_index {
                kept.push(Some(atom));
                continue;
            }

            let key = self.group_key(&atom);
            match best.get(&key) {
                Some(&slot) => {
                    let beats = kept[slot]
                        .as_ref()
                        .is_some_and(|current| atom.value() > current.value());
                    if beats {
                        kept[slot] = Some(atom);
                    }
                }
                None => {
                    best.insert(key, kept.len());
                    kept.push(Some(atom));
                }
            }
        }

        kept.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Predicate;

    fn same(a: &str, b: &str, value: f64) -> GroundAtom {
        GroundAtom::new(Predicate::new("Same", 2), vec![a.into(), b.into()], value).unwrap()
    }

    #[test]
    fn test_no_filter_is_identity() {
        let atoms = vec![same("a", "x", 0.2), same("b", "y", 0.9)];
        assert_eq!(NoFilter.filter(atoms.clone()), atoms);
    }

    #[test]
    fn test_closure_filter() {
        let atoms = vec![same("a", "x", 0.2), same("b", "y", 0.9)];
        let strong = |atom: &GroundAtom| atom.value() > 0.5;
        assert_eq!(strong.filter(atoms), vec![same("b", "y", 0.9)]);
    }

    #[test]
    fn test_max_value_filter_keeps_best_per_group() {
        let atoms = vec![
            same("a", "x", 0.2),
            same("a", "y", 0.7),
            same("b", "x", 0.4),
            same("a", "z", 0.5),
        ];

        let filtered = MaxValueFilter::new(1).filter(atoms);
        assert_eq!(filtered, vec![same("a", "y", 0.7), same("b", "x", 0.4)]);
    }

    #[test]
    fn test_max_value_filter_ties_keep_first() {
        let atoms = vec![same("a", "x", 0.5), same("a", "y", 0.5)];
        assert_eq!(
            MaxValueFilter::new(1).filter(atoms),
            vec![same("a", "x", 0.5)]
        );
    }

    #[test]
    fn test_for_arity_rejects_out_of_range_index() {
        assert!(MaxValueFilter::for_arity(2, 2).is_err());
        assert!(MaxValueFilter::for_arity(1, 2).is_ok());
    }
}
