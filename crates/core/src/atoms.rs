use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumString};

/// A constant argument of a ground atom
///
/// Arguments compare by value, so two atoms built from separately allocated
/// strings still denote the same ground fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Constant {
    Integer(i64),
    Str(String),
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Integer(value) => write!(f, "{value}"),
            Constant::Str(value) => write!(f, "'{value}'"),
        }
    }
}

impl From<&str> for Constant {
    fn from(value: &str) -> Self {
        Constant::Str(value.to_string())
    }
}

impl From<String> for Constant {
    fn from(value: String) -> Self {
        Constant::Str(value)
    }
}

impl From<i64> for Constant {
    fn from(value: i64) -> Self {
        Constant::Integer(value)
    }
}

/// A named relation with a fixed arity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Predicate {
    pub name: String,
    pub arity: usize,
}

impl Predicate {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.arity)
    }
}

/// Whether a recorded atom is a ground-truth observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AtomStatus {
    Observed,
    Unobserved,
}

/// A fully instantiated fact with a continuous truth value in `[0, 1]`
///
/// Deserialization goes through [`GroundAtom::new`], so decoded atoms obey the
/// same arity and range checks as constructed ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGroundAtom")]
pub struct GroundAtom {
    predicate: Predicate,
    arguments: Vec<Constant>,
    value: f64,
}

impl GroundAtom {
    /// Creates a ground atom, checking arity and the truth value range
    pub fn new(predicate: Predicate, arguments: Vec<Constant>, value: f64) -> Result<Self> {
        if arguments.len() != predicate.arity {
            return Err(Error::invalid_input(format!(
                "predicate {predicate} expects {} arguments, got {}",
                predicate.arity,
                arguments.len()
            )));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::invalid_input(format!(
                "truth value for {} must be in [0, 1], got {value}",
                predicate.name
            )));
        }

        Ok(Self {
            predicate,
            arguments,
            value,
        })
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn arguments(&self) -> &[Constant] {
        &self.arguments
    }

    pub fn arity(&self) -> usize {
        self.arguments.len()
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

#[derive(Deserialize)]
struct RawGroundAtom {
    predicate: Predicate,
    arguments: Vec<Constant>,
    value: f64,
}

impl TryFrom<RawGroundAtom> for GroundAtom {
    type Error = Error;

    fn try_from(raw: RawGroundAtom) -> Result<Self> {
        Self::new(raw.predicate, raw.arguments, raw.value)
    }
}

impl fmt::Display for GroundAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.predicate.name)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{argument}")?;
        }
        write!(f, ") = {}", self.value)
    }
}

/// An atom as recorded in a store, tagged with its observation status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAtom {
    pub atom: GroundAtom,
    pub status: AtomStatus,
}

impl StoredAtom {
    pub fn is_observed(&self) -> bool {
        self.status == AtomStatus::Observed
    }

    pub fn value(&self) -> f64 {
        self.atom.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_arity_mismatch() {
        let result = GroundAtom::new(Predicate::new("Friends", 2), vec!["a".into()], 0.5);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_new_rejects_out_of_range_value() {
        let predicate = Predicate::new("Friends", 1);
        assert!(GroundAtom::new(predicate.clone(), vec!["a".into()], 1.5).is_err());
        assert!(GroundAtom::new(predicate.clone(), vec!["a".into()], -0.1).is_err());
        assert!(GroundAtom::new(predicate, vec!["a".into()], f64::NAN).is_err());
    }

    #[test]
    fn test_constants_compare_by_value() {
        let owned = Constant::from(String::from("alice"));
        assert_eq!(owned, Constant::from("alice"));
        assert_ne!(Constant::from(1i64), Constant::from("1"));
    }

    #[test]
    fn test_display() {
        let atom = GroundAtom::new(
            Predicate::new("Knows", 2),
            vec!["alice".into(), 7i64.into()],
            0.25,
        )
        .unwrap();
        assert_eq!(atom.to_string(), "Knows('alice', 7) = 0.25");
        assert_eq!(atom.predicate().to_string(), "Knows/2");
    }

    #[test]
    fn test_status_parses_from_str() {
        assert_eq!("observed".parse::<AtomStatus>().unwrap(), AtomStatus::Observed);
        assert_eq!(AtomStatus::Unobserved.to_string(), "unobserved");
    }

    #[test]
    fn test_deserialize_validates_atom() {
        let atom: GroundAtom = serde_json::from_str(
            r#"{"predicate":{"name":"Knows","arity":2},"arguments":["alice",7],"value":0.25}"#,
        )
        .unwrap();
        assert_eq!(
            atom.arguments(),
            &[Constant::from("alice"), Constant::from(7i64)][..]
        );
        assert_eq!(atom.value(), 0.25);

        let out_of_range = serde_json::from_str::<GroundAtom>(
            r#"{"predicate":{"name":"Knows","arity":1},"arguments":["alice"],"value":1.5}"#,
        );
        assert!(out_of_range.is_err());

        let wrong_arity = serde_json::from_str::<GroundAtom>(
            r#"{"predicate":{"name":"Knows","arity":2},"arguments":["alice"],"value":0.5}"#,
        );
        assert!(wrong_arity.unwrap_err().to_string().contains("expects 2 arguments"));
    }

    #[test]
    fn test_stored_atom_deserialize_validates_inner_atom() {
        let stored = serde_json::from_str::<StoredAtom>(
            r#"{"atom":{"predicate":{"name":"Knows","arity":1},"arguments":["bob"],"value":-0.5},"status":"observed"}"#,
        );
        assert!(stored.is_err());
    }
}
