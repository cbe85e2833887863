use atomeval_core::{
    AtomLookup, AtomStatus, Constant, Error, GroundAtom, InMemoryDatabase, PredictedAtomSource,
    Predicate,
};
use pretty_assertions::assert_eq;

fn friends() -> Predicate {
    Predicate::new("Friends", 2)
}

fn atom(a: &str, b: &str, value: f64) -> GroundAtom {
    GroundAtom::new(friends(), vec![a.into(), b.into()], value).expect("valid atom")
}

#[test]
fn test_resolve_distinguishes_absent_and_unobserved() {
    let mut db = InMemoryDatabase::new();
    db.insert_observed(atom("a", "b", 1.0)).unwrap();
    db.insert_unobserved(atom("c", "d", 0.4)).unwrap();

    let observed = db
        .resolve(&friends(), &["a".into(), "b".into()])
        .unwrap()
        .expect("observed atom recorded");
    assert!(observed.is_observed());
    assert_eq!(observed.value(), 1.0);

    let unobserved = db
        .resolve(&friends(), &["c".into(), "d".into()])
        .unwrap()
        .expect("unobserved atom recorded");
    assert_eq!(unobserved.status, AtomStatus::Unobserved);

    assert!(db
        .resolve(&friends(), &["e".into(), "f".into()])
        .unwrap()
        .is_none());
}

#[test]
fn test_resolve_matches_arguments_by_value() {
    let mut db = InMemoryDatabase::new();
    db.insert_observed(atom("a", "b", 0.6)).unwrap();

    let key: Vec<Constant> = vec![String::from("a").into(), String::from("b").into()];
    assert!(db.resolve(&friends(), &key).unwrap().is_some());
}

#[test]
fn test_atoms_for_is_ordered_by_arguments() {
    let mut db = InMemoryDatabase::new();
    db.insert_observed(atom("c", "d", 0.1)).unwrap();
    db.insert_observed(atom("a", "b", 0.9)).unwrap();

    let atoms = db.atoms_for(&friends()).unwrap();
    assert_eq!(atoms, vec![atom("a", "b", 0.9), atom("c", "d", 0.1)]);
    assert!(db
        .atoms_for(&Predicate::new("Knows", 2))
        .unwrap()
        .is_empty());
}

#[test]
fn test_insert_replaces_same_key() {
    let mut db = InMemoryDatabase::new();
    db.insert_unobserved(atom("a", "b", 0.2)).unwrap();
    db.insert_observed(atom("a", "b", 0.8)).unwrap();

    assert_eq!(db.len(), 1);
    let stored = db
        .resolve(&friends(), &["a".into(), "b".into()])
        .unwrap()
        .unwrap();
    assert!(stored.is_observed());
    assert_eq!(stored.value(), 0.8);
}

#[test]
fn test_insert_rejects_conflicting_arity() {
    let mut db = InMemoryDatabase::new();
    db.insert_observed(atom("a", "b", 0.5)).unwrap();

    let unary = GroundAtom::new(Predicate::new("Friends", 1), vec!["a".into()], 0.5).unwrap();
    let result = db.insert_observed(unary);
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn test_predicates_and_lookup_by_name() {
    let mut db = InMemoryDatabase::new();
    assert!(db.is_empty());
    db.insert_observed(atom("a", "b", 0.5)).unwrap();
    db.insert_observed(GroundAtom::new(Predicate::new("Person", 1), vec!["a".into()], 1.0).unwrap())
        .unwrap();

    assert_eq!(
        db.predicates(),
        vec![friends(), Predicate::new("Person", 1)]
    );
    assert_eq!(db.predicate("Friends"), Some(friends()));
    assert_eq!(db.predicate("Knows"), None);
}
