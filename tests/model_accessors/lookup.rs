//! Lookup accessors

use crate::common::*;
use modelkit::model::{self, NOT_FOUND};
use modelkit::{record, Error, Record, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn first_and_last_of_people() {
    let people = people();
    assert_eq!(model::first(&people), Some(&people[0]));
    assert_eq!(model::last(&people), Some(&people[2]));
}

#[test]
fn first_and_last_of_empty() {
    let empty: Vec<Record> = Vec::new();
    assert!(model::first(&empty).is_none());
    assert!(model::last(&empty).is_none());
}

#[test]
fn get_by_default_and_custom_key() {
    init_tracing();
    let beatles = beatles();
    let paul = model::get(&beatles, &id(2), "id").unwrap();
    assert_eq!(paul.get("name"), Some(&Value::from("paul")));

    let pete = model::get(&beatles, &Value::from("pete"), "name").unwrap();
    assert_eq!(pete.get("id"), Some(&id(4)));
}

#[test]
fn get_uses_strict_equality() {
    let beatles = beatles();
    assert!(model::get(&beatles, &Value::Float(2.0), "id").is_none());
    assert!(model::get(&beatles, &Value::from("2"), "id").is_none());
}

#[test]
fn get_returns_first_of_duplicates() {
    let models = vec![person(7, "first"), person(7, "second")];
    let found = model::get(&models, &id(7), "id").unwrap();
    assert_eq!(found.get("name"), Some(&Value::from("first")));
}

#[test]
fn models_without_key_never_match() {
    let models = vec![record! { "name" => "ghost" }, person(1, "tom")];
    assert!(!model::has(&models, &Value::Null, "id"));
    assert_eq!(model::get_index(&models, &id(1), "id"), 1);
}

#[test]
fn has_and_get_index() {
    let people = people();
    assert!(model::has(&people, &id(3), "id"));
    assert!(!model::has(&people, &id(9), "id"));
    assert_eq!(model::get_index(&people, &id(3), "id"), 2);
    assert_eq!(model::get_index(&people, &id(9), "id"), NOT_FOUND);
    assert_eq!(model::position(&people, &id(9), "id"), None);
}

#[test]
fn require_reports_key_and_identity() {
    let people = people();
    assert!(model::require(&people, &id(1), "id").is_ok());

    let err = model::require(&people, &id(9), "id").unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    let message = err.to_string();
    assert!(message.contains("id"));
    assert!(message.contains('9'));
}

#[test]
fn get_random_picks_a_member() {
    let people = people();
    for _ in 0..20 {
        let pick = model::get_random(&people).unwrap();
        assert!(people.contains(pick));
    }
    let empty: Vec<Record> = Vec::new();
    assert!(model::get_random(&empty).is_none());
}

#[test]
fn get_random_with_seed_is_reproducible() {
    let people = people();
    let a = model::get_random_with(&people, &mut StdRng::seed_from_u64(42));
    let b = model::get_random_with(&people, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}
