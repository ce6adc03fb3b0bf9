//! Insert, update and remove

use crate::common::*;
use modelkit::{model, record, Value};

#[test]
fn add_appends_by_default() {
    init_tracing();
    let mut people = people();
    let added = model::add(&mut people, person(4, "jane"), None, "id");
    assert_eq!(added.get("name"), Some(&Value::from("jane")));
    assert_eq!(names(&people), ["tom", "dick", "harry", "jane"]);
}

#[test]
fn add_at_index() {
    let mut people = people();
    model::add(&mut people, person(4, "jane"), Some(1), "id");
    assert_eq!(names(&people), ["tom", "jane", "dick", "harry"]);
}

#[test]
fn add_index_past_end_appends() {
    let mut people = people();
    model::add(&mut people, person(4, "jane"), Some(99), "id");
    assert_eq!(ids(&people), [1, 2, 3, 4]);
}

#[test]
fn add_existing_merges_in_place() {
    let mut people = people();
    let merged = model::add(&mut people, record! { "id" => 2, "age" => 40 }, Some(0), "id");
    assert_eq!(merged.get("name"), Some(&Value::from("dick")));
    assert_eq!(merged.get("age"), Some(&Value::Int(40)));
    assert_eq!(ids(&people), [1, 2, 3]);
}

#[test]
fn add_with_custom_key() {
    let mut people = people();
    model::add(&mut people, record! { "name" => "tom", "id" => 10 }, None, "name");
    assert_eq!(people.len(), 3);
    assert_eq!(people[0].get("id"), Some(&Value::Int(10)));
}

#[test]
fn add_or_move_moves_without_merging() {
    let mut people = people();
    let moved = model::add_or_move(&mut people, record! { "id" => 3, "name" => "harold" }, Some(0), "id");
    assert_eq!(moved.get("name"), Some(&Value::from("harry")));
    assert_eq!(names(&people), ["harry", "tom", "dick"]);
}

#[test]
fn add_or_move_without_index_leaves_existing_in_place() {
    let mut people = people();
    let found = model::add_or_move(&mut people, record! { "id" => 1, "name" => "thomas" }, None, "id");
    assert_eq!(found.get("name"), Some(&Value::from("tom")));
    assert_eq!(ids(&people), [1, 2, 3]);
}

#[test]
fn add_or_move_adds_new_models() {
    let mut people = people();
    model::add_or_move(&mut people, person(4, "jane"), Some(0), "id");
    assert_eq!(ids(&people), [4, 1, 2, 3]);
}

#[test]
fn update_merges_fields() {
    let mut beatles = beatles();
    let john = model::update(&mut beatles, &id(1), record! { "alive" => false }, "id").unwrap();
    assert_eq!(john.get("alive"), Some(&Value::Bool(false)));
    assert_eq!(john.get("name"), Some(&Value::from("john")));
}

#[test]
fn update_missing_is_a_no_op() {
    let mut beatles = beatles();
    let before = beatles.clone();
    assert!(model::update(&mut beatles, &id(9), record! { "alive" => false }, "id").is_none());
    assert_eq!(beatles, before);
}

#[test]
fn update_with_pairs() {
    let mut people = people();
    model::update(&mut people, &id(1), vec![("name", Value::from("thomas"))], "id");
    assert_eq!(names(&people)[0], "thomas");
}

#[test]
fn remove_returns_the_model() {
    let mut people = people();
    let removed = model::remove(&mut people, &id(2), "id").unwrap();
    assert_eq!(removed.get("name"), Some(&Value::from("dick")));
    assert_eq!(names(&people), ["tom", "harry"]);
    assert!(model::remove(&mut people, &id(2), "id").is_none());
    assert_eq!(people.len(), 2);
}
