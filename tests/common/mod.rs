//! Shared test utilities for all integration test suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]

use modelkit::{record, Record, Value};
use proptest::prelude::*;
use std::sync::Once;

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness so `--nocapture` shows
/// the debug events of the operation under test.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// Identity value for an integer id
pub fn id(i: i64) -> Value {
    Value::Int(i)
}

/// A person record
pub fn person(id: i64, name: &str) -> Record {
    record! { "id" => id, "name" => name }
}

/// tom, dick, harry with ids 1..=3
pub fn people() -> Vec<Record> {
    vec![person(1, "tom"), person(2, "dick"), person(3, "harry")]
}

/// john, paul, george, pete with ids 1..=4, all alive
pub fn beatles() -> Vec<Record> {
    ["john", "paul", "george", "pete"]
        .iter()
        .enumerate()
        .map(|(i, name)| record! { "id" => i as i64 + 1, "name" => *name, "alive" => true })
        .collect()
}

/// The `name` field of each model, in order
pub fn names(models: &[Record]) -> Vec<String> {
    models
        .iter()
        .map(|m| m.get("name").and_then(Value::as_str).unwrap_or("").to_string())
        .collect()
}

/// The integer `id` field of each model, in order
pub fn ids(models: &[Record]) -> Vec<i64> {
    models
        .iter()
        .filter_map(|m| m.get("id").and_then(Value::as_int))
        .collect()
}

/// Sorted `(id, name)` pairs, for multiset comparisons
pub fn multiset(models: &[Record]) -> Vec<(i64, String)> {
    let mut pairs: Vec<(i64, String)> = ids(models).into_iter().zip(names(models)).collect();
    pairs.sort();
    pairs
}

// ============================================================================
// Strategies
// ============================================================================

/// Collections of people whose ids collide often
pub fn people_strategy() -> impl Strategy<Value = Vec<Record>> {
    proptest::collection::vec((0i64..6, "[a-z]{1,4}"), 0..12).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(id, name)| person(id, &name))
            .collect()
    })
}
