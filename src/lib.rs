//! modelkit - Keyed CRUD helpers for in-memory collections of models
//!
//! A model is any record with an identity field (by default `id`). modelkit
//! looks models up by identity and inserts, updates, moves, removes,
//! deduplicates, merges, filters and sorts ordered collections of them.
//!
//! # Quick Start
//!
//! ```
//! use modelkit::{model, collection, record, Record, Value};
//!
//! let mut beatles = vec![
//!     record! { "id" => 1, "name" => "john lennon" },
//!     record! { "id" => 2, "name" => "paul mccartney" },
//!     record! { "id" => 3, "name" => "george harrison" },
//!     record! { "id" => 4, "name" => "pete best" },
//! ];
//! let mut ex_beatles: Vec<Record> = Vec::new();
//!
//! // find pete through another key, then move him out
//! let pete_id = model::get(&beatles, &Value::from("pete best"), "name")
//!     .and_then(|pete| pete.get("id"))
//!     .cloned()
//!     .unwrap();
//! model::move_to(&mut beatles, &pete_id, 0, &mut ex_beatles, "id");
//!
//! model::add(&mut beatles, record! { "id" => 5, "name" => "ringo starr" }, None, "id");
//! collection::sort(&mut beatles, "name", true, false);
//!
//! assert_eq!(beatles.len(), 4);
//! assert_eq!(ex_beatles.len(), 1);
//! ```
//!
//! # Architecture
//!
//! - `modelkit-core`: [`Value`], [`Record`], the [`Model`] / [`Assign`] /
//!   [`Key`] traits, [`ListConfig`] and [`Error`]
//! - `modelkit-collections`: the [`model`], [`collection`] and [`utils`]
//!   operations and [`ModelList`]

pub use modelkit_collections::{collection, list, model, utils, sort_by, ModelList};
pub use modelkit_core::{
    by, record, Assign, By, Error, Key, ListConfig, Model, Record, Result, SortValue, Value,
    CONFIG_FILE_NAME, DEFAULT_KEY,
};
