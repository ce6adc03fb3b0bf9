//! Keyed helpers for in-memory collections of models
//!
//! ## Modules
//!
//! - [`model`]: lookup, insert, update, move and remove by identity on one
//!   ordered collection
//! - [`collection`]: iteration, mapping, filtering, deduplication, merge and
//!   sort across whole collections
//! - [`utils`]: the sort comparator builder
//! - [`list`]: [`ModelList`], an owned collection bound to one key
//!
//! ## Ownership
//!
//! Mutating operations take `&mut Vec<T>` (or `&mut [T]`) and change the
//! caller's collection in place. Operations documented as returning a new
//! collection clone the models they keep. Moving between two collections
//! takes both mutably, so a move within one collection and a move across
//! two are separate functions (`move_model` / `move_to`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
pub mod list;
pub mod model;
pub mod utils;

pub use list::ModelList;
pub use utils::sort_by;
