//! Model accessors: identity-based operations on one ordered collection
//!
//! ## Identity
//!
//! Every lookup takes an identity value and a [`Key`]. A model matches when
//! its identity under that key equals the value with `==`; models with no
//! identity under the key never match. Lookups scan front to back and stop
//! at the first match.
//!
//! ## Not found
//!
//! A miss is reported by absence: `None` from `get`, `update`, the move
//! family and `remove`; `-1` from [`get_index`]. [`position`] is the
//! `Option` form of `get_index`, and [`require`] turns a miss into an
//! [`Error::NotFound`] for `?` callers.
//!
//! ## Moves
//!
//! A move splices the model out of its source and then splices it into
//! the target. The target index is therefore relative to the collection
//! *after* the removal, and an index past the end appends.

use modelkit_core::{Assign, Error, Key, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use tracing::debug;

/// Index returned by [`get_index`] when no model matches
pub const NOT_FOUND: isize = -1;

/// First model, if any
pub fn first<T>(models: &[T]) -> Option<&T> {
    models.first()
}

/// Last model, if any
pub fn last<T>(models: &[T]) -> Option<&T> {
    models.last()
}

/// Get the first model whose identity under `key` equals `id`.
///
/// # Example
///
/// ```
/// use modelkit_collections::model;
/// use modelkit_core::{record, Value};
///
/// let beatles = vec![
///     record! { "id" => 1, "name" => "john" },
///     record! { "id" => 4, "name" => "pete" },
/// ];
///
/// let pete = model::get(&beatles, &Value::from("pete"), "name").unwrap();
/// assert_eq!(pete.get("id"), Some(&Value::Int(4)));
/// ```
pub fn get<'a, T, K: Key<T>>(models: &'a [T], id: &K::Id, key: K) -> Option<&'a T> {
    models.iter().find(|model| key.matches(model, id))
}

/// Mutable twin of [`get`]
pub fn get_mut<'a, T, K: Key<T>>(models: &'a mut [T], id: &K::Id, key: K) -> Option<&'a mut T> {
    models.iter_mut().find(|model| key.matches(model, id))
}

/// True when some model's identity under `key` equals `id`
pub fn has<T, K: Key<T>>(models: &[T], id: &K::Id, key: K) -> bool {
    get(models, id, key).is_some()
}

/// Index of the first matching model
pub fn position<T, K: Key<T>>(models: &[T], id: &K::Id, key: K) -> Option<usize> {
    models.iter().position(|model| key.matches(model, id))
}

/// Index of the first matching model, or [`NOT_FOUND`] (`-1`).
pub fn get_index<T, K: Key<T>>(models: &[T], id: &K::Id, key: K) -> isize {
    position(models, id, key).map_or(NOT_FOUND, |index| index as isize)
}

/// Like [`get`], but a miss is an error.
///
/// # Errors
///
/// Returns [`Error::NotFound`] naming the key and the missing identity.
pub fn require<'a, T, K>(models: &'a [T], id: &K::Id, key: K) -> Result<&'a T>
where
    K: Key<T>,
    K::Id: fmt::Display,
{
    get(models, id, &key).ok_or_else(|| Error::not_found(key.name(), id))
}

/// A uniformly chosen model, or `None` for an empty collection
pub fn get_random<T>(models: &[T]) -> Option<&T> {
    get_random_with(models, &mut rand::thread_rng())
}

/// [`get_random`] with a caller-supplied generator
pub fn get_random_with<'a, T, R: Rng + ?Sized>(models: &'a [T], rng: &mut R) -> Option<&'a T> {
    models.choose(rng)
}

/// Add a model, or merge it into the model that already has its identity.
///
/// When a model with the same identity exists, `model` is shallow-merged
/// into it through [`Assign`]; the existing model keeps its position.
/// Otherwise `model` is inserted at `index` when `index` is inside the
/// collection, and appended when `index` is `None` or past the end.
///
/// Returns the inserted or updated model.
pub fn add<'a, T, K>(models: &'a mut Vec<T>, model: T, index: Option<usize>, key: K) -> &'a mut T
where
    T: Assign,
    K: Key<T>,
{
    let existing = key
        .identity(&model)
        .and_then(|id| position(models, id, &key));

    if let Some(found) = existing {
        debug!(target: "modelkit::model", key = key.name(), index = found, "Merged into existing model");
        let target = &mut models[found];
        target.assign(model);
        return target;
    }

    let at = match index {
        Some(i) if i < models.len() => i,
        _ => models.len(),
    };
    models.insert(at, model);
    debug!(target: "modelkit::model", key = key.name(), index = at, len = models.len(), "Added model");
    &mut models[at]
}

/// Move the model with `model`'s identity to `index`, or add `model`.
///
/// An existing model is moved as with [`move_model`] and is not merged
/// with `model`; with `index` of `None` it stays where it is. A new model
/// is added as with [`add`]. Either way the resulting model is returned.
pub fn add_or_move<'a, T, K>(
    models: &'a mut Vec<T>,
    model: T,
    index: Option<usize>,
    key: K,
) -> &'a mut T
where
    T: Assign,
    K: Key<T>,
{
    let existing = key
        .identity(&model)
        .and_then(|id| position(models, id, &key));

    match (existing, index) {
        (Some(from), Some(to)) => {
            let at = splice_within(models, from, to);
            debug!(target: "modelkit::model", key = key.name(), from, to = at, "Moved existing model");
            &mut models[at]
        }
        (Some(found), None) => &mut models[found],
        (None, _) => add(models, model, index, key),
    }
}

/// Shallow-merge `values` into the model with identity `id`.
///
/// Returns the updated model, or `None` when no model matches. Never
/// inserts.
pub fn update<'a, T, V, K>(models: &'a mut [T], id: &K::Id, values: V, key: K) -> Option<&'a mut T>
where
    T: Assign<V>,
    K: Key<T>,
{
    let model = get_mut(models, id, &key)?;
    model.assign(values);
    debug!(target: "modelkit::model", key = key.name(), "Updated model");
    Some(model)
}

/// Move the model at `from` to `to` within one collection.
///
/// `to` is relative to the collection after the model has been taken out;
/// past the end appends. Returns the moved model, or `None` when `from` is
/// out of range.
pub fn move_by_index<T>(models: &mut Vec<T>, from: usize, to: usize) -> Option<&mut T> {
    if from >= models.len() {
        return None;
    }
    let at = splice_within(models, from, to);
    debug!(target: "modelkit::model", from, to = at, "Moved model by index");
    Some(&mut models[at])
}

/// Move the model at `from_index` in `from` to `to_index` in another
/// collection.
///
/// Returns the moved model, now owned by `to`, or `None` when
/// `from_index` is out of range.
pub fn move_by_index_to<'a, T>(
    from: &mut Vec<T>,
    from_index: usize,
    to_index: usize,
    to: &'a mut Vec<T>,
) -> Option<&'a mut T> {
    if from_index >= from.len() {
        return None;
    }
    let model = from.remove(from_index);
    let at = to_index.min(to.len());
    to.insert(at, model);
    debug!(
        target: "modelkit::model",
        from = from_index,
        to = at,
        source_len = from.len(),
        target_len = to.len(),
        "Moved model across collections"
    );
    Some(&mut to[at])
}

/// Move the model with identity `id` to `to` within one collection.
pub fn move_model<'a, T, K: Key<T>>(
    models: &'a mut Vec<T>,
    id: &K::Id,
    to: usize,
    key: K,
) -> Option<&'a mut T> {
    let from = position(models, id, key)?;
    move_by_index(models, from, to)
}

/// Move the model with identity `id` from one collection into another.
///
/// # Example
///
/// ```
/// use modelkit_collections::model;
/// use modelkit_core::{record, Record, Value};
///
/// let mut beatles = vec![
///     record! { "id" => 1, "name" => "john" },
///     record! { "id" => 4, "name" => "pete" },
/// ];
/// let mut ex_beatles: Vec<Record> = Vec::new();
///
/// model::move_to(&mut beatles, &Value::Int(4), 0, &mut ex_beatles, "id");
/// assert_eq!(beatles.len(), 1);
/// assert_eq!(ex_beatles[0].get("name"), Some(&Value::from("pete")));
/// ```
pub fn move_to<'a, T, K: Key<T>>(
    from: &mut Vec<T>,
    id: &K::Id,
    to_index: usize,
    to: &'a mut Vec<T>,
    key: K,
) -> Option<&'a mut T> {
    let from_index = position(from, id, key)?;
    move_by_index_to(from, from_index, to_index, to)
}

/// Move the model with identity `id` to the end of its collection.
///
/// The target index is `len - 1` taken before the move, which after the
/// removal is the append position.
pub fn move_to_end<'a, T, K: Key<T>>(models: &'a mut Vec<T>, id: &K::Id, key: K) -> Option<&'a mut T> {
    let to = models.len().saturating_sub(1);
    move_model(models, id, to, key)
}

/// Move the model with identity `id` to `to.len() - 1` of another
/// collection.
///
/// The index is taken before the move, so with a non-empty target the
/// model lands just before the target's current last model. An empty
/// target receives it at index 0.
pub fn move_to_end_of<'a, T, K: Key<T>>(
    from: &mut Vec<T>,
    id: &K::Id,
    to: &'a mut Vec<T>,
    key: K,
) -> Option<&'a mut T> {
    let to_index = to.len().saturating_sub(1);
    move_to(from, id, to_index, to, key)
}

/// Remove and return the first model with identity `id`.
pub fn remove<T, K: Key<T>>(models: &mut Vec<T>, id: &K::Id, key: K) -> Option<T> {
    let index = position(models, id, &key)?;
    let removed = models.remove(index);
    debug!(target: "modelkit::model", key = key.name(), index, len = models.len(), "Removed model");
    Some(removed)
}

/// Splice out at `from`, splice in at `to` (clamped). Returns the final index.
fn splice_within<T>(models: &mut Vec<T>, from: usize, to: usize) -> usize {
    let model = models.remove(from);
    let at = to.min(models.len());
    models.insert(at, model);
    at
}
