//! Collection operators: bulk operations over whole collections
//!
//! | Operation | Mutates input? | Returns |
//! |-----------|----------------|---------|
//! | [`for_each`] | no (the callback may mutate models) | same collection |
//! | [`map`] | yes, each model replaced | same collection |
//! | [`filter`], [`filter_eq`] | no | new `Vec` |
//! | [`omit`], [`omit_eq`] | no | new `Vec` |
//! | [`dedupe`] | no | new `Vec` |
//! | [`merge`] | no | new `Vec` |
//! | [`sort`] | yes, stable in place | same collection |
//!
//! Operators that return a new `Vec` clone the models they keep.

use crate::model;
use crate::utils::sort_by;
use modelkit_core::{Key, SortValue};
use tracing::trace;

/// Call `callback` with each model and its index.
pub fn for_each<T, F>(models: &mut [T], mut callback: F) -> &mut [T]
where
    F: FnMut(&mut T, usize),
{
    for (index, model) in models.iter_mut().enumerate() {
        callback(model, index);
    }
    models
}

/// Replace each model with `callback`'s result, in place.
pub fn map<T, F>(models: &mut Vec<T>, mut callback: F) -> &mut Vec<T>
where
    F: FnMut(T, usize) -> T,
{
    let taken = std::mem::take(models);
    models.extend(
        taken
            .into_iter()
            .enumerate()
            .map(|(index, model)| callback(model, index)),
    );
    models
}

/// Models for which `predicate(model, index, models)` holds.
pub fn filter<T, F>(models: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize, &[T]) -> bool,
{
    models
        .iter()
        .enumerate()
        .filter(|(index, model)| predicate(*model, *index, models))
        .map(|(_, model)| model.clone())
        .collect()
}

/// Models whose identity under `key` equals `value`.
///
/// ```
/// use modelkit_collections::collection;
/// use modelkit_core::{record, Value};
///
/// let beatles = vec![
///     record! { "id" => 1, "alive" => false },
///     record! { "id" => 2, "alive" => true },
/// ];
/// let live = collection::filter_eq(&beatles, &Value::Bool(true), "alive");
/// assert_eq!(live.len(), 1);
/// ```
pub fn filter_eq<T, K>(models: &[T], value: &K::Id, key: K) -> Vec<T>
where
    T: Clone,
    K: Key<T>,
{
    models
        .iter()
        .filter(|model| key.matches(model, value))
        .cloned()
        .collect()
}

/// Models for which `predicate(model, index, models)` does not hold.
pub fn omit<T, F>(models: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize, &[T]) -> bool,
{
    filter(models, |model, index, all| !predicate(model, index, all))
}

/// Models whose identity under `key` does not equal `value`.
///
/// Models without an identity under `key` are kept.
pub fn omit_eq<T, K>(models: &[T], value: &K::Id, key: K) -> Vec<T>
where
    T: Clone,
    K: Key<T>,
{
    models
        .iter()
        .filter(|model| !key.matches(model, value))
        .cloned()
        .collect()
}

/// The first model of each distinct identity, in original order.
///
/// Models without an identity under `key` count as one shared identity, so
/// only the first of them is kept.
pub fn dedupe<T, K>(models: &[T], key: K) -> Vec<T>
where
    T: Clone,
    K: Key<T>,
{
    let mut seen: Vec<Option<&K::Id>> = Vec::new();
    let mut output = Vec::with_capacity(models.len());

    for model in models {
        let id = key.identity(model);
        if seen.contains(&id) {
            continue;
        }
        seen.push(id);
        output.push(model.clone());
    }

    trace!(
        target: "modelkit::collection",
        key = key.name(),
        input = models.len(),
        output = output.len(),
        "Deduplicated collection"
    );
    output
}

/// `a` followed by the models of `b` whose identity is not in `a`.
///
/// Only the original `a` is consulted: two models of `b` sharing an
/// identity that `a` lacks are both appended. Models of `b` without an
/// identity are always appended.
pub fn merge<T, K>(a: &[T], b: &[T], key: K) -> Vec<T>
where
    T: Clone,
    K: Key<T>,
{
    let mut output = a.to_vec();

    for model in b {
        let found = key
            .identity(model)
            .map_or(false, |id| model::has(a, id, &key));
        if !found {
            output.push(model.clone());
        }
    }

    trace!(
        target: "modelkit::collection",
        key = key.name(),
        added = output.len() - a.len(),
        len = output.len(),
        "Merged collections"
    );
    output
}

/// Stable in-place sort by identity under `key`.
///
/// See [`sort_by`] for the ordering rules.
pub fn sort<T, K>(models: &mut [T], key: K, asc: bool, numeric: bool) -> &mut [T]
where
    K: Key<T>,
    K::Id: SortValue,
{
    models.sort_by(sort_by::<T, K>(key, asc, numeric));
    models
}
