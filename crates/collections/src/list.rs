//! ModelList: an owned collection bound to one identity key
//!
//! The free functions in [`crate::model`] and [`crate::collection`] take the
//! key on every call. Code that keeps one collection under one naming
//! convention (a window stack keyed by `windowId`, say) can hold a
//! `ModelList` instead and stop repeating the key.
//!
//! ```
//! use modelkit_collections::ModelList;
//! use modelkit_core::{record, Value};
//!
//! let mut windows = ModelList::with_key("windowId".to_string());
//! for id in 1..=3 {
//!     windows.add(record! { "windowId" => id, "content" => format!("window {}", id) }, Some(0));
//! }
//! // newest on top: 3, 2, 1
//! windows.move_model(&Value::Int(1), 0);
//! windows.remove(&Value::Int(3));
//!
//! let order: Vec<_> = windows.iter().map(|w| w.get("windowId").cloned()).collect();
//! assert_eq!(order, [Some(Value::Int(1)), Some(Value::Int(2))]);
//! ```

use crate::{collection, model};
use modelkit_core::{Assign, Key, ListConfig, Model, Result, SortValue, DEFAULT_KEY};
use std::ops::Deref;
use tracing::debug;

/// An owned, ordered collection of models with a fixed identity key.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelList<T, K = String> {
    models: Vec<T>,
    key: K,
}

impl<T> ModelList<T, String> {
    /// Empty list keyed by [`DEFAULT_KEY`]
    pub fn new() -> Self {
        Self::with_key(DEFAULT_KEY.to_string())
    }

    /// Build a list from a [`ListConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](modelkit_core::Error::InvalidConfig)
    /// when the config does not validate.
    pub fn from_config(config: &ListConfig, models: Vec<T>) -> Result<Self>
    where
        T: Model + Clone,
    {
        config.validate()?;
        let loaded = models.len();
        let mut list = Self::from_models(models, config.key.clone());
        if config.dedupe_on_load {
            list.dedupe();
        }
        debug!(
            target: "modelkit::config",
            key = %config.key,
            loaded,
            kept = list.len(),
            "Built model list from config"
        );
        Ok(list)
    }
}

impl<T> Default for ModelList<T, String> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> ModelList<T, K> {
    /// Empty list with a custom key
    pub fn with_key(key: K) -> Self {
        Self {
            models: Vec::new(),
            key,
        }
    }

    /// Wrap existing models. Duplicates are kept as they are.
    pub fn from_models(models: Vec<T>, key: K) -> Self {
        Self { models, key }
    }

    /// The identity key
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Models as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.models
    }

    /// Give back the models
    pub fn into_inner(self) -> Vec<T> {
        self.models
    }
}

impl<T, K: Key<T>> ModelList<T, K> {
    /// See [`model::get`]
    pub fn get(&self, id: &K::Id) -> Option<&T> {
        model::get(&self.models, id, &self.key)
    }

    /// See [`model::get_mut`]
    pub fn get_mut(&mut self, id: &K::Id) -> Option<&mut T> {
        model::get_mut(&mut self.models, id, &self.key)
    }

    /// See [`model::has`]
    pub fn has(&self, id: &K::Id) -> bool {
        model::has(&self.models, id, &self.key)
    }

    /// See [`model::get_index`]
    pub fn get_index(&self, id: &K::Id) -> isize {
        model::get_index(&self.models, id, &self.key)
    }

    /// See [`model::add`]
    pub fn add(&mut self, model: T, index: Option<usize>) -> &mut T
    where
        T: Assign,
    {
        model::add(&mut self.models, model, index, &self.key)
    }

    /// See [`model::add_or_move`]
    pub fn add_or_move(&mut self, model: T, index: Option<usize>) -> &mut T
    where
        T: Assign,
    {
        model::add_or_move(&mut self.models, model, index, &self.key)
    }

    /// See [`model::update`]
    pub fn update<V>(&mut self, id: &K::Id, values: V) -> Option<&mut T>
    where
        T: Assign<V>,
    {
        model::update(&mut self.models, id, values, &self.key)
    }

    /// See [`model::move_model`]
    pub fn move_model(&mut self, id: &K::Id, to: usize) -> Option<&mut T> {
        model::move_model(&mut self.models, id, to, &self.key)
    }

    /// See [`model::move_to_end`]
    pub fn move_to_end(&mut self, id: &K::Id) -> Option<&mut T> {
        model::move_to_end(&mut self.models, id, &self.key)
    }

    /// Move a model into another list, see [`model::move_to`]
    pub fn move_into<'a>(&mut self, id: &K::Id, to_index: usize, other: &'a mut Self) -> Option<&'a mut T> {
        model::move_to(&mut self.models, id, to_index, &mut other.models, &self.key)
    }

    /// See [`model::remove`]
    pub fn remove(&mut self, id: &K::Id) -> Option<T> {
        model::remove(&mut self.models, id, &self.key)
    }

    /// Models whose identity equals `value`, see [`collection::filter_eq`]
    pub fn filter_eq(&self, value: &K::Id) -> Vec<T>
    where
        T: Clone,
    {
        collection::filter_eq(&self.models, value, &self.key)
    }

    /// Models whose identity differs from `value`, see [`collection::omit_eq`]
    pub fn omit_eq(&self, value: &K::Id) -> Vec<T>
    where
        T: Clone,
    {
        collection::omit_eq(&self.models, value, &self.key)
    }

    /// Drop later models sharing an identity, in place
    pub fn dedupe(&mut self) -> &mut Self
    where
        T: Clone,
    {
        self.models = collection::dedupe(&self.models, &self.key);
        self
    }

    /// Append the models of `other` whose identity this list lacks
    pub fn merge(&mut self, other: &[T]) -> &mut Self
    where
        T: Clone,
    {
        self.models = collection::merge(&self.models, other, &self.key);
        self
    }

    /// Stable sort by identity, see [`crate::utils::sort_by`]
    pub fn sort(&mut self, asc: bool, numeric: bool) -> &mut Self
    where
        K::Id: SortValue,
    {
        collection::sort(&mut self.models, &self.key, asc, numeric);
        self
    }
}

impl<T, K> Deref for ModelList<T, K> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.models
    }
}

impl<T, K> AsRef<[T]> for ModelList<T, K> {
    fn as_ref(&self) -> &[T] {
        &self.models
    }
}

impl<T, K> IntoIterator for ModelList<T, K> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.into_iter()
    }
}

impl<'a, T, K> IntoIterator for &'a ModelList<T, K> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}

impl<T: Model + Assign> FromIterator<T> for ModelList<T, String> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Extending adds each model, merging into any model with the same identity.
impl<T: Assign, K: Key<T>> Extend<T> for ModelList<T, K> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for model in iter {
            self.add(model, None);
        }
    }
}
