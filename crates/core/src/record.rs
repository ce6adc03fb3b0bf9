//! Open-shape records and the traits that let collections inspect them
//!
//! A [`Record`] is a mapping from field names to [`Value`]s with no fixed
//! shape. Collections never look inside a model directly; they go through
//! [`Model`] for field-name access and [`Assign`] for partial updates, so
//! plain structs can take part as well.

use crate::error::{Error, Result};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Field-name access to a model.
///
/// Implemented for [`Record`] and for plain string-keyed maps. A struct can
/// implement it to be addressed by field name, or skip it entirely and be
/// addressed through an accessor key (see [`crate::key::by`]).
pub trait Model {
    /// Value stored under `name`, or `None` when the field is absent.
    fn field(&self, name: &str) -> Option<&Value>;
}

impl<M: Model + ?Sized> Model for &M {
    fn field(&self, name: &str) -> Option<&Value> {
        (**self).field(name)
    }
}

impl Model for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Model for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Shallow merge of `values` into a model, in place.
///
/// Fields present in `values` overwrite the model's; everything else is
/// left untouched. For a struct with no notion of partial data the natural
/// implementation is `*self = values`.
pub trait Assign<V = Self> {
    /// Merge `values` into `self`.
    fn assign(&mut self, values: V);
}

/// A structurally-open record.
///
/// # Example
///
/// ```
/// use modelkit_core::{record, Record, Value};
///
/// let mut tom = record! { "id" => 1, "name" => "tom" };
/// tom.assign(record! { "age" => 30 });
///
/// assert_eq!(tom.get("name"), Some(&Value::from("tom")));
/// assert_eq!(tom.get("age"), Some(&Value::Int(30)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Get a field
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get a field mutably
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields.get_mut(name)
    }

    /// Set a field, returning the previous value if there was one
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Remove a field
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name)
    }

    /// Check whether a field is present
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, value)` pairs in unspecified order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Shallow-merge `other` into this record.
    ///
    /// Every field of `other` overwrites the field of the same name here.
    pub fn assign(&mut self, other: Record) {
        self.fields.extend(other.fields);
    }

    /// Build a record from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotARecord`] when `json` is not an object.
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        Self::try_from(json)
    }

    /// Convert this record into a JSON object
    pub fn into_json(self) -> serde_json::Value {
        serde_json::Value::Object(
            self.fields
                .into_iter()
                .map(|(k, v)| (k, serde_json::Value::from(v)))
                .collect(),
        )
    }
}

impl Model for Record {
    fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl Assign for Record {
    fn assign(&mut self, values: Record) {
        Record::assign(self, values);
    }
}

impl Assign<HashMap<String, Value>> for Record {
    fn assign(&mut self, values: HashMap<String, Value>) {
        self.fields.extend(values);
    }
}

impl<N: Into<String>, V: Into<Value>> Assign<Vec<(N, V)>> for Record {
    fn assign(&mut self, values: Vec<(N, V)>) {
        self.extend(values);
    }
}

impl From<HashMap<String, Value>> for Record {
    fn from(fields: HashMap<String, Value>) -> Self {
        Self { fields }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.fields)
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = Error;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Object(obj) => Ok(Self {
                fields: obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            }),
            other => Err(Error::NotARecord(json_kind(&other).to_string())),
        }
    }
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        record.extend(iter);
        record
    }
}

impl<N: Into<String>, V: Into<Value>> Extend<(N, V)> for Record {
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

/// Build a [`Record`] from `field => value` pairs.
///
/// ```
/// use modelkit_core::record;
///
/// let john = record! { "id" => 1, "name" => "john", "alive" => true };
/// assert_eq!(john.len(), 3);
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $(record.set($name, $value);)+
        record
    }};
}
