//! Field values
//!
//! [`Value`] is what a [`Record`](crate::Record) stores under each field
//! name, and so what a field-name key yields as a model's identity.
//!
//! Two relations matter to collections:
//!
//! - `==` decides identity. It is strict (see [`Value`]).
//! - [`Value::compare`] orders values for sorting. Numbers compare by
//!   exact numeric value across `Int` and `Float`, strings by code point,
//!   and values of unrelated variants by a fixed kind rank
//!   (`Null < Bool < number < String < Bytes < Array < Object`).
//!   [`Value::to_number`] backs the numeric sort mode.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// A field value inside a [`Record`](crate::Record).
///
/// Equality is what identity lookups use, so it never converts between
/// variants: `Int(1)` does not equal `Float(1.0)`, and `Bytes(b"id")` does
/// not equal `String("id")`. Floats keep IEEE-754 equality, so a `NaN`
/// identity matches nothing.
///
/// Serde goes through JSON: a `Value` serializes as the plain JSON value
/// it converts to (see the `serde_json::Value` conversions below), so
/// records serialize as ordinary JSON objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "serde_json::Value", from = "serde_json::Value")]
pub enum Value {
    /// Absent or explicitly empty
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Whole number
    Int(i64),
    /// Fractional number
    Float(f64),
    /// Text
    String(String),
    /// Opaque octets, serialized as an array of numbers
    Bytes(Vec<u8>),
    /// Ordered list
    Array(Vec<Value>),
    /// Nested record without identity semantics
    Object(HashMap<String, Value>),
}

// Identity equality: never coerces across variants, NaN is never equal
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Null, Null) => true,
            (Bool(x), Bool(y)) => x == y,
            (Int(x), Int(y)) => x == y,
            (Float(x), Float(y)) => x == y,
            (String(x), String(y)) => x == y,
            (Bytes(x), Bytes(y)) => x == y,
            (Array(x), Array(y)) => x == y,
            (Object(x), Object(y)) => x == y,
            _ => false,
        }
    }
}

impl Value {
    /// True for `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The integer inside `Int`
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The float inside `Float` (an `Int` is not converted)
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The text inside `String`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The items of an `Array`
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The fields of an `Object`
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Coerce this value to a number for numeric sorting.
    ///
    /// | Value | Result |
    /// |-------|--------|
    /// | `Null` | `0` |
    /// | `Bool` | `0` / `1` |
    /// | `Int`, `Float` | the number |
    /// | `String` | trimmed and parsed; empty is `0`, garbage is `NaN` |
    /// | `Array` | `[]` is `0`, `[x]` coerces `x`, longer is `NaN` |
    /// | `Bytes`, `Object` | `NaN` |
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Int(i) => *i as f64,
            Value::Float(f) => *f,
            Value::String(s) => parse_number(s),
            Value::Array(a) => match a.as_slice() {
                [] => 0.0,
                [single] => single.to_number(),
                _ => f64::NAN,
            },
            Value::Bytes(_) | Value::Object(_) => f64::NAN,
        }
    }

    /// Total order over values.
    ///
    /// Returns `Ordering::Equal` whenever `self == other`. Objects carry no
    /// order among themselves and always compare equal to each other.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Int(a), Value::Float(b)) => compare_int_f64(*a, *b),
            (Value::Float(a), Value::Int(b)) => compare_int_f64(*b, *a).reverse(),
            (Value::Float(a), Value::Float(b)) => compare_f64(*a, *b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => {
                for (x, y) in a.iter().zip(b.iter()) {
                    match x.compare(y) {
                        Ordering::Equal => continue,
                        ord => return ord,
                    }
                }
                a.len().cmp(&b.len())
            }
            (Value::Object(_), Value::Object(_)) => Ordering::Equal,
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::String(_) => 3,
            Value::Bytes(_) => 4,
            Value::Array(_) => 5,
            Value::Object(_) => 6,
        }
    }
}

/// Compare two floats so that `-0.0 == 0.0` and NaN still has a place.
pub(crate) fn compare_f64(a: f64, b: f64) -> Ordering {
    if a == b {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

/// Exact comparison of an integer with a float.
///
/// Casting the integer to `f64` rounds above 2^53 and breaks transitivity,
/// so the float's integral part is compared in `i128` instead. NaN sits
/// where [`compare_f64`] puts it: past the infinity of its sign.
fn compare_int_f64(i: i64, f: f64) -> Ordering {
    if f.is_nan() {
        return if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    let whole = f.trunc();
    // saturates for |f| >= 2^127, far outside i64
    match i128::from(i).cmp(&(whole as i128)) {
        Ordering::Equal => compare_f64(0.0, f - whole),
        ord => ord,
    }
}

fn parse_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    if unsigned == "Infinity" {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    // Radix literals are only valid unsigned
    let radix = match unsigned.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        if s.len() != unsigned.len() {
            return f64::NAN;
        }
        return u64::from_str_radix(&unsigned[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    // Rust accepts "inf" and "nan" spellings that are not numbers here
    let numeric_chars = unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !numeric_chars {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            Value::Array(a) => write!(f, "[{} items]", a.len()),
            Value::Object(o) => write!(f, "{{{} fields}}", o.len()),
        }
    }
}

// ============================================================================
// Conversions from Rust values
// ============================================================================

macro_rules! value_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

value_from! {
    bool => Bool,
    i64 => Int,
    i32 => Int,
    u32 => Int,
    f64 => Float,
    &str => String,
    String => String,
    Vec<u8> => Bytes,
    Vec<Value> => Array,
    HashMap<String, Value> => Object,
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

/// `None` becomes `Null`.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

// ============================================================================
// JSON
// ============================================================================

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            // integers that fit i64 stay whole; u64 overflow and fractions are floats
            Json::Number(n) => n
                .as_i64()
                .map_or_else(|| Value::Float(n.as_f64().unwrap_or(f64::NAN)), Value::Int),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(name, v)| (name, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Non-finite floats become `null`; bytes become an array of numbers.
impl From<Value> for Json {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(b),
            Value::Int(i) => Json::from(i),
            Value::Float(f) => serde_json::Number::from_f64(f).map_or(Json::Null, Json::Number),
            Value::String(s) => Json::String(s),
            Value::Bytes(octets) => Json::Array(octets.into_iter().map(Json::from).collect()),
            Value::Array(items) => Json::Array(items.into_iter().map(Json::from).collect()),
            Value::Object(fields) => Json::Object(
                fields
                    .into_iter()
                    .map(|(name, v)| (name, Json::from(v)))
                    .collect(),
            ),
        }
    }
}
