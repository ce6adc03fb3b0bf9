//! Identity keys
//!
//! A [`Key`] tells a collection operation which part of a model is its
//! identity. Keys are passed per call and are never stored on the model,
//! so one collection can be addressed by different keys in different
//! calls.
//!
//! Two kinds of key are provided:
//!
//! - Field names (`"id"`, `String`): resolve through [`Model::field`] and
//!   yield a [`Value`]. This is the open-record path.
//! - Accessors built with [`by`]: a closure from model to identity. Works
//!   on any struct without a field-name lookup.
//!
//! ```
//! use modelkit_core::{by, record, Key, Value};
//!
//! struct Window { window_id: u32 }
//!
//! let tom = record! { "id" => 1, "name" => "tom" };
//! assert_eq!("name".identity(&tom), Some(&Value::from("tom")));
//!
//! let key = by(|w: &Window| &w.window_id);
//! assert_eq!(key.identity(&Window { window_id: 4 }), Some(&4));
//! ```

use crate::record::Model;
use crate::value::{compare_f64, Value};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// Field name used for identity when the caller has no other convention
pub const DEFAULT_KEY: &str = "id";

/// Resolves the identity of a model.
pub trait Key<T: ?Sized> {
    /// Identity type, compared with `==`
    type Id: PartialEq + ?Sized;

    /// Identity of `model`, or `None` when the model has no identity under
    /// this key. A model without identity never matches a lookup.
    fn identity<'a>(&self, model: &'a T) -> Option<&'a Self::Id>;

    /// Human-readable key name for logs and errors
    fn name(&self) -> &str;

    /// True when `model`'s identity equals `id`
    fn matches(&self, model: &T, id: &Self::Id) -> bool {
        self.identity(model).map_or(false, |own| own == id)
    }
}

impl<T: Model + ?Sized> Key<T> for str {
    type Id = Value;

    fn identity<'a>(&self, model: &'a T) -> Option<&'a Value> {
        model.field(self)
    }

    fn name(&self) -> &str {
        self
    }
}

impl<T: Model + ?Sized> Key<T> for String {
    type Id = Value;

    fn identity<'a>(&self, model: &'a T) -> Option<&'a Value> {
        model.field(self)
    }

    fn name(&self) -> &str {
        self
    }
}

impl<T: ?Sized, K: Key<T> + ?Sized> Key<T> for &K {
    type Id = K::Id;

    fn identity<'a>(&self, model: &'a T) -> Option<&'a Self::Id> {
        (**self).identity(model)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Accessor key built by [`by`]
pub struct By<F, T: ?Sized, I: ?Sized> {
    accessor: F,
    name: &'static str,
    _marker: PhantomData<fn(&T) -> &I>,
}

/// Build a key from an accessor closure.
///
/// The closure borrows the identity out of the model, so identities are
/// never cloned during a scan.
pub fn by<T, I, F>(accessor: F) -> By<F, T, I>
where
    T: ?Sized,
    I: PartialEq + ?Sized,
    F: Fn(&T) -> &I,
{
    By {
        accessor,
        name: "accessor",
        _marker: PhantomData,
    }
}

impl<F, T: ?Sized, I: ?Sized> By<F, T, I> {
    /// Name this key for logs and errors
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl<T, I, F> Key<T> for By<F, T, I>
where
    T: ?Sized,
    I: PartialEq + ?Sized,
    F: Fn(&T) -> &I,
{
    type Id = I;

    fn identity<'a>(&self, model: &'a T) -> Option<&'a I> {
        Some((self.accessor)(model))
    }

    fn name(&self) -> &str {
        self.name
    }
}

impl<F: Clone, T: ?Sized, I: ?Sized> Clone for By<F, T, I> {
    fn clone(&self) -> Self {
        By {
            accessor: self.accessor.clone(),
            name: self.name,
            _marker: PhantomData,
        }
    }
}

impl<F: Copy, T: ?Sized, I: ?Sized> Copy for By<F, T, I> {}

impl<F, T: ?Sized, I: ?Sized> fmt::Debug for By<F, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("By").field("name", &self.name).finish()
    }
}

// ============================================================================
// Ordering of identity values
// ============================================================================

/// Ordering used when sorting by a key.
///
/// Must be a total order. `numeric` asks for numeric coercion before the
/// comparison; only [`Value`] coerces, typed identities already have a
/// fixed kind and ignore the flag.
pub trait SortValue {
    /// Compare two identity values
    fn sort_cmp(&self, other: &Self, numeric: bool) -> Ordering;
}

impl SortValue for Value {
    fn sort_cmp(&self, other: &Self, numeric: bool) -> Ordering {
        if numeric {
            compare_f64(self.to_number(), other.to_number())
        } else {
            self.compare(other)
        }
    }
}

macro_rules! impl_sort_value_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl SortValue for $t {
                fn sort_cmp(&self, other: &Self, _numeric: bool) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_sort_value_ord!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String);

impl SortValue for f64 {
    fn sort_cmp(&self, other: &Self, _numeric: bool) -> Ordering {
        compare_f64(*self, *other)
    }
}

impl SortValue for f32 {
    fn sort_cmp(&self, other: &Self, _numeric: bool) -> Ordering {
        compare_f64(f64::from(*self), f64::from(*other))
    }
}
