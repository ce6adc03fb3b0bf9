//! Comparator utility

use modelkit_core::{Key, SortValue};
use std::cmp::Ordering;

/// Build a comparison function that orders models by their identity under
/// `key`.
///
/// - Equal identities compare `Equal`.
/// - Otherwise the identities' order, reversed when `asc` is false.
/// - `numeric` coerces [`Value`](modelkit_core::Value) identities with
///   `to_number` before comparing, so `"10"` sorts after `"9"`.
/// - Models without an identity sort before all others (after, when
///   descending).
///
/// The result is a total order and can be handed to any `sort_by`.
///
/// ```
/// use modelkit_collections::utils::sort_by;
/// use modelkit_core::{record, Record};
///
/// let mut people = vec![
///     record! { "id" => 1, "name" => "tom" },
///     record! { "id" => 2, "name" => "dick" },
///     record! { "id" => 3, "name" => "harry" },
/// ];
/// people.sort_by(sort_by::<Record, _>("name", true, false));
///
/// let names: Vec<_> = people.iter().map(|p| p.get("name").unwrap().as_str().unwrap()).collect();
/// assert_eq!(names, ["dick", "harry", "tom"]);
/// ```
pub fn sort_by<T, K>(key: K, asc: bool, numeric: bool) -> impl Fn(&T, &T) -> Ordering
where
    K: Key<T>,
    K::Id: SortValue,
{
    move |a: &T, b: &T| -> Ordering {
        let ord = match (key.identity(a), key.identity(b)) {
            (Some(x), Some(y)) => x.sort_cmp(y, numeric),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        };
        if asc {
            ord
        } else {
            ord.reverse()
        }
    }
}
