//! Recursive structural difference between two maps.

use std::collections::HashSet;
use std::mem::discriminant;

use crate::map::JsonMap;
use crate::value::Value;

/// Computes `other` viewed as a revision of `base`.
///
/// For every key in either map:
/// - only in `base` → `null` tombstone;
/// - only in `other`, or present in both with different types → `other`'s
///   value;
/// - maps on both sides → recursive diff, included only when non-empty;
/// - otherwise → `other`'s value iff the two values are semantically
///   unequal. A differing list is replaced wholesale; there is no
///   per-element diff.
///
/// The result uses `base`'s hasher and is empty iff the maps are equal.
pub(crate) fn diff_map(base: &JsonMap, other: &JsonMap) -> JsonMap {
    let mut diff = base.empty_like();

    for k in union(base.keys(), other.keys()) {
        match (base.get(k), other.get(k)) {
            (Some(_), None) => diff.insert_mut(k.to_owned(), Value::Null),
            (None, Some(v)) => diff.insert_mut(k.to_owned(), v.clone()),
            (Some(Value::Map(base_sub)), Some(Value::Map(other_sub))) => {
                let sub = diff_map(base_sub, other_sub);
                if !sub.is_empty() {
                    diff.insert_mut(k.to_owned(), Value::Map(sub));
                }
            }
            (Some(base_value), Some(other_value)) => {
                let replaced = discriminant(base_value) != discriminant(other_value)
                    || !base_value.equals(other_value);
                if replaced {
                    diff.insert_mut(k.to_owned(), other_value.clone());
                }
            }
            (None, None) => unreachable!("union produced a key absent from both maps"),
        }
    }

    diff
}

/// Key-set union preserving first-seen order.
fn union<'a>(one: Vec<&'a str>, other: Vec<&'a str>) -> Vec<&'a str> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(one.len() + other.len());
    let mut out = Vec::with_capacity(one.len() + other.len());

    for k in one.into_iter().chain(other) {
        if seen.insert(k) {
            out.push(k);
        }
    }

    out
}
