//! Persistent JSON-shaped hash map based on CHAMP.
//!
//! CHAMP (Compressed Hash-Array Mapped Prefix-tree) is a refined HAMT that
//! keeps leaf and branch slots in two bitmaps over one compact child
//! array. Keys are strings, values are JSON-compatible payloads (null,
//! bool, 64-bit int, 64-bit float, text, lists, nested maps).
//!
//! # Key properties
//!
//! - **Persistent**: every mutation returns a new map; old versions stay
//!   valid and share structure
//! - **COW structural sharing**: cheap clone, copy only along the walked
//!   hash path
//! - **Semantic operators**: recursive equality, diff, merge, leaf-path
//!   enumeration
//! - **JSON codec**: serde-backed, preserving the int/float distinction
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! # Example
//!
//! ```
//! use champ_json::jmap;
//!
//! let base = jmap! { "name" => "alice", "age" => 30 };
//! let updated = base.set("age", 31);
//!
//! assert_eq!(base.get_int("age").unwrap(), 30);
//! assert_eq!(updated.get_int("age").unwrap(), 31);
//! ```
//!
//! # References
//!
//! - Steindorfer & Vinju, 2015 — "Optimizing Hash-Array Mapped Tries
//!   for Fast and Lean Immutable JVM Collections", OOPSLA 2015
//! - Bagwell, 2001 — "Ideal Hash Trees"

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod cow;
pub mod error;
pub mod hasher;
pub mod iter;
pub mod node;
pub mod value;

mod convert;
mod diff;
mod json;
mod map;
mod ops;

#[cfg(test)]
mod tests;

pub use convert::{from_record, to_record};
pub use error::{Error, Result};
pub use hasher::{Fnv64, KeyHasher, Seeded};
pub use iter::Iter;
pub use map::JsonMap;
pub use value::Value;

/// Builds a [`JsonMap`] from `key => value` pairs.
///
/// Values go through the normalizing [`Value`] conversions, so any
/// supported native type works on the right-hand side.
///
/// ```
/// use champ_json::jmap;
///
/// let m = jmap! {
///     "name" => "alice",
///     "age" => 30,
///     "address" => jmap! { "city" => "utrecht" },
/// };
/// assert_eq!(m.len(), 3);
/// ```
#[macro_export]
macro_rules! jmap {
    () => { $crate::JsonMap::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::JsonMap::new();
        $( map = map.set($key, $crate::Value::from($value)); )+
        map
    }};
}

/// Builds a [`Value::List`] from heterogeneous elements.
///
/// ```
/// use champ_json::{jlist, Value};
///
/// let v = jlist![1, "two", 3.0];
/// assert!(matches!(v, Value::List(ref items) if items.len() == 3));
/// ```
#[macro_export]
macro_rules! jlist {
    ($($value:expr),* $(,)?) => {
        $crate::Value::List(vec![$($crate::Value::from($value)),*])
    };
}
