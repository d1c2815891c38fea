//! Persistent JSON map façade.

use std::fmt;
use std::ops;
use std::sync::Arc;

use crate::diff::diff_map;
use crate::error::{Error, Result};
use crate::hasher::{KeyHasher, Seeded};
use crate::iter::Iter;
use crate::node::{BranchNode, Key};
use crate::ops::get::get_recursive;
use crate::ops::insert::insert_recursive;
use crate::ops::remove::{remove_recursive, RemoveOutcome};
use crate::value::Value;

/// Persistent hash map with string keys and JSON-shaped values.
///
/// Every mutation returns a new map; the old map is untouched and the two
/// share all interior nodes off the walked hash path. Cloning is cheap:
/// it shares the root through the copy-on-write child array.
#[derive(Clone)]
pub struct JsonMap {
    root: BranchNode,
    hasher: Arc<dyn KeyHasher>,
    size: usize,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl JsonMap {
    /// Creates an empty map with the default seeded hasher.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(Arc::new(Seeded::new()))
    }

    /// Creates an empty map using the supplied hasher.
    #[must_use]
    pub fn with_hasher(hasher: Arc<dyn KeyHasher>) -> Self {
        Self {
            root: BranchNode::empty(0),
            hasher,
            size: 0,
        }
    }

    /// Creates a map from key-value pairs.
    ///
    /// Later pairs overwrite earlier ones with the same key.
    #[must_use]
    pub fn from_items<K, V>(items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let mut map = Self::new();
        for (k, v) in items {
            map.insert_mut(k.into(), v.into());
        }
        map
    }

    /// Empty map sharing this map's hasher.
    pub(crate) fn empty_like(&self) -> Self {
        Self {
            root: BranchNode::empty(0),
            hasher: Arc::clone(&self.hasher),
            size: 0,
        }
    }

    fn key_for(&self, text: &str) -> Key {
        Key::new(text.to_owned(), self.hasher.hash_key(text))
    }
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

impl JsonMap {
    /// Number of bindings in the map.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the map contains no bindings.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Looks up a key, returning a reference to the stored value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        get_recursive(&self.root, &self.key_for(key))
    }

    /// Deep lookup: follows `path` through nested maps.
    ///
    /// Returns `None` on an empty path, a missing key, or a non-map
    /// intermediate value.
    #[must_use]
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.get(first)?;
        for key in rest {
            match current {
                Value::Map(sub) => current = sub.get(key)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Returns `true` if the key exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All keys in trie order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.iter().map(|(k, _)| k).collect()
    }

    /// Iterates over `(&str, &Value)` pairs in trie order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root)
    }
}

// ---------------------------------------------------------------------------
// Typed accessors
// ---------------------------------------------------------------------------

impl JsonMap {
    fn get_or_not_found(&self, key: &str) -> Result<&Value> {
        self.get(key).ok_or_else(|| Error::KeyNotFound {
            key: key.to_owned(),
        })
    }

    /// Looks up a string value. Integers and floats are formatted to text;
    /// no other coercion is applied.
    pub fn get_string(&self, key: &str) -> Result<String> {
        match self.get_or_not_found(key)? {
            Value::Str(s) => Ok(s.clone()),
            Value::Int(i) => Ok(i.to_string()),
            Value::Float(f) => Ok(f.to_string()),
            other => Err(Error::WrongType {
                expected: "string",
                found: other.type_name(),
            }),
        }
    }

    /// Looks up an integer value. A float truncates toward zero; strings
    /// are not parsed.
    pub fn get_int(&self, key: &str) -> Result<i64> {
        match self.get_or_not_found(key)? {
            Value::Int(i) => Ok(*i),
            Value::Float(f) => Ok(*f as i64),
            other => Err(Error::WrongType {
                expected: "int",
                found: other.type_name(),
            }),
        }
    }

    /// Looks up a float value. No coercion is applied.
    pub fn get_float(&self, key: &str) -> Result<f64> {
        match self.get_or_not_found(key)? {
            Value::Float(f) => Ok(*f),
            other => Err(Error::WrongType {
                expected: "float",
                found: other.type_name(),
            }),
        }
    }

    /// Looks up a boolean value.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        match self.get_or_not_found(key)? {
            Value::Bool(b) => Ok(*b),
            other => Err(Error::WrongType {
                expected: "bool",
                found: other.type_name(),
            }),
        }
    }

    /// Looks up a nested map.
    pub fn get_map(&self, key: &str) -> Result<JsonMap> {
        match self.get_or_not_found(key)? {
            Value::Map(m) => Ok(m.clone()),
            other => Err(Error::WrongType {
                expected: "map",
                found: other.type_name(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

impl JsonMap {
    /// Returns a new map with `key` bound to `value`.
    ///
    /// The value is normalized by the `Into<Value>` conversion. This map
    /// is unchanged; the result shares all untouched interior nodes.
    #[must_use]
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut new = self.clone();
        new.insert_mut(key.into(), value.into());
        new
    }

    /// Returns a new map without `key`, plus whether the key was present.
    #[must_use]
    pub fn delete(&self, key: &str) -> (Self, bool) {
        let k = self.key_for(key);
        if get_recursive(&self.root, &k).is_none() {
            return (self.clone(), false);
        }

        let mut new = self.clone();
        match remove_recursive(&mut new.root, &k) {
            RemoveOutcome::Removed => {
                new.size -= 1;
                (new, true)
            }
            RemoveOutcome::NotFound => (self.clone(), false),
        }
    }

    /// In-place insert used by builders; the COW array keeps this safe for
    /// shared structure.
    pub(crate) fn insert_mut(&mut self, key: String, value: Value) {
        let hash = self.hasher.hash_key(&key);
        if insert_recursive(&mut self.root, Key::new(key, hash), value) {
            self.size += 1;
        }
    }
}

// ---------------------------------------------------------------------------
// Recursive operators
// ---------------------------------------------------------------------------

impl JsonMap {
    /// Recursive semantic equality: same key set, values equal under
    /// [`Value::equals`]. Key iteration order is irrelevant.
    #[must_use]
    pub fn equals(&self, other: &JsonMap) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .all(|(k, v)| other.get(k).is_some_and(|ov| v.equals(ov)))
    }

    /// Recursive structural difference: `other` viewed as a revision of
    /// `self`. See the crate docs for the exact rules; keys only in `self`
    /// appear with a `null` tombstone.
    #[must_use]
    pub fn diff(&self, other: &JsonMap) -> JsonMap {
        diff_map(self, other)
    }

    /// Recursive right-biased merge: every binding of `other` is installed
    /// into `self`; where both sides hold maps, they merge recursively,
    /// otherwise `other`'s value wins.
    #[must_use]
    pub fn merge(&self, other: &JsonMap) -> JsonMap {
        let mut out = self.clone();
        for (k, v) in other.iter() {
            let merged = match (self.get(k), v) {
                (Some(Value::Map(current)), Value::Map(incoming)) => {
                    Value::Map(current.merge(incoming))
                }
                _ => v.clone(),
            };
            out.insert_mut(k.to_owned(), merged);
        }
        out
    }

    /// Dot-separated paths to every leaf (non-map) value, with keys
    /// visited in sorted order at each level.
    #[must_use]
    pub fn information_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_paths(self, "", &mut out);
        out
    }
}

fn collect_paths(map: &JsonMap, prefix: &str, out: &mut Vec<String>) {
    let mut keys = map.keys();
    keys.sort_unstable();

    for k in keys {
        let path = if prefix.is_empty() {
            k.to_owned()
        } else {
            format!("{prefix}.{k}")
        };
        match map.get(k) {
            Some(Value::Map(sub)) => collect_paths(sub, &path, out),
            _ => out.push(path),
        }
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl Default for JsonMap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for JsonMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.iter() {
            map.entry(&k, v);
        }
        map.finish()
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for JsonMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert_mut(k.into(), v.into());
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for JsonMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl ops::Index<&str> for JsonMap {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key).expect("key not found")
    }
}

impl<'a> IntoIterator for &'a JsonMap {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
