//! [`JsonObject`] — the ordered key→value body of a JSON object.
//!
//! Keys are unique. Iteration follows insertion order; overwriting a key
//! keeps its original slot, inserting a new key appends. Equality ignores
//! order entirely: only the key set and per-key values matter.

use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::value::JsonValue;

/// Ordered JSON object container.
///
/// # Examples
///
/// ```
/// use json_value::{JsonObject, JsonValue};
///
/// let mut obj = JsonObject::new();
/// obj.insert("a".to_owned(), JsonValue::from(1_i64));
/// obj.insert("b".to_owned(), JsonValue::from(2_i64));
///
/// let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["a", "b"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonObject {
    entries: IndexMap<String, JsonValue>,
}

impl JsonObject {
    /// Create an empty object.
    pub fn new() -> Self {
        JsonObject {
            entries: IndexMap::new(),
        }
    }

    /// Create an empty object with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        JsonObject {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the object has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.entries.get(key)
    }

    /// Mutable lookup, for owners building a new value.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut JsonValue> {
        self.entries.get_mut(key)
    }

    /// `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Set `key` to `value`, returning the previous value if any.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn insert(&mut self, key: String, value: JsonValue) -> Option<JsonValue> {
        self.entries.insert(key, value)
    }

    /// Remove `key`, preserving the relative order of remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
        self.entries.shift_remove(key)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
        self.entries.iter()
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Iterate values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &JsonValue> {
        self.entries.values()
    }
}

/// Order-independent hashing, consistent with the order-independent `Eq`:
/// entries are hashed in sorted-key order.
impl Hash for JsonObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut entries: Vec<(&str, &JsonValue)> = self
            .entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
            .collect();
        entries.sort_unstable_by_key(|(key, _)| *key);
        state.write_usize(entries.len());
        for (key, value) in entries {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl FromIterator<(String, JsonValue)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
        JsonObject {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, JsonValue)> for JsonObject {
    fn extend<I: IntoIterator<Item = (String, JsonValue)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for JsonObject {
    type Item = (String, JsonValue);
    type IntoIter = indexmap::map::IntoIter<String, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonObject {
    type Item = (&'a String, &'a JsonValue);
    type IntoIter = indexmap::map::Iter<'a, String, JsonValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
