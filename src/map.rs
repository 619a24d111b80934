//! Ordered map type for FRED objects and tag metadata.
//!
//! [`FredMap`] wraps an [`IndexMap`] so that entries iterate in the order
//! they were first written. Re-inserting a key replaces its value but keeps
//! its original position, which is exactly FRED's "last write wins" rule for
//! repeated object keys and repeated tag attributes:
//!
//! ```rust
//! use fred::{parse, Document, Value};
//!
//! let doc = parse("{a:1 b:2 a:3}").unwrap();
//! let Document::Single(Value::Object(map)) = doc else { unreachable!() };
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["a", "b"]);
//! assert_eq!(map.get("a").and_then(|v| v.as_i64()), Some(3));
//! ```

use crate::Value;
use indexmap::IndexMap;

/// An insertion-ordered map of names to FRED values.
///
/// Used for object entries and for tag metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FredMap(IndexMap<String, Value>);

impl FredMap {
    #[must_use]
    pub fn new() -> Self {
        FredMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FredMap(IndexMap::with_capacity(capacity))
    }

    /// Writes an entry, replacing any earlier value for the same name.
    ///
    /// The replaced value is returned; the entry keeps the position where the
    /// name was first written.
    ///
    /// ```rust
    /// use fred::FredMap;
    ///
    /// let mut map = FredMap::new();
    /// assert!(map.insert("port", 80).is_none());
    /// assert!(map.insert("host", "a.example").is_none());
    /// assert!(map.insert("port", 8080).is_some());
    /// assert_eq!(map.keys().collect::<Vec<_>>(), ["port", "host"]);
    /// ```
    pub fn insert<K, V>(&mut self, name: K, value: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.0.insert(name.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.0.get_mut(name)
    }

    /// Removes an entry, keeping the remaining entries in order.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.shift_remove(name)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names in the order they were first written.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for FredMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FredMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Collects pairs left to right; a repeated name overwrites the earlier value.
impl FromIterator<(String, Value)> for FredMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        FredMap(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, Value)> for FredMap {
    fn extend<T: IntoIterator<Item = (String, Value)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins_keeps_first_position() {
        let map: FredMap = vec![
            ("x".to_string(), Value::from(1)),
            ("y".to_string(), Value::from(2)),
            ("x".to_string(), Value::from(3)),
        ]
        .into_iter()
        .collect();

        let entries: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), v.as_i64())).collect();
        assert_eq!(entries, vec![("x", Some(3)), ("y", Some(2))]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut map = FredMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("c", 3);
        assert_eq!(map.remove("a"), Some(Value::from(1)));
        assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "c"]);
        assert_eq!(map.remove("a"), None);
    }

    #[test]
    fn test_extend_overwrites() {
        let mut map = FredMap::new();
        map.insert("a", 1);
        map.extend([("b".to_string(), Value::Null), ("a".to_string(), Value::from(9))]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&Value::from(9)));
        if let Some(value) = map.get_mut("b") {
            *value = Value::Bool(true);
        }
        assert_eq!(map.get("b"), Some(&Value::Bool(true)));
    }
}
