//! Values captured from the path of a request.
//!
//! Every capture group of a matched segment is stored twice:
//! - under its name, if the group is named; repeated names accumulate in capture order
//! - under a synthetic positional key `_K`, where `K` counts the capture groups of the whole
//!   request starting at 1, so compound placeholders keep the order of their unnamed groups

use std::collections::HashMap;
use std::collections::hash_map::Iter;

/// Represents path values extracted from the URL path of a request.
///
/// For example, matching `GET /api/users/42` against `GET /api/users/{uint:id}` yields
/// `id = ["42"]` and `_1 = ["42"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathValues {
    values: HashMap<String, Vec<String>>,
}

impl PathValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no value was captured
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of distinct keys, positional keys included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Gets the first value captured under `key`
    #[inline]
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        self.values.get(key.as_ref()).and_then(|values| values.first()).map(String::as_str)
    }

    /// Gets every value captured under `key`, in capture order
    pub fn get_all(&self, key: impl AsRef<str>) -> &[String] {
        self.values.get(key.as_ref()).map(Vec::as_slice).unwrap_or_default()
    }

    /// Gets the value of the `index`-th capture group of the request, starting at 1
    #[must_use]
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.get(format!("_{index}"))
    }

    pub fn iter(&self) -> Iter<'_, String, Vec<String>> {
        self.values.iter()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Appends `value` to the values of `key`
    pub(crate) fn add(&mut self, key: &str, value: &str) {
        self.values.entry(key.to_owned()).or_default().push(value.to_owned());
    }

    /// Replaces the values of `key` with `value`
    pub(crate) fn set(&mut self, key: String, value: &str) {
        self.values.insert(key, vec![value.to_owned()]);
    }
}

impl<'a> IntoIterator for &'a PathValues {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates() {
        let mut values = PathValues::new();
        values.add("tag", "a");
        values.add("tag", "b");

        assert_eq!(values.get("tag"), Some("a"));
        assert_eq!(values.get_all("tag"), ["a", "b"]);
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_set_replaces() {
        let mut values = PathValues::new();
        values.set("_1".to_owned(), "a");
        values.set("_1".to_owned(), "b");

        assert_eq!(values.positional(1), Some("b"));
        assert_eq!(values.get_all("_1"), ["b"]);
    }

    #[test]
    fn test_missing() {
        let values = PathValues::new();
        assert!(values.is_empty());
        assert_eq!(values.get("id"), None);
        assert!(values.get_all("id").is_empty());
        assert_eq!(values.positional(1), None);
    }
}
