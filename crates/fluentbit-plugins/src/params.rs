//! Ordered directive parameters
//!
//! [`KVs`] is the value every plugin renders into. Pairs keep the order in
//! which they were inserted and keys may repeat, since Fluent Bit accepts
//! several directives with the same name (e.g. one `header` line per HTTP
//! header).

use std::collections::BTreeMap;

/// A single directive key and its textual value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KV {
    pub key: String,
    pub value: String,
}

/// Ordered, duplicate-permitting sequence of directive key/value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KVs {
    content: Vec<KV>,
}

impl KVs {
    /// Create an empty parameter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair; an existing key is not overwritten
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.content.push(KV {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Append a pair for every entry of `map`, in key order, mapping each
    /// entry to its directive with `f`
    pub fn insert_string_map<F>(&mut self, map: &BTreeMap<String, String>, mut f: F)
    where
        F: FnMut(&str, &str) -> (String, String),
    {
        for (k, v) in map {
            let (key, value) = f(k, v);
            self.insert(key, value);
        }
    }

    /// Append every pair of `other` to the end of this list
    pub fn merge(&mut self, other: &KVs) {
        self.content.extend_from_slice(&other.content);
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Iterate over pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.content
            .iter()
            .map(|kv| (kv.key.as_str(), kv.value.as_str()))
    }

    /// First value inserted for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.content
            .iter()
            .find(|kv| kv.key == key)
            .map(|kv| kv.value.as_str())
    }

    /// Every value inserted for `key`, in insertion order
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.content
            .iter()
            .filter(move |kv| kv.key == key)
            .map(|kv| kv.value.as_str())
    }

    /// Borrow the underlying pairs
    pub fn as_slice(&self) -> &[KV] {
        &self.content
    }
}

impl IntoIterator for KVs {
    type Item = KV;
    type IntoIter = std::vec::IntoIter<KV>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

impl<'a> IntoIterator for &'a KVs {
    type Item = &'a KV;
    type IntoIter = std::slice::Iter<'a, KV>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KVs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut kvs = KVs::new();
        kvs.extend(iter);
        kvs
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for KVs {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
