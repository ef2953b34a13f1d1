//! Feature structure
//!
//! The attribute map attached to tokens and chunks, written in SSF as
//! `<fs af='word,n,m,sg,3,d,0,0' name='NP'>`. Keys are unique; inserting a key that
//! already exists replaces its value in place, so key order is first-seen order.
//!
//! Values are plain strings, except for the morphological-analysis key (`af`) whose
//! comma-separated value is kept as a list.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Value stored under a feature key
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Text(String),
    List(Vec<String>),
}

impl FeatureValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FeatureValue::Text(text) => Some(text),
            FeatureValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FeatureValue::Text(_) => None,
            FeatureValue::List(items) => Some(items),
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Text(text) => write!(f, "{}", text),
            FeatureValue::List(items) => write!(f, "{}", items.join(",")),
        }
    }
}

impl From<&str> for FeatureValue {
    fn from(text: &str) -> Self {
        FeatureValue::Text(text.to_string())
    }
}

impl From<Vec<String>> for FeatureValue {
    fn from(items: Vec<String>) -> Self {
        FeatureValue::List(items)
    }
}

/// Ordered attribute map with unique keys
#[derive(Debug, Clone, Default, Eq)]
pub struct FeatureStructure {
    entries: Vec<(String, FeatureValue)>,
}

impl FeatureStructure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a feature, overwriting the value of an existing key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FeatureValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FeatureValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in first-seen key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

// Equality is map equality: key order does not matter.
impl PartialEq for FeatureStructure {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl Serialize for FeatureStructure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Renders the SSF form, e.g. `<fs af='a,b,c' pos='NN'>`
impl fmt::Display for FeatureStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fs")?;
        for (key, value) in &self.entries {
            write!(f, " {}='{}'", key, value)?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut fs = FeatureStructure::new();
        fs.insert("name", "NP");
        fs.insert("head", "dog");
        fs.insert("name", "NP2");

        assert_eq!(fs.len(), 2);
        assert_eq!(fs.get("name"), Some(&FeatureValue::from("NP2")));
        assert_eq!(fs.keys().collect::<Vec<_>>(), vec!["name", "head"]);
    }

    #[test]
    fn test_equality_ignores_key_order() {
        let mut left = FeatureStructure::new();
        left.insert("a", "1");
        left.insert("b", "2");
        let mut right = FeatureStructure::new();
        right.insert("b", "2");
        right.insert("a", "1");

        assert_eq!(left, right);
    }

    #[test]
    fn test_display_renders_ssf_form() {
        let mut fs = FeatureStructure::new();
        fs.insert("af", vec!["dog".to_string(), "n".to_string()]);
        fs.insert("pos", "NN");

        assert_eq!(fs.to_string(), "<fs af='dog,n' pos='NN'>");
        assert_eq!(FeatureStructure::new().to_string(), "<fs>");
    }

    #[test]
    fn test_serializes_as_map() {
        let mut fs = FeatureStructure::new();
        fs.insert("af", vec!["a".to_string(), "b".to_string()]);
        fs.insert("pos", "NN");

        let json = serde_json::to_string(&fs).unwrap();
        assert_eq!(json, r#"{"af":["a","b"],"pos":"NN"}"#);
    }
}
