//! Info blocks
//!
//! The `{KEY=value,value KEY2=value}` suffix of a line. Keys are uppercase words, each
//! holding one or more values. Values may contain spaces; a value runs until the next
//! ` KEY=` or the end of the block.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

static INFO_PARSER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]+)=([^=]+)(?: |$)").expect("info regex is valid"));

/// Ordered key to values mapping. Keys are unique and every key holds at least one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Infos {
    entries: Vec<(String, Vec<String>)>,
}

impl Infos {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the content between the braces of an info block.
    ///
    /// Text that does not look like `KEY=values` is skipped, as are empty values.
    pub fn parse(block: &str) -> Self {
        let mut infos = Infos::new();
        for caps in INFO_PARSER.captures_iter(block) {
            let values = caps[2]
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string);
            infos.insert(&caps[1], values);
        }
        infos
    }

    /// Sets the values of a key. An existing key keeps its position.
    ///
    /// Nothing is recorded when `values` is empty.
    pub fn insert<I>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        let values: Vec<String> = values.into_iter().collect();
        if values.is_empty() {
            return;
        }
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((key.to_string(), values)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renders the block content without braces: `ID=1234 ENV=terrestrial,marine`
impl fmt::Display for Infos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, values)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", key, values.join(","))?;
        }
        Ok(())
    }
}

impl Serialize for Infos {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, values) in &self.entries {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(infos: &Infos, key: &str) -> Vec<String> {
        infos.get(key).map(|v| v.to_vec()).unwrap_or_default()
    }

    #[test]
    fn test_parse_keys_in_order() {
        let infos = Infos::parse("ID=1234 ENV=terrestrial,marine");
        assert_eq!(infos.keys().collect::<Vec<_>>(), vec!["ID", "ENV"]);
        assert_eq!(values(&infos, "ID"), vec!["1234"]);
        assert_eq!(values(&infos, "ENV"), vec!["terrestrial", "marine"]);
    }

    #[test]
    fn test_values_are_trimmed_and_may_hold_spaces() {
        let infos = Infos::parse("PUB=Sp. Pl. 2 , Fl. Fr. ID=7");
        assert_eq!(values(&infos, "PUB"), vec!["Sp. Pl. 2", "Fl. Fr."]);
        assert_eq!(values(&infos, "ID"), vec!["7"]);
    }

    #[test]
    fn test_empty_values_are_not_recorded() {
        let infos = Infos::parse("A=, B=x,,y");
        assert!(!infos.contains_key("A"));
        assert_eq!(values(&infos, "B"), vec!["x", "y"]);
    }

    #[test]
    fn test_duplicate_key_keeps_first_position() {
        let infos = Infos::parse("A=1 B=2 A=3");
        assert_eq!(infos.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(values(&infos, "A"), vec!["3"]);
    }

    #[test]
    fn test_lowercase_keys_are_ignored() {
        let infos = Infos::parse("id=1");
        assert!(infos.is_empty());
    }

    #[test]
    fn test_display() {
        let infos = Infos::parse("ID=1234   ENV=terrestrial , marine");
        assert_eq!(infos.to_string(), "ID=1234 ENV=terrestrial,marine");
    }

    #[test]
    fn test_serialize_as_map() {
        let infos = Infos::parse("ID=1 ENV=a,b");
        let json = serde_json::to_string(&infos).unwrap();
        assert_eq!(json, r#"{"ID":["1"],"ENV":["a","b"]}"#);
    }
}
