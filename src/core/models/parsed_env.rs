use std::collections::HashMap;

/// The key-value mapping parsed from one `.env` file.
///
/// Keys are unique: when a file defines the same key twice, the last
/// occurrence wins (see `EnvParser`). Iteration order is not meaningful —
/// the differ sorts its own output, so nothing downstream depends on how
/// the map happens to order its entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedEnv {
    vars: HashMap<String, String>,
}

impl ParsedEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable, replacing any previous value for the same key.
    pub fn insert(&mut self, key: String, value: String) {
        self.vars.insert(key, value);
    }

    /// Returns the value for the given key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|v| v.as_str())
    }

    /// Number of distinct variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterates over all keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(|k| k.as_str())
    }

    /// Iterates over all entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for ParsedEnv {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for ParsedEnv {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}
