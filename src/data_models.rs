use std::collections::HashMap;

use serde::Deserialize;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::error::FetchError;

pub type FetchResult = Result<Value, FetchError>;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(transparent)]
pub struct SearchRequest {
    terms: HashMap<String, String>,
}

impl SearchRequest {
    pub fn term_for(&self, endpoint_name: &str) -> &str {
        self.terms
            .get(endpoint_name)
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl<K, V> FromIterator<(K, V)> for SearchRequest
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        SearchRequest {
            terms: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AggregatedResult {
    entries: Vec<(&'static str, FetchResult)>,
}

impl AggregatedResult {
    pub fn new(entries: Vec<(&'static str, FetchResult)>) -> AggregatedResult {
        AggregatedResult { entries }
    }

    pub fn get(&self, name: &str) -> Option<&FetchResult> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, result)| result)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, FetchResult)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serialized by hand so the JSON object keeps table order.
impl Serialize for AggregatedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, result) in &self.entries {
            match result {
                Ok(value) => map.serialize_entry(name, value)?,
                Err(e) => map.serialize_entry(name, e)?,
            }
        }
        map.end()
    }
}
