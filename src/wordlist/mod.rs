/*!
 * Wordlist model for a DDTSS language.
 *
 * A wordlist maps a source-language term to its translation. It is loaded
 * from the server's JSON endpoint (or a local file in the same shape),
 * validated at the boundary, and handed to the highlighter as an entry list
 * sorted by term length.
 *
 * - `sorting`: length comparators and the `asc`/`desc` sort order
 * - `import`: tab-separated words files
 * - `export`: RFC 4180 CSV export
 */

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::errors::WordlistError;

pub mod export;
pub mod import;
pub mod sorting;

pub use export::{export_filename, to_csv};
pub use import::{parse_words_file, ImportReport};
pub use sorting::{by_length, SortOrder};

/// A single (term, translation) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordlistEntry {
    /// Source-language term, possibly several words
    pub word: String,

    /// Target-language translation
    pub translation: String,
}

impl WordlistEntry {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
        }
    }
}

/// Wordlist for one language.
///
/// Terms are kept in a `BTreeMap` so iteration order, and therefore the
/// tie order of the length sort, is deterministic. Build it through
/// `from_json` or `insert` so every entry is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Wordlist {
    entries: BTreeMap<String, String>,
}

impl Wordlist {
    /// Create an empty wordlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the `{"term": "translation"}` document served by the wordlist endpoint.
    pub fn from_json(json: &str) -> Result<Self, WordlistError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| WordlistError::InvalidDocument(e.to_string()))?;
        Self::from_value(value)
    }

    /// Build a wordlist from an already decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self, WordlistError> {
        let Value::Object(map) = value else {
            return Err(WordlistError::InvalidDocument(format!(
                "expected an object, found {}",
                json_type_name(&value)
            )));
        };

        let mut wordlist = Self::new();
        for (word, translation) in map {
            match translation {
                Value::String(translation) => {
                    wordlist.insert(word, translation)?;
                }
                other => {
                    return Err(WordlistError::InvalidTranslation {
                        word,
                        found: json_type_name(&other).to_string(),
                    });
                }
            }
        }

        debug!("Loaded wordlist with {} entries", wordlist.len());
        Ok(wordlist)
    }

    /// Serialize back into the endpoint's JSON shape.
    pub fn to_json(&self) -> Result<String, WordlistError> {
        serde_json::to_string_pretty(&self.entries)
            .map_err(|e| WordlistError::InvalidDocument(e.to_string()))
    }

    /// Insert or replace a term, returning the previous translation.
    pub fn insert(
        &mut self,
        word: impl Into<String>,
        translation: impl Into<String>,
    ) -> Result<Option<String>, WordlistError> {
        let word = word.into();
        let translation = translation.into();

        if word.trim().is_empty() {
            return Err(WordlistError::EmptyWord);
        }
        if translation.is_empty() {
            return Err(WordlistError::EmptyTranslation(word));
        }

        Ok(self.entries.insert(word, translation))
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn remove(&mut self, word: &str) -> Option<String> {
        self.entries.remove(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(term, translation)` in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(w, t)| (w.as_str(), t.as_str()))
    }

    /// Entry list ordered by term length; equal lengths keep term order.
    pub fn sorted_entries(&self, order: SortOrder) -> Vec<WordlistEntry> {
        let mut entries: Vec<WordlistEntry> = self
            .iter()
            .map(|(word, translation)| WordlistEntry::new(word, translation))
            .collect();
        entries.sort_by(by_length(order));
        entries
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
