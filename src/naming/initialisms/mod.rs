//! Dictionary of words that are written fully capitalized ("ID", "HTTP").
//!
//! The default word list is generated at build time from
//! `build_core/var/initialisms.json`. A table is an immutable value once it
//! is handed to a [`Normalizer`](crate::naming::Normalizer); build custom
//! dictionaries with [`InitialismTable::empty`] / [`InitialismTable::insert`].
use std::collections::BTreeSet;

use crate::error::NamefixError;

include!(concat!(env!("OUT_DIR"), "/generated_initialisms.rs"));

//==================================================================================INITIALISM_TABLE
#[derive(Debug, Clone, PartialEq, Eq)]
/// Set of initialisms keyed by their canonical uppercase form.
/// Lookups are case-insensitive: the candidate is uppercased first.
pub struct InitialismTable {
    words: BTreeSet<String>,
}

impl Default for InitialismTable {
    fn default() -> Self {
        Self::common()
    }
}

impl InitialismTable {
    /// Table with no entries: the normalizer then only fixes word casing.
    pub fn empty() -> Self {
        Self {
            words: BTreeSet::new(),
        }
    }

    /// Table holding [`COMMON_INITIALISMS`].
    pub fn common() -> Self {
        Self {
            words: COMMON_INITIALISMS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Build a table from arbitrary words, validating each one.
    pub fn try_from_words<I, S>(words: I) -> Result<Self, NamefixError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::empty();
        for word in words {
            table.insert(word.as_ref())?;
        }
        Ok(table)
    }

    /// Add a word (any case). Returns `false` when it was already present.
    ///
    /// Entries must be non-empty ASCII alphanumerics: casing an initialism
    /// must never change the length of the word it replaces.
    pub fn insert(&mut self, word: &str) -> Result<bool, NamefixError> {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(NamefixError::InvalidInitialism {
                entry: word.to_string(),
            });
        }
        Ok(self.words.insert(word.to_ascii_uppercase()))
    }

    /// Drop a word (any case). Returns `true` when it was present.
    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(&word.to_ascii_uppercase())
    }

    /// Canonical uppercase form of `word` if it is a known initialism.
    ///
    /// A word whose uppercase form has a different char count (`ßh` → `SSH`)
    /// never matches, so substitution keeps the word length.
    pub fn canonical(&self, word: &str) -> Option<&str> {
        let upper = word.to_uppercase();
        if upper.chars().count() != word.chars().count() {
            return None;
        }
        self.words.get(&upper).map(String::as_str)
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.canonical(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Entries in canonical form, sorted.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests;
