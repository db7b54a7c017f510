//! In-memory term table.
//!
//! `TermTable` maps normalized terms to definitions. It has no locking of its
//! own; the store serializes access to it.
//!
//! Invariants:
//! - every key is a normalized [`Term`], so case variants collide
//! - `insert` never overwrites an existing term
//! - `erase` never touches a term that is absent

use std::fmt;

use rustc_hash::FxHashMap;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::{LexiconError, Result};
use crate::term::Term;

/// Mapping from [`Term`] to definition.
///
/// Serializes as a flat object of string keys to string values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TermTable {
    entries: FxHashMap<Term, String>,
}

impl TermTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Build a table from raw pairs, normalizing every key.
    ///
    /// Fails with `InvalidInput` for an empty key and with `AlreadyExists`
    /// when two keys collide after normalization.
    pub fn try_from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let iter = entries.into_iter();
        let mut table = Self::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            table.insert(Term::new(key)?, value.into())?;
        }
        Ok(table)
    }

    /// Definition stored for `term`, if any.
    pub fn lookup(&self, term: &Term) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    /// Whether `term` is present.
    pub fn contains(&self, term: &Term) -> bool {
        self.entries.contains_key(term)
    }

    /// Insert a new term.
    ///
    /// Fails with `AlreadyExists` if the term is present; the table is left
    /// unchanged in that case.
    pub fn insert(&mut self, term: Term, definition: String) -> Result<()> {
        if self.entries.contains_key(&term) {
            return Err(LexiconError::already_exists(term.into_string()));
        }
        self.entries.insert(term, definition);
        Ok(())
    }

    /// Remove a term, returning its definition.
    ///
    /// Fails with `NotFound` if the term is absent.
    pub fn erase(&mut self, term: &Term) -> Result<String> {
        self.entries
            .remove(term)
            .ok_or_else(|| LexiconError::not_found(term.as_str()))
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no terms
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&Term, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }
}

impl<'de> Deserialize<'de> for TermTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = TermTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping terms to definitions")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<TermTable, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut table = TermTable::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    let term = Term::new(&key).map_err(de::Error::custom)?;
                    table.insert(term, value).map_err(de::Error::custom)?;
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
