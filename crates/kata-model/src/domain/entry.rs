use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{EntryKey, Keyed};

/// A key-labelled record stored in an ordered unique collection.
///
/// Entries are built by the caller, inserted once and never mutated in place.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Ordering and uniqueness key.
    pub key: EntryKey,
    /// Free-form text; not part of ordering.
    pub label: String,
}

impl Entry {
    pub fn new(key: EntryKey, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
        }
    }
}

impl Keyed for Entry {
    type Key = EntryKey;

    #[inline]
    fn key(&self) -> &EntryKey {
        &self.key
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.key, self.label)
    }
}
