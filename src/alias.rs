//! Conversation name substitution.
//!
//! Exports are named after whatever the contact is called in the phone's
//! address book. An alias file maps those to the names wanted in the report:
//! one `original,alias` pair per line, extra comma-separated fields ignored.

use std::fs;
use std::path::Path;

use crate::count::ConversationRecord;
use crate::error::Result;

/// An ordered list of `original -> alias` rename pairs.
///
/// Entries keep file order, and lookup takes the first entry whose original
/// matches. Later entries for the same original are loaded but never win.
#[derive(Debug, Clone, Default)]
pub struct AliasMap {
    entries: Vec<(String, String)>,
}

impl AliasMap {
    /// Loads an alias map from a text file.
    ///
    /// Lines without a comma (including blank lines) carry no usable mapping
    /// and are skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    /// Parses alias pairs from text, one `original,alias[,...]` per line.
    pub fn parse(contents: &str) -> Self {
        let entries = contents
            .lines()
            .filter_map(|line| {
                let mut fields = line.split(',');
                match (fields.next(), fields.next()) {
                    (Some(original), Some(alias)) => {
                        Some((original.to_string(), alias.to_string()))
                    }
                    _ => None,
                }
            })
            .collect();
        Self { entries }
    }

    /// Returns the alias for `name`, if any entry's original matches exactly.
    /// First matching entry wins.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(original, _)| original == name)
            .map(|(_, alias)| alias.as_str())
    }

    /// Renames every matching record in place. Records with no matching
    /// entry are left unchanged; counts are never touched.
    pub fn apply(&self, records: &mut [ConversationRecord]) {
        for record in records {
            if let Some(alias) = self.resolve(&record.name) {
                record.name = alias.to_string();
            }
        }
    }

    /// Number of loaded rename pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no rename pairs were loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
