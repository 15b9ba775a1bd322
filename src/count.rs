//! Message counting.
//!
//! Every message in a WhatsApp text export starts with a timestamp line of
//! the form `YYYY/MM/DD, HH:MM - `. Continuation lines of a multi-line
//! message carry no timestamp, so counting timestamp matches counts messages
//! exactly once each.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{ChatCountError, Result};

/// Filename prefix WhatsApp puts on every export.
pub const EXPORT_PREFIX: &str = "WhatsApp Chat with ";
/// Filename suffix WhatsApp puts on every export.
pub const EXPORT_SUFFIX: &str = ".txt";

/// One conversation and its message count.
///
/// Names are not unique: two exports can map to the same display name after
/// alias substitution, and duplicate records are preserved, never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationRecord {
    /// Display name of the conversation, taken from the export file name
    /// (possibly rewritten by an [`AliasMap`](crate::alias::AliasMap)).
    pub name: String,
    /// Number of messages counted in the export.
    pub count: usize,
}

impl ConversationRecord {
    /// Creates a record from a name and count.
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Derives the conversation name from an export path by stripping the fixed
/// filename prefix and suffix.
fn conversation_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.strip_prefix(EXPORT_PREFIX).unwrap_or(&file_name);
    let stem = stem.strip_suffix(EXPORT_SUFFIX).unwrap_or(stem);
    stem.to_string()
}

/// Builds the timestamp pattern, anchored on `year` when one is given.
///
/// The caller validates `year` as four ASCII digits, so splicing it into the
/// pattern as a literal is safe.
fn timestamp_pattern(year: Option<&str>) -> String {
    match year {
        Some(year) => format!(r"{year}/\d\d/\d\d, \d\d:\d\d - "),
        None => r"\d\d\d\d/\d\d/\d\d, \d\d:\d\d - ".to_string(),
    }
}

/// Counts messages in each export, returning one record per input path in
/// input order.
///
/// Each file is read in full as UTF-8; an unreadable or non-UTF-8 file is a
/// fatal error. With `year` set, only timestamps from that year are counted.
pub fn count_messages(
    paths: &[PathBuf],
    year: Option<&str>,
) -> Result<Vec<ConversationRecord>> {
    let message_regex = Regex::new(&timestamp_pattern(year)).map_err(|e| {
        ChatCountError::invalid_input(format!("invalid timestamp pattern: {e}"))
    })?;

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let content = fs::read_to_string(path)?;
        let count = message_regex.find_iter(&content).count();
        records.push(ConversationRecord::new(conversation_name(path), count));
    }

    Ok(records)
}
