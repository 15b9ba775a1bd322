//! Group/DM partitioning.
//!
//! Group chats dominate message counts and drown out the one-on-one threads,
//! so the report can carry a second sheet with groups excluded. The group
//! list file names the conversations to exclude, one per line.

use std::fs;
use std::path::Path;

use crate::count::ConversationRecord;
use crate::error::Result;

/// Loads the group list: one group conversation name per line.
pub fn load_group_list(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Returns the records whose name is not in `groups`, in input order.
///
/// A record value-equal to one already kept is dropped, so an exact
/// duplicate appears once; duplicates that differ in count both survive.
/// Pure: neither input is mutated.
pub fn dms_only(records: &[ConversationRecord], groups: &[String]) -> Vec<ConversationRecord> {
    let mut dms: Vec<ConversationRecord> = Vec::new();
    for record in records {
        if !groups.iter().any(|g| g == &record.name) && !dms.contains(record) {
            dms.push(record.clone());
        }
    }
    dms
}
