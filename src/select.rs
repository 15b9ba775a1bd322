//! Input file selection.
//!
//! WhatsApp names every export `WhatsApp Chat with <name>.txt`. The selector
//! lists the input directory, keeps the entries that match that convention,
//! and warns about everything else. Anything from a stray `.DS_Store` to a
//! renamed export is skipped rather than fed to the counter.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{ChatCountError, Result};

/// Filename convention of a WhatsApp chat export. Case-sensitive, and the
/// conversation name in the middle must be non-empty.
const EXPORT_NAME_PATTERN: &str = r"^WhatsApp Chat with .+\.txt$";

/// Returns the full paths of every correctly named chat export in `dir`,
/// in directory listing order.
///
/// Non-matching entries are skipped with a printed warning. An empty result
/// is an error: a report over zero conversations is never what the user
/// asked for.
pub fn valid_chat_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let name_regex = Regex::new(EXPORT_NAME_PATTERN).expect("export name pattern is valid");

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        if name_regex.is_match(&name) {
            files.push(dir.join(&file_name));
        } else {
            println!("Warning: file \"{name}\" is invalid and will be ignored");
        }
    }

    if files.is_empty() {
        return Err(ChatCountError::no_valid_files(dir));
    }

    Ok(files)
}
