//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Args::validate`] - up-front validation of every path argument
//!
//! Validation runs before any chat export is read, so a bad argument never
//! leaves a half-written report behind.

use std::path::Path;

use clap::Parser;

use crate::error::{ChatCountError, Result};

/// Count messages per WhatsApp chat export in a directory and write an
/// xlsx report with a per-conversation message count and a total.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatcount")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatcount exports/
    chatcount exports/ -y 2021
    chatcount exports/ -a aliases.txt -g groups.txt
    chatcount exports/ -o report.xlsx")]
pub struct Args {
    /// Directory containing the WhatsApp chat exports
    pub indir: String,

    /// Only count messages from this year (4 digits)
    #[arg(short, long, value_name = "YYYY")]
    pub year: Option<String>,

    /// Plain text file of `original,alias` rename pairs, one per line
    #[arg(short, long, value_name = "FILE")]
    pub alias_file: Option<String>,

    /// Plain text file listing group conversations, one name per line.
    /// Enables the "DMs Only" sheet
    #[arg(short, long, value_name = "FILE")]
    pub group_list: Option<String>,

    /// Path for the xlsx report. Refuses to overwrite an existing file
    #[arg(short, long, default_value = "output.xlsx", value_name = "FILE")]
    pub output_file: String,
}

impl Args {
    /// Validates every argument that names a path or a year.
    ///
    /// Checks, in order: the input directory exists, the year (if given) is
    /// exactly four ASCII digits, the alias and group-list files (if given)
    /// exist, and the output file does not already exist.
    pub fn validate(&self) -> Result<()> {
        if !Path::new(&self.indir).is_dir() {
            return Err(ChatCountError::invalid_input(format!(
                "input directory \"{}\" does not exist",
                self.indir
            )));
        }

        if let Some(year) = &self.year {
            if !is_valid_year(year) {
                return Err(ChatCountError::invalid_input(format!(
                    "\"{}\" is not a valid year",
                    year
                )));
            }
        }

        if let Some(alias_file) = &self.alias_file {
            if !Path::new(alias_file).is_file() {
                return Err(ChatCountError::invalid_input(format!(
                    "alias file \"{}\" does not exist",
                    alias_file
                )));
            }
        }

        if let Some(group_list) = &self.group_list {
            if !Path::new(group_list).is_file() {
                return Err(ChatCountError::invalid_input(format!(
                    "group list \"{}\" does not exist",
                    group_list
                )));
            }
        }

        if Path::new(&self.output_file).exists() {
            return Err(ChatCountError::invalid_input(format!(
                "output file \"{}\" already exists",
                self.output_file
            )));
        }

        Ok(())
    }
}

/// A year is exactly four ASCII digits.
///
/// The year is spliced into the message-counting regex as a literal, so this
/// check also keeps regex metacharacters out of the pattern.
fn is_valid_year(year: &str) -> bool {
    year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(indir: &str) -> Args {
        Args {
            indir: indir.to_string(),
            year: None,
            alias_file: None,
            group_list: None,
            output_file: "nonexistent-output.xlsx".to_string(),
        }
    }

    #[test]
    fn test_valid_year() {
        assert!(is_valid_year("2021"));
        assert!(is_valid_year("0000"));
        assert!(is_valid_year("9999"));
    }

    #[test]
    fn test_invalid_year() {
        assert!(!is_valid_year(""));
        assert!(!is_valid_year("21"));
        assert!(!is_valid_year("20211"));
        assert!(!is_valid_year("20a1"));
        assert!(!is_valid_year("２０２１")); // fullwidth digits
        assert!(!is_valid_year(r"\d\d\d\d"));
    }

    #[test]
    fn test_validate_missing_indir() {
        let err = args("definitely/not/a/dir").validate().unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_bad_year() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = args(dir.path().to_str().unwrap());
        a.year = Some("20xx".to_string());
        let err = a.validate().unwrap_err();
        assert!(err.to_string().contains("not a valid year"));
    }

    #[test]
    fn test_validate_missing_alias_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = args(dir.path().to_str().unwrap());
        a.alias_file = Some("no-such-aliases.txt".to_string());
        let err = a.validate().unwrap_err();
        assert!(err.to_string().contains("alias file"));
    }

    #[test]
    fn test_validate_missing_group_list() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = args(dir.path().to_str().unwrap());
        a.group_list = Some("no-such-groups.txt".to_string());
        let err = a.validate().unwrap_err();
        assert!(err.to_string().contains("group list"));
    }

    #[test]
    fn test_validate_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("report.xlsx");
        std::fs::write(&existing, b"stale").unwrap();

        let mut a = args(dir.path().to_str().unwrap());
        a.output_file = existing.to_str().unwrap().to_string();
        let err = a.validate().unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_validate_ok() {
        let dir = tempfile::tempdir().unwrap();
        let a = args(dir.path().to_str().unwrap());
        assert!(a.validate().is_ok());
    }
}
