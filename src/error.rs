//! Unified error types for chatcount.
//!
//! This module provides a single [`ChatCountError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatcount operations.
///
/// # Example
///
/// ```rust
/// use chatcount::error::Result;
/// use chatcount::ConversationRecord;
///
/// fn my_function() -> Result<Vec<ConversationRecord>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatCountError>;

/// The error type for all chatcount operations.
///
/// Every variant is fatal: the tool validates up front, then fails fast on
/// the first read or write problem. There are no retries and no partial
/// output.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatCountError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - A chat export can't be read (or isn't valid UTF-8)
    /// - The input directory can't be listed
    /// - Permission denied
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input validation failed before any file was processed.
    ///
    /// Covers a missing input directory, a missing alias or group-list file,
    /// a malformed `--year` value, and an output path that already exists.
    #[error("{message}")]
    InvalidInput {
        /// Description of what's wrong with the input
        message: String,
    },

    /// The input directory contained no correctly named chat exports.
    ///
    /// Export file names must match `WhatsApp Chat with <name>.txt`.
    #[error("no valid files in input directory \"{dir}\"", dir = .dir.display())]
    NoValidFiles {
        /// The directory that was scanned
        dir: PathBuf,
    },

    /// Workbook writing error from the xlsx backend.
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatCountError {
    /// Creates an input validation error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ChatCountError::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a no-valid-files error for the given directory.
    pub fn no_valid_files(dir: impl Into<PathBuf>) -> Self {
        ChatCountError::NoValidFiles { dir: dir.into() }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatCountError::Io(_))
    }

    /// Returns `true` if this is an input validation error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ChatCountError::InvalidInput { .. })
    }

    /// Returns `true` if this is a no-valid-files error.
    pub fn is_no_valid_files(&self) -> bool {
        matches!(self, ChatCountError::NoValidFiles { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
