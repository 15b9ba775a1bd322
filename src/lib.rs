//! # chatcount
//!
//! Counts messages per conversation across a directory of WhatsApp chat
//! exports and writes an xlsx report.
//!
//! ## Overview
//!
//! WhatsApp exports each chat as `WhatsApp Chat with <name>.txt`, with every
//! message starting on a `YYYY/MM/DD, HH:MM - ` timestamp line. chatcount
//! runs a small pipeline over a directory of such exports:
//!
//! 1. [`select`] — keep the correctly named export files, warn about the rest
//! 2. [`count`] — count timestamp lines per file, optionally scoped to a year
//! 3. [`alias`] — optionally rename conversations via an alias mapping file
//! 4. [`partition`] — optionally split out direct messages from group chats
//! 5. [`report`] — write the counts as xlsx sheets with a formula total
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use chatcount::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let files = valid_chat_files(Path::new("exports"))?;
//!     let records = count_messages(&files, Some("2021"))?;
//!     write_report(Path::new("output.xlsx"), &records, None)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`select`] — input file selection ([`valid_chat_files`](select::valid_chat_files))
//! - [`count`] — message counting ([`ConversationRecord`], [`count_messages`](count::count_messages))
//! - [`alias`] — name substitution ([`AliasMap`](alias::AliasMap))
//! - [`partition`] — group/DM split ([`dms_only`](partition::dms_only))
//! - [`report`] — xlsx output ([`write_report`](report::write_report))
//! - [`cli`] — CLI types ([`Args`](cli::Args))
//! - [`error`] — unified error types ([`ChatCountError`], [`Result`])

pub mod alias;
pub mod cli;
pub mod count;
pub mod error;
pub mod partition;
pub mod report;
pub mod select;

// Re-export the main types at the crate root for convenience
pub use count::ConversationRecord;
pub use error::{ChatCountError, Result};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatcount::prelude::*;
/// ```
pub mod prelude {
    // Core record type
    pub use crate::ConversationRecord;

    // Error types
    pub use crate::error::{ChatCountError, Result};

    // Pipeline stages
    pub use crate::alias::AliasMap;
    pub use crate::count::count_messages;
    pub use crate::partition::{dms_only, load_group_list};
    pub use crate::report::{sheet_rows, write_report};
    pub use crate::select::valid_chat_files;

    // CLI types
    pub use crate::cli::Args;
}
