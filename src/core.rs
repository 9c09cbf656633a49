//! Core logic for sls.
//!
//! This module contains the non-rendering pieces:
//! - [fm]: metadata extraction and directory listing (see [list_dir], [extract], [Metadata]).
//! - [formatter]: permission strings, size humanizing, and timestamp formatting.
//! - [errors]: the crate error type and its kind tags.
//!
//! Most callers will import [list_dir], [extract], and [Metadata] from this module.

pub mod errors;
pub mod fm;
pub mod formatter;

pub use errors::{Error, ErrorKind, Result};
pub use fm::{Metadata, extract, extract_named, is_empty_dir, list_dir, sort_records};
pub use formatter::{EntryKind, SizeMode, format_mod_time, format_permissions, humanize};
