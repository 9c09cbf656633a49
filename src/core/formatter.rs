//! Field formatting for sls records.
//!
//! Turns raw filesystem values into the strings shown in the table:
//! permission strings like `-rwxr-xr--`, byte sizes (raw or humanized),
//! and modification times in the `Mon DD HH:MM` layout.

use chrono::{DateTime, Local};

use std::fs::FileType as FsFileType;
use std::time::SystemTime;

/// rwx rendering of a 3-bit permission value, indexed by the value itself.
const PERM_TRIPLES: [&str; 8] = ["---", "--x", "-w-", "-wx", "r--", "r-x", "rw-", "rwx"];

/// Unit suffixes used by [humanize], one per power of 1024.
const SIZE_SUFFIXES: [&str; 9] = ["B", "K", "M", "G", "T", "P", "E", "Z", "Y"];

/// Timestamp layout: abbreviated month, day, hour and minute. No year.
pub const MOD_TIME_FORMAT: &str = "%b %d %H:%M";

/// How byte sizes are printed. Fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMode {
    #[default]
    Raw,
    Human,
}

impl SizeMode {
    pub fn from_flag(human_readable: bool) -> Self {
        if human_readable {
            SizeMode::Human
        } else {
            SizeMode::Raw
        }
    }

    pub fn format(self, bytes: u64) -> String {
        match self {
            SizeMode::Raw => bytes.to_string(),
            SizeMode::Human => humanize(bytes),
        }
    }
}

/// Kind of filesystem entry, as seen without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

impl EntryKind {
    /// Classifies in the order regular file, directory, symlink, anything else.
    pub fn from_file_type(ft: FsFileType) -> Self {
        if ft.is_file() {
            EntryKind::File
        } else if ft.is_dir() {
            EntryKind::Directory
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        }
    }

    pub fn glyph(self) -> char {
        match self {
            EntryKind::File => '-',
            EntryKind::Directory => 'd',
            EntryKind::Symlink => 'l',
            EntryKind::Other => '?',
        }
    }
}

/// Formats the entry type and the owner/group/other permission bits in unix `ls` style.
///
/// # Returns
/// A 10 character string like `drwxr-xr-x`.
pub fn format_permissions(kind: EntryKind, mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(kind.glyph());
    for shift in [6, 3, 0] {
        out.push_str(PERM_TRIPLES[((mode >> shift) & 0o7) as usize]);
    }
    out
}

/// Converts a byte count into a short human readable string.
///
/// Counts up to and including 1024 are printed exactly, without a suffix.
/// Larger counts are scaled to the biggest fitting power of 1024 and printed with one decimal.
///
/// # Examples
/// humanize(1024) == "1024";
/// humanize(1536) == "1.5K";
pub fn humanize(bytes: u64) -> String {
    if bytes == 0 {
        return "0".to_string();
    }
    if bytes <= 1024 {
        return bytes.to_string();
    }

    let value = bytes as f64;
    let exp = (value.ln() / 1024f64.ln()).floor() as usize;
    let exp = exp.min(SIZE_SUFFIXES.len() - 1);
    let scaled = value / 1024f64.powi(exp as i32);

    format!("{:.1}{}", scaled, SIZE_SUFFIXES[exp])
}

/// Formats a modification time in local time.
/// # Returns
/// A string like `Mar 07 14:05`, or an empty string if the time is unknown.
pub fn format_mod_time(modified: Option<SystemTime>) -> String {
    modified
        .map(|mtime| {
            let dt: DateTime<Local> = DateTime::from(mtime);
            dt.format(MOD_TIME_FORMAT).to_string()
        })
        .unwrap_or_default()
}
