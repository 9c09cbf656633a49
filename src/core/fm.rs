//! Metadata extraction and directory listing for sls.
//!
//! Provides the [Metadata] record which is built once per filesystem entry
//! and consumed by the table renderer, plus [list_dir] which enumerates the
//! immediate children of a directory.

use crate::core::errors::{Error, Result};
use crate::core::formatter::{EntryKind, SizeMode, format_mod_time, format_permissions};

use tracing::{debug, warn};

use std::fs::{self, symlink_metadata};
use std::io;
use std::path::{Path, PathBuf};

/// Names of the pseudo entries appended to a listing in hidden mode.
const PSEUDO_ENTRIES: [&str; 2] = [".", ".."];

/// One row of a listing.
/// All fields are formatted at construction time, so a record is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    permission: String,
    links: u64,
    owner: String,
    group: String,
    size: String,
    mod_time: String,
    path: String,
    kind: EntryKind,
    source: PathBuf,
}

impl Metadata {
    // Accessors

    #[inline]
    pub fn permission(&self) -> &str {
        &self.permission
    }

    #[inline]
    pub fn links(&self) -> u64 {
        self.links
    }

    #[inline]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[inline]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[inline]
    pub fn size(&self) -> &str {
        &self.size
    }

    #[inline]
    pub fn mod_time(&self) -> &str {
        &self.mod_time
    }

    /// Display name. For symlinks this is `name -> target`.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// The filesystem path the record was extracted from.
    #[inline]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// True if any of the owner, group or other execute bits is set.
    pub fn is_executable(&self) -> bool {
        let bytes = self.permission.as_bytes();
        [3, 6, 9].iter().any(|&i| bytes.get(i) == Some(&b'x'))
    }
}

/// Extracts the metadata of `path`, naming it after the last path component.
pub fn extract(path: &Path, size_mode: SizeMode) -> Result<Metadata> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    extract_named(path, &name, size_mode)
}

/// Extracts the metadata of `path` using `name` as the display name.
///
/// The entry is inspected without following symlinks. Failing owner/group lookups and
/// unreadable link targets are logged and leave the affected field blank.
///
/// # Returns
/// The populated record, or an error if the entry itself could not be stat'ed.
pub fn extract_named(path: &Path, name: &str, size_mode: SizeMode) -> Result<Metadata> {
    let md = symlink_metadata(path).map_err(|e| Error::from_io(path, e))?;
    let kind = EntryKind::from_file_type(md.file_type());

    let (owner, group) = owner_and_group(path, &md);

    let display = if kind == EntryKind::Symlink {
        match fs::read_link(path) {
            Ok(target) => format!("{} -> {}", name, target.to_string_lossy()),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read symlink target");
                name.to_string()
            }
        }
    } else {
        name.to_string()
    };

    Ok(Metadata {
        permission: format_permissions(kind, mode_bits(&md)),
        links: link_count(&md),
        owner,
        group,
        size: size_mode.format(md.len()),
        mod_time: format_mod_time(md.modified().ok()),
        path: display,
        kind,
        source: path.to_path_buf(),
    })
}

/// Lists the immediate children of `path`, sorted by display name.
///
/// Unless `include_hidden` is set, directories and dot entries are left out entirely.
/// With `include_hidden`, everything is kept and the `.` and `..` pseudo entries are added.
/// Entries that fail to extract are logged and skipped.
///
/// # Returns
/// The sorted records, or an error if the directory itself could not be read.
pub fn list_dir(path: &Path, include_hidden: bool, size_mode: SizeMode) -> Result<Vec<Metadata>> {
    let mut records = Vec::new();

    for entry in fs::read_dir(path).map_err(|e| Error::from_io(path, e))? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
        if !include_hidden && (is_dir || name.starts_with('.')) {
            debug!(name = %name, "skipping hidden entry");
            continue;
        }

        match extract_named(&entry.path(), &name, size_mode) {
            Ok(record) => records.push(record),
            Err(e) => warn!(path = %entry.path().display(), error = %e, "skipping entry"),
        }
    }

    if include_hidden {
        for pseudo in PSEUDO_ENTRIES {
            let pseudo_path = path.join(pseudo);
            match extract_named(&pseudo_path, pseudo, size_mode) {
                Ok(record) => records.push(record),
                Err(e) => warn!(path = %pseudo_path.display(), error = %e, "skipping entry"),
            }
        }
    }

    sort_records(&mut records);
    Ok(records)
}

/// Sorts records ascending by display name, byte-wise and case-sensitive.
pub fn sort_records(records: &mut [Metadata]) {
    records.sort_by(|a, b| a.path.as_bytes().cmp(b.path.as_bytes()));
}

/// Checks whether the directory at `path` has no entries.
pub fn is_empty_dir(path: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}

#[cfg(unix)]
fn mode_bits(md: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    md.permissions().mode()
}

#[cfg(not(unix))]
fn mode_bits(md: &fs::Metadata) -> u32 {
    if md.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}

#[cfg(unix)]
fn link_count(md: &fs::Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    md.nlink()
}

#[cfg(not(unix))]
fn link_count(_md: &fs::Metadata) -> u64 {
    1
}

/// Resolves owner and group names, logging and blanking whichever lookup fails.
#[cfg(unix)]
fn owner_and_group(path: &Path, md: &fs::Metadata) -> (String, String) {
    use std::os::unix::fs::MetadataExt;
    use uzers::{get_group_by_gid, get_user_by_uid};

    let owner = get_user_by_uid(md.uid())
        .map(|u| u.name().to_string_lossy().into_owned())
        .ok_or_else(|| Error::NameResolution {
            path: path.to_path_buf(),
            what: "user",
            id: md.uid(),
        });
    let group = get_group_by_gid(md.gid())
        .map(|g| g.name().to_string_lossy().into_owned())
        .ok_or_else(|| Error::NameResolution {
            path: path.to_path_buf(),
            what: "group",
            id: md.gid(),
        });

    let blank_on_err = |res: Result<String>| {
        res.unwrap_or_else(|e| {
            warn!(error = %e, "failed to get owner and group");
            String::new()
        })
    };
    (blank_on_err(owner), blank_on_err(group))
}

#[cfg(not(unix))]
fn owner_and_group(_path: &Path, _md: &fs::Metadata) -> (String, String) {
    (String::new(), String::new())
}
