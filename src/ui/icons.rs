//! Icon resolution for sls entries.
//!
//! An entry's glyph is picked by an ordered cascade of [IconMatcher]s; the first
//! matcher that returns something wins. The color class is tied to the entry type:
//! directories are always [ColorClass::Directory], and other entries are
//! [ColorClass::Executable] whenever an execute bit is set, no matter which matcher
//! produced the glyph.
//!
//! Cascade order:
//! 1. directory (empty / non-empty glyph)
//! 2. exact file name
//! 3. extension suffix
//! 4. extension keyed into the operating system, desktop environment and window manager tables
//! 5. executable fallback glyph
//!
//! If nothing matches, the generic file glyph is used.

use crate::config::IconSet;
use crate::core::{EntryKind, Metadata};
use crate::ui::theme::ColorClass;

use std::collections::BTreeMap;

pub const EXECUTABLE_ICON: &str = "\u{ead3}";
pub const EMPTY_DIR_ICON: &str = "\u{ea83}";
pub const DIR_ICON: &str = "\u{e6ad}";
pub const UNKNOWN_ICON: &str = "\u{f021a}";

/// What the cascade knows about an entry.
#[derive(Debug, Clone, Copy)]
pub struct IconQuery<'q> {
    pub display_path: &'q str,
    pub kind: EntryKind,
    pub is_empty: bool,
    pub is_executable: bool,
}

impl<'q> IconQuery<'q> {
    /// Builds a query from a record. `is_empty` only matters for directories.
    pub fn from_record(record: &'q Metadata, is_empty: bool) -> Self {
        IconQuery {
            display_path: record.path(),
            kind: record.kind(),
            is_empty,
            is_executable: record.is_executable(),
        }
    }

    /// Text after the last `.` of the display path, if any.
    pub fn extension(&self) -> Option<&'q str> {
        let path = self.display_path;
        let idx = path.rfind('.')?;
        let ext = &path[idx + 1..];
        (!ext.is_empty()).then_some(ext)
    }

    /// Color class derived from the entry type and execute bits.
    pub fn color_class(&self) -> ColorClass {
        if self.kind == EntryKind::Directory {
            ColorClass::Directory
        } else if self.is_executable {
            ColorClass::Executable
        } else {
            ColorClass::Default
        }
    }
}

/// Glyph plus color chosen for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration<'a> {
    pub glyph: &'a str,
    pub color: ColorClass,
}

/// A single rule in the icon cascade.
pub trait IconMatcher<'a> {
    fn try_match(&self, query: &IconQuery<'_>) -> Option<Decoration<'a>>;
}

/// Directories get the empty or non-empty folder glyph.
pub struct DirectoryMatcher;

impl<'a> IconMatcher<'a> for DirectoryMatcher {
    fn try_match(&self, query: &IconQuery<'_>) -> Option<Decoration<'a>> {
        (query.kind == EntryKind::Directory).then(|| Decoration {
            glyph: if query.is_empty {
                EMPTY_DIR_ICON
            } else {
                DIR_ICON
            },
            color: ColorClass::Directory,
        })
    }
}

/// Exact lookup of the whole display path.
pub struct FilenameMatcher<'a>(pub &'a BTreeMap<String, String>);

impl<'a> IconMatcher<'a> for FilenameMatcher<'a> {
    fn try_match(&self, query: &IconQuery<'_>) -> Option<Decoration<'a>> {
        self.0.get(query.display_path).map(|glyph| Decoration {
            glyph,
            color: query.color_class(),
        })
    }
}

/// Matches keys against the end of the display path, so `tar.gz` style keys work too.
/// The longest matching key wins.
pub struct ExtensionSuffixMatcher<'a>(pub &'a BTreeMap<String, String>);

impl<'a> IconMatcher<'a> for ExtensionSuffixMatcher<'a> {
    fn try_match(&self, query: &IconQuery<'_>) -> Option<Decoration<'a>> {
        let path = query.display_path;
        self.0
            .iter()
            .filter(|(ext, _)| {
                !ext.is_empty()
                    && path.len() > ext.len()
                    && path.ends_with(ext.as_str())
                    && path.as_bytes()[path.len() - ext.len() - 1] == b'.'
            })
            .max_by_key(|(ext, _)| ext.len())
            .map(|(_, glyph)| Decoration {
                glyph,
                color: query.color_class(),
            })
    }
}

/// Single lookup of the extension in one of the auxiliary tables.
pub struct ExtensionKeyMatcher<'a>(pub &'a BTreeMap<String, String>);

impl<'a> IconMatcher<'a> for ExtensionKeyMatcher<'a> {
    fn try_match(&self, query: &IconQuery<'_>) -> Option<Decoration<'a>> {
        let ext = query.extension()?;
        self.0.get(ext).map(|glyph| Decoration {
            glyph,
            color: query.color_class(),
        })
    }
}

/// Fallback glyph for anything with an execute bit set.
pub struct ExecutableMatcher;

impl<'a> IconMatcher<'a> for ExecutableMatcher {
    fn try_match(&self, query: &IconQuery<'_>) -> Option<Decoration<'a>> {
        query.is_executable.then(|| Decoration {
            glyph: EXECUTABLE_ICON,
            color: query.color_class(),
        })
    }
}

/// Runs the matcher cascade over an icon configuration.
pub struct IconResolver<'a> {
    matchers: Vec<Box<dyn IconMatcher<'a> + 'a>>,
}

impl<'a> IconResolver<'a> {
    /// Builds the standard cascade over `icons`.
    pub fn new(icons: &'a IconSet) -> Self {
        let matchers: Vec<Box<dyn IconMatcher<'a> + 'a>> = vec![
            Box::new(DirectoryMatcher),
            Box::new(FilenameMatcher(icons.by_filename())),
            Box::new(ExtensionSuffixMatcher(icons.by_file_extension())),
            Box::new(ExtensionKeyMatcher(icons.by_operating_system())),
            Box::new(ExtensionKeyMatcher(icons.by_desktop_environment())),
            Box::new(ExtensionKeyMatcher(icons.by_window_manager())),
            Box::new(ExecutableMatcher),
        ];
        IconResolver { matchers }
    }

    /// Builds a resolver from a custom list of matchers, tried in order.
    pub fn with_matchers(matchers: Vec<Box<dyn IconMatcher<'a> + 'a>>) -> Self {
        IconResolver { matchers }
    }

    /// Returns the decoration of the first matching rule, or the generic file glyph.
    pub fn resolve(&self, query: &IconQuery<'_>) -> Decoration<'a> {
        self.matchers
            .iter()
            .find_map(|m| m.try_match(query))
            .unwrap_or(Decoration {
                glyph: UNKNOWN_ICON,
                color: query.color_class(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(display_path: &str) -> IconQuery<'_> {
        IconQuery {
            display_path,
            kind: EntryKind::File,
            is_empty: false,
            is_executable: false,
        }
    }

    fn icons() -> IconSet {
        IconSet::default()
            .with_filename("Makefile", "MK")
            .with_filename("src", "SRC")
            .with_extension("rs", "RS")
            .with_extension("gz", "GZ")
            .with_extension("tar.gz", "TGZ")
            .with_operating_system("arch", "ARCH")
            .with_desktop_environment("gnome", "GNOME")
            .with_window_manager("i3", "I3")
            .with_window_manager("arch", "WM-ARCH")
    }

    #[test]
    fn directory_beats_filename_table() {
        let icons = icons();
        let resolver = IconResolver::new(&icons);
        let query = IconQuery {
            display_path: "src",
            kind: EntryKind::Directory,
            is_empty: false,
            is_executable: true,
        };
        let deco = resolver.resolve(&query);
        assert_eq!(deco.color, ColorClass::Directory);
        assert_eq!(deco.glyph, DIR_ICON);

        let empty = IconQuery {
            is_empty: true,
            ..query
        };
        assert_eq!(resolver.resolve(&empty).glyph, EMPTY_DIR_ICON);
    }

    #[test]
    fn filename_beats_extension() {
        let icons = IconSet::default()
            .with_filename("main.rs", "MAIN")
            .with_extension("rs", "RS");
        let resolver = IconResolver::new(&icons);
        assert_eq!(resolver.resolve(&file("main.rs")).glyph, "MAIN");
        assert_eq!(resolver.resolve(&file("lib.rs")).glyph, "RS");
    }

    #[test]
    fn extension_suffix_prefers_longest_key() {
        let icons = icons();
        let resolver = IconResolver::new(&icons);
        assert_eq!(resolver.resolve(&file("backup.tar.gz")).glyph, "TGZ");
        assert_eq!(resolver.resolve(&file("notes.gz")).glyph, "GZ");
        // case sensitive, and the key must follow a dot
        assert_eq!(resolver.resolve(&file("LIB.RS")).glyph, UNKNOWN_ICON);
        assert_eq!(resolver.resolve(&file("cars")).glyph, UNKNOWN_ICON);
    }

    #[test]
    fn auxiliary_tables_in_order() {
        let icons = icons();
        let resolver = IconResolver::new(&icons);
        assert_eq!(resolver.resolve(&file("distro.arch")).glyph, "ARCH");
        assert_eq!(resolver.resolve(&file("session.gnome")).glyph, "GNOME");
        assert_eq!(resolver.resolve(&file("config.i3")).glyph, "I3");
    }

    #[test]
    fn executable_color_survives_glyph_match() {
        let icons = icons();
        let resolver = IconResolver::new(&icons);

        let script = IconQuery {
            is_executable: true,
            ..file("build.rs")
        };
        let deco = resolver.resolve(&script);
        assert_eq!(deco.glyph, "RS");
        assert_eq!(deco.color, ColorClass::Executable);

        let binary = IconQuery {
            is_executable: true,
            ..file("a.out")
        };
        let deco = resolver.resolve(&binary);
        assert_eq!(deco.glyph, EXECUTABLE_ICON);
        assert_eq!(deco.color, ColorClass::Executable);
    }

    #[test]
    fn unknown_file_has_default_color() {
        let icons = icons();
        let resolver = IconResolver::new(&icons);
        let deco = resolver.resolve(&file("mystery"));
        assert_eq!(deco.glyph, UNKNOWN_ICON);
        assert_eq!(deco.color, ColorClass::Default);
    }

    #[test]
    fn symlink_matches_on_target_text() {
        let icons = icons();
        let resolver = IconResolver::new(&icons);
        let link = IconQuery {
            kind: EntryKind::Symlink,
            ..file("lib -> lib.rs")
        };
        assert_eq!(resolver.resolve(&link).glyph, "RS");
    }

    #[test]
    fn extension_is_text_after_last_dot() {
        assert_eq!(file("a.tar.gz").extension(), Some("gz"));
        assert_eq!(file(".bashrc").extension(), Some("bashrc"));
        assert_eq!(file("trailing.").extension(), None);
        assert_eq!(file("none").extension(), None);
    }

    #[test]
    fn custom_cascade_stops_at_first_match() {
        struct Always(&'static str);
        impl<'a> IconMatcher<'a> for Always {
            fn try_match(&self, query: &IconQuery<'_>) -> Option<Decoration<'a>> {
                Some(Decoration {
                    glyph: self.0,
                    color: query.color_class(),
                })
            }
        }

        let matchers: Vec<Box<dyn IconMatcher<'_>>> =
            vec![Box::new(Always("first")), Box::new(Always("second"))];
        let resolver = IconResolver::with_matchers(matchers);
        assert_eq!(resolver.resolve(&file("x")).glyph, "first");
    }
}
