//! Table rendering for sls.
//!
//! Measures every column across all records, then renders each record as one aligned line:
//! text columns are left-justified, numeric columns (links, size) right-justified,
//! columns are separated by two spaces, and the row ends with the icon, the colored
//! display path and a color reset.

use crate::core::{Metadata, is_empty_dir};
use crate::ui::icons::{Decoration, IconQuery, IconResolver};
use crate::ui::theme::RESET;

use tracing::warn;
use unicode_width::UnicodeWidthStr;

const SEP: &str = "  ";

/// Maximum display width of each column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub permission: usize,
    pub links: usize,
    pub owner: usize,
    pub group: usize,
    pub size: usize,
    pub mod_time: usize,
    pub path: usize,
}

impl ColumnWidths {
    pub fn measure(records: &[Metadata]) -> Self {
        records.iter().fold(ColumnWidths::default(), |w, r| ColumnWidths {
            permission: w.permission.max(r.permission().width()),
            links: w.links.max(r.links().to_string().len()),
            owner: w.owner.max(r.owner().width()),
            group: w.group.max(r.group().width()),
            size: w.size.max(r.size().width()),
            mod_time: w.mod_time.max(r.mod_time().width()),
            path: w.path.max(r.path().width()),
        })
    }
}

/// Renders a full listing, one line per record.
pub fn render_table(records: &[Metadata], resolver: &IconResolver<'_>) -> Vec<String> {
    let widths = ColumnWidths::measure(records);
    records
        .iter()
        .map(|record| {
            let query = IconQuery::from_record(record, dir_is_empty(record));
            render_row(record, &widths, resolver.resolve(&query))
        })
        .collect()
}

/// Renders one aligned and decorated table row.
pub fn render_row(record: &Metadata, widths: &ColumnWidths, deco: Decoration<'_>) -> String {
    let mut line = String::with_capacity(128);
    line.push_str(&pad_right(record.permission(), widths.permission));
    line.push_str(SEP);
    line.push_str(&pad_left(&record.links().to_string(), widths.links));
    line.push_str(SEP);
    line.push_str(&pad_right(record.owner(), widths.owner));
    line.push_str(SEP);
    line.push_str(&pad_right(record.group(), widths.group));
    line.push_str(SEP);
    line.push_str(&pad_left(record.size(), widths.size));
    line.push_str(SEP);
    line.push_str(&pad_right(record.mod_time(), widths.mod_time));
    line.push_str(SEP);
    line.push_str(deco.color.ansi());
    line.push_str(deco.glyph);
    line.push(' ');
    line.push_str(&pad_right(record.path(), widths.path));
    line.push_str(RESET);
    line
}

/// Renders a lone file target as a plain line, without alignment, icon or color.
pub fn render_single(record: &Metadata) -> String {
    let links = record.links().to_string();
    [
        record.permission(),
        links.as_str(),
        record.owner(),
        record.group(),
        record.size(),
        record.mod_time(),
        record.path(),
    ]
    .join(SEP)
}

fn dir_is_empty(record: &Metadata) -> bool {
    if !record.is_dir() {
        return false;
    }
    is_empty_dir(record.source()).unwrap_or_else(|e| {
        warn!(path = %record.source().display(), error = %e, "failed to read directory");
        true
    })
}

fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    let mut out = String::with_capacity(s.len() + fill);
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', fill));
    out
}

fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    let mut out = String::with_capacity(s.len() + fill);
    out.extend(std::iter::repeat_n(' ', fill));
    out.push_str(s);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconSet;
    use crate::core::{SizeMode, extract};
    use crate::ui::icons::EMPTY_DIR_ICON;
    use crate::ui::theme::ColorClass;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_left("7", 3), "  7");
        assert_eq!(pad_right("日本", 5), "日本 ");
        assert_eq!(pad_right("toolong", 3), "toolong");
    }

    #[test]
    fn row_layout() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("notes.txt");
        let mut file = File::create(&path)?;
        write!(file, "hello")?;
        let record = extract(&path, SizeMode::Raw)?;

        let widths = ColumnWidths {
            links: 3,
            size: 4,
            path: 12,
            ..ColumnWidths::measure(std::slice::from_ref(&record))
        };
        let deco = Decoration {
            glyph: "G",
            color: ColorClass::Default,
        };
        let line = render_row(&record, &widths, deco);

        let expected_prefix = format!("{}    1  ", record.permission());
        assert!(line.starts_with(&expected_prefix), "line: {line:?}");
        assert!(line.contains("     5  "), "line: {line:?}");
        assert!(line.ends_with("G notes.txt   \x1b[0m"), "line: {line:?}");
        Ok(())
    }

    #[test]
    fn table_columns_align() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        File::create(dir.path().join("a"))?;
        let mut big = File::create(dir.path().join("bbbbbb.rs"))?;
        big.write_all(&[0u8; 12345])?;

        let records = crate::core::list_dir(dir.path(), false, SizeMode::Raw)?;
        let icons = IconSet::default().with_extension("rs", "R");
        let lines = render_table(&records, &IconResolver::new(&icons));

        assert_eq!(lines.len(), 2);
        let glyph_col: Vec<usize> = lines
            .iter()
            .map(|l| l.find('\u{f021a}').or_else(|| l.find('R')).unwrap_or(0))
            .collect();
        assert_eq!(glyph_col[0], glyph_col[1]);
        assert!(lines[0].contains("    0  "));
        assert!(lines[1].contains("12345  "));
        Ok(())
    }

    #[test]
    fn directories_get_dir_color() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("empty"))?;

        let records = crate::core::list_dir(dir.path(), true, SizeMode::Raw)?;
        let icons = IconSet::default().with_filename("empty", "NAME");
        let lines = render_table(&records, &IconResolver::new(&icons));

        let empty = lines
            .iter()
            .find(|l| l.contains("empty"))
            .ok_or("missing row")?;
        assert!(empty.contains("\x1b[34m\u{ea83} empty"), "line: {empty:?}");
        assert!(!empty.contains("NAME"));
        Ok(())
    }

    #[test]
    fn vanished_directory_renders_as_empty() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        File::create(dir.path().join("a.txt"))?;
        let gone = dir.path().join("gone");
        fs::create_dir(&gone)?;
        File::create(gone.join("inner"))?;

        let records = crate::core::list_dir(dir.path(), true, SizeMode::Raw)?;
        assert_eq!(records.len(), 4);
        fs::remove_dir_all(&gone)?;

        let lines = render_table(&records, &IconResolver::new(&IconSet::default()));
        assert_eq!(lines.len(), 4);
        let row = lines
            .iter()
            .find(|l| l.contains(" gone"))
            .ok_or("missing row")?;
        assert!(row.starts_with('d'), "line: {row:?}");
        assert!(row.contains(&format!("\x1b[34m{EMPTY_DIR_ICON} gone")), "line: {row:?}");
        Ok(())
    }

    #[test]
    fn single_line_is_plain() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("solo.txt");
        File::create(&path)?;
        let record = extract(&path, SizeMode::Raw)?;

        let line = render_single(&record);
        assert!(!line.contains('\x1b'));
        assert!(line.ends_with(&format!("{}  solo.txt", record.mod_time())));
        assert!(line.starts_with(&format!("{}  1  ", record.permission())));
        Ok(())
    }
}
