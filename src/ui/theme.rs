//! Terminal colors for sls.
//!
//! Color classes are semantic buckets assigned to entries; they are mapped to ANSI
//! escape codes only when a line is rendered. Colors are always emitted.

use phf::phf_map;

/// ANSI foreground escape codes by color name.
pub static COLORS: phf::Map<&'static str, &'static str> = phf_map! {
    "red" => "\x1b[31m",
    "green" => "\x1b[32m",
    "yellow" => "\x1b[33m",
    "blue" => "\x1b[34m",
    "magenta" => "\x1b[35m",
    "cyan" => "\x1b[36m",
    "white" => "\x1b[37m",
    "reset" => "\x1b[0m",
};

pub const RESET: &str = "\x1b[0m";

/// Semantic color bucket of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorClass {
    Directory,
    Executable,
    #[default]
    Default,
}

impl ColorClass {
    pub fn color_name(self) -> Option<&'static str> {
        match self {
            ColorClass::Directory => Some("blue"),
            ColorClass::Executable => Some("green"),
            ColorClass::Default => None,
        }
    }

    /// Escape code to emit before the entry, empty for [ColorClass::Default].
    pub fn ansi(self) -> &'static str {
        self.color_name()
            .and_then(|name| COLORS.get(name).copied())
            .unwrap_or("")
    }
}

/// Wraps `message` in the named color, falling back to no color for unknown names.
pub fn paint(message: &str, color: &str) -> String {
    let code = COLORS.get(color).copied().unwrap_or(RESET);
    format!("{code}{message}{RESET}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_map_to_ansi() {
        assert_eq!(ColorClass::Directory.ansi(), "\x1b[34m");
        assert_eq!(ColorClass::Executable.ansi(), "\x1b[32m");
        assert_eq!(ColorClass::Default.ansi(), "");
    }

    #[test]
    fn paint_wraps_and_resets() {
        assert_eq!(paint("oops", "red"), "\x1b[31moops\x1b[0m");
        assert_eq!(paint("plain", "chartreuse"), "\x1b[0mplain\x1b[0m");
    }
}
