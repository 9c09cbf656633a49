//! Run configuration for sls.
//!
//! [Options] carries the settings parsed from the command line, fixed for the whole run.
//! [icons::IconSet] holds the glyph tables loaded from `icons.json`.

pub mod icons;

pub use icons::IconSet;

use crate::core::SizeMode;

use std::path::PathBuf;

/// Settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub path: PathBuf,
    pub show_hidden: bool,
    pub human_readable: bool,
}

impl Options {
    #[inline]
    pub fn size_mode(&self) -> SizeMode {
        SizeMode::from_flag(self.human_readable)
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            path: PathBuf::from("."),
            show_hidden: false,
            human_readable: false,
        }
    }
}
