//! Icon configuration for sls.
//!
//! Handles locating and deserializing `icons.json`, which holds five lookup tables
//! mapping names to Nerd Font glyphs. The tables are loaded once per run and only read afterwards.

use crate::core::errors::{Error, Result};

use serde::Deserialize;
use tracing::debug;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// File name of the icon configuration.
pub const ICONS_FILE: &str = "icons.json";

/// Environment variable overriding the icon configuration path.
pub const ICONS_ENV: &str = "SLS_ICONS";

/// Lookup tables from `icons.json`.
///
/// Ordered maps keep extension matching deterministic across runs.
/// Tables missing from the file are treated as empty.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct IconSet {
    icons_by_filename: BTreeMap<String, String>,
    icons_by_file_extension: BTreeMap<String, String>,
    icons_by_operating_system: BTreeMap<String, String>,
    icons_by_desktop_environment: BTreeMap<String, String>,
    icons_by_window_manager: BTreeMap<String, String>,
}

impl IconSet {
    /// Loads the icon configuration from the default location.
    /// A missing or malformed file is an [Error::IconConfig].
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        Self::load_from(&path)
    }

    /// Loads and parses the icon configuration at `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading icon configuration");
        let file = File::open(path).map_err(|e| Error::IconConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            Error::IconConfig { reason, .. } => Error::IconConfig {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    /// Parses an icon configuration from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| Error::IconConfig {
            path: PathBuf::from(ICONS_FILE),
            reason: e.to_string(),
        })
    }

    /// Parses an icon configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_reader(json.as_bytes())
    }

    /// Determine the icon configuration path.
    /// Checks the SLS_ICONS environment variable first,
    /// then `icons.json` in the parent of the executable's directory,
    /// then the user config directory (`~/.config/sls/icons.json`).
    ///
    /// If none of them exist, the executable-relative path is returned so the
    /// error names the expected install location.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(ICONS_ENV) {
            return PathBuf::from(path);
        }

        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("..").join(ICONS_FILE)));

        if let Some(path) = &beside_exe
            && path.exists()
        {
            return path.clone();
        }

        if let Some(config) = dirs::config_dir() {
            let path = config.join("sls").join(ICONS_FILE);
            if path.exists() {
                return path;
            }
        }

        beside_exe.unwrap_or_else(|| PathBuf::from(ICONS_FILE))
    }

    // Builders, mainly for constructing synthetic tables

    pub fn with_filename(mut self, name: &str, glyph: &str) -> Self {
        self.icons_by_filename.insert(name.into(), glyph.into());
        self
    }

    pub fn with_extension(mut self, ext: &str, glyph: &str) -> Self {
        self.icons_by_file_extension.insert(ext.into(), glyph.into());
        self
    }

    pub fn with_operating_system(mut self, key: &str, glyph: &str) -> Self {
        self.icons_by_operating_system.insert(key.into(), glyph.into());
        self
    }

    pub fn with_desktop_environment(mut self, key: &str, glyph: &str) -> Self {
        self.icons_by_desktop_environment
            .insert(key.into(), glyph.into());
        self
    }

    pub fn with_window_manager(mut self, key: &str, glyph: &str) -> Self {
        self.icons_by_window_manager.insert(key.into(), glyph.into());
        self
    }

    // Getters

    #[inline]
    pub fn by_filename(&self) -> &BTreeMap<String, String> {
        &self.icons_by_filename
    }

    #[inline]
    pub fn by_file_extension(&self) -> &BTreeMap<String, String> {
        &self.icons_by_file_extension
    }

    #[inline]
    pub fn by_operating_system(&self) -> &BTreeMap<String, String> {
        &self.icons_by_operating_system
    }

    #[inline]
    pub fn by_desktop_environment(&self) -> &BTreeMap<String, String> {
        &self.icons_by_desktop_environment
    }

    #[inline]
    pub fn by_window_manager(&self) -> &BTreeMap<String, String> {
        &self.icons_by_window_manager
    }
}
