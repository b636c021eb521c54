//! Project defaults read from `locsplice.toml` in the working directory.
//!
//! Only two things are configurable: the translation table patched when no path is passed,
//! and an edit plan to apply when `--plan` is not given. A missing file means all defaults.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "locsplice.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from locsplice.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "src/lib/i18n.ts".to_string())]
    /// Translation table patched when no path is given on the command line.
    pub target_file: String,
    #[facet(default = String::new())]
    /// Edit plan applied when `--plan` is absent. Empty means none.
    pub plan_file: String,
}

impl Config {
    /// Load configuration from locsplice.toml if present, else the defaults.
    ///
    /// # Errors
    ///
    /// See [`Config::load_from`].
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from `path`, using the defaults only if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file exists but cannot be read, and [`Error::Config`] if it
    /// is not valid configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(err) if err.kind() == ErrorKind::NotFound => Self::from_toml(""),
            Err(err) => Err(Error::Io(err)),
        }
    }

    /// Parse configuration from TOML, filling in defaults for missing keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the TOML does not describe a configuration.
    pub fn from_toml(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config(e.to_string()))
    }

    #[must_use]
    /// The configured edit plan, if one is set.
    pub fn plan_path(&self) -> Option<PathBuf> {
        (!self.plan_file.is_empty()).then(|| PathBuf::from(&self.plan_file))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
