//! Settings file layer (.covhtml.yml)
//!
//! The settings source is abstracted behind a small capability trait so
//! the resolver can be exercised against an in-memory substitute.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// Settings file name probed in the working directory
pub const SETTINGS_FILE: &str = ".covhtml.yml";

/// Capability for locating and reading the settings file
pub trait SettingsSource {
    /// Whether a settings file exists at `path`
    fn exists(&self, path: &str) -> bool;

    /// Read the settings file at `path`. Only called after `exists`
    /// reported true; a failure here is fatal for resolution.
    fn read(&self, path: &str) -> io::Result<String>;
}

/// Filesystem-backed settings source
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl SettingsSource for FsSource {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn read(&self, path: &str) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// Raw settings-file mapping.
///
/// Absent keys and null values mean "not set"; list items may
/// themselves be null and are skipped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub input: Option<String>,

    #[serde(default)]
    pub output: Option<String>,

    #[serde(default)]
    pub theme: Option<String>,

    #[serde(default)]
    pub include: Option<Vec<Option<String>>>,

    #[serde(default)]
    pub exclude: Option<Vec<Option<String>>>,
}

impl Settings {
    /// Parse the YAML mapping. An empty or comment-only document is a
    /// valid, fully unset settings file.
    pub fn from_str(s: &str) -> Result<Self, serde_yml::Error> {
        Ok(serde_yml::from_str::<Option<Settings>>(s)?.unwrap_or_default())
    }

    /// Include entries with null items dropped, None if the key is unset
    pub fn include_entries(&self) -> Option<Vec<String>> {
        Self::entries(&self.include)
    }

    /// Exclude entries with null items dropped, None if the key is unset
    pub fn exclude_entries(&self) -> Option<Vec<String>> {
        Self::entries(&self.exclude)
    }

    fn entries(field: &Option<Vec<Option<String>>>) -> Option<Vec<String>> {
        field
            .as_ref()
            .map(|list| list.iter().flatten().cloned().collect())
    }
}
