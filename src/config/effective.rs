//! Effective run configuration
//!
//! One immutable `EffectiveConfig` is resolved at startup and handed
//! to the rest of the pipeline. Resolution either succeeds completely
//! or fails with a `ConfigError`; a partial configuration is never
//! returned.

use serde::Deserialize;
use std::fmt;
use std::io;
use std::str::FromStr;

use super::defaults::Defaults;
use super::resolve::{normalize_entries, resolve_list, resolve_string};
use super::settings::{Settings, SettingsSource};

/// Report color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ConfigError::InvalidTheme(other.to_string())),
        }
    }
}

/// CLI flag values as supplied, before any layering.
///
/// `None` means the flag was absent. `Some("")` means it was supplied
/// empty, which is "no override": the settings-file value (else the
/// default) is kept.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub input: Option<String>,
    pub output: Option<String>,
    pub theme: Option<String>,
    pub include: Option<String>,
    pub exclude: Option<String>,
}

/// Fully resolved run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    /// Cover profile to read
    pub input: String,

    /// Report file to write
    pub output: String,

    /// Report theme
    pub theme: Theme,

    /// Normalized include filters; empty means "include everything"
    pub include: Vec<String>,

    /// Normalized exclude filters; empty means "exclude nothing"
    pub exclude: Vec<String>,
}

impl EffectiveConfig {
    /// Resolve the effective configuration from the three layers.
    ///
    /// `settings_path` is probed through `source`. An absent settings
    /// file silently skips that layer; one that exists but cannot be
    /// read or parsed is fatal.
    pub fn resolve(
        source: &dyn SettingsSource,
        settings_path: &str,
        cli: &CliOverrides,
    ) -> Result<Self, ConfigError> {
        let settings = if source.exists(settings_path) {
            log::debug!("loading settings from {settings_path}");
            Settings::from_str(&source.read(settings_path)?)?
        } else {
            log::debug!("no settings file at {settings_path}");
            Settings::default()
        };

        let defaults = Defaults::default();

        let input = resolve_string(
            cli.input.as_deref(),
            settings.input.as_deref(),
            &defaults.input,
        );
        let output = resolve_string(
            cli.output.as_deref(),
            settings.output.as_deref(),
            &defaults.output,
        );

        let theme = resolve_string(cli.theme.as_deref(), settings.theme.as_deref(), "");
        let theme = if theme.is_empty() {
            defaults.theme
        } else {
            theme.parse()?
        };

        let include = normalize_entries(resolve_list(
            cli.include.as_deref(),
            settings.include_entries().as_deref(),
        ))?;
        let exclude = normalize_entries(resolve_list(
            cli.exclude.as_deref(),
            settings.exclude_entries().as_deref(),
        ))?;

        Ok(Self {
            input,
            output,
            theme,
            include,
            exclude,
        })
    }
}

/// Errors from configuration resolution
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_yml::Error),

    #[error("invalid theme {0:?}: expected \"dark\" or \"light\"")]
    InvalidTheme(String),

    #[error("invalid filter path {0:?}: absolute paths are not allowed")]
    AbsoluteFilterPath(String),
}
