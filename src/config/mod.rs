//! Configuration resolution
//!
//! Implements the 3-layer configuration merge:
//! 1. Built-in defaults
//! 2. Settings file (.covhtml.yml)
//! 3. CLI flags
//!
//! Resolution either yields a complete, validated [`EffectiveConfig`]
//! or fails; no partial configuration is ever produced.

mod defaults;
mod effective;
mod resolve;
mod settings;

pub use defaults::Defaults;
pub use effective::{CliOverrides, ConfigError, EffectiveConfig, Theme};
pub use settings::{FsSource, Settings, SettingsSource, SETTINGS_FILE};
