//! covhtml - HTML reports from Go coverage profiles
//!
//! Reads a cover profile, resolves the run configuration from CLI
//! flags, an optional settings file and built-in defaults, decides
//! which source files belong in the report via include/exclude path
//! filters, and writes a single self-contained HTML document.

pub mod config;
pub mod filter;
pub mod gomod;
pub mod profile;
pub mod report;

pub use config::{CliOverrides, ConfigError, EffectiveConfig, FsSource, SettingsSource, Theme};
pub use filter::Filter;
pub use profile::{FileProfile, Profile};
pub use report::Report;
