//! Per-field layering (precedence: CLI > settings file > defaults)
//!
//! The CLI layer wins only with a value that is non-empty after
//! trimming; a flag supplied as an empty string keeps the value
//! beneath it. The same rule applies to the settings layer over the
//! default.

use super::ConfigError;
use crate::filter::path;

/// Resolve one scalar field across the three layers.
pub fn resolve_string(cli: Option<&str>, settings: Option<&str>, default: &str) -> String {
    if let Some(value) = non_empty(cli) {
        return value.to_string();
    }
    if let Some(value) = non_empty(settings) {
        return value.to_string();
    }
    default.to_string()
}

/// Resolve one list field across the layers, returning raw entries.
///
/// The CLI form is one comma-separated string; the settings form is
/// already a list. The default is the empty list. Entries are not yet
/// normalized or validated.
pub fn resolve_list(cli: Option<&str>, settings: Option<&[String]>) -> Vec<String> {
    if let Some(value) = non_empty(cli) {
        return value.split(',').map(str::to_string).collect();
    }
    match settings {
        Some(entries) if !entries.is_empty() => entries.to_vec(),
        _ => Vec::new(),
    }
}

/// Normalize and validate resolved list entries.
///
/// Entries are trimmed; empty entries are dropped; a leading `./` and
/// one trailing `/` are stripped. An entry that still begins with `/`
/// after normalization fails resolution: all matching is relative.
/// Order is preserved and duplicates are kept as declared.
pub fn normalize_entries(raw: Vec<String>) -> Result<Vec<String>, ConfigError> {
    let mut entries = Vec::with_capacity(raw.len());
    for entry in raw {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }
        let normalized = path::normalize(trimmed);
        if normalized.starts_with('/') {
            return Err(ConfigError::AbsoluteFilterPath(trimmed.to_string()));
        }
        if normalized.is_empty() {
            continue;
        }
        entries.push(normalized.to_string());
    }
    Ok(entries)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
