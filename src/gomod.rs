//! Module path detection via go.mod
//!
//! Profile entries carry module-qualified names; stripping the module
//! path yields the repo-relative path the filters and the source
//! lookup operate on. A missing go.mod is not an error.

use std::fs;
use std::path::Path;

/// Read the module path from `go.mod` under `dir`, if present.
pub fn module_path(dir: &Path) -> Option<String> {
    let contents = fs::read_to_string(dir.join("go.mod")).ok()?;
    for line in contents.lines() {
        if let Some(rest) = line.trim().strip_prefix("module") {
            // the keyword must be followed by whitespace, not part of a
            // longer identifier
            if !rest.starts_with(char::is_whitespace) {
                continue;
            }
            let name = rest.trim().trim_matches('"');
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }
    }
    None
}

/// Strip the module prefix from a profile file name, yielding a
/// repo-relative path. Names outside the module are returned as-is;
/// the prefix only counts at a `/` boundary, so a sibling module whose
/// path merely starts with the same string is left alone.
pub fn relative_name<'a>(name: &'a str, module: Option<&str>) -> &'a str {
    let Some(module) = module else {
        return name;
    };
    match name.strip_prefix(module) {
        Some(rest) if rest.starts_with('/') => &rest[1..],
        Some("") => "",
        _ => name,
    }
}
