//! Output-target filtering
//!
//! Decides, once per discovered source file, whether that file belongs
//! in the report. Built from the resolved include/exclude lists and
//! immutable afterwards, so it can be queried from multiple threads.

pub mod path;

use crate::config::EffectiveConfig;

/// Include/exclude filter over repo-relative paths
#[derive(Debug, Clone)]
pub struct Filter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl Filter {
    /// Build the filter from the effective configuration. The lists are
    /// already normalized at resolve time.
    pub fn new(config: &EffectiveConfig) -> Self {
        Self {
            include: config.include.clone(),
            exclude: config.exclude.clone(),
        }
    }

    /// Whether the file in directory `path`, optionally named
    /// `file_name`, should appear in the report.
    ///
    /// With no include filters, everything relative passes; a raw path
    /// beginning with `/` lies outside the project root and is dropped.
    /// Exclude filters are consulted only after the include stage
    /// passes.
    pub fn is_output_target(&self, path: &str, file_name: Option<&str>) -> bool {
        let normalized = path::normalize(path);
        let candidate = match file_name {
            Some(name) if !name.is_empty() => {
                if normalized.is_empty() {
                    name.to_string()
                } else {
                    format!("{normalized}/{name}")
                }
            }
            _ => normalized.to_string(),
        };

        let included = if self.include.is_empty() {
            !path.starts_with('/')
        } else {
            self.include.iter().any(|e| path::matches(e, &candidate))
        };
        if !included {
            log::debug!("skipping {candidate}: no include filter matched");
            return false;
        }

        let excluded = self
            .exclude
            .iter()
            .any(|e| path::matches(e, &candidate) || path::matches(e, normalized));
        if excluded {
            log::debug!("skipping {candidate}: exclude filter matched");
        }
        !excluded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CliOverrides, SettingsSource};
    use std::io;

    struct NoSettings;

    impl SettingsSource for NoSettings {
        fn exists(&self, _path: &str) -> bool {
            false
        }

        fn read(&self, _path: &str) -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no settings"))
        }
    }

    /// Build a filter the same way the binary does: raw entries go
    /// through resolution and normalization first.
    fn filter_for(include: &[&str], exclude: &[&str]) -> Filter {
        let cli = CliOverrides {
            include: Some(include.join(",")),
            exclude: Some(exclude.join(",")),
            ..CliOverrides::default()
        };
        let config = EffectiveConfig::resolve(&NoSettings, ".covhtml.yml", &cli).unwrap();
        Filter::new(&config)
    }

    #[test]
    fn test_unfiltered_relative_path_included() {
        let filter = filter_for(&[], &[]);
        assert!(filter.is_output_target("path/to/dir1", None));
    }

    #[test]
    fn test_unfiltered_absolute_path_rejected() {
        let filter = filter_for(&[], &[]);
        assert!(!filter.is_output_target("/path/to/dir1", None));
    }

    #[test]
    fn test_include_exact_match() {
        let filter = filter_for(&["path/to/dir1"], &[]);
        assert!(filter.is_output_target("path/to/dir1", None));
        assert!(!filter.is_output_target("path/to/dir2", None));
    }

    #[test]
    fn test_include_entry_with_dot_slash_prefix() {
        let filter = filter_for(&["./path/to/dir1"], &[]);
        assert!(filter.is_output_target("path/to/dir1", None));
        assert!(!filter.is_output_target("path/to/dir2", None));
    }

    #[test]
    fn test_include_entry_with_trailing_slash() {
        let filter = filter_for(&["path/to/dir1/"], &[]);
        assert!(filter.is_output_target("path/to/dir1", None));
        assert!(!filter.is_output_target("path/to/dir2", None));
    }

    #[test]
    fn test_include_query_with_dot_slash_prefix() {
        let filter = filter_for(&["path/to/dir1"], &[]);
        assert!(filter.is_output_target("./path/to/dir1", None));
        assert!(!filter.is_output_target("./path/to/dir2", None));
    }

    #[test]
    fn test_include_query_with_trailing_slash() {
        let filter = filter_for(&["path/to/dir1"], &[]);
        assert!(filter.is_output_target("path/to/dir1/", None));
        assert!(!filter.is_output_target("path/to/dir2/", None));
    }

    #[test]
    fn test_include_ancestor_matches_at_segment_boundary() {
        let filter = filter_for(&["path/to"], &[]);
        assert!(filter.is_output_target("path/to/dir1", None));
        assert!(!filter.is_output_target("path/tooo/dir1", None));
    }

    #[test]
    fn test_include_any_of_several_entries() {
        let filter = filter_for(&["path/to/dir2", "path/to/dir3", "path/to/dir1"], &[]);
        assert!(filter.is_output_target("path/to/dir1", None));
        assert!(!filter.is_output_target("path/to/dir4", None));
    }

    #[test]
    fn test_include_matches_path_plus_file_name() {
        let filter = filter_for(&["path/to/dir1/file.go"], &[]);
        assert!(filter.is_output_target("path/to/dir1", Some("file.go")));
        assert!(!filter.is_output_target("path/to/dir1", Some("file2.go")));
    }

    #[test]
    fn test_include_nonempty_absolute_query_still_rejected() {
        let filter = filter_for(&["path/to/dir1"], &[]);
        assert!(!filter.is_output_target("/path/to/dir1", None));
    }

    #[test]
    fn test_exclude_exact_match() {
        let filter = filter_for(&[], &["path/to/dir1"]);
        assert!(!filter.is_output_target("path/to/dir1", None));
        assert!(filter.is_output_target("path/to/dir2", None));
    }

    #[test]
    fn test_exclude_entry_with_dot_slash_prefix() {
        let filter = filter_for(&[], &["./path/to/dir1"]);
        assert!(!filter.is_output_target("path/to/dir1", None));
        assert!(filter.is_output_target("path/to/dir2", None));
    }

    #[test]
    fn test_exclude_entry_with_trailing_slash() {
        let filter = filter_for(&[], &["path/to/dir1/"]);
        assert!(!filter.is_output_target("path/to/dir1", None));
        assert!(filter.is_output_target("path/to/dir2", None));
    }

    #[test]
    fn test_exclude_query_with_dot_slash_prefix() {
        let filter = filter_for(&[], &["path/to/dir1"]);
        assert!(!filter.is_output_target("./path/to/dir1", None));
        assert!(filter.is_output_target("./path/to/dir2", None));
    }

    #[test]
    fn test_exclude_query_with_trailing_slash() {
        let filter = filter_for(&[], &["path/to/dir1"]);
        assert!(!filter.is_output_target("path/to/dir1/", None));
        assert!(filter.is_output_target("path/to/dir2/", None));
    }

    #[test]
    fn test_exclude_ancestor_matches_at_segment_boundary() {
        let filter = filter_for(&[], &["path/to"]);
        assert!(!filter.is_output_target("path/to/dir1", None));
        assert!(filter.is_output_target("path/tooo/dir1", None));
    }

    #[test]
    fn test_exclude_any_of_several_entries() {
        let filter = filter_for(&[], &["path/to/dir2", "path/to/dir3", "path/to/dir1"]);
        assert!(!filter.is_output_target("path/to/dir1", None));
        assert!(filter.is_output_target("path/to/dir4", None));
    }

    #[test]
    fn test_exclude_matches_path_plus_file_name() {
        let filter = filter_for(&[], &["path/to/dir1/file.go"]);
        assert!(!filter.is_output_target("path/to/dir1", Some("file.go")));
        assert!(filter.is_output_target("path/to/dir1", Some("file2.go")));
    }

    #[test]
    fn test_exclude_applies_after_include_passes() {
        let filter = filter_for(&["path/to"], &["path/to/dir1"]);
        assert!(!filter.is_output_target("path/to/dir1", None));
        assert!(filter.is_output_target("path/to/dir2", None));
    }

    #[test]
    fn test_include_failure_wins_over_exclude_contents() {
        // A path that fails the include stage stays out no matter what
        // the exclude list says.
        let filter = filter_for(&["path/to/dir1"], &["unrelated"]);
        assert!(!filter.is_output_target("path/to/dir9", None));
    }

    #[test]
    fn test_empty_query_path_with_no_filters() {
        let filter = filter_for(&[], &[]);
        assert!(filter.is_output_target("", None));
    }

    #[test]
    fn test_empty_query_path_fails_include_stage() {
        let filter = filter_for(&["path/to"], &[]);
        assert!(!filter.is_output_target("", None));
    }

    #[test]
    fn test_root_level_file_matches_bare_file_entry() {
        let filter = filter_for(&["main.go"], &[]);
        assert!(filter.is_output_target("", Some("main.go")));
        assert!(!filter.is_output_target("", Some("other.go")));
    }
}
