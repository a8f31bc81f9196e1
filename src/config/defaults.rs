//! Built-in defaults (layer 1)
//!
//! Hardcoded defaults for all configuration values. Include and
//! exclude default to empty lists, meaning "unrestricted".

use super::Theme;

/// Built-in default configuration values
#[derive(Debug, Clone)]
pub struct Defaults {
    /// Cover profile to read (default: "coverage.out")
    pub input: String,

    /// Report file to write (default: "coverage.html")
    pub output: String,

    /// Report theme (default: dark)
    pub theme: Theme,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            input: "coverage.out".to_string(),
            output: "coverage.html".to_string(),
            theme: Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let defaults = Defaults::default();
        assert_eq!(defaults.input, "coverage.out");
        assert_eq!(defaults.output, "coverage.html");
        assert_eq!(defaults.theme, Theme::Dark);
    }
}
