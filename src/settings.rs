//! Settings file support
//!
//! Output preferences for the command line tool can be kept in a TOML
//! file:
//!
//! ```toml
//! [output]
//! pretty_print = false
//! standalone = true
//! directory = "runes"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::SvgConfig;

/// Errors that can occur when loading or parsing settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Output preferences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pretty_print: bool,
    pub standalone: bool,
    /// Directory saved runes are written to
    pub directory: PathBuf,
}

/// TOML structure for deserializing settings
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSettings {
    output: Option<TomlOutput>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlOutput {
    pretty_print: Option<bool>,
    standalone: Option<bool>,
    directory: Option<PathBuf>,
}

impl Settings {
    /// Load settings from TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from TOML string. Missing keys keep their defaults.
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        let parsed: TomlSettings = toml::from_str(content)?;
        let defaults = Self::default();

        let Some(output) = parsed.output else {
            return Ok(defaults);
        };

        Ok(Settings {
            pretty_print: output.pretty_print.unwrap_or(defaults.pretty_print),
            standalone: output.standalone.unwrap_or(defaults.standalone),
            directory: output.directory.unwrap_or(defaults.directory),
        })
    }

    /// SVG configuration described by these settings
    pub fn svg_config(&self) -> SvgConfig {
        SvgConfig::new()
            .with_pretty_print(self.pretty_print)
            .with_standalone(self.standalone)
    }
}

impl Default for Settings {
    fn default() -> Self {
        let svg = SvgConfig::default();
        Self {
            pretty_print: svg.pretty_print,
            standalone: svg.standalone,
            directory: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.pretty_print);
        assert!(!settings.standalone);
        assert_eq!(settings.directory, PathBuf::from("."));
    }

    #[test]
    fn test_parse_full() {
        let toml_str = r#"
[output]
pretty_print = false
standalone = true
directory = "runes"
"#;
        let settings = Settings::from_str(toml_str).expect("Should parse");
        assert!(!settings.pretty_print);
        assert!(settings.standalone);
        assert_eq!(settings.directory, PathBuf::from("runes"));

        let config = settings.svg_config();
        assert!(!config.pretty_print);
        assert!(config.standalone);
    }

    #[test]
    fn test_parse_partial() {
        let settings = Settings::from_str("[output]\nstandalone = true\n").expect("Should parse");
        assert!(settings.pretty_print);
        assert!(settings.standalone);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Settings::from_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = Settings::from_str("[output]\nstroke = \"red\"\n");
        assert!(matches!(result, Err(SettingsError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Settings::from_file(Path::new("/nonexistent/runa.toml"));
        assert!(matches!(result, Err(SettingsError::IoError(_))));
    }
}
