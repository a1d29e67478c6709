//! Configuration file handling for ascii-art.
//!
//! Loads configuration from `~/.config/ascii-art/config.toml` or a custom path,
//! then merges it with command-line overrides into [`Settings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::output::{OutputMethod, DEFAULT_FONT, DEFAULT_HTML_PATH};
use crate::session::{DEFAULT_CHARSET, DEFAULT_RESOLUTION};
use crate::shell::parse_char_spec;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Tiles per row
    pub resolution: Option<usize>,
    /// Initial charset, in `add` command syntax
    pub charset: Option<String>,
    #[serde(default)]
    pub reverse: bool,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub method: Option<OutputMethod>,
    pub html_path: Option<PathBuf>,
    pub font: Option<String>,
}

/// Commented config written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# ascii-art configuration

[render]
# Tiles per row; must be a power of two. Adjusted to fit each image.
resolution = 128
# Initial charset: a single char, "space", "all", or a range such as "0-9"
charset = "0-9"
# Map bright areas to sparse characters
reverse = false

[output]
# console or html
method = "console"
# Where the html writer puts its page
html_path = "out.html"
# Font family used by the html page
font = "Courier New"
"#;

impl Config {
    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// location is tried and a missing file yields the default config.
    /// Returns an error if a file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = default_path();
                if !p.exists() {
                    log::debug!("No config at {}, using defaults", p.display());
                    return Ok(Config::default());
                }
                p
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            source: e,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid charset '{0}': expected a char, \"space\", \"all\" or a range like \"a-z\"")]
    InvalidCharset(String),
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-art").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-art/config.toml")
        })
}

/// Values supplied on the command line; `None` defers to the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub resolution: Option<usize>,
    pub charset: Option<String>,
    pub reverse: bool,
    pub output: Option<OutputMethod>,
    pub html_path: Option<PathBuf>,
}

/// Effective settings after merging CLI > config file > built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub resolution: usize,
    pub charset: Vec<char>,
    pub reverse: bool,
    pub output: OutputMethod,
    pub html_path: PathBuf,
    pub font: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            charset: DEFAULT_CHARSET.to_vec(),
            reverse: false,
            output: OutputMethod::default(),
            html_path: PathBuf::from(DEFAULT_HTML_PATH),
            font: DEFAULT_FONT.to_string(),
        }
    }
}

impl Settings {
    pub fn resolve(config: &Config, overrides: Overrides) -> Result<Self, ConfigError> {
        let defaults = Settings::default();

        let charset = match overrides.charset.as_deref().or(config.render.charset.as_deref()) {
            Some(spec) => {
                parse_char_spec(spec).ok_or_else(|| ConfigError::InvalidCharset(spec.to_string()))?
            }
            None => defaults.charset,
        };

        Ok(Self {
            resolution: overrides
                .resolution
                .or(config.render.resolution)
                .unwrap_or(defaults.resolution),
            charset,
            // either source can switch reverse on
            reverse: overrides.reverse || config.render.reverse,
            output: overrides
                .output
                .or(config.output.method)
                .unwrap_or(defaults.output),
            html_path: overrides
                .html_path
                .or_else(|| config.output.html_path.clone())
                .unwrap_or(defaults.html_path),
            font: config.output.font.clone().unwrap_or(defaults.font),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.render.resolution, Some(128));
        assert_eq!(config.render.charset.as_deref(), Some("0-9"));
        assert_eq!(config.output.method, Some(OutputMethod::Console));
        assert_eq!(Settings::resolve(&config, Overrides::default()).unwrap(), Settings::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(Config::parse("[render]\nresolutoin = 4\n").is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let config = Config::parse(
            "[render]\nresolution = 64\ncharset = \"a-c\"\n[output]\nmethod = \"html\"\nfont = \"Monaco\"\n",
        )
        .unwrap();
        let settings = Settings::resolve(
            &config,
            Overrides {
                resolution: Some(16),
                output: Some(OutputMethod::Console),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(settings.resolution, 16);
        assert_eq!(settings.charset, vec!['a', 'b', 'c']);
        assert_eq!(settings.output, OutputMethod::Console);
        assert_eq!(settings.font, "Monaco");
    }

    #[test]
    fn test_invalid_charset() {
        let err = Settings::resolve(
            &Config::default(),
            Overrides {
                charset: Some("abc".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCharset(ref s) if s == "abc"));
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[render]\nreverse = true\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert!(config.render.reverse);
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[render\n").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }
}
