//! Subcommand handlers.

use std::path::Path;

use super::args::ConfigAction;
use crate::config::{default_path, Config, ConfigError, Overrides, Settings, DEFAULT_CONFIG};

/// Errors from the `config` subcommand.
#[derive(Debug, thiserror::Error)]
pub enum ConfigActionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Config file already exists: {}", .0.display())]
    AlreadyExists(std::path::PathBuf),
    #[error("Failed to write config file '{}': {source}", path.display())]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Handle config subcommand actions, returning the text to print.
pub fn handle_config_action(
    action: ConfigAction,
    config_path: Option<&Path>,
) -> Result<String, ConfigActionError> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(config_path)?;
            let settings = Settings::resolve(&config, Overrides::default())?;
            let charset: String = settings.charset.iter().collect();
            let state = if path.exists() { "exists" } else { "not found" };
            Ok(format!(
                "Current configuration:\n  \
                 Resolution: {}\n  \
                 Charset: {:?}\n  \
                 Reverse: {}\n  \
                 Output: {}\n  \
                 HTML path: {}\n  \
                 Font: {}\n\n\
                 Config file: {} ({})",
                settings.resolution,
                charset,
                if settings.reverse { "yes" } else { "no" },
                settings.output,
                settings.html_path.display(),
                settings.font,
                path.display(),
                state
            ))
        }
        ConfigAction::Init => {
            if path.exists() {
                return Err(ConfigActionError::AlreadyExists(path));
            }

            // Create parent directories if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|source| ConfigActionError::Write {
                    path: path.clone(),
                    source,
                })?;
            }

            std::fs::write(&path, DEFAULT_CONFIG).map_err(|source| ConfigActionError::Write {
                path: path.clone(),
                source,
            })?;
            log::info!("Created config at {}", path.display());
            Ok(format!("Created config file: {}", path.display()))
        }
    }
}
