//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction};
pub use commands::{handle_config_action, ConfigActionError};
pub use enums::OutputKind;

use crate::config::Overrides;

impl Args {
    /// Settings given on the command line, for merging over the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            resolution: self.resolution,
            charset: self.charset.clone(),
            reverse: self.reverse,
            output: self.output.map(Into::into),
            html_path: self.html_path.clone(),
        }
    }

    /// Log level selected by `-v` flags.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
