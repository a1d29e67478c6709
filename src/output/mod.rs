//! Writers for rendered character grids.

mod console;
mod html;

pub use console::ConsoleOutput;
pub use html::{escape_html, HtmlOutput, DEFAULT_FONT, DEFAULT_HTML_PATH};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pipeline::CharGrid;

/// Errors that can occur while writing a rendered grid.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to write '{}': {source}", path.display())]
    File {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Destination for a rendered [`CharGrid`].
pub trait AsciiOutput {
    fn out(&mut self, grid: &CharGrid) -> Result<(), OutputError>;
}

/// Which writer rendered grids go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMethod {
    /// Plain text on stdout
    #[default]
    Console,
    /// Standalone HTML file
    Html,
}

impl OutputMethod {
    pub fn name(&self) -> &'static str {
        match self {
            OutputMethod::Console => "console",
            OutputMethod::Html => "html",
        }
    }
}

impl fmt::Display for OutputMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "console" => Ok(OutputMethod::Console),
            "html" => Ok(OutputMethod::Html),
            other => Err(format!("unknown output method '{}'", other)),
        }
    }
}
