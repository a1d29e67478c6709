//! Standalone HTML page output.

use std::fs;
use std::path::{Path, PathBuf};

use super::{AsciiOutput, OutputError};
use crate::pipeline::CharGrid;

/// File written when no path is configured.
pub const DEFAULT_HTML_PATH: &str = "out.html";

/// Monospace font used when none is configured.
pub const DEFAULT_FONT: &str = "Courier New";

/// Writes each grid as a `<pre>` block in its own HTML file, replacing any
/// previous contents.
#[derive(Debug, Clone)]
pub struct HtmlOutput {
    path: PathBuf,
    font: String,
}

impl HtmlOutput {
    pub fn new(path: impl Into<PathBuf>, font: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            font: font.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full page markup for `grid`.
    pub fn to_html(&self, grid: &CharGrid) -> String {
        let mut body = String::with_capacity(grid.rows() * (grid.cols() + 1));
        for row in grid.lines() {
            for &c in row {
                escape_into(c, &mut body);
            }
            body.push('\n');
        }

        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>ASCII Art</title>\n\
             </head>\n\
             <body style=\"margin:0;background:#fff;color:#000\">\n\
             <pre style=\"font-family:'{font}',monospace;font-size:6px;line-height:6px;letter-spacing:0\">\n\
             {body}</pre>\n\
             </body>\n\
             </html>\n",
            font = escape_html(&self.font),
        )
    }
}

impl AsciiOutput for HtmlOutput {
    fn out(&mut self, grid: &CharGrid) -> Result<(), OutputError> {
        fs::write(&self.path, self.to_html(grid)).map_err(|source| OutputError::File {
            path: self.path.clone(),
            source,
        })?;
        log::info!("Wrote {}x{} chars to {}", grid.cols(), grid.rows(), self.path.display());
        Ok(())
    }
}

fn escape_into(c: char, out: &mut String) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(c),
    }
}

/// Escape the characters HTML treats specially.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        escape_into(c, &mut out);
    }
    out
}
