//! Render pipeline: pad, tile, score, match.
//!
//! [`RenderPipeline::run`] turns a [`PixelGrid`] into a [`CharGrid`] with one
//! character per tile. The resolution is the number of tiles per row of the
//! padded image.

use std::fmt;

use crate::matching::{CharBrightnessIndex, GlyphRaster};
use crate::picture::{self, PixelGrid, TileError};

/// Fewest distinct characters a render needs.
pub const MIN_CHARSET_SIZE: usize = 2;

/// Errors that can occur while configuring or running a render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("resolution {requested} is outside {min}..={max} or not a power of two")]
    InvalidResolution {
        requested: usize,
        min: usize,
        max: usize,
    },
    #[error("charset has {available} character(s), at least {required} are needed")]
    InsufficientCharset { available: usize, required: usize },
    #[error("cannot tile image: {0}")]
    Tiling(#[from] TileError),
}

/// Rendered characters, one per tile, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl CharGrid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// One row of characters.
    pub fn row(&self, row: usize) -> &[char] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Rows from top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &[char]> + '_ {
        // chunks_exact panics on 0
        self.cells.chunks_exact(self.cols.max(1))
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }
}

impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            for c in line {
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Stateless driver for a single render pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderPipeline;

impl RenderPipeline {
    /// Render `image` at `resolution` tiles per row.
    ///
    /// With `reversed` set, each tile is matched against `1 - brightness`,
    /// swapping light and dark without touching the index. The index is
    /// borrowed for the whole pass, so it cannot change mid-render.
    pub fn run<R: GlyphRaster>(
        image: &PixelGrid,
        resolution: usize,
        index: &CharBrightnessIndex<R>,
        reversed: bool,
    ) -> Result<CharGrid, RenderError> {
        if index.len() < MIN_CHARSET_SIZE {
            return Err(RenderError::InsufficientCharset {
                available: index.len(),
                required: MIN_CHARSET_SIZE,
            });
        }

        let padded = picture::pad_to_power_of_two(image);
        let tiles = picture::tile(&padded, resolution)?;

        let mut cells = Vec::with_capacity(tiles.len());
        for tile in &tiles {
            let score = picture::brightness(tile);
            let probe = if reversed { 1.0 - score } else { score };
            // non-empty index always yields a match
            let c = index.query(probe).ok_or(RenderError::InsufficientCharset {
                available: 0,
                required: MIN_CHARSET_SIZE,
            })?;
            cells.push(c);
        }

        log::debug!(
            "Rendered {}x{} chars (reversed: {})",
            tiles.cols(),
            tiles.rows(),
            reversed
        );

        Ok(CharGrid {
            rows: tiles.rows(),
            cols: tiles.cols(),
            cells,
        })
    }
}
