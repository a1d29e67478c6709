//! Render session state driven by the command shell.
//!
//! [`AsciiArt`] owns the source image, the charset index and the current
//! render settings. All mutations either succeed completely or leave the
//! session untouched.

use crate::matching::{CharBrightnessIndex, Font8x8, GlyphRaster, IndexError};
use crate::picture::{padded_dimensions, PixelGrid};
use crate::pipeline::{CharGrid, RenderError, RenderPipeline, MIN_CHARSET_SIZE};

/// Resolution used when nothing else is configured.
pub const DEFAULT_RESOLUTION: usize = 128;

/// Charset used when nothing else is configured.
pub const DEFAULT_CHARSET: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// An image plus everything needed to render it.
#[derive(Debug)]
pub struct AsciiArt<R = Font8x8> {
    image: PixelGrid,
    index: CharBrightnessIndex<R>,
    resolution: usize,
    reversed: bool,
}

impl AsciiArt<Font8x8> {
    /// Start a session using the bundled font.
    pub fn new(
        image: PixelGrid,
        charset: impl IntoIterator<Item = char>,
        resolution: usize,
        reversed: bool,
    ) -> Result<Self, IndexError> {
        let index = CharBrightnessIndex::new(charset)?;
        Ok(Self::with_index(image, index, resolution, reversed))
    }
}

impl<R: GlyphRaster> AsciiArt<R> {
    /// Start a session around an existing index.
    ///
    /// A `resolution` that isn't valid for `image` is replaced by the nearest
    /// valid one, so a fresh session can always render.
    pub fn with_index(
        image: PixelGrid,
        index: CharBrightnessIndex<R>,
        resolution: usize,
        reversed: bool,
    ) -> Self {
        let (min, max) = resolution_bounds(&image);
        let fitted = fit_resolution(resolution, min, max);
        if fitted != resolution {
            log::warn!(
                "Resolution {} is not valid for a {}x{} image, using {}",
                resolution,
                image.width(),
                image.height(),
                fitted
            );
        }
        Self {
            image,
            index,
            resolution: fitted,
            reversed,
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Inclusive `(min, max)` range of accepted resolutions.
    pub fn resolution_bounds(&self) -> (usize, usize) {
        resolution_bounds(&self.image)
    }

    /// Change the number of tiles per row.
    ///
    /// `n` must be a power of two within [`resolution_bounds`](Self::resolution_bounds);
    /// otherwise the current resolution is kept.
    pub fn set_resolution(&mut self, n: usize) -> Result<(), RenderError> {
        let (min, max) = self.resolution_bounds();
        if !n.is_power_of_two() || n < min || n > max {
            return Err(RenderError::InvalidResolution {
                requested: n,
                min,
                max,
            });
        }
        log::info!("Resolution {} -> {}", self.resolution, n);
        self.resolution = n;
        Ok(())
    }

    /// Register a character. Returns `false` if it was already present.
    pub fn add_char(&mut self, c: char) -> bool {
        self.index.add(c)
    }

    /// Unregister a character. Returns `false` if it wasn't present.
    pub fn remove_char(&mut self, c: char) -> bool {
        self.index.remove(c)
    }

    /// Register several characters, returning how many were new.
    pub fn add_chars(&mut self, chars: impl IntoIterator<Item = char>) -> usize {
        chars.into_iter().filter(|&c| self.index.add(c)).count()
    }

    /// Unregister several characters, returning how many were present.
    pub fn remove_chars(&mut self, chars: impl IntoIterator<Item = char>) -> usize {
        chars.into_iter().filter(|&c| self.index.remove(c)).count()
    }

    /// Registered characters, ascending.
    pub fn charset(&self) -> Vec<char> {
        self.index.chars()
    }

    pub fn index(&self) -> &CharBrightnessIndex<R> {
        &self.index
    }

    pub fn image(&self) -> &PixelGrid {
        &self.image
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Flip between normal and reversed brightness mapping.
    pub fn toggle_reverse(&mut self) -> bool {
        self.reversed = !self.reversed;
        self.reversed
    }

    /// Render the image with the current settings.
    pub fn render(&self) -> Result<CharGrid, RenderError> {
        if self.index.len() < MIN_CHARSET_SIZE {
            return Err(RenderError::InsufficientCharset {
                available: self.index.len(),
                required: MIN_CHARSET_SIZE,
            });
        }
        RenderPipeline::run(&self.image, self.resolution, &self.index, self.reversed)
    }
}

/// Resolutions valid for `image`: powers of two from `max(1, w / h)` to `w`,
/// measured on the padded image.
///
/// The lower bound keeps square tiles no taller than the image.
pub fn resolution_bounds(image: &PixelGrid) -> (usize, usize) {
    let (width, height) = padded_dimensions(image.width(), image.height());
    ((width / height).max(1), width)
}

/// Largest power of two `<= n` (and at least 1).
fn prev_power_of_two(n: usize) -> usize {
    if n <= 1 {
        1
    } else {
        1 << (usize::BITS - 1 - n.leading_zeros())
    }
}

fn fit_resolution(requested: usize, min: usize, max: usize) -> usize {
    prev_power_of_two(requested).clamp(min, max)
}
