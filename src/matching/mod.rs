//! Matching tile brightness to characters.
//!
//! Each character's intrinsic brightness is the fraction of lit cells in its
//! glyph bitmap. [`CharBrightnessIndex`] keeps those values normalized over the
//! current charset and answers nearest-brightness queries.

mod glyph;
mod index;

pub use glyph::{Font8x8, GlyphBitmap, GlyphRaster, FONT_SIZE};
pub use index::{CharBrightnessIndex, IndexError};
