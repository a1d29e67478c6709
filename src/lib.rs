//! ascii-art library crate.
//!
//! Converts raster images into grids of characters whose glyph density
//! follows the image's local brightness.
//!
//! - [`picture`] - pixel grids, power-of-two padding, tiling, brightness
//! - [`matching`] - glyph bitmaps and the nearest-brightness character index
//! - [`pipeline`] - one render pass from image to [`pipeline::CharGrid`]
//! - [`session`] - render state driven by the interactive [`shell`]

pub mod cli;
pub mod config;
pub mod matching;
pub mod output;
pub mod picture;
pub mod pipeline;
pub mod session;
pub mod shell;
