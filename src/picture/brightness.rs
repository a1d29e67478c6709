//! Average perceptual brightness of a grid.

use super::grid::{PixelGrid, Rgb};

/// ITU-R BT.709 luminance weights.
pub const RED_WEIGHT: f64 = 0.2126;
pub const GREEN_WEIGHT: f64 = 0.7152;
pub const BLUE_WEIGHT: f64 = 0.0722;

const MAX_CHANNEL: f64 = 255.0;

/// Luminance of one sample, in channel units (0-255).
#[inline]
pub fn luminance(p: Rgb) -> f64 {
    p.r as f64 * RED_WEIGHT + p.g as f64 * GREEN_WEIGHT + p.b as f64 * BLUE_WEIGHT
}

/// Mean luminance of all samples, normalized to `[0, 1]`.
///
/// An empty grid scores 0.
pub fn brightness(grid: &PixelGrid) -> f64 {
    let pixels = grid.pixels();
    if pixels.is_empty() {
        return 0.0;
    }
    let total: f64 = pixels.iter().map(|&p| luminance(p)).sum();
    (total / pixels.len() as f64 / MAX_CHANNEL).clamp(0.0, 1.0)
}
