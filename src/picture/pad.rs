//! Power-of-two padding.

use super::grid::{PixelGrid, Rgb};

/// Color used for the border added around padded images.
pub const PADDING_COLOR: Rgb = Rgb::WHITE;

/// Smallest power of two that is `>= n`. Zero maps to 1.
pub fn next_power_of_two(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// Dimensions `(width, height)` a grid of the given size is padded to.
pub fn padded_dimensions(width: usize, height: usize) -> (usize, usize) {
    (next_power_of_two(width), next_power_of_two(height))
}

/// Pad a grid so both dimensions are powers of two.
///
/// The original is copied into the center of a grid filled with
/// [`PADDING_COLOR`]. Offsets use integer division, so when the extra space
/// is odd the original sits one pixel closer to the top/left edge.
pub fn pad_to_power_of_two(grid: &PixelGrid) -> PixelGrid {
    let (width, height) = (grid.width(), grid.height());
    let (padded_width, padded_height) = padded_dimensions(width, height);

    if padded_width == width && padded_height == height {
        return grid.clone();
    }

    let col_offset = (padded_width - width) / 2;
    let row_offset = (padded_height - height) / 2;

    log::debug!(
        "Padding {}x{} to {}x{} (offset {},{})",
        width,
        height,
        padded_width,
        padded_height,
        col_offset,
        row_offset
    );

    PixelGrid::from_fn(padded_width, padded_height, |x, y| {
        if x < col_offset || y < row_offset {
            return PADDING_COLOR;
        }
        grid.get(x - col_offset, y - row_offset)
            .unwrap_or(PADDING_COLOR)
    })
}
