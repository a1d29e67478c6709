//! Image preparation: pixel grids, padding, tiling and brightness scoring.
//!
//! The render path is:
//!
//! 1. **Padding** - grow both dimensions to the next power of two
//! 2. **Tiling** - split into square tiles, N per row
//! 3. **Scoring** - reduce each tile to one brightness value in `[0, 1]`

mod brightness;
mod grid;
mod load;
mod pad;
mod tile;

pub use brightness::{brightness, luminance, BLUE_WEIGHT, GREEN_WEIGHT, RED_WEIGHT};
pub use grid::{GridError, PixelGrid, Rgb};
pub use load::{from_rgb_image, load, LoadError};
pub use pad::{next_power_of_two, pad_to_power_of_two, padded_dimensions, PADDING_COLOR};
pub use tile::{tile, tile_size, TileError, Tiles};
