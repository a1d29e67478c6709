//! Splitting a grid into equal square tiles.

use super::grid::PixelGrid;

/// Reasons a grid cannot be tiled at a given resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TileError {
    #[error("resolution must be positive")]
    ZeroResolution,
    #[error("resolution {resolution} exceeds grid width {width}")]
    ExceedsWidth { resolution: usize, width: usize },
    #[error("resolution {resolution} does not evenly divide grid width {width}")]
    UnevenWidth { resolution: usize, width: usize },
    #[error("tile size {tile_size} does not fit grid height {height}")]
    UnevenHeight { tile_size: usize, height: usize },
}

/// Tiles of a grid in row-major order.
#[derive(Debug, Clone)]
pub struct Tiles {
    rows: usize,
    cols: usize,
    tile_size: usize,
    tiles: Vec<PixelGrid>,
}

impl Tiles {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Side length of each square tile, in pixels.
    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at row `row`, column `col`.
    pub fn get(&self, row: usize, col: usize) -> Option<&PixelGrid> {
        if row < self.rows && col < self.cols {
            self.tiles.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PixelGrid> {
        self.tiles.iter()
    }
}

impl<'a> IntoIterator for &'a Tiles {
    type Item = &'a PixelGrid;
    type IntoIter = std::slice::Iter<'a, PixelGrid>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// Side length of the tiles produced for `resolution` tiles per row.
///
/// Checks every constraint [`tile`] enforces without copying any pixels.
pub fn tile_size(width: usize, height: usize, resolution: usize) -> Result<usize, TileError> {
    if resolution == 0 {
        return Err(TileError::ZeroResolution);
    }
    if resolution > width {
        return Err(TileError::ExceedsWidth { resolution, width });
    }
    if width % resolution != 0 {
        return Err(TileError::UnevenWidth { resolution, width });
    }
    let tile_size = width / resolution;
    if tile_size > height || height % tile_size != 0 {
        return Err(TileError::UnevenHeight { tile_size, height });
    }
    Ok(tile_size)
}

/// Partition `grid` into square tiles, `resolution` tiles per row.
///
/// The tile side is `width / resolution` and the number of rows follows from
/// the height. Tiles never overlap and together cover every pixel once.
pub fn tile(grid: &PixelGrid, resolution: usize) -> Result<Tiles, TileError> {
    let size = tile_size(grid.width(), grid.height(), resolution)?;
    let cols = resolution;
    let rows = grid.height() / size;

    log::debug!(
        "Tiling {}x{} grid into {}x{} tiles of {}px",
        grid.width(),
        grid.height(),
        cols,
        rows,
        size
    );

    let mut tiles = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            tiles.push(grid.region(col * size, row * size, size, size));
        }
    }

    Ok(Tiles {
        rows,
        cols,
        tile_size: size,
        tiles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picture::grid::Rgb;

    fn numbered(width: usize, height: usize) -> PixelGrid {
        PixelGrid::from_fn(width, height, |x, y| Rgb::gray((y * width + x) as u8))
    }

    #[test]
    fn test_square_grid_tiles_per_row() {
        let tiles = tile(&numbered(8, 8), 4).unwrap();
        assert_eq!((tiles.rows(), tiles.cols()), (4, 4));
        assert_eq!(tiles.tile_size(), 2);
        assert_eq!(tiles.len(), 16);
    }

    #[test]
    fn test_wide_grid_has_fewer_rows() {
        let tiles = tile(&numbered(16, 4), 8).unwrap();
        assert_eq!((tiles.rows(), tiles.cols()), (2, 8));
        assert_eq!(tiles.tile_size(), 2);
    }

    #[test]
    fn test_tiles_are_row_major() {
        let tiles = tile(&numbered(4, 4), 2).unwrap();
        assert_eq!(tiles.get(0, 1).unwrap().get(0, 0), Some(Rgb::gray(2)));
        assert_eq!(tiles.get(1, 0).unwrap().get(0, 0), Some(Rgb::gray(8)));
        assert_eq!(tiles.get(1, 1).unwrap().get(1, 1), Some(Rgb::gray(15)));
        assert!(tiles.get(2, 0).is_none());
    }

    #[test]
    fn test_rejects_invalid_resolutions() {
        let grid = numbered(8, 8);
        assert_eq!(tile(&grid, 0).unwrap_err(), TileError::ZeroResolution);
        assert_eq!(
            tile(&grid, 16).unwrap_err(),
            TileError::ExceedsWidth {
                resolution: 16,
                width: 8
            }
        );
        assert_eq!(
            tile(&grid, 3).unwrap_err(),
            TileError::UnevenWidth {
                resolution: 3,
                width: 8
            }
        );
    }

    #[test]
    fn test_rejects_tiles_taller_than_grid() {
        // 16x2 at resolution 2 would need 8px tiles
        let err = tile(&numbered(16, 2), 2).unwrap_err();
        assert_eq!(
            err,
            TileError::UnevenHeight {
                tile_size: 8,
                height: 2
            }
        );
    }
}
