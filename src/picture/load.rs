//! Decoding image files into pixel grids.

use std::path::{Path, PathBuf};

use super::grid::{PixelGrid, Rgb};

/// Errors that can occur when loading an image file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },
}

/// Decode the image at `path` into an RGB [`PixelGrid`].
///
/// Any format the `image` crate recognises is accepted; alpha is dropped.
pub fn load(path: &Path) -> Result<PixelGrid, LoadError> {
    let decoded = ::image::open(path).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = decoded.to_rgb8();
    log::info!(
        "Loaded {} ({}x{})",
        path.display(),
        rgb.width(),
        rgb.height()
    );
    Ok(from_rgb_image(&rgb))
}

/// Convert an already decoded RGB buffer.
pub fn from_rgb_image(img: &::image::RgbImage) -> PixelGrid {
    PixelGrid::from_fn(img.width() as usize, img.height() as usize, |x, y| {
        let ::image::Rgb([r, g, b]) = *img.get_pixel(x as u32, y as u32);
        Rgb::new(r, g, b)
    })
}
