//! Glyph bitmaps and the rasters that produce them.

use font8x8::{
    UnicodeFonts, BASIC_FONTS, BLOCK_FONTS, BOX_FONTS, GREEK_FONTS, LATIN_FONTS, MISC_FONTS,
};

/// Side length of the bundled 8x8 bitmap font.
pub const FONT_SIZE: usize = 8;

/// Drawn for characters the bundled font has no bitmap for (a framed box).
const REPLACEMENT_GLYPH: [u8; 8] = [0x7E, 0x81, 0xA5, 0x81, 0xBD, 0x99, 0x81, 0x7E];

/// Fixed-size on/off raster of a single character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl GlyphBitmap {
    /// Build a bitmap from row-major cells. Returns `None` if the cell count
    /// doesn't match the dimensions.
    pub fn new(width: usize, height: usize, cells: Vec<bool>) -> Option<Self> {
        (cells.len() == width * height).then_some(Self {
            width,
            height,
            cells,
        })
    }

    /// Decode eight row bytes in font8x8 layout (bit 0 is the leftmost column).
    pub fn from_rows(rows: [u8; 8]) -> Self {
        let mut cells = Vec::with_capacity(FONT_SIZE * FONT_SIZE);
        for row in rows {
            for bit in 0..FONT_SIZE {
                cells.push(row & (1 << bit) != 0);
            }
        }
        Self {
            width: FONT_SIZE,
            height: FONT_SIZE,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_on(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    /// Number of cells switched on.
    pub fn on_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Fraction of cells switched on, in `[0, 1]`.
    pub fn brightness(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.on_count() as f64 / self.cells.len() as f64
    }
}

/// Turns a character into a [`GlyphBitmap`].
///
/// Implementations must be deterministic: the same character always yields
/// the same bitmap.
pub trait GlyphRaster {
    fn rasterize(&self, c: char) -> GlyphBitmap;
}

impl<F> GlyphRaster for F
where
    F: Fn(char) -> GlyphBitmap,
{
    fn rasterize(&self, c: char) -> GlyphBitmap {
        self(c)
    }
}

/// The public-domain font8x8 bitmap font.
#[derive(Debug, Clone, Copy, Default)]
pub struct Font8x8;

impl Font8x8 {
    fn lookup(c: char) -> Option<[u8; 8]> {
        BASIC_FONTS
            .get(c)
            .or_else(|| LATIN_FONTS.get(c))
            .or_else(|| BOX_FONTS.get(c))
            .or_else(|| BLOCK_FONTS.get(c))
            .or_else(|| GREEK_FONTS.get(c))
            .or_else(|| MISC_FONTS.get(c))
    }
}

impl GlyphRaster for Font8x8 {
    fn rasterize(&self, c: char) -> GlyphBitmap {
        let rows = Self::lookup(c).unwrap_or_else(|| {
            log::warn!("No bitmap for {:?} (U+{:04X}), using replacement glyph", c, c as u32);
            REPLACEMENT_GLYPH
        });
        GlyphBitmap::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_bit_order() {
        let bitmap = GlyphBitmap::from_rows([0b0000_0001, 0, 0, 0, 0, 0, 0, 0b1000_0000]);
        assert!(bitmap.is_on(0, 0));
        assert!(!bitmap.is_on(7, 0));
        assert!(bitmap.is_on(7, 7));
        assert_eq!(bitmap.on_count(), 2);
        assert!((bitmap.brightness() - 2.0 / 64.0).abs() < 1e-12);
    }

    #[test]
    fn test_space_is_blank() {
        assert_eq!(Font8x8.rasterize(' ').on_count(), 0);
    }

    #[test]
    fn test_denser_glyphs_are_brighter() {
        let dot = Font8x8.rasterize('.').brightness();
        let at = Font8x8.rasterize('@').brightness();
        let block = Font8x8.rasterize('█').brightness();
        assert!(dot < at);
        assert!((block - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rasterization_is_deterministic() {
        assert_eq!(Font8x8.rasterize('Q'), Font8x8.rasterize('Q'));
    }

    #[test]
    fn test_unknown_char_uses_replacement() {
        // CJK is outside every bundled block
        let bitmap = Font8x8.rasterize('漢');
        assert_eq!(bitmap, GlyphBitmap::from_rows(REPLACEMENT_GLYPH));
    }

    #[test]
    fn test_closure_raster() {
        let raster = |_c: char| GlyphBitmap::new(2, 1, vec![true, false]).unwrap();
        assert_eq!(raster.rasterize('x').brightness(), 0.5);
    }

    #[test]
    fn test_new_rejects_bad_cell_count() {
        assert!(GlyphBitmap::new(2, 2, vec![true; 3]).is_none());
    }
}
