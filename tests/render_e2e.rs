//! End-to-end tests for the render path: padding, tiling, scoring and matching.

use ascii_art::matching::CharBrightnessIndex;
use ascii_art::picture::{
    brightness, next_power_of_two, pad_to_power_of_two, tile, PixelGrid, Rgb, PADDING_COLOR,
};
use ascii_art::pipeline::{RenderError, RenderPipeline};
use ascii_art::session::{AsciiArt, DEFAULT_CHARSET};
use std::collections::HashSet;

/// Helper to create a synthetic image with the given pattern.
fn make_image(pattern: &str, width: usize, height: usize) -> PixelGrid {
    match pattern {
        "gradient_h" => PixelGrid::from_fn(width, height, |x, _| {
            Rgb::gray((x * 255 / (width - 1).max(1)) as u8)
        }),
        "numbered" => PixelGrid::from_fn(width, height, |x, y| {
            let n = y * width + x;
            Rgb::new((n % 256) as u8, (n / 256) as u8, 0)
        }),
        "black" => PixelGrid::filled(width, height, Rgb::BLACK),
        _ => panic!("Unknown pattern: {}", pattern),
    }
}

// ==================== Padding ====================

#[test]
fn test_padding_never_shrinks_and_yields_powers_of_two() {
    for (w, h) in [(1, 1), (3, 5), (8, 6), (17, 64), (100, 30), (640, 480)] {
        let padded = pad_to_power_of_two(&make_image("black", w, h));
        assert!(padded.width() >= w && padded.height() >= h);
        assert!(padded.width().is_power_of_two(), "{}x{}", w, h);
        assert!(padded.height().is_power_of_two(), "{}x{}", w, h);
        assert_eq!(padded.width(), next_power_of_two(w));
        assert_eq!(padded.height(), next_power_of_two(h));
    }
}

#[test]
fn test_padding_keeps_every_original_pixel() {
    let original = make_image("numbered", 5, 3);
    let padded = pad_to_power_of_two(&original);
    // 5x3 -> 8x4, offsets (1, 0)
    for y in 0..3 {
        for x in 0..5 {
            assert_eq!(padded.get(x + 1, y), original.get(x, y));
        }
    }
    assert_eq!(padded.get(0, 0), Some(PADDING_COLOR));
    assert_eq!(padded.get(7, 3), Some(PADDING_COLOR));
}

// ==================== Tiling ====================

#[test]
fn test_8x6_pads_to_8x8_and_tiles_into_16() {
    let padded = pad_to_power_of_two(&make_image("black", 8, 6));
    assert_eq!((padded.width(), padded.height()), (8, 8));

    let tiles = tile(&padded, 4).unwrap();
    assert_eq!(tiles.len(), 16);
    assert_eq!((tiles.rows(), tiles.cols()), (4, 4));
    assert!(tiles.iter().all(|t| t.width() == 2 && t.height() == 2));
}

#[test]
fn test_tiles_cover_every_pixel_exactly_once() {
    let grid = pad_to_power_of_two(&make_image("numbered", 30, 12));
    for resolution in [2, 4, 8, 16, 32] {
        let tiles = tile(&grid, resolution).unwrap();
        let mut seen = HashSet::new();
        let mut count = 0;
        for t in &tiles {
            for p in t.pixels() {
                seen.insert(*p);
                count += 1;
            }
        }
        // numbered pixels are unique except for padding
        assert_eq!(count, grid.width() * grid.height(), "resolution {}", resolution);
        let originals = grid.pixels().iter().copied().collect::<HashSet<_>>();
        assert_eq!(seen, originals);
    }
}

// ==================== Scoring ====================

#[test]
fn test_gradient_tiles_get_brighter_left_to_right() {
    let padded = pad_to_power_of_two(&make_image("gradient_h", 16, 16));
    let tiles = tile(&padded, 4).unwrap();
    let scores: Vec<f64> = (0..4).map(|c| brightness(tiles.get(0, c).unwrap())).collect();
    assert!(scores.windows(2).all(|w| w[0] < w[1]), "{:?}", scores);
}

// ==================== Rendering ====================

#[test]
fn test_render_dimensions_match_resolution() {
    let image = make_image("gradient_h", 64, 64);
    let index = CharBrightnessIndex::new(" .:-=+*#%@".chars()).unwrap();
    for r in [1, 2, 4, 8, 16, 32, 64] {
        let grid = RenderPipeline::run(&image, r, &index, false).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (r, r));
        assert_eq!(grid.cells().len(), r * r);
    }
}

#[test]
fn test_render_only_uses_registered_chars() {
    let image = make_image("gradient_h", 32, 32);
    let charset: HashSet<char> = " .:-=+*#%@".chars().collect();
    let index = CharBrightnessIndex::new(charset.iter().copied()).unwrap();
    let grid = RenderPipeline::run(&image, 16, &index, false).unwrap();
    assert!(grid.cells().iter().all(|c| charset.contains(c)));
    // a full gradient should use more than a couple of levels
    let used: HashSet<_> = grid.cells().iter().collect();
    assert!(used.len() > 3, "used {:?}", used);
}

#[test]
fn test_reverse_inverts_without_touching_index() {
    let image = make_image("gradient_h", 16, 16);
    let index = CharBrightnessIndex::new([' ', '@']).unwrap();
    let normal = RenderPipeline::run(&image, 4, &index, false).unwrap();
    let reversed = RenderPipeline::run(&image, 4, &index, true).unwrap();
    assert_eq!(normal.get(0, 0), Some(' '));
    assert_eq!(reversed.get(0, 0), Some('@'));
    assert_eq!(normal.get(0, 3), Some('@'));
    assert_eq!(reversed.get(0, 3), Some(' '));
    assert_eq!(index.len(), 2);
}

#[test]
fn test_padding_shows_up_as_bright_rows() {
    // black 16x8 pads to 16x16 with white bands above and below
    let image = make_image("black", 16, 8);
    let index = CharBrightnessIndex::new([' ', '@']).unwrap();
    let grid = RenderPipeline::run(&image, 4, &index, false).unwrap();
    assert_eq!(grid.row(0), &['@'; 4]);
    assert_eq!(grid.row(1), &[' '; 4]);
    assert_eq!(grid.row(2), &[' '; 4]);
    assert_eq!(grid.row(3), &['@'; 4]);
}

#[test]
fn test_invalid_resolution_fails() {
    let image = make_image("black", 8, 8);
    let index = CharBrightnessIndex::new([' ', '@']).unwrap();
    assert!(matches!(
        RenderPipeline::run(&image, 16, &index, false),
        Err(RenderError::Tiling(_))
    ));
}

// ==================== Session ====================

#[test]
fn test_session_mutations_between_renders() {
    let mut art = AsciiArt::new(make_image("gradient_h", 32, 32), DEFAULT_CHARSET, 8, false).unwrap();
    let first = art.render().unwrap();
    assert!(first.cells().iter().all(|c| c.is_ascii_digit()));

    art.remove_chars(DEFAULT_CHARSET);
    art.add_chars([' ', '#']);
    let second = art.render().unwrap();
    assert!(second.cells().iter().all(|&c| c == ' ' || c == '#'));

    art.set_resolution(16).unwrap();
    let third = art.render().unwrap();
    assert_eq!(third.cols(), 16);
}

#[test]
fn test_session_rejects_render_with_one_char() {
    let mut art = AsciiArt::new(make_image("black", 4, 4), ['a', 'b'], 2, false).unwrap();
    art.remove_char('a');
    assert_eq!(
        art.render().unwrap_err(),
        RenderError::InsufficientCharset {
            available: 1,
            required: 2
        }
    );
}
