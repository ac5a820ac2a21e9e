//! downsizer-test - shared test helpers
//!
//! Builders for small synthetic rasters with deterministic content, plus a
//! pixel-exact comparison assert. Used by the sibling crates' regression
//! tests; not part of the public library surface.

use downsizer_core::{Raster, color};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// A raster filled with a single color.
pub fn solid_raster(width: u32, height: u32, r: u8, g: u8, b: u8) -> Raster {
    let raster = Raster::new(width, height).unwrap();
    let mut rm = raster.try_into_mut().unwrap();
    rm.fill(color::compose_rgb(r, g, b));
    rm.into()
}

/// A raster where every channel varies smoothly with position.
///
/// Red follows x, green follows y, blue follows the diagonal, so a wrong
/// sample coordinate in either axis shows up in some channel.
pub fn gradient_raster(width: u32, height: u32) -> Raster {
    let raster = Raster::new(width, height).unwrap();
    let mut rm = raster.try_into_mut().unwrap();
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            let b = ((x + y) % 256) as u8;
            rm.set_rgb(x, y, r, g, b).unwrap();
        }
    }
    rm.into()
}

/// A two-color checkerboard with `tile`-pixel squares.
pub fn checkerboard_raster(
    width: u32,
    height: u32,
    tile: u32,
    light: (u8, u8, u8),
    dark: (u8, u8, u8),
) -> Raster {
    let tile = tile.max(1);
    let raster = Raster::new(width, height).unwrap();
    let mut rm = raster.try_into_mut().unwrap();
    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = if (x / tile + y / tile) % 2 == 0 {
                light
            } else {
                dark
            };
            rm.set_rgb(x, y, r, g, b).unwrap();
        }
    }
    rm.into()
}

/// A raster of uniformly random pixels from a seeded generator.
///
/// The same seed always produces the same raster.
pub fn random_raster(width: u32, height: u32, seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    let raster = Raster::new(width, height).unwrap();
    let mut rm = raster.try_into_mut().unwrap();
    for y in 0..height {
        for x in 0..width {
            rm.set_rgb(x, y, rng.random(), rng.random(), rng.random())
                .unwrap();
        }
    }
    rm.into()
}

/// Assert two rasters are pixel-identical, reporting the first mismatch.
pub fn assert_rasters_equal(expected: &Raster, actual: &Raster) {
    assert!(
        expected.sizes_equal(actual),
        "dimension mismatch: {}x{} vs {}x{}",
        expected.width(),
        expected.height(),
        actual.width(),
        actual.height()
    );
    for y in 0..expected.height() {
        for x in 0..expected.width() {
            let e = expected.get_rgb(x, y).unwrap();
            let a = actual.get_rgb(x, y).unwrap();
            assert_eq!(e, a, "pixel mismatch at ({x}, {y})");
        }
    }
}
