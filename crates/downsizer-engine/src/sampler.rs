//! Bilinear sampling
//!
//! Maps a destination pixel coordinate into source space and blends the
//! four neighboring source pixels by their fractional sub-pixel position.
//! The sampler is a pure function: for a fixed source raster and scale
//! factor, the color of a destination pixel depends only on its own
//! coordinates, never on neighboring destination pixels. That independence
//! is what lets the scheduler compute disjoint regions concurrently
//! without any synchronization on the pixel data.

use downsizer_core::{Raster, color};

/// Compute the color of destination pixel (x, y) by bilinear interpolation
/// over `src`.
///
/// The destination coordinate maps to source space at `(x / factor,
/// y / factor)`. The four surrounding source pixels are fetched, clamping
/// the +1 neighbor at the bottom/right border instead of reading out of
/// bounds, and each 8-bit channel is blended independently.
///
/// Interpolation weights are the fractional parts of the mapped coordinate
/// and are not clamped. For `factor <= 1` they stay in `[0, 1)`; for
/// `factor > 1` a weight can reach 1.0 at the last row/column, where the
/// clamped neighbor degenerates to the border pixel and the blend still
/// stays within channel bounds.
///
/// # Panics
///
/// The caller must guarantee `factor > 0`, `x / factor < src.width()` and
/// `y / factor < src.height()` (always true for coordinates inside the
/// destination raster computed by the scheduler). Otherwise the neighbor
/// lookup may panic in debug builds or read an unrelated pixel.
pub fn sample_bilinear(src: &Raster, factor: f64, x: u32, y: u32) -> u32 {
    let src_x = x as f64 / factor;
    let src_y = y as f64 / factor;

    let x1 = src_x.floor() as u32;
    let y1 = src_y.floor() as u32;
    let x2 = (x1 + 1).min(src.width() - 1);
    let y2 = (y1 + 1).min(src.height() - 1);

    let wx = src_x - x1 as f64;
    let wy = src_y - y1 as f64;

    let c1 = unsafe { src.get_pixel_unchecked(x1, y1) };
    let c2 = unsafe { src.get_pixel_unchecked(x2, y1) };
    let c3 = unsafe { src.get_pixel_unchecked(x1, y2) };
    let c4 = unsafe { src.get_pixel_unchecked(x2, y2) };

    blend_rgb(c1, c2, c3, c4, wx, wy)
}

/// Blend four pixels channel by channel.
///
/// `c1`..`c4` are the top-left, top-right, bottom-left and bottom-right
/// neighbors; `wx`/`wy` the horizontal and vertical weights toward the
/// right/bottom neighbors.
fn blend_rgb(c1: u32, c2: u32, c3: u32, c4: u32, wx: f64, wy: f64) -> u32 {
    let r = blend_channel(
        color::red(c1),
        color::red(c2),
        color::red(c3),
        color::red(c4),
        wx,
        wy,
    );
    let g = blend_channel(
        color::green(c1),
        color::green(c2),
        color::green(c3),
        color::green(c4),
        wx,
        wy,
    );
    let b = blend_channel(
        color::blue(c1),
        color::blue(c2),
        color::blue(c3),
        color::blue(c4),
        wx,
        wy,
    );
    color::compose_rgb(r, g, b)
}

/// Blend a single 8-bit channel and truncate toward zero.
///
/// For inputs in [0, 255] and weights in [0, 1] the result is a convex
/// combination, so it stays in [0, 255] and needs no clamping.
#[inline]
fn blend_channel(c1: u8, c2: u8, c3: u8, c4: u8, wx: f64, wy: f64) -> u8 {
    let value = c1 as f64 * (1.0 - wx) * (1.0 - wy)
        + c2 as f64 * wx * (1.0 - wy)
        + c3 as f64 * (1.0 - wx) * wy
        + c4 as f64 * wx * wy;
    value as u8
}
