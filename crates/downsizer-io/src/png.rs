//! PNG image format support
//!
//! Reads PNG images using the `png` crate. All input variants (grayscale
//! at any bit depth, gray+alpha, RGB, RGBA and palette-indexed) are
//! converted to the library's RGB raster; alpha channels are discarded
//! since the raster is always opaque.

use crate::{IoError, IoResult};
use downsizer_core::{Raster, color};
use png::{BitDepth, ColorType, Decoder};
use std::io::{BufRead, Seek};

/// Read a PNG image into an RGB raster.
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] for malformed data and
/// [`IoError::UnsupportedFormat`] for color type / bit depth combinations
/// outside the PNG baseline set.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {e}")))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;
    let palette: Option<Vec<u8>> = info.palette.as_ref().map(|p| p.to_vec());

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("PNG output buffer size overflow".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {e}")))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let raster = Raster::new(width, height)?;
    let mut raster_mut = raster.try_into_mut().unwrap();

    match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::One | BitDepth::Two | BitDepth::Four) => {
            for y in 0..height {
                let row = &data[y as usize * bytes_per_row..];
                for x in 0..width {
                    let gray = expand_gray(packed_sample(row, x, bit_depth), bit_depth);
                    let pixel = color::compose_rgb(gray, gray, gray);
                    unsafe { raster_mut.set_pixel_unchecked(x, y, pixel) };
                }
            }
        }
        (ColorType::Grayscale, BitDepth::Eight | BitDepth::Sixteen) => {
            let samples = if bit_depth == BitDepth::Sixteen { 2 } else { 1 };
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    // 16-bit samples are big-endian; keep the high byte.
                    let gray = data[row_start + x as usize * samples];
                    let pixel = color::compose_rgb(gray, gray, gray);
                    unsafe { raster_mut.set_pixel_unchecked(x, y, pixel) };
                }
            }
        }
        (ColorType::GrayscaleAlpha, _) => {
            let samples = if bit_depth == BitDepth::Sixteen { 4 } else { 2 };
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let gray = data[row_start + x as usize * samples];
                    let pixel = color::compose_rgb(gray, gray, gray);
                    unsafe { raster_mut.set_pixel_unchecked(x, y, pixel) };
                }
            }
        }
        (ColorType::Rgb, _) => {
            let samples = if bit_depth == BitDepth::Sixteen { 6 } else { 3 };
            let step = samples / 3;
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + x as usize * samples;
                    let pixel =
                        color::compose_rgb(data[idx], data[idx + step], data[idx + 2 * step]);
                    unsafe { raster_mut.set_pixel_unchecked(x, y, pixel) };
                }
            }
        }
        (ColorType::Rgba, _) => {
            let samples = if bit_depth == BitDepth::Sixteen { 8 } else { 4 };
            let step = samples / 4;
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + x as usize * samples;
                    let pixel =
                        color::compose_rgb(data[idx], data[idx + step], data[idx + 2 * step]);
                    unsafe { raster_mut.set_pixel_unchecked(x, y, pixel) };
                }
            }
        }
        (
            ColorType::Indexed,
            BitDepth::One | BitDepth::Two | BitDepth::Four | BitDepth::Eight,
        ) => {
            let palette = palette
                .ok_or_else(|| IoError::DecodeError("indexed PNG without palette".to_string()))?;
            for y in 0..height {
                let row = &data[y as usize * bytes_per_row..];
                for x in 0..width {
                    let index = if bit_depth == BitDepth::Eight {
                        row[x as usize]
                    } else {
                        packed_sample(row, x, bit_depth)
                    } as usize;
                    let rgb = palette.get(index * 3..index * 3 + 3).ok_or_else(|| {
                        IoError::DecodeError(format!("palette index {index} out of range"))
                    })?;
                    let pixel = color::compose_rgb(rgb[0], rgb[1], rgb[2]);
                    unsafe { raster_mut.set_pixel_unchecked(x, y, pixel) };
                }
            }
        }
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {color_type:?} {bit_depth:?}"
            )));
        }
    }

    Ok(raster_mut.into())
}

/// Extract a 1-, 2- or 4-bit sample packed MSB-first within a row.
fn packed_sample(row: &[u8], x: u32, bit_depth: BitDepth) -> u8 {
    match bit_depth {
        BitDepth::One => (row[(x / 8) as usize] >> (7 - x % 8)) & 1,
        BitDepth::Two => (row[(x / 4) as usize] >> (6 - (x % 4) * 2)) & 3,
        BitDepth::Four => {
            let byte = row[(x / 2) as usize];
            if x % 2 == 0 { byte >> 4 } else { byte & 0xF }
        }
        _ => unreachable!("packed_sample called for byte-aligned depth"),
    }
}

/// Scale a sub-byte gray sample to the full 8-bit range.
fn expand_gray(value: u8, bit_depth: BitDepth) -> u8 {
    match bit_depth {
        BitDepth::One => value * 255,
        BitDepth::Two => value * 85,
        BitDepth::Four => value * 17,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Encode raw samples as a PNG in memory.
    fn encode_png(
        width: u32,
        height: u32,
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
        samples: &[u8],
    ) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color_type);
            encoder.set_depth(bit_depth);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(samples).unwrap();
        }
        out
    }

    #[test]
    fn test_read_rgb_png() {
        let samples = [
            255, 0, 0, /**/ 0, 255, 0, //
            0, 0, 255, /**/ 10, 20, 30,
        ];
        let bytes = encode_png(2, 2, ColorType::Rgb, BitDepth::Eight, &samples);
        let raster = read_png(Cursor::new(bytes)).unwrap();

        assert_eq!((raster.width(), raster.height()), (2, 2));
        assert_eq!(raster.get_rgb(0, 0), Some((255, 0, 0)));
        assert_eq!(raster.get_rgb(1, 0), Some((0, 255, 0)));
        assert_eq!(raster.get_rgb(0, 1), Some((0, 0, 255)));
        assert_eq!(raster.get_rgb(1, 1), Some((10, 20, 30)));
    }

    #[test]
    fn test_read_rgba_png_drops_alpha() {
        let samples = [100, 150, 200, 7, /**/ 1, 2, 3, 255];
        let bytes = encode_png(2, 1, ColorType::Rgba, BitDepth::Eight, &samples);
        let raster = read_png(Cursor::new(bytes)).unwrap();

        assert_eq!(raster.get_rgb(0, 0), Some((100, 150, 200)));
        assert_eq!(raster.get_rgb(1, 0), Some((1, 2, 3)));
    }

    #[test]
    fn test_read_grayscale_png() {
        let samples = [0, 128, 255];
        let bytes = encode_png(3, 1, ColorType::Grayscale, BitDepth::Eight, &samples);
        let raster = read_png(Cursor::new(bytes)).unwrap();

        assert_eq!(raster.get_rgb(0, 0), Some((0, 0, 0)));
        assert_eq!(raster.get_rgb(1, 0), Some((128, 128, 128)));
        assert_eq!(raster.get_rgb(2, 0), Some((255, 255, 255)));
    }

    #[test]
    fn test_read_one_bit_grayscale_png() {
        // 8 pixels in one byte: 1010_0001 -> white/black alternating.
        let bytes = encode_png(8, 1, ColorType::Grayscale, BitDepth::One, &[0b1010_0001]);
        let raster = read_png(Cursor::new(bytes)).unwrap();

        assert_eq!(raster.get_rgb(0, 0), Some((255, 255, 255)));
        assert_eq!(raster.get_rgb(1, 0), Some((0, 0, 0)));
        assert_eq!(raster.get_rgb(2, 0), Some((255, 255, 255)));
        assert_eq!(raster.get_rgb(7, 0), Some((255, 255, 255)));
    }

    #[test]
    fn test_read_corrupt_png_fails() {
        let result = read_png(Cursor::new(vec![0x89, 0x50, 0x4E, 0x47, 0, 0, 0, 0]));
        assert!(matches!(result, Err(IoError::DecodeError(_))));
    }

    #[test]
    fn test_expand_gray() {
        assert_eq!(expand_gray(1, BitDepth::One), 255);
        assert_eq!(expand_gray(3, BitDepth::Two), 255);
        assert_eq!(expand_gray(15, BitDepth::Four), 255);
        assert_eq!(expand_gray(7, BitDepth::Four), 119);
        assert_eq!(expand_gray(200, BitDepth::Eight), 200);
    }
}
