//! JPEG image format support
//!
//! Reads JPEG images with the `jpeg-decoder` crate (8-bit grayscale and
//! 24-bit RGB) and writes them with the `jpeg-encoder` crate. Decoded
//! images are converted to the library's RGB raster.

use crate::{IoError, IoResult};
use downsizer_core::{Raster, color};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use std::io::Read;
use std::path::Path;

/// JPEG quality used for all encodes.
const JPEG_QUALITY: u8 = 85;

/// Read a JPEG image into an RGB raster.
///
/// # Arguments
///
/// * `reader` - a reader positioned at the JPEG SOI marker (`FF D8`)
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] for malformed data and
/// [`IoError::UnsupportedFormat`] for pixel formats other than 8-bit
/// grayscale and 24-bit RGB.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {e}")))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing after decode".to_string()))?;

    let width = u32::from(info.width);
    let height = u32::from(info.height);
    let raster = Raster::new(width, height)?;
    let mut raster_mut = raster.try_into_mut().unwrap();

    match info.pixel_format {
        PixelFormat::L8 => {
            for y in 0..height {
                let row_start = y as usize * width as usize;
                for x in 0..width {
                    let gray = data[row_start + x as usize];
                    let pixel = color::compose_rgb(gray, gray, gray);
                    unsafe { raster_mut.set_pixel_unchecked(x, y, pixel) };
                }
            }
        }
        PixelFormat::RGB24 => {
            for y in 0..height {
                let row_start = y as usize * width as usize * 3;
                for x in 0..width {
                    let idx = row_start + x as usize * 3;
                    let pixel = color::compose_rgb(data[idx], data[idx + 1], data[idx + 2]);
                    unsafe { raster_mut.set_pixel_unchecked(x, y, pixel) };
                }
            }
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {other:?}"
            )));
        }
    }

    Ok(raster_mut.into())
}

/// Encode a raster as JPEG bytes.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] for zero-area rasters, dimensions
/// beyond the JPEG limit of 65535, or an encoder failure.
pub fn encode_jpeg(raster: &Raster) -> IoResult<Vec<u8>> {
    let (width, height) = encodable_dimensions(raster)?;

    let mut rgb = Vec::with_capacity(raster.data().len() * 3);
    for y in 0..raster.height() {
        for &pixel in raster.row(y) {
            let (r, g, b) = color::extract_rgb(pixel);
            rgb.push(r);
            rgb.push(g);
            rgb.push(b);
        }
    }

    let mut out = Vec::new();
    let encoder = Encoder::new(&mut out, JPEG_QUALITY);
    encoder
        .encode(&rgb, width, height, ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {e}")))?;
    Ok(out)
}

/// Write a raster to a file as JPEG.
///
/// # Errors
///
/// Same as [`encode_jpeg`], plus [`IoError::Io`] on write failure.
pub fn write_jpeg<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let bytes = encode_jpeg(raster)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Check that the raster fits JPEG's 16-bit dimension fields.
fn encodable_dimensions(raster: &Raster) -> IoResult<(u16, u16)> {
    if raster.is_empty() {
        return Err(IoError::EncodeError(
            "cannot encode a zero-area raster".to_string(),
        ));
    }
    let width = u16::try_from(raster.width()).map_err(|_| {
        IoError::EncodeError(format!("width {} exceeds JPEG limit", raster.width()))
    })?;
    let height = u16::try_from(raster.height()).map_err(|_| {
        IoError::EncodeError(format!("height {} exceeds JPEG limit", raster.height()))
    })?;
    Ok((width, height))
}
