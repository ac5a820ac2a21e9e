//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header,
//! with a case-insensitive file-extension fallback for callers that only
//! have a name.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
}

/// Supported image file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// PNG format
    Png,
    /// JFIF JPEG format
    Jpeg,
}

impl ImageFormat {
    /// Get the canonical file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

/// Detect the image format of a file by reading its header.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be read and
/// [`IoError::UnsupportedFormat`] if the header matches no known format.
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect the image format from the first bytes of a file.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the bytes match no known
/// format.
pub fn detect_format_from_bytes(header: &[u8]) -> IoResult<ImageFormat> {
    if header.starts_with(magic::PNG) {
        Ok(ImageFormat::Png)
    } else if header.starts_with(magic::JPEG) {
        Ok(ImageFormat::Jpeg)
    } else {
        Err(IoError::UnsupportedFormat(format!(
            "unrecognized image header: {:02X?}",
            &header[..header.len().min(8)]
        )))
    }
}

/// Map a file extension to a format, matching case-insensitively.
///
/// Accepts `png`, `jpg` and `jpeg` in any case; returns `None` for
/// anything else (including a missing extension).
pub fn format_from_extension<P: AsRef<Path>>(path: P) -> Option<ImageFormat> {
    let extension = path.as_ref().extension()?.to_str()?;
    match extension.to_ascii_lowercase().as_str() {
        "png" => Some(ImageFormat::Png),
        "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
        _ => None,
    }
}
