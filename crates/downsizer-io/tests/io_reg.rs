//! Image I/O regression test
//!
//! Round-trips through real files in the platform temp directory:
//! format sniffing picks the decoder from file content, independent of
//! the extension.

use downsizer_core::color;
use downsizer_io::{
    ImageFormat, detect_format, format_from_extension, read_image, write_jpeg,
};
use downsizer_test::gradient_raster;
use std::path::PathBuf;

/// A unique temp file path for this test run.
fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("downsizer-io-reg-{}-{name}", std::process::id()));
    path
}

fn write_test_png(path: &PathBuf, width: u32, height: u32) {
    let raster = gradient_raster(width, height);
    let mut samples = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for &pixel in raster.row(y) {
            let (r, g, b) = color::extract_rgb(pixel);
            samples.extend_from_slice(&[r, g, b]);
        }
    }

    let file = std::fs::File::create(path).unwrap();
    let mut encoder = png::Encoder::new(file, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(&samples).unwrap();
}

#[test]
fn png_file_roundtrip_reg() {
    let path = temp_path("gradient.png");
    write_test_png(&path, 12, 8);

    assert_eq!(detect_format(&path).unwrap(), ImageFormat::Png);

    let raster = read_image(&path).unwrap();
    assert_eq!((raster.width(), raster.height()), (12, 8));

    // PNG is lossless: spot-check against the generator.
    let expected = gradient_raster(12, 8);
    assert_eq!(raster.get_rgb(0, 0), expected.get_rgb(0, 0));
    assert_eq!(raster.get_rgb(11, 7), expected.get_rgb(11, 7));

    std::fs::remove_file(&path).ok();
}

#[test]
fn jpeg_file_roundtrip_reg() {
    let path = temp_path("gradient.jpg");
    let raster = gradient_raster(20, 10);
    write_jpeg(&raster, &path).unwrap();

    assert_eq!(detect_format(&path).unwrap(), ImageFormat::Jpeg);

    let decoded = read_image(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (20, 10));

    std::fs::remove_file(&path).ok();
}

#[test]
fn sniffing_beats_extension_reg() {
    // A PNG stored with a .jpg name still decodes as PNG.
    let path = temp_path("mislabeled.jpg");
    write_test_png(&path, 5, 5);

    assert_eq!(format_from_extension(&path), Some(ImageFormat::Jpeg));
    assert_eq!(detect_format(&path).unwrap(), ImageFormat::Png);

    let raster = read_image(&path).unwrap();
    assert_eq!((raster.width(), raster.height()), (5, 5));

    std::fs::remove_file(&path).ok();
}
