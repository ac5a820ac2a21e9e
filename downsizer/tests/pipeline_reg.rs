//! Pipeline regression test
//!
//! End-to-end file runs: a source image written to the temp directory is
//! downsized in both modes and the produced JPEG is decoded back.

use downsizer::engine::dest_dimensions;
use downsizer::io::read_image;
use downsizer::{Mode, downsize_file};
use downsizer_test::gradient_raster;
use std::path::PathBuf;

fn temp_input(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("downsizer-pipeline-reg-{}-{name}", std::process::id()));
    path
}

#[test]
fn pipeline_both_modes_reg() {
    let input = temp_input("source.jpg");
    let source = gradient_raster(40, 30);
    downsizer::io::write_jpeg(&source, &input).unwrap();

    for mode in [Mode::Sequential, Mode::Parallel] {
        let output = downsize_file(&input, 0.5, mode).unwrap();

        assert_ne!(output, input);
        assert_eq!(output.extension().and_then(|e| e.to_str()), Some("jpg"));

        let result = read_image(&output).unwrap();
        assert_eq!(
            (result.width(), result.height()),
            dest_dimensions(40, 30, 0.5)
        );

        std::fs::remove_file(&output).ok();
    }

    std::fs::remove_file(&input).ok();
}

#[test]
fn pipeline_invalid_factor_reg() {
    let input = temp_input("factor.jpg");
    downsizer::io::write_jpeg(&gradient_raster(8, 8), &input).unwrap();

    let result = downsize_file(&input, 0.0, Mode::Parallel);
    assert!(matches!(
        result,
        Err(downsizer::PipelineError::Engine(_))
    ));

    std::fs::remove_file(&input).ok();
}
