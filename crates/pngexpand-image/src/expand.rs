// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end padding: decode, pad, encode. The output file is only written
// once the whole composite has succeeded in memory.

use std::path::{Path, PathBuf};

use pngexpand_core::error::Result;
use pngexpand_core::{Color, Padding, PaddingRequest};
use tracing::{info, instrument};

use crate::pad::padder::ImagePadder;

/// Pad the image at `input` and write the result to `output` as PNG.
#[instrument(skip_all, fields(
    input = %input.as_ref().display(),
    output = %output.as_ref().display(),
    padding = padding.pixels()
))]
pub fn expand(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    padding: Padding,
    color: Color,
) -> Result<()> {
    ImagePadder::open(input)?
        .pad(padding, color)?
        .save(output)?;
    info!("Expand complete");
    Ok(())
}

/// Run a [`PaddingRequest`], returning the path that was written.
pub fn expand_request(request: &PaddingRequest) -> Result<PathBuf> {
    let output = request.output_path();
    expand(request.input(), &output, request.padding, request.color)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use pngexpand_core::PngExpandError;
    use tempfile::TempDir;

    fn write_png(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.path().join(name);
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([10, 20, 30])))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();
        path
    }

    #[test]
    fn expand_writes_padded_png() {
        let dir = TempDir::new().unwrap();
        let input = write_png(&dir, "in.png", 8, 6);
        let output = dir.path().join("out.png");

        expand(&input, &output, Padding(3), Color::WHITE).unwrap();

        let written = image::open(&output).unwrap();
        assert_eq!((written.width(), written.height()), (14, 12));
        assert_eq!(written.to_rgb8().get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(written.to_rgb8().get_pixel(3, 3).0, [10, 20, 30]);
    }

    #[test]
    fn expand_request_derives_output_next_to_input() {
        let dir = TempDir::new().unwrap();
        let input = write_png(&dir, "photo.png", 2, 2);
        let request = PaddingRequest::new(&input, Padding(50), Color::TRANSPARENT);

        let output = expand_request(&request).unwrap();

        assert_eq!(output, dir.path().join("photo_padded_50px_clear.png"));
        let written = image::open(&output).unwrap();
        assert_eq!((written.width(), written.height()), (102, 102));
        assert!(written.color().has_alpha());
    }

    #[test]
    fn expand_is_not_idempotent() {
        let dir = TempDir::new().unwrap();
        let input = write_png(&dir, "a.png", 5, 5);
        let first = dir.path().join("b.png");
        let second = dir.path().join("c.png");

        expand(&input, &first, Padding(1), Color::WHITE).unwrap();
        expand(&first, &second, Padding(1), Color::WHITE).unwrap();

        let first_img = image::open(&first).unwrap();
        let second_img = image::open(&second).unwrap();
        assert_eq!((first_img.width(), first_img.height()), (7, 7));
        assert_eq!((second_img.width(), second_img.height()), (9, 9));
    }

    #[test]
    fn missing_input_is_reported_and_nothing_is_written() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("nope.png");
        let output = dir.path().join("out.png");

        let err = expand(&input, &output, Padding(1), Color::WHITE).unwrap_err();

        assert!(matches!(err, PngExpandError::InputNotFound(ref p) if p == &input));
        assert!(!output.exists());
    }

    #[test]
    fn undecodable_input_is_a_decode_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("broken.png");
        std::fs::write(&input, b"not a png at all").unwrap();
        let output = dir.path().join("out.png");

        let err = expand(&input, &output, Padding(1), Color::WHITE).unwrap_err();

        assert!(matches!(err, PngExpandError::DecodeError(_)));
        assert!(!output.exists());
    }

    #[test]
    fn unwritable_output_is_an_encode_error() {
        let dir = TempDir::new().unwrap();
        let input = write_png(&dir, "in.png", 2, 2);
        let output = dir.path().join("missing-dir").join("out.png");

        let err = expand(&input, &output, Padding(1), Color::WHITE).unwrap_err();

        assert!(matches!(err, PngExpandError::EncodeError(_)));
        assert!(!output.exists());
    }

    #[test]
    fn output_is_png_regardless_of_extension() {
        let dir = TempDir::new().unwrap();
        let input = write_png(&dir, "in.png", 2, 2);
        let output = dir.path().join("out.jpg");

        expand(&input, &output, Padding(1), Color::TRANSPARENT).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }
}
