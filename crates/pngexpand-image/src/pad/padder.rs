// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image padder — load, pad with a solid border, and encode. Operates on a single
// in-memory image using the `image` crate.

use std::io::{ErrorKind, Write};
use std::path::Path;

use image::{DynamicImage, ImageError, ImageFormat, ImageReader, RgbImage, Rgba, RgbaImage};
use pngexpand_core::error::{PngExpandError, Result};
use pngexpand_core::{Color, ColorMode, Padding};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

/// Padding pipeline operating on a single in-memory image.
///
/// Transformations consume `self` and return a new `ImagePadder`, so calls
/// chain:
///
/// ```ignore
/// ImagePadder::open("logo.png")?
///     .pad(Padding(50), Color::TRANSPARENT)?
///     .save("logo_padded.png")?;
/// ```
pub struct ImagePadder {
    /// The current working image.
    image: DynamicImage,
}

impl ImagePadder {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path. The format is sniffed from the file
    /// contents, falling back to the extension.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(PngExpandError::InputNotFound(path.to_path_buf()));
        }

        let img = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|err| load_error(path, ImageError::IoError(err)))?
            .decode()
            .map_err(|err| load_error(path, err))?;

        info!(
            width = img.width(),
            height = img.height(),
            has_alpha = img.color().has_alpha(),
            "Image loaded"
        );
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// Current image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Current image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Channel layout of the current image.
    pub fn color_mode(&self) -> ColorMode {
        ColorMode::from_has_alpha(self.image.color().has_alpha())
    }

    // -- Transformation -------------------------------------------------------

    /// Surround the image with a `padding`-pixel border of `color` on every
    /// edge.
    ///
    /// The source is normalised to RGBA and alpha-composited over the
    /// background, so fully transparent source pixels leave the background
    /// untouched. The result drops back to RGB when the source had no alpha
    /// channel and `color` is opaque.
    #[instrument(skip_all, fields(padding = padding.pixels(), color = %color))]
    pub fn pad(self, padding: Padding, color: Color) -> Result<Self> {
        let source_mode = self.color_mode();
        let (width, height) = (self.width(), self.height());
        let too_large = || PngExpandError::CanvasTooLarge {
            width,
            height,
            padding: padding.pixels(),
        };

        let (new_width, new_height) = padding
            .padded_dimensions(width, height)
            .ok_or_else(too_large)?;
        let byte_len = canvas_byte_len(new_width, new_height).ok_or_else(too_large)?;

        info!(
            from_w = width,
            from_h = height,
            new_width,
            new_height,
            "Padding image"
        );

        let source = self.image.into_rgba8();
        let background = color.to_array();
        let mut raw = try_alloc(byte_len).ok_or_else(too_large)?;
        raw.extend((0..byte_len / 4).flat_map(|_| background));
        let mut canvas =
            RgbaImage::from_raw(new_width, new_height, raw).ok_or_else(too_large)?;

        let offset = padding.pixels();
        for (x, y, pixel) in source.enumerate_pixels() {
            let dst = canvas.get_pixel_mut(x + offset, y + offset);
            *dst = alpha_over(*dst, *pixel);
        }

        let padded = if source_mode == ColorMode::Opaque && color.is_opaque() {
            debug!("Collapsing to RGB");
            DynamicImage::ImageRgb8(drop_alpha(&canvas).ok_or_else(too_large)?)
        } else {
            DynamicImage::ImageRgba8(canvas)
        };

        Ok(Self { image: padded })
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        encode_to_format(&self.image, ImageFormat::Png)
    }

    /// Write the image to `path` as PNG, whatever the extension says.
    ///
    /// The PNG is staged in a temporary file next to `path` and renamed into
    /// place, so a failed save never touches an existing file at `path` and
    /// leaves no partial output behind.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_png_bytes()?;
        let save_error = |err: std::io::Error| {
            PngExpandError::EncodeError(format!("{}: {}", path.display(), err))
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = staging_file(dir).map_err(save_error)?;
        staged.write_all(&bytes).map_err(save_error)?;
        staged.persist(path).map_err(|err| save_error(err.error))?;

        info!(bytes = bytes.len(), "Image saved");
        Ok(())
    }
}

/// Map a load failure onto the error taxonomy.
fn load_error(path: &Path, err: ImageError) -> PngExpandError {
    match err {
        ImageError::IoError(io) if io.kind() == ErrorKind::NotFound => {
            PngExpandError::InputNotFound(path.to_path_buf())
        }
        ImageError::Limits(_) | ImageError::Parameter(_) => {
            PngExpandError::Unexpected(format!("{}: {}", path.display(), err))
        }
        other => PngExpandError::DecodeError(format!("{}: {}", path.display(), other)),
    }
}

/// Byte length of an RGBA8 buffer, or `None` if it is not addressable.
fn canvas_byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(4)
        .filter(|len| *len <= isize::MAX as usize)
}

/// Reserve `len` bytes up front, or `None` if the allocator refuses.
fn try_alloc(len: usize) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).ok()?;
    Some(buf)
}

/// RGB copy of `canvas`, allocated fallibly.
fn drop_alpha(canvas: &RgbaImage) -> Option<RgbImage> {
    let (width, height) = canvas.dimensions();
    let mut raw = try_alloc(width as usize * height as usize * 3)?;
    raw.extend(canvas.pixels().flat_map(|p| [p[0], p[1], p[2]]));
    RgbImage::from_raw(width, height, raw)
}

/// Hidden temporary file in `dir`, created with the usual umask-governed mode.
fn staging_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".png-expand-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Porter-Duff "source over" for straight (non-premultiplied) RGBA8.
fn alpha_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    match src[3] {
        0 => return dst,
        u8::MAX => return src,
        _ => {}
    }

    let src_a = src[3] as f32 / 255.0;
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    let channel = |i: usize| -> u8 {
        let blended = (src[i] as f32 * src_a + dst[i] as f32 * dst_a * (1.0 - src_a)) / out_a;
        blended.round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

/// Encode a `DynamicImage` into the specified format, returning the raw bytes.
fn encode_to_format(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    image
        .write_to(&mut cursor, format)
        .map_err(|err| PngExpandError::EncodeError(format!("image encoding failed: {}", err)))?;
    Ok(buffer)
}

// -- Tests --------------------------------------------------------------------
