// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for png-expand.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::naming::derive_output_path;

/// Channel layout of a decoded or padded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Three channels, no alpha.
    Opaque,
    /// Four channels with alpha.
    WithAlpha,
}

impl ColorMode {
    pub fn channels(&self) -> u8 {
        match self {
            ColorMode::Opaque => 3,
            ColorMode::WithAlpha => 4,
        }
    }

    pub fn from_has_alpha(has_alpha: bool) -> Self {
        if has_alpha {
            ColorMode::WithAlpha
        } else {
            ColorMode::Opaque
        }
    }
}

/// Uniform border width in pixels, applied to all four edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Padding(pub u32);

impl Padding {
    pub fn pixels(&self) -> u32 {
        self.0
    }

    /// Size of a `width` x `height` image once padded, or `None` if either
    /// axis overflows `u32`.
    pub fn padded_dimensions(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        let border = self.0.checked_mul(2)?;
        Some((width.checked_add(border)?, height.checked_add(border)?))
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Everything needed for one padding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddingRequest {
    pub input: PathBuf,
    /// Explicit destination; derived from the input name when `None`.
    pub output: Option<PathBuf>,
    pub padding: Padding,
    pub color: Color,
}

impl PaddingRequest {
    pub fn new(input: impl Into<PathBuf>, padding: Padding, color: Color) -> Self {
        Self {
            input: input.into(),
            output: None,
            padding,
            color,
        }
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    /// The explicit output path, or the one derived from the input name.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => derive_output_path(&self.input, self.padding.pixels(), self.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mode_channels() {
        assert_eq!(ColorMode::Opaque.channels(), 3);
        assert_eq!(ColorMode::WithAlpha.channels(), 4);
        assert_eq!(ColorMode::from_has_alpha(true), ColorMode::WithAlpha);
        assert_eq!(ColorMode::from_has_alpha(false), ColorMode::Opaque);
    }

    #[test]
    fn padded_dimensions_add_twice_the_border() {
        assert_eq!(Padding(50).padded_dimensions(100, 20), Some((200, 120)));
        assert_eq!(Padding(0).padded_dimensions(7, 3), Some((7, 3)));
    }

    #[test]
    fn padded_dimensions_overflow_is_none() {
        assert_eq!(Padding(u32::MAX).padded_dimensions(1, 1), None);
        assert_eq!(Padding(1).padded_dimensions(u32::MAX - 1, 1), None);
    }

    #[test]
    fn explicit_output_wins_over_derived() {
        let request = PaddingRequest::new("in.png", Padding(10), Color::WHITE)
            .with_output(Some(PathBuf::from("out.png")));
        assert_eq!(request.output_path(), PathBuf::from("out.png"));
    }

    #[test]
    fn missing_output_is_derived() {
        let request = PaddingRequest::new("in.png", Padding(10), Color::WHITE);
        assert_eq!(
            request.output_path(),
            PathBuf::from("in_padded_10px_white.png")
        );
    }
}
