// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Built-in defaults. There is no config file; these back the CLI flags.

use std::path::PathBuf;

use crate::color::Color;
use crate::types::{Padding, PaddingRequest};

/// Default border width in pixels.
pub const DEFAULT_PADDING: u32 = 50;

/// Default background colour specification (fully transparent).
pub const DEFAULT_COLOR: &str = "clear";

/// Padding settings shared by every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandConfig {
    /// Border width applied to all four edges.
    pub padding: Padding,
    /// Background colour for the new border.
    pub color: Color,
}

impl ExpandConfig {
    /// Bind these settings to an input (and optional output) path.
    pub fn request(
        &self,
        input: impl Into<PathBuf>,
        output: Option<PathBuf>,
    ) -> PaddingRequest {
        PaddingRequest::new(input, self.padding, self.color).with_output(output)
    }
}
