// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pngexpand-image — Image padding for png-expand.
//
// Decodes a raster image, composites it onto a larger canvas filled with the
// background colour, and encodes the result as PNG.

pub mod expand;
pub mod pad;

// Re-export the primary entry points so callers can use `pngexpand_image::expand` etc.
pub use expand::{expand, expand_request};
pub use pad::padder::ImagePadder;
