// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output filename synthesis.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::color::Color;

/// Build the default output path for `input`:
/// `<dir>/<stem>_padded_<padding>px_<descriptor>[.<ext>]`.
///
/// Pure and deterministic. The parent directory and the original extension
/// are kept as-is; an input without an extension yields an output without one.
pub fn derive_output_path(input: impl AsRef<Path>, padding: u32, color: Color) -> PathBuf {
    let input = input.as_ref();

    let mut file_name = input.file_stem().map(OsString::from).unwrap_or_default();
    file_name.push(format!("_padded_{padding}px_{}", color.descriptor()));
    if let Some(ext) = input.extension() {
        file_name.push(".");
        file_name.push(ext);
    }

    input.with_file_name(file_name)
}
