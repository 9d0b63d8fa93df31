// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for png-expand.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all png-expand operations.
///
/// Every variant is terminal: nothing is retried, and the binary reports the
/// `Display` text once before exiting with status 1.
#[derive(Debug, Error)]
pub enum PngExpandError {
    // -- Input parsing --
    #[error("Invalid color format: {0}. Use color names, hex (#FF0000), or RGB (255,0,0)")]
    InvalidColorFormat(String),

    // -- Loading --
    #[error("Input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to open input file: {0}")]
    DecodeError(String),

    // -- Canvas --
    #[error("padded canvas is too large: {width}x{height} with {padding}px padding")]
    CanvasTooLarge {
        width: u32,
        height: u32,
        padding: u32,
    },

    // -- Saving --
    #[error("Failed to save output file: {0}")]
    EncodeError(String),

    #[error("unexpected image error: {0}")]
    Unexpected(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PngExpandError>;
