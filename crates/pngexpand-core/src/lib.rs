// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// png-expand — Core types, colour parsing, and error definitions shared across
// all crates.

pub mod color;
pub mod config;
pub mod error;
pub mod naming;
pub mod types;

pub use color::{Color, parse_color};
pub use config::ExpandConfig;
pub use error::{PngExpandError, Result};
pub use naming::derive_output_path;
pub use types::*;
