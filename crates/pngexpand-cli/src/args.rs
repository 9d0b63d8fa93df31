// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use pngexpand_core::config::{DEFAULT_COLOR, DEFAULT_PADDING};

#[derive(Parser, Debug)]
#[command(name = "png-expand", version)]
#[command(
    about = "PNG Expand - Add padding around PNG images with customizable background color",
    long_about = None
)]
pub struct Cli {
    /// Input PNG file path
    pub input: PathBuf,

    /// Output PNG file path (auto-generated if not provided)
    pub output: Option<PathBuf>,

    /// Padding in pixels for all sides
    #[arg(short, long, default_value_t = DEFAULT_PADDING)]
    pub padding: u32,

    /// Background color: clear/transparent, white, black, red, etc., hex (#FF0000), or RGB (255,0,0)
    #[arg(short, long, default_value = DEFAULT_COLOR)]
    pub color: String,

    /// Verbose diagnostic logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
