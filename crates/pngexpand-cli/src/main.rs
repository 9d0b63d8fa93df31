// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// png-expand — Add uniform padding around a raster image.
//
// Entry point. Initialises logging, parses arguments, runs one padding request,
// and maps any failure to `Error: <message>` on stderr with exit status 1.

mod args;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pngexpand_core::{ExpandConfig, Padding, Result, parse_color};
use pngexpand_image::expand_request;

use args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            println!("✓ Successfully expanded {}", cli.input.display());
            println!("✓ Saved to: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "png-expand failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf> {
    let config = ExpandConfig {
        padding: Padding(cli.padding),
        color: parse_color(&cli.color)?,
    };
    tracing::debug!(?config, "Resolved settings");

    let request = config.request(&cli.input, cli.output.clone());
    expand_request(&request)
}

/// Log to stderr so stdout carries only the confirmation lines. `RUST_LOG`
/// overrides the default `warn` level; `--verbose` forces `debug`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
