// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Cedar compiler command-line interface.
//!
//! This is the entry point for the `cedar` command. It scans one C source
//! file and prints the resulting token stream to stdout, one token per line,
//! formatted `<KIND> : <TEXT>`.
//!
//! On any failure — unreadable file, malformed input — exactly one
//! diagnostic is written to stderr and the process exits non-zero.

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use cedar_core::source_analysis::{ErrorKind, scan};
use miette::{IntoDiagnostic, NamedSource, Report, Result, WrapErr};
use tracing::{debug, info};

/// Cedar: a C compiler front end
#[derive(Debug, Parser)]
#[command(name = "cedar")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the C source file to scan
    file: Utf8PathBuf,
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Exit with appropriate code
    match run(&cli.file) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}

/// Scans `path` and prints the token listing.
fn run(path: &Utf8Path) -> Result<()> {
    info!("Scanning {path}");
    let source = read_source(path)?;

    let stream = scan(&source).map_err(|err| {
        Report::new(err).with_source_code(NamedSource::new(path.as_str(), source.clone()))
    })?;
    debug!(tokens = stream.len(), "scan complete");

    for token in stream.iter() {
        println!("{token}");
    }
    Ok(())
}

/// Reads the source file, mapping a missing file onto the front end's
/// file-not-found error kind.
fn read_source(path: &Utf8Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(source) => Ok(source),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ErrorKind::FileNotFound)
            .into_diagnostic()
            .wrap_err_with(|| format!("cannot open '{path}'")),
        Err(e) => Err(e)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read '{path}'")),
    }
}
