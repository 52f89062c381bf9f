// src/app.rs
use std::{
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};
use simple_ls_domain::{Configuration, Listing};
use simple_ls_infra::{StdDirectoryReader, StdMetadataResolver};
use simple_ls_shared_kernel::LsError;
use simple_ls_usecase::ListDirectory;

use crate::presentation;

/// Runs one listing against the real filesystem and maps the outcome to an exit status.
///
/// Entries that could not be resolved are reported after the listing and turn
/// the exit status into a failure.
pub fn run(config: &Configuration) -> ExitCode {
    let reader = StdDirectoryReader;
    let resolver = StdMetadataResolver::new();

    let output = match ListDirectory::new(&reader, &resolver).run(config) {
        Ok(output) => output,
        Err(err) => return report_fatal(&err),
    };

    if let Err(err) = emit(&output.listing) {
        eprintln!("simple_ls: {err:#}");
        return ExitCode::FAILURE;
    }

    for skipped in &output.skipped {
        eprintln!("simple_ls: {skipped}");
    }

    if output.is_complete() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Prints a fatal diagnostic and returns the matching exit status.
pub fn report_fatal(err: &LsError) -> ExitCode {
    eprintln!("simple_ls: {err}");
    if matches!(err, LsError::Presentation(_)) {
        eprintln!("Try 'simple_ls --help' for more information.");
    }
    ExitCode::from(err.exit_code())
}

fn emit(listing: &Listing) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    presentation::write_listing(&mut out, listing).context("writing listing to stdout")?;
    out.flush().context("flushing stdout")?;
    Ok(())
}
