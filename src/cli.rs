// src/cli.rs
use std::{ffi::OsString, path::PathBuf};

use clap::{Parser, error::ErrorKind};
use simple_ls_shared_kernel::{PresentationError, PresentationResult};

use crate::VERSION;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "simple_ls",
    version = VERSION,
    about = "List the entries of a directory",
    long_about = "List the entries of a directory.\n\n\
        Entries appear in directory order unless a sort flag is given. \
        Sorted listings break ties alphabetically.",
    args_override_self = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Include entries starting with '.', including '.' and '..'
    #[arg(short = 'a')]
    pub all: bool,

    /// Long format: permissions, links, owner, group, size, mtime, name
    #[arg(short = 'l')]
    pub long: bool,

    /// Sort by access time, newest first
    #[arg(short = 'u')]
    pub access_time: bool,

    /// Sort by modification time, newest first
    #[arg(short = 't')]
    pub modification_time: bool,

    /// Like -a, but omit '.' and '..'
    #[arg(short = 'A')]
    pub almost_all: bool,

    /// Sort by size, largest first, printing "name size" lines (overrides -l, -t, -u)
    #[arg(short = 'S')]
    pub size: bool,

    /// Directory to list
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,
}

/// Parses the command line. `--help` and `--version` print and exit here;
/// anything else clap rejects becomes [`PresentationError::InvalidOption`].
pub fn parse_args<I, T>(args: I) -> PresentationResult<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => Ok(args),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(err) => Err(invalid_option(&err)),
    }
}

fn invalid_option(err: &clap::Error) -> PresentationError {
    let rendered = err.to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string();
    PresentationError::InvalidOption { message }
}
