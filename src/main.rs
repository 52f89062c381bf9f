// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use simple_ls::{app, cli, logging};
use simple_ls_domain::Configuration;

fn main() -> ExitCode {
    logging::init();

    // Options are fully parsed before anything touches the filesystem.
    let args = match cli::parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => return app::report_fatal(&err.into()),
    };

    let config = Configuration::from(args);
    app::run(&config)
}
