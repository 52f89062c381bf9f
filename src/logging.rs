// src/logging.rs
//! Minimal stderr backend for the `log` facade.
//!
//! The level comes from `SIMPLE_LS_LOG` (`off`, `error`, `warn`, `info`,
//! `debug`, `trace`); unset or unparsable values mean `warn`.

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

pub const LEVEL_ENV: &str = "SIMPLE_LS_LOG";

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = record.level().as_str().to_ascii_lowercase();
        // Diagnostics must never abort a listing.
        let _ = writeln!(std::io::stderr().lock(), "[{level}] {}: {}", record.target(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Level requested by `value`, falling back to `warn`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(LevelFilter::Warn)
}

/// Installs the logger once; later calls keep the first one.
pub fn init() {
    let level = level_from(std::env::var(LEVEL_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
