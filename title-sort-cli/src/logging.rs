//! Logger setup.
//!
//! Normal output goes through `log::info!` and is printed as bare lines on
//! stdout; warnings and errors carry a level prefix. `--verbose` switches to
//! env_logger's timestamped format at debug level. `RUST_LOG` still wins for
//! per-module filters.

use std::io::Write;

use log::{Level, LevelFilter};

pub(crate) fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        });
    }

    builder.init();
}
