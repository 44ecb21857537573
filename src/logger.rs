use std::io;

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;

pub enum LogTarget<'a> {
    Stderr,
    File(&'a str),
}

/// Sets up the global `log` dispatcher. The terminal UI owns stdout, so it
/// logs to a file instead.
pub fn setup_logger(level: LevelFilter, target: LogTarget) -> Result<()> {
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} - [{}][{}] {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level);

    let dispatch = match target {
        LogTarget::Stderr => dispatch.chain(io::stderr()),
        LogTarget::File(path) => dispatch.chain(
            fern::log_file(path).with_context(|| format!("Failed to open log file {}", path))?,
        ),
    };

    if let Err(e) = dispatch.apply() {
        log::trace!("Logger already initialised: {}", e);
    }

    Ok(())
}
