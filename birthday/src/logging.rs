//! Tracing setup.
//!
//! The full-screen UI owns the terminal, so its logs go to a daily file;
//! the plain display logs to stderr.

use std::path::Path;

use birthday_core::DisplayMode;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "birthday=info,birthday_core=info,claude=warn";
const LOG_FILE_PREFIX: &str = "birthday.log";

pub fn init(mode: DisplayMode, log_dir: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match mode {
        DisplayMode::Tui => {
            let writer = match file_appender(log_dir) {
                Ok(appender) => BoxMakeWriter::new(appender),
                Err(e) => {
                    // Stderr belongs to the UI from here on.
                    eprintln!(
                        "Warning: cannot write logs to {}: {e}; logging disabled",
                        log_dir.display()
                    );
                    BoxMakeWriter::new(std::io::sink)
                }
            };
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
        }
        DisplayMode::Plain => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Daily-rotated log file under `log_dir`, creating the directory if needed.
fn file_appender(log_dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(log_dir)
}
