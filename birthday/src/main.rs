//! Birthday countdown TUI.
//!
//! Counts down to the honoree's birthday once per second. On the day it asks
//! Claude for a sonnet, reveals it character by character and then keeps
//! releasing balloons until the process is stopped.
//!
//! There are no command-line flags. Set `BIRTHDAY_DISPLAY=plain` for
//! line-oriented output instead of the full-screen UI:
//!
//! ```bash
//! BIRTHDAY_DISPLAY=plain cargo run -p birthday
//! ```

mod app;
mod logging;
mod plain;
mod ui;

use birthday_core::{Celebration, CelebrationConfig, ClaudePoet, DisplayError, DisplayMode, SystemClock};

use plain::PlainDisplay;
use ui::TerminalDisplay;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = match CelebrationConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    logging::init(config.display, &config.log_dir);
    tracing::info!(
        honoree = %config.event.full_name,
        date = %config.event.date,
        age = config.event.age,
        display = ?config.display,
        has_api_key = config.api_key.is_some(),
        "starting birthday countdown"
    );
    if config.api_key.is_none() {
        tracing::warn!("ANTHROPIC_API_KEY not set; the poem request will fail on the day");
    }

    let poet = ClaudePoet::from_config(&config);

    match config.display {
        DisplayMode::Plain => {
            let mut celebration = Celebration::new(config, SystemClock, poet, PlainDisplay::stdout());
            celebration.run().await?;
        }
        DisplayMode::Tui => {
            let display = TerminalDisplay::setup(config.event.clone())?;
            let mut celebration = Celebration::new(config, SystemClock, poet, display);
            let result = celebration.run().await;

            // Restore terminal
            let mut display = celebration.into_display();
            display.restore()?;

            report(result)?;
        }
    }

    Ok(())
}

/// Log a failed run once the terminal is back, and pass it on so the
/// process exits non-zero.
fn report(result: Result<(), DisplayError>) -> Result<(), DisplayError> {
    if let Err(e) = &result {
        tracing::error!(error = %e, "display failed");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_report_propagates_display_failure() {
        let failed = Err(DisplayError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "gone")));
        assert!(matches!(report(failed), Err(DisplayError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe));
        assert!(report(Ok(())).is_ok());
    }
}
