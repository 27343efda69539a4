//! Startup configuration.
//!
//! The honoree is compiled in; the environment only supplies the credential
//! and presentation knobs.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::event::TargetEvent;
use crate::reveal::DEFAULT_CADENCE;

/// How the countdown is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Full-screen terminal UI.
    #[default]
    Tui,
    /// Line-oriented output on stdout.
    Plain,
}

impl std::str::FromStr for DisplayMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tui" => Ok(DisplayMode::Tui),
            "plain" => Ok(DisplayMode::Plain),
            other => Err(ConfigError::UnknownDisplayMode(other.to_string())),
        }
    }
}

/// Immutable settings built once in `main` and passed down.
#[derive(Debug, Clone)]
pub struct CelebrationConfig {
    pub event: TargetEvent,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub display: DisplayMode,
    /// Delay between revealed poem characters.
    pub reveal_cadence: Duration,
    /// Countdown refresh period.
    pub tick_interval: Duration,
    /// Period of the balloons once celebrating.
    pub celebration_interval: Duration,
    pub log_dir: PathBuf,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            event: TargetEvent::default(),
            api_key: None,
            model: None,
            display: DisplayMode::default(),
            reveal_cadence: DEFAULT_CADENCE,
            tick_interval: Duration::from_secs(1),
            celebration_interval: Duration::from_secs(3),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl CelebrationConfig {
    /// Defaults overridden by process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        config.api_key = non_empty("ANTHROPIC_API_KEY");
        config.model = non_empty("BIRTHDAY_MODEL");

        if let Some(mode) = non_empty("BIRTHDAY_DISPLAY") {
            config.display = mode.parse()?;
        }

        if let Some(ms) = non_empty("BIRTHDAY_REVEAL_MS") {
            let millis: u64 = ms.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                var: "BIRTHDAY_REVEAL_MS",
                value: ms.clone(),
            })?;
            config.reveal_cadence = Duration::from_millis(millis);
        }

        if let Some(dir) = non_empty("BIRTHDAY_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}
