//! Birthday countdown engine.
//!
//! This crate provides:
//! - The target event and the signed time delta to it
//! - A countdown state machine that fires exactly once per birthday
//! - Character-by-character reveal pacing for the generated poem
//! - The poem generation seam, backed by Claude
//! - A single-threaded runner that drives a [`Display`] from a [`Clock`]
//!
//! # Quick Start
//!
//! ```ignore
//! use birthday_core::{Celebration, CelebrationConfig, ClaudePoet, SystemClock};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CelebrationConfig::from_env()?;
//!     let poet = ClaudePoet::from_config(&config);
//!     let display = MyDisplay::new();
//!
//!     Celebration::new(config, SystemClock, poet, display).run().await?;
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod countdown;
pub mod delta;
pub mod display;
pub mod error;
pub mod event;
pub mod poem;
pub mod reveal;
pub mod runner;
pub mod testing;

pub use clock::{Clock, SystemClock};
pub use config::{CelebrationConfig, DisplayMode};
pub use countdown::{Countdown, Phase, Tick};
pub use delta::TimeDelta;
pub use display::{Display, Flow};
pub use error::{ConfigError, DisplayError, GenerationError};
pub use event::TargetEvent;
pub use poem::{ClaudePoet, PoemGenerator, PoemRequest, LINE_BREAK};
pub use reveal::Reveal;
pub use runner::Celebration;
pub use testing::{ManualClock, MockPoet, RecordingDisplay, Rendered};
