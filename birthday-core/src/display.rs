//! The surface the runner draws on.

use std::time::Duration;

use async_trait::async_trait;

use crate::delta::TimeDelta;
use crate::error::{DisplayError, GenerationError};
use crate::event::TargetEvent;

/// Whether the runner should keep going after a pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The operator asked the process to stop.
    Quit,
}

/// A persistent visual slot that each call clears and replaces.
///
/// Nothing the display reads feeds back into the countdown; the only
/// signal it returns is [`Flow::Quit`] when the process should end.
#[async_trait]
pub trait Display: Send {
    /// Time left until the birthday.
    fn show_countdown(&mut self, event: &TargetEvent, delta: &TimeDelta) -> Result<(), DisplayError>;

    /// Greeting shown while the poem is being requested.
    fn show_trigger(&mut self, event: &TargetEvent) -> Result<(), DisplayError>;

    /// One step of the reveal. `prefix` may contain [`crate::LINE_BREAK`].
    fn show_reveal(&mut self, prefix: &str) -> Result<(), DisplayError>;

    /// Shown instead of the reveal when no poem could be obtained.
    fn show_failure(&mut self, error: &GenerationError) -> Result<(), DisplayError>;

    /// One frame of the endless celebration.
    fn show_celebration(&mut self, frame: u64) -> Result<(), DisplayError>;

    /// Block for `duration` of real time.
    async fn pause(&mut self, duration: Duration) -> Result<Flow, DisplayError>;

    /// Resolves when the operator asks to quit while the runner is waiting
    /// on something other than a pause, such as the poem request.
    ///
    /// Displays that cannot see input never resolve.
    async fn wait_for_quit(&mut self) -> Result<(), DisplayError> {
        std::future::pending().await
    }
}
