//! Testing utilities for the birthday engine.
//!
//! This module provides tools for driving the runner without a terminal,
//! a network or real time:
//! - `ManualClock` for a clock that only moves when told to
//! - `MockPoet` for scripted poems and failures without API calls
//! - `RecordingDisplay` for asserting on everything that was drawn

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::clock::Clock;
use crate::delta::TimeDelta;
use crate::display::{Display, Flow};
use crate::error::{DisplayError, GenerationError};
use crate::event::TargetEvent;
use crate::poem::{PoemGenerator, PoemRequest};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A clock shared between the runner and a display that advances it.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let by = chrono::Duration::from_std(by).unwrap_or(chrono::Duration::zero());
        *lock(&self.now) += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *lock(&self.now)
    }
}

/// A poet that returns a scripted outcome and remembers what it was asked.
pub struct MockPoet {
    outcome: Result<String, GenerationError>,
    hangs: bool,
    requests: Mutex<Vec<PoemRequest>>,
}

impl MockPoet {
    pub fn poem(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
            hangs: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: GenerationError) -> Self {
        Self {
            outcome: Err(error),
            hangs: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A poet whose request never completes, like a stalled connection.
    pub fn hanging() -> Self {
        Self {
            hangs: true,
            ..Self::poem("")
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<PoemRequest> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl PoemGenerator for MockPoet {
    async fn generate(&self, request: &PoemRequest) -> Result<String, GenerationError> {
        lock(&self.requests).push(request.clone());
        if self.hangs {
            std::future::pending::<()>().await;
        }
        self.outcome.clone()
    }
}

/// One thing drawn on a [`RecordingDisplay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Countdown(TimeDelta),
    Trigger { short_name: String },
    Reveal(String),
    Failure(String),
    Celebration(u64),
    Pause(Duration),
    QuitWhileWaiting,
}

/// Records every draw and advances a [`ManualClock`] on each pause.
///
/// Quits once `quit_after_celebrations` celebration frames have been drawn,
/// or after `max_pauses` pauses, whichever comes first.
pub struct RecordingDisplay {
    clock: ManualClock,
    pub rendered: Vec<Rendered>,
    quit_after_celebrations: usize,
    max_pauses: usize,
    quit_while_waiting: bool,
    celebrations: usize,
    pauses: usize,
}

impl RecordingDisplay {
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            rendered: Vec::new(),
            quit_after_celebrations: 3,
            max_pauses: 100_000,
            quit_while_waiting: false,
            celebrations: 0,
            pauses: 0,
        }
    }

    pub fn quit_after_celebrations(mut self, frames: usize) -> Self {
        self.quit_after_celebrations = frames;
        self
    }

    pub fn max_pauses(mut self, pauses: usize) -> Self {
        self.max_pauses = pauses;
        self
    }

    /// Ask to quit as soon as the runner waits on anything but a pause.
    pub fn quit_while_waiting(mut self) -> Self {
        self.quit_while_waiting = true;
        self
    }

    pub fn countdowns(&self) -> Vec<TimeDelta> {
        self.rendered
            .iter()
            .filter_map(|r| match r {
                Rendered::Countdown(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    pub fn reveals(&self) -> Vec<&str> {
        self.rendered
            .iter()
            .filter_map(|r| match r {
                Rendered::Reveal(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<&str> {
        self.rendered
            .iter()
            .filter_map(|r| match r {
                Rendered::Failure(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn trigger_count(&self) -> usize {
        self.rendered
            .iter()
            .filter(|r| matches!(r, Rendered::Trigger { .. }))
            .count()
    }
}

#[async_trait]
impl Display for RecordingDisplay {
    fn show_countdown(&mut self, _event: &TargetEvent, delta: &TimeDelta) -> Result<(), DisplayError> {
        self.rendered.push(Rendered::Countdown(*delta));
        Ok(())
    }

    fn show_trigger(&mut self, event: &TargetEvent) -> Result<(), DisplayError> {
        self.rendered.push(Rendered::Trigger {
            short_name: event.short_name().to_string(),
        });
        Ok(())
    }

    fn show_reveal(&mut self, prefix: &str) -> Result<(), DisplayError> {
        self.rendered.push(Rendered::Reveal(prefix.to_string()));
        Ok(())
    }

    fn show_failure(&mut self, error: &GenerationError) -> Result<(), DisplayError> {
        self.rendered.push(Rendered::Failure(error.user_message()));
        Ok(())
    }

    fn show_celebration(&mut self, frame: u64) -> Result<(), DisplayError> {
        self.rendered.push(Rendered::Celebration(frame));
        self.celebrations += 1;
        Ok(())
    }

    async fn pause(&mut self, duration: Duration) -> Result<Flow, DisplayError> {
        self.rendered.push(Rendered::Pause(duration));
        self.pauses += 1;
        self.clock.advance(duration);
        if self.celebrations >= self.quit_after_celebrations || self.pauses >= self.max_pauses {
            Ok(Flow::Quit)
        } else {
            Ok(Flow::Continue)
        }
    }

    async fn wait_for_quit(&mut self) -> Result<(), DisplayError> {
        if !self.quit_while_waiting {
            std::future::pending::<()>().await;
        }
        self.rendered.push(Rendered::QuitWhileWaiting);
        Ok(())
    }
}
