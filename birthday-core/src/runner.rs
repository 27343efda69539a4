//! The single-threaded event loop tying clock, poet and display together.

use crate::clock::Clock;
use crate::config::CelebrationConfig;
use crate::countdown::{Countdown, Phase, Tick};
use crate::display::{Display, Flow};
use crate::error::DisplayError;
use crate::poem::{request_poem, PoemGenerator, PoemRequest};
use crate::reveal::Reveal;

/// How the countdown stage ended.
enum CountdownOutcome {
    Quit,
    /// The trigger fired on this run; deliver the poem for this age.
    Triggered(u32),
    /// A previous run already fired the trigger.
    AlreadyTriggered,
}

/// Runs the countdown, fires the poem request once, reveals it and then
/// celebrates until the display reports [`Flow::Quit`].
pub struct Celebration<C, G, D> {
    config: CelebrationConfig,
    countdown: Countdown,
    clock: C,
    poet: G,
    display: D,
}

impl<C, G, D> Celebration<C, G, D>
where
    C: Clock,
    G: PoemGenerator,
    D: Display,
{
    pub fn new(config: CelebrationConfig, clock: C, poet: G, display: D) -> Self {
        let countdown = Countdown::new(config.event.clone());
        Self {
            config,
            countdown,
            clock,
            poet,
            display,
        }
    }

    pub fn phase(&self) -> Phase {
        self.countdown.phase()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Run until the operator quits. Never returns on its own once
    /// celebrating.
    ///
    /// Running again after a quit resumes where the machine is: the poem is
    /// requested at most once per instance.
    pub async fn run(&mut self) -> Result<(), DisplayError> {
        match self.count_down().await? {
            CountdownOutcome::Quit => return Ok(()),
            CountdownOutcome::Triggered(age) => {
                if self.deliver(age).await? == Flow::Quit {
                    return Ok(());
                }
            }
            CountdownOutcome::AlreadyTriggered => {}
        }

        self.countdown.celebrate();
        tracing::info!("entering celebration loop");
        let mut frame = 0u64;
        loop {
            self.display.show_celebration(frame)?;
            frame = frame.wrapping_add(1);
            if self.display.pause(self.config.celebration_interval).await? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Tick once per interval until the trigger fires.
    async fn count_down(&mut self) -> Result<CountdownOutcome, DisplayError> {
        loop {
            match self.countdown.tick(self.clock.now()) {
                Tick::Counting(delta) => {
                    self.display.show_countdown(self.countdown.event(), &delta)?;
                    if self.display.pause(self.config.tick_interval).await? == Flow::Quit {
                        return Ok(CountdownOutcome::Quit);
                    }
                }
                Tick::Triggered { age } => return Ok(CountdownOutcome::Triggered(age)),
                Tick::Idle => return Ok(CountdownOutcome::AlreadyTriggered),
            }
        }
    }

    /// Request the poem and reveal it, or show why it could not be had.
    async fn deliver(&mut self, age: u32) -> Result<Flow, DisplayError> {
        let event = self.countdown.event().clone();
        self.display.show_trigger(&event)?;
        self.display.show_celebration(0)?;

        let request = PoemRequest::for_event(&event, age);
        let outcome = tokio::select! {
            biased;
            outcome = request_poem(&self.poet, &request) => outcome,
            quit = self.display.wait_for_quit() => {
                quit?;
                tracing::info!("quit while waiting for the poem");
                return Ok(Flow::Quit);
            }
        };
        let poem = match outcome {
            Ok(poem) => poem,
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "could not get birthday poem");
                self.display.show_failure(&e)?;
                return Ok(Flow::Continue);
            }
        };

        let reveal = Reveal::new(&poem, self.config.reveal_cadence);
        let cadence = reveal.cadence();
        for prefix in reveal {
            self.display.show_reveal(prefix)?;
            if self.display.pause(cadence).await? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }
}
