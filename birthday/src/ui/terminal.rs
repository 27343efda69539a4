//! Full-screen terminal implementation of the display surface

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use birthday_core::{Display, DisplayError, Flow, GenerationError, TargetEvent, TimeDelta};

use crate::app::App;
use crate::ui::render::render;

/// How often input is checked while an async request is in flight.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Ratatui display. Waits are crossterm polls so Ctrl+C still ends the
/// process while the terminal is in raw mode.
pub struct TerminalDisplay<B: Backend> {
    terminal: Terminal<B>,
    app: App,
}

impl TerminalDisplay<CrosstermBackend<Stdout>> {
    /// Take over the terminal. Pair with [`TerminalDisplay::restore`].
    pub fn setup(event: TargetEvent) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::new(terminal, event))
    }

    /// Give the terminal back to the shell.
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

impl<B: Backend> TerminalDisplay<B> {
    pub fn new(terminal: Terminal<B>, event: TargetEvent) -> Self {
        Self {
            terminal,
            app: App::new(event),
        }
    }

    #[cfg(test)]
    pub fn app(&self) -> &App {
        &self.app
    }

    fn draw(&mut self) -> Result<(), DisplayError> {
        let app = &self.app;
        self.terminal.draw(|f| render(f, app))?;
        Ok(())
    }

    fn handle(&mut self, event: Event) -> Result<Flow, DisplayError> {
        match event {
            Event::Key(key) if is_quit(&key) => {
                tracing::info!("quit requested from terminal");
                Ok(Flow::Quit)
            }
            Event::Resize(_, _) => {
                self.draw()?;
                Ok(Flow::Continue)
            }
            _ => Ok(Flow::Continue),
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Esc => true,
        _ => false,
    }
}

#[async_trait]
impl<B: Backend + Send> Display for TerminalDisplay<B> {
    fn show_countdown(&mut self, _event: &TargetEvent, delta: &TimeDelta) -> Result<(), DisplayError> {
        self.app.set_countdown(*delta);
        self.draw()
    }

    fn show_trigger(&mut self, _event: &TargetEvent) -> Result<(), DisplayError> {
        self.app.start_celebration();
        self.draw()
    }

    fn show_reveal(&mut self, prefix: &str) -> Result<(), DisplayError> {
        self.app.reveal(prefix);
        self.draw()
    }

    fn show_failure(&mut self, error: &GenerationError) -> Result<(), DisplayError> {
        self.app.fail(error.user_message());
        self.draw()
    }

    fn show_celebration(&mut self, frame: u64) -> Result<(), DisplayError> {
        self.app.release_balloons(frame);
        self.draw()
    }

    async fn pause(&mut self, duration: Duration) -> Result<Flow, DisplayError> {
        let deadline = Instant::now() + duration;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                return Ok(Flow::Continue);
            }
            if self.handle(event::read()?)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    // Polls without blocking so the single-threaded runtime keeps driving
    // the request this is raced against.
    async fn wait_for_quit(&mut self) -> Result<(), DisplayError> {
        loop {
            while event::poll(Duration::ZERO)? {
                if self.handle(event::read()?)? == Flow::Quit {
                    return Ok(());
                }
            }
            tokio::time::sleep(INPUT_POLL).await;
        }
    }
}
