//! Plain line-oriented display.
//!
//! Writes to stdout without taking over the terminal, for pipes, logs and
//! terminals that cannot host the full-screen UI. The countdown rewrites a
//! single line; the poem streams out as it is revealed.

use std::io::{self, Write};
use std::time::Duration;

use async_trait::async_trait;
use birthday_core::{Display, DisplayError, Flow, GenerationError, TargetEvent, TimeDelta, LINE_BREAK};

/// Display that prints to any writer
pub struct PlainDisplay<W: Write + Send> {
    out: W,
    /// Characters of the poem already printed
    revealed: usize,
    /// A countdown line is waiting to be overwritten
    countdown_open: bool,
}

impl PlainDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> PlainDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            revealed: 0,
            countdown_open: false,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// End an open countdown line before printing anything else
    fn close_countdown(&mut self) -> io::Result<()> {
        if self.countdown_open {
            writeln!(self.out)?;
            self.countdown_open = false;
        }
        Ok(())
    }
}

#[async_trait]
impl<W: Write + Send> Display for PlainDisplay<W> {
    fn show_countdown(&mut self, event: &TargetEvent, delta: &TimeDelta) -> Result<(), DisplayError> {
        write!(
            self.out,
            "\r¡Falta poco para el cumpleaños de {}! Quedan {} días, {} horas, {} minutos y {} segundos   ",
            event.full_name, delta.days, delta.hours, delta.minutes, delta.seconds
        )?;
        self.countdown_open = true;
        self.out.flush()?;
        Ok(())
    }

    fn show_trigger(&mut self, event: &TargetEvent) -> Result<(), DisplayError> {
        self.close_countdown()?;
        let name = event.short_name();
        writeln!(self.out)?;
        writeln!(self.out, "¡Feliz Cumpleaños, {name}!")?;
        writeln!(self.out, "Esperemos que disfrutes de tu día.")?;
        writeln!(self.out)?;
        writeln!(
            self.out,
            "¡¡¡ Ha llegado el gran día !!! Sé paciente mientras cargamos tu regalo, {name}..."
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn show_reveal(&mut self, prefix: &str) -> Result<(), DisplayError> {
        for ch in prefix.chars().skip(self.revealed) {
            if ch == LINE_BREAK {
                writeln!(self.out)?;
            } else {
                write!(self.out, "{ch}")?;
            }
            self.revealed += 1;
        }
        self.out.flush()?;
        Ok(())
    }

    fn show_failure(&mut self, error: &GenerationError) -> Result<(), DisplayError> {
        self.close_countdown()?;
        writeln!(self.out, "[ERROR] {}", error.user_message())?;
        self.out.flush()?;
        Ok(())
    }

    fn show_celebration(&mut self, frame: u64) -> Result<(), DisplayError> {
        if self.revealed > 0 {
            // Finish the poem's last line before the first balloons
            writeln!(self.out)?;
            self.revealed = 0;
        }
        let offset = " ".repeat((frame % 8) as usize);
        writeln!(self.out, "{offset}🎈 🎈 🎈")?;
        self.out.flush()?;
        Ok(())
    }

    async fn pause(&mut self, duration: Duration) -> Result<Flow, DisplayError> {
        tokio::time::sleep(duration).await;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(display: PlainDisplay<Vec<u8>>) -> String {
        String::from_utf8(display.into_inner()).unwrap()
    }

    #[test]
    fn test_countdown_rewrites_line() {
        let mut display = PlainDisplay::new(Vec::new());
        let event = TargetEvent::default();
        display.show_countdown(&event, &TimeDelta::from_seconds(61)).unwrap();
        display.show_countdown(&event, &TimeDelta::from_seconds(60)).unwrap();
        let out = output(display);
        assert_eq!(out.matches('\r').count(), 2);
        assert!(!out.contains('\n'));
        assert!(out.contains("Quedan 0 días, 0 horas, 1 minutos y 0 segundos"));
    }

    #[test]
    fn test_reveal_prints_each_character_once() {
        let mut display = PlainDisplay::new(Vec::new());
        let poem = format!("Uno{LINE_BREAK}Dos");
        for prefix in birthday_core::Reveal::new(&poem, Duration::ZERO) {
            display.show_reveal(prefix).unwrap();
        }
        display.show_celebration(0).unwrap();
        let out = output(display);
        assert!(out.starts_with("Uno\nDos\n"));
        assert!(out.contains("🎈"));
    }

    #[test]
    fn test_trigger_closes_countdown_line() {
        let mut display = PlainDisplay::new(Vec::new());
        let event = TargetEvent::default();
        display.show_countdown(&event, &TimeDelta::from_seconds(1)).unwrap();
        display.show_trigger(&event).unwrap();
        let out = output(display);
        assert!(out.contains("segundos   \n"));
        assert!(out.contains("¡Feliz Cumpleaños, Siro!"));
    }

    #[test]
    fn test_failure_message() {
        let mut display = PlainDisplay::new(Vec::new());
        display
            .show_failure(&GenerationError::Network("timeout".into()))
            .unwrap();
        assert_eq!(output(display), "[ERROR] Error de conexión: timeout\n");
    }
}
