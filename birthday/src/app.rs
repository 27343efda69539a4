//! Application state rendered by the TUI

use birthday_core::{TargetEvent, TimeDelta};
use rand::Rng;

use crate::ui::theme::PartyTheme;

/// What the poem slot currently holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoemSlot {
    /// Request in flight
    Waiting,
    /// Prefix revealed so far
    Revealing(String),
    /// Request failed; the message replaces the poem
    Failed(String),
}

/// Which screen is up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Countdown(TimeDelta),
    Celebration(PoemSlot),
}

/// A single balloon, positioned relative to its column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balloon {
    /// Horizontal position, 0.0 (left edge) to 1.0 (right edge)
    pub x: f32,
    /// Vertical position, 0.0 (top) to 1.0 (bottom)
    pub y: f32,
    pub color_index: usize,
}

const BALLOONS_PER_SIDE: usize = 6;

/// Main application state
pub struct App {
    pub event: TargetEvent,
    pub theme: PartyTheme,
    pub screen: Screen,
    pub left_balloons: Vec<Balloon>,
    pub right_balloons: Vec<Balloon>,
    /// Show a cursor after the revealed text
    pub revealing: bool,
}

impl App {
    pub fn new(event: TargetEvent) -> Self {
        Self {
            event,
            theme: PartyTheme::default(),
            screen: Screen::Countdown(TimeDelta::from_seconds(0)),
            left_balloons: Vec::new(),
            right_balloons: Vec::new(),
            revealing: false,
        }
    }

    pub fn set_countdown(&mut self, delta: TimeDelta) {
        self.screen = Screen::Countdown(delta);
    }

    pub fn start_celebration(&mut self) {
        self.screen = Screen::Celebration(PoemSlot::Waiting);
    }

    pub fn reveal(&mut self, prefix: &str) {
        self.screen = Screen::Celebration(PoemSlot::Revealing(prefix.to_string()));
        self.revealing = true;
    }

    pub fn fail(&mut self, message: String) {
        self.screen = Screen::Celebration(PoemSlot::Failed(message));
        self.revealing = false;
    }

    /// New burst of balloons at fresh random positions
    pub fn release_balloons(&mut self, frame: u64) {
        let mut rng = rand::thread_rng();
        let base = frame as usize;
        self.left_balloons = scatter(&mut rng, base);
        self.right_balloons = scatter(&mut rng, base + BALLOONS_PER_SIDE);
        self.revealing = false;
    }
}

fn scatter(rng: &mut impl Rng, color_offset: usize) -> Vec<Balloon> {
    (0..BALLOONS_PER_SIDE)
        .map(|i| Balloon {
            x: rng.gen_range(0.0..1.0),
            y: rng.gen_range(0.0..1.0),
            color_index: color_offset + i,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_countdown() {
        let app = App::new(TargetEvent::default());
        assert!(matches!(app.screen, Screen::Countdown(_)));
        assert!(app.left_balloons.is_empty());
    }

    #[test]
    fn test_reveal_then_celebrate_clears_cursor() {
        let mut app = App::new(TargetEvent::default());
        app.start_celebration();
        assert_eq!(app.screen, Screen::Celebration(PoemSlot::Waiting));

        app.reveal("Ver");
        assert!(app.revealing);
        assert_eq!(app.screen, Screen::Celebration(PoemSlot::Revealing("Ver".into())));

        app.release_balloons(1);
        assert!(!app.revealing);
        // Poem stays on screen while the balloons change
        assert_eq!(app.screen, Screen::Celebration(PoemSlot::Revealing("Ver".into())));
    }

    #[test]
    fn test_balloons_stay_in_bounds() {
        let mut app = App::new(TargetEvent::default());
        for frame in 0..20 {
            app.release_balloons(frame);
            for b in app.left_balloons.iter().chain(&app.right_balloons) {
                assert!((0.0..1.0).contains(&b.x));
                assert!((0.0..1.0).contains(&b.y));
            }
            assert_eq!(app.left_balloons.len(), BALLOONS_PER_SIDE);
        }
    }
}
