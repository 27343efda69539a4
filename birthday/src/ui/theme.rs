//! Color theme and styling for the birthday TUI

use ratatui::style::{Color, Modifier, Style};

/// Birthday UI color theme
#[derive(Debug, Clone)]
pub struct PartyTheme {
    // Countdown panel
    pub countdown_border: Color,
    pub countdown_title: Color,
    pub countdown_fg: Color,
    pub countdown_bg: Color,
    pub countdown_number: Color,

    // Greeting banner
    pub banner_border: Color,
    pub banner_title: Color,
    pub banner_subtitle: Color,

    // Poem and error panels
    pub poem_border: Color,
    pub poem_text: Color,
    pub error_border: Color,
    pub error_text: Color,

    pub hint: Color,
    pub balloons: [Color; 6],
}

impl Default for PartyTheme {
    fn default() -> Self {
        Self {
            countdown_border: Color::Magenta,
            countdown_title: Color::White,
            countdown_fg: Color::Rgb(0x33, 0x33, 0x33),
            countdown_bg: Color::Rgb(0xFF, 0xFD, 0xD0),
            countdown_number: Color::Red,

            banner_border: Color::Green,
            banner_title: Color::White,
            banner_subtitle: Color::Gray,

            poem_border: Color::Yellow,
            poem_text: Color::White,
            error_border: Color::Red,
            error_text: Color::LightRed,

            hint: Color::DarkGray,
            balloons: [
                Color::Red,
                Color::Yellow,
                Color::Blue,
                Color::Magenta,
                Color::Green,
                Color::Cyan,
            ],
        }
    }
}

impl PartyTheme {
    pub fn countdown_title_style(&self) -> Style {
        Style::default()
            .fg(self.countdown_title)
            .add_modifier(Modifier::BOLD)
    }

    /// Cream strip the remaining time sits on
    pub fn countdown_line_style(&self) -> Style {
        Style::default().fg(self.countdown_fg).bg(self.countdown_bg)
    }

    pub fn countdown_number_style(&self) -> Style {
        self.countdown_line_style()
            .fg(self.countdown_number)
            .add_modifier(Modifier::BOLD)
    }

    pub fn banner_title_style(&self) -> Style {
        Style::default()
            .fg(self.banner_title)
            .add_modifier(Modifier::BOLD)
    }

    pub fn banner_subtitle_style(&self) -> Style {
        Style::default().fg(self.banner_subtitle)
    }

    pub fn poem_style(&self) -> Style {
        Style::default().fg(self.poem_text)
    }

    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.error_text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.hint).add_modifier(Modifier::DIM)
    }

    pub fn border_style(&self, color: Color) -> Style {
        Style::default().fg(color)
    }

    /// Color for the n-th balloon
    pub fn balloon_color(&self, index: usize) -> Color {
        self.balloons[index % self.balloons.len()]
    }
}
