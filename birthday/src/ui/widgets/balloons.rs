//! Balloons drawn beside the greeting

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::app::Balloon;
use crate::ui::theme::PartyTheme;

/// Each balloon is a colored head with a string below it
pub struct BalloonsWidget<'a> {
    balloons: &'a [Balloon],
    theme: &'a PartyTheme,
}

impl<'a> BalloonsWidget<'a> {
    pub fn new(balloons: &'a [Balloon], theme: &'a PartyTheme) -> Self {
        Self { balloons, theme }
    }
}

impl Widget for BalloonsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Need room for the head and the string
        if area.width == 0 || area.height < 2 {
            return;
        }

        let string_style = Style::default().fg(self.theme.hint);
        for balloon in self.balloons {
            let x = area.x + (balloon.x * f32::from(area.width - 1)) as u16;
            let y = area.y + (balloon.y * f32::from(area.height - 2)) as u16;
            let head_style = Style::default()
                .fg(self.theme.balloon_color(balloon.color_index))
                .add_modifier(Modifier::BOLD);

            buf[(x, y)].set_char('●').set_style(head_style);
            buf[(x, y + 1)].set_char('╎').set_style(string_style);
        }
    }
}
