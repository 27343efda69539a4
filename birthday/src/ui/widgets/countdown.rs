//! Countdown panel widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use birthday_core::TimeDelta;

use crate::ui::theme::PartyTheme;

/// Widget showing the time left until the birthday
pub struct CountdownWidget<'a> {
    full_name: &'a str,
    delta: TimeDelta,
    theme: &'a PartyTheme,
}

impl<'a> CountdownWidget<'a> {
    pub fn new(full_name: &'a str, delta: TimeDelta, theme: &'a PartyTheme) -> Self {
        Self {
            full_name,
            delta,
            theme,
        }
    }

    /// "Quedan N días, N horas, N minutos y N segundos", numbers highlighted
    fn remaining_line(&self) -> Line<'static> {
        let text = self.theme.countdown_line_style();
        let number = self.theme.countdown_number_style();
        let TimeDelta {
            days,
            hours,
            minutes,
            seconds,
        } = self.delta;

        Line::from(vec![
            Span::styled(" Quedan ", text),
            Span::styled(days.to_string(), number),
            Span::styled(" días, ", text),
            Span::styled(hours.to_string(), number),
            Span::styled(" horas, ", text),
            Span::styled(minutes.to_string(), number),
            Span::styled(" minutos y ", text),
            Span::styled(seconds.to_string(), number),
            Span::styled(" segundos ", text),
        ])
    }
}

impl Widget for CountdownWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(self.theme.countdown_border));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("¡Falta poco para el cumpleaños de {}!", self.full_name),
                self.theme.countdown_title_style(),
            )),
            Line::from(""),
            self.remaining_line(),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
