//! Poem panel: waiting message, the revealed sonnet, or the failure

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use birthday_core::LINE_BREAK;

use crate::app::PoemSlot;
use crate::ui::theme::PartyTheme;

/// Widget for the poem slot
pub struct PoemWidget<'a> {
    slot: &'a PoemSlot,
    short_name: &'a str,
    theme: &'a PartyTheme,
    cursor: bool,
}

impl<'a> PoemWidget<'a> {
    pub fn new(slot: &'a PoemSlot, short_name: &'a str, theme: &'a PartyTheme) -> Self {
        Self {
            slot,
            short_name,
            theme,
            cursor: false,
        }
    }

    pub fn cursor(mut self, cursor: bool) -> Self {
        self.cursor = cursor;
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        match self.slot {
            PoemSlot::Waiting => vec![Line::from(Span::styled(
                format!(
                    "¡¡¡ Ha llegado el gran día !!! Sé paciente mientras cargamos tu regalo, {}...",
                    self.short_name
                ),
                self.theme.poem_style().add_modifier(Modifier::ITALIC),
            ))],
            PoemSlot::Revealing(text) => {
                let style = self.theme.poem_style();
                let mut lines: Vec<Line> = text
                    .split(LINE_BREAK)
                    .map(|line| Line::from(Span::styled(line.to_string(), style)))
                    .collect();
                if self.cursor {
                    if let Some(last) = lines.last_mut() {
                        last.push_span(Span::styled("▌", style.add_modifier(Modifier::DIM)));
                    }
                }
                lines
            }
            PoemSlot::Failed(message) => {
                vec![Line::from(Span::styled(message.clone(), self.theme.error_style()))]
            }
        }
    }
}

impl Widget for PoemWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, border) = match self.slot {
            PoemSlot::Failed(_) => (" Error ", self.theme.error_border),
            _ => (" Tu regalo ", self.theme.poem_border),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style(border));

        let lines = self.lines();
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
