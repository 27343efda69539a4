//! Birthday greeting banner

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::theme::PartyTheme;

pub struct BannerWidget<'a> {
    short_name: &'a str,
    theme: &'a PartyTheme,
}

impl<'a> BannerWidget<'a> {
    pub fn new(short_name: &'a str, theme: &'a PartyTheme) -> Self {
        Self { short_name, theme }
    }
}

impl Widget for BannerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(self.theme.border_style(self.theme.banner_border));

        let lines = vec![
            Line::from(Span::styled(
                format!("¡Feliz Cumpleaños, {}!", self.short_name),
                self.theme.banner_title_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Esperemos que disfrutes de tu día.",
                self.theme.banner_subtitle_style(),
            )),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
