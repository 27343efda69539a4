//! Render orchestration for the birthday TUI

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, PoemSlot, Screen};
use crate::ui::layout::{CelebrationLayout, CountdownLayout};
use crate::ui::widgets::{BalloonsWidget, BannerWidget, CountdownWidget, PoemWidget};

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match &app.screen {
        Screen::Countdown(delta) => {
            let layout = CountdownLayout::calculate(area);
            let widget = CountdownWidget::new(&app.event.full_name, *delta, &app.theme);
            frame.render_widget(widget, layout.panel);
            render_hint(frame, app, layout.hint_bar);
        }
        Screen::Celebration(slot) => render_celebration(frame, app, slot, area),
    }
}

fn render_celebration(frame: &mut Frame, app: &App, slot: &PoemSlot, area: Rect) {
    let layout = CelebrationLayout::calculate(area);
    let short_name = app.event.short_name();

    frame.render_widget(
        BalloonsWidget::new(&app.left_balloons, &app.theme),
        layout.left_balloons,
    );
    frame.render_widget(
        BalloonsWidget::new(&app.right_balloons, &app.theme),
        layout.right_balloons,
    );
    frame.render_widget(BannerWidget::new(short_name, &app.theme), layout.banner);
    frame.render_widget(
        PoemWidget::new(slot, short_name, &app.theme).cursor(app.revealing),
        layout.poem,
    );

    render_hint(frame, app, layout.hint_bar);
}

fn render_hint(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(Span::styled("Ctrl+C o q para salir", app.theme.hint_style()));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use birthday_core::{TargetEvent, TimeDelta, LINE_BREAK};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_countdown_screen() {
        let mut app = App::new(TargetEvent::default());
        app.set_countdown(TimeDelta::from_seconds(12 * 3600 + 5 * 60 + 7));
        let text = draw(&app);
        assert!(text.contains("¡Falta poco para el cumpleaños de Siro Bayón!"));
        assert!(text.contains("Quedan 0 días, 12 horas, 5 minutos y 7 segundos"));
    }

    #[test]
    fn test_waiting_screen() {
        let mut app = App::new(TargetEvent::default());
        app.start_celebration();
        app.release_balloons(0);
        let text = draw(&app);
        assert!(text.contains("¡Feliz Cumpleaños, Siro!"));
        assert!(text.contains("Esperemos que disfrutes de tu día."));
        assert!(text.contains("Ha llegado el gran día"));
        assert!(text.contains('●'));
    }

    #[test]
    fn test_poem_lines_split_on_line_break() {
        let mut app = App::new(TargetEvent::default());
        app.start_celebration();
        app.reveal(&format!("Primer verso{LINE_BREAK}Segundo verso"));
        let text = draw(&app);
        let first = text.lines().position(|l| l.contains("Primer verso")).unwrap();
        let second = text.lines().position(|l| l.contains("Segundo verso")).unwrap();
        assert_eq!(second, first + 1);
        assert!(!text.contains(LINE_BREAK));
    }

    #[test]
    fn test_failure_panel() {
        let mut app = App::new(TargetEvent::default());
        app.start_celebration();
        app.fail("Error de conexión: refused".to_string());
        let text = draw(&app);
        assert!(text.contains(" Error "));
        assert!(text.contains("Error de conexión: refused"));
    }
}
