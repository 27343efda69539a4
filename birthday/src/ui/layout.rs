//! Layout calculations for the birthday TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Countdown screen: a single centered panel
pub struct CountdownLayout {
    pub panel: Rect,
    pub hint_bar: Rect,
}

impl CountdownLayout {
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(7), Constraint::Length(1)])
            .split(area);

        Self {
            panel: centered_rect_fixed(72, 7, chunks[0]),
            hint_bar: chunks[1],
        }
    }
}

/// Celebration screen: balloons on both sides, banner over the poem
pub struct CelebrationLayout {
    pub left_balloons: Rect,
    pub right_balloons: Rect,
    pub banner: Rect,
    pub poem: Rect,
    pub hint_bar: Rect,
}

impl CelebrationLayout {
    pub fn calculate(area: Rect) -> Self {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Percentage(60),
                Constraint::Percentage(20),
            ])
            .split(main_chunks[0]);

        let center = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Banner
                Constraint::Min(5),    // Poem
            ])
            .split(columns[1]);

        Self {
            left_balloons: columns[0],
            right_balloons: columns[2],
            banner: center[0],
            poem: center[1],
            hint_bar: main_chunks[1],
        }
    }
}

/// Calculate fixed-size centered popup
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_small_area() {
        let rect = centered_rect_fixed(72, 7, Rect::new(0, 0, 40, 5));
        assert_eq!(rect, Rect::new(0, 0, 40, 5));
    }

    #[test]
    fn test_centered_rect_is_centered() {
        let rect = centered_rect_fixed(20, 4, Rect::new(0, 0, 100, 24));
        assert_eq!(rect, Rect::new(40, 10, 20, 4));
    }

    #[test]
    fn test_celebration_layout_columns() {
        let layout = CelebrationLayout::calculate(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.banner.height, 5);
        assert!(layout.left_balloons.x < layout.banner.x);
        assert!(layout.right_balloons.x > layout.banner.x);
        assert_eq!(layout.hint_bar.y, 29);
    }
}
