//! Client terminal widget - the command input line

use ratatui::{
    layout::{Position, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::application::{App, Focus};

use super::panel_block;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Terminal;
    let block = panel_block(" Client Terminal ".to_string(), focused);
    let inner = block.inner(area);

    let input = app.emitter.input();
    let visible_width = inner.width.saturating_sub(1) as usize;
    let char_count = input.chars().count();
    // Keep the tail of long input in view
    let shown: String = input
        .chars()
        .skip(char_count.saturating_sub(visible_width))
        .collect();

    let paragraph = if input.is_empty() && !focused {
        Paragraph::new("Enter command (e.g., buy USD/BRL 100)")
    } else {
        Paragraph::new(shown.as_str())
    };
    frame.render_widget(paragraph.block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let cursor_x = inner.x + shown.chars().count().min(visible_width) as u16;
        frame.set_cursor_position(Position::new(cursor_x, inner.y));
    }
}
