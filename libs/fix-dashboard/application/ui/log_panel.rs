//! Log panel widget - timestamped, auto-scrolling, truncated rows
//!
//! Each row shows the single-line form of an entry. When the panel has
//! focus and an entry is selected, the full text is shown in a popup
//! anchored to the bottom of the panel. The popup grows upward as far as
//! the frame allows and scrolls (PageUp/PageDown) when the text is taller.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use crate::application::{App, Focus};
use crate::domain::{ChannelName, LogEntry};

use super::panel_block;

/// Width of the `HH:MM:SS` column
const TIME_COLUMN: u16 = 8;

pub fn draw(frame: &mut Frame, app: &App, name: ChannelName, area: Rect) {
    let channel = app.context.channel(name);
    let view = app.view(name);
    let focused = app.focus == Focus::Log(name);

    let title = format!(" {} ({}) ", channel.name().title(), channel.len());
    let block = panel_block(title, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text_width = inner.width.saturating_sub(TIME_COLUMN + 1) as usize;
    let window = view.window(channel.len(), inner.height as usize);

    let rows: Vec<Row> = channel.entries()[window.clone()]
        .iter()
        .zip(window)
        .map(|(entry, index)| {
            let row_style = if view.focus() == Some(index) {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(entry.timestamp().to_string())
                    .style(Style::default().fg(Color::Gray)),
                Cell::from(entry.single_line(text_width)),
            ])
            .style(row_style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(TIME_COLUMN), Constraint::Min(0)])
        .column_spacing(1);
    frame.render_widget(table, inner);

    if focused {
        if let Some(entry) = view.focus().and_then(|index| channel.get(index)) {
            let bounds = frame.area();
            draw_expanded(frame, entry, area, bounds, view.detail_offset());
        }
    }
}

/// Placement of the expanded text and the slice of rows it shows
#[derive(Debug)]
struct ExpandedLayout<'a> {
    popup: Rect,
    rows: Vec<&'a str>,
    offset: usize,
    visible: usize,
}

impl<'a> ExpandedLayout<'a> {
    /// Popup over the bottom of `panel`, growing upward inside `bounds`
    fn new(entry: &'a LogEntry, panel: Rect, bounds: Rect, offset: usize) -> Self {
        let width = panel.width.saturating_sub(2);
        let rows = entry.wrapped_lines(width.saturating_sub(2) as usize);

        let bottom = panel.bottom().saturating_sub(1);
        let room = bottom.saturating_sub(bounds.y) as usize;
        let height = (rows.len() + 2).min(room);
        let visible = height.saturating_sub(2);

        Self {
            popup: Rect {
                x: panel.x + 1,
                y: bottom - height as u16,
                width,
                height: height as u16,
            },
            offset: offset.min(rows.len().saturating_sub(visible)),
            rows,
            visible,
        }
    }

    fn shown(&self) -> &[&'a str] {
        let end = (self.offset + self.visible).min(self.rows.len());
        &self.rows[self.offset..end]
    }

    fn overflows(&self) -> bool {
        self.rows.len() > self.visible
    }
}

/// Full text of the focused entry, character-wrapped
fn draw_expanded(frame: &mut Frame, entry: &LogEntry, panel: Rect, bounds: Rect, offset: usize) {
    let layout = ExpandedLayout::new(entry, panel, bounds, offset);
    if layout.popup.width < 3 || layout.visible == 0 {
        return;
    }

    let title = if layout.overflows() {
        format!(
            " {}  rows {}-{} of {}  PgUp/PgDn ",
            entry.timestamp(),
            layout.offset + 1,
            layout.offset + layout.shown().len(),
            layout.rows.len()
        )
    } else {
        format!(" {} ", entry.timestamp())
    };

    let lines: Vec<Line> = layout.shown().iter().map(|row| Line::raw(*row)).collect();
    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(title),
    );

    frame.render_widget(Clear, layout.popup);
    frame.render_widget(body, layout.popup);
}
