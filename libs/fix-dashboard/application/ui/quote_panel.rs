//! Headline bid/ask widget (parsed-quote mode)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::application::App;

use super::panel_block;

const PLACEHOLDER: &str = "--";

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let quote = app.context.quote();
    let bold = Modifier::BOLD;

    let bid = quote.bid.as_deref().unwrap_or(PLACEHOLDER);
    let ask = quote.ask.as_deref().unwrap_or(PLACEHOLDER);
    let spread = quote
        .spread()
        .map(|s| s.normalize().to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let lines = vec![
        Line::from(vec![
            Span::raw(" Bid     "),
            Span::styled(bid, Style::default().fg(Color::Green).add_modifier(bold)),
        ]),
        Line::from(vec![
            Span::raw(" Ask     "),
            Span::styled(ask, Style::default().fg(Color::Red).add_modifier(bold)),
        ]),
        Line::from(vec![Span::raw(" Spread  "), Span::raw(spread)]),
    ];

    let panel = Paragraph::new(lines).block(panel_block(" Market Data ".to_string(), false));
    frame.render_widget(panel, area);
}
