//! UI widgets for the dashboard

pub mod log_panel;
pub mod quote_panel;
pub mod terminal;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{ChannelName, ConnectionState};
use crate::infrastructure::MarketDataMode;

use super::{App, Focus};

/// Draw the main UI layout
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    draw_main(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);
}

/// Badge style for a connection state
pub fn badge_style(state: ConnectionState) -> Style {
    let bg = match state {
        ConnectionState::Connected => Color::Green,
        ConnectionState::Disconnected => Color::Red,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.context.connection().state();
    let stats = app.stats();

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(format!(" {} ", state), badge_style(state)),
        Span::raw(format!(
            "  Orders: {} | Maker: {} | Market data: {} | Dropped: {}",
            app.context.channel(ChannelName::Orders).len(),
            app.context.channel(ChannelName::Maker).len(),
            app.context.channel(ChannelName::MarketData).len(),
            stats.dropped(),
        )),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" FIX Trading Interface "),
    );

    frame.render_widget(header, area);
}

fn draw_main(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(columns[0]);

    terminal::draw(frame, app, left[0]);
    log_panel::draw(frame, app, ChannelName::Orders, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[1]);

    log_panel::draw(frame, app, ChannelName::Maker, right[0]);
    match app.context.mode() {
        MarketDataMode::RawLog => log_panel::draw(frame, app, ChannelName::MarketData, right[1]),
        MarketDataMode::ParsedQuotes => quote_panel::draw(frame, app, right[1]),
    }
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.focus {
        Focus::Terminal => " Enter=send  Tab=next panel  Esc/Ctrl+C=quit",
        Focus::Log(_) => {
            " Up/Down=inspect entry  PgUp/PgDn=scroll text  End/Esc=follow newest  Tab=next panel"
        }
    };
    let footer = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

/// Border style for a panel, highlighted when it has focus
pub(crate) fn panel_block(title: String, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}


#[cfg(test)]
mod tests {
    use super::test_support::render;
    use super::*;
    use crate::application::{CommandEmitter, CommandSink, DashboardContext};
    use crate::infrastructure::ChannelSignal;
    use crossbeam_channel::unbounded;

    struct NullSink;

    impl CommandSink for NullSink {
        fn emit(&self, _command: String) {}
    }

    #[test]
    fn test_header_badge_tracks_connection() {
        let (tx, rx) = unbounded();
        let mut app = App::new(DashboardContext::default(), CommandEmitter::new(NullSink), rx);

        let screen = render(&app, 120, 30).join("\n");
        assert!(screen.contains("Disconnected"));

        tx.send(ChannelSignal::Opened).unwrap();
        app.drain_signals();
        let header = render(&app, 120, 30)[1].clone();
        assert!(header.contains(" Connected "));
        assert!(!header.contains("Disconnected"));
    }
}
