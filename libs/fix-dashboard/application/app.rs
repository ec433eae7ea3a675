//! Main application state and input handling for the dashboard

use crossbeam_channel::Receiver;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::domain::{ChannelName, LogView};
use crate::infrastructure::{ChannelSignal, MarketDataMode};

use super::{CommandEmitter, DashboardContext, DispatchStats, EventDispatcher};

/// Rows moved by PageUp/PageDown in the expanded text
const DETAIL_PAGE: usize = 10;

/// Which panel receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Terminal,
    Log(ChannelName),
}

pub struct App {
    pub context: DashboardContext,
    pub emitter: CommandEmitter,
    dispatcher: EventDispatcher,
    signals: Receiver<ChannelSignal>,
    views: [LogView; 3],
    pub focus: Focus,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        context: DashboardContext,
        emitter: CommandEmitter,
        signals: Receiver<ChannelSignal>,
    ) -> Self {
        Self {
            context,
            emitter,
            dispatcher: EventDispatcher::new(),
            signals,
            views: [LogView::new(); 3],
            focus: Focus::Terminal,
            should_quit: false,
        }
    }

    /// Process every pending signal, serially and in arrival order
    pub fn drain_signals(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(signal) = self.signals.try_recv() {
            self.dispatcher.handle_signal(&mut self.context, signal);
            processed += 1;
        }
        processed
    }

    pub fn stats(&self) -> DispatchStats {
        self.dispatcher.stats()
    }

    pub fn view(&self, name: ChannelName) -> &LogView {
        &self.views[slot(name)]
    }

    /// Panels that can take focus, in Tab order
    fn focus_ring(&self) -> Vec<Focus> {
        let mut ring = vec![
            Focus::Terminal,
            Focus::Log(ChannelName::Orders),
            Focus::Log(ChannelName::Maker),
        ];
        if self.context.mode() == MarketDataMode::RawLog {
            ring.push(Focus::Log(ChannelName::MarketData));
        }
        ring
    }

    pub fn cycle_focus(&mut self) {
        let ring = self.focus_ring();
        let current = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = ring[(current + 1) % ring.len()];
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::Tab {
            self.cycle_focus();
            return;
        }

        match self.focus {
            Focus::Terminal => match key.code {
                KeyCode::Enter => {
                    self.emitter.submit();
                }
                KeyCode::Backspace => self.emitter.pop_char(),
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.emitter.push_char(c),
                _ => {}
            },
            Focus::Log(name) => {
                let channel = self.context.channel(name);
                let view = &mut self.views[slot(name)];
                // Wrapped rows never outnumber characters; drawing clamps further
                let max_offset = view
                    .focus()
                    .and_then(|index| channel.get(index))
                    .map_or(0, |entry| entry.text().chars().count());
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => view.focus_prev(channel.len()),
                    KeyCode::Down | KeyCode::Char('j') => view.focus_next(channel.len()),
                    KeyCode::PageDown => view.scroll_detail_down(DETAIL_PAGE, max_offset),
                    KeyCode::PageUp => view.scroll_detail_up(DETAIL_PAGE),
                    KeyCode::End | KeyCode::Esc => view.follow(),
                    _ => {}
                }
            }
        }
    }
}

fn slot(name: ChannelName) -> usize {
    match name {
        ChannelName::Orders => 0,
        ChannelName::Maker => 1,
        ChannelName::MarketData => 2,
    }
}
