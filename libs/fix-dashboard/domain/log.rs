//! Append-only log channels
//!
//! Three channels exist (`orders`, `maker`, `marketdata`), each fed by one
//! category of server event. Entries are never evicted, deduplicated, or
//! reordered; growth is unbounded for the lifetime of the process.

use std::fmt;
use std::ops::Range;

use chrono::{Local, NaiveTime};
use serde::{Deserialize, Serialize};

/// Identity of a log channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelName {
    Orders,
    Maker,
    MarketData,
}

impl ChannelName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelName::Orders => "orders",
            ChannelName::Maker => "maker",
            ChannelName::MarketData => "marketdata",
        }
    }

    /// Panel title used by the UI
    pub fn title(&self) -> &'static str {
        match self {
            ChannelName::Orders => "Order History",
            ChannelName::Maker => "Market Maker Output",
            ChannelName::MarketData => "Market Data",
        }
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Local wall-clock time of arrival, shown as `HH:MM:SS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisplayTime(NaiveTime);

impl DisplayTime {
    pub fn now() -> Self {
        Self(Local::now().time())
    }

    pub fn from_hms(hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, min, sec).map(Self)
    }
}

impl fmt::Display for DisplayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}

/// One immutable log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    timestamp: DisplayTime,
    text: String,
}

impl LogEntry {
    /// Create an entry stamped with the current local time
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_timestamp(DisplayTime::now(), text)
    }

    pub fn with_timestamp(timestamp: DisplayTime, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            text: text.into(),
        }
    }

    pub fn timestamp(&self) -> DisplayTime {
        self.timestamp
    }

    /// Full text; also the source of the expanded (wrapped) presentation
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Truncated single-line presentation
    ///
    /// The first `width` characters of [`LogEntry::text`], with line breaks
    /// shown as blanks so the row stays one line. No ellipsis is added.
    pub fn single_line(&self, width: usize) -> String {
        self.text
            .chars()
            .take(width)
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect()
    }

    /// Whether the single-line form hides part of the text
    pub fn is_truncated(&self, width: usize) -> bool {
        self.text.chars().nth(width).is_some()
    }

    /// Expanded presentation: the text split at line breaks, then every
    /// `width` characters
    ///
    /// Concatenating the rows and re-inserting the line breaks gives back
    /// the text exactly. An empty text yields one empty row.
    pub fn wrapped_lines(&self, width: usize) -> Vec<&str> {
        let width = width.max(1);
        let mut rows = Vec::new();
        for line in split_line_breaks(&self.text) {
            if line.is_empty() {
                rows.push(line);
                continue;
            }
            let mut rest = line;
            while !rest.is_empty() {
                let end = rest
                    .char_indices()
                    .nth(width)
                    .map_or(rest.len(), |(idx, _)| idx);
                rows.push(&rest[..end]);
                rest = &rest[end..];
            }
        }
        rows
    }
}

/// Split on `\r\n`, `\n` or a lone `\r`
fn split_line_breaks(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    lines.push(&text[start..]);
    lines
}

/// Ordered, append-only sequence of entries
#[derive(Debug, Clone)]
pub struct LogChannel {
    name: ChannelName,
    entries: Vec<LogEntry>,
    revision: u64,
}

impl LogChannel {
    pub fn new(name: ChannelName) -> Self {
        Self {
            name,
            entries: Vec::new(),
            revision: 0,
        }
    }

    pub fn name(&self) -> ChannelName {
        self.name
    }

    /// Append an entry at the end; always succeeds
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
        self.revision += 1;
    }

    /// Stamp `text` with the current time and append it
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.append(LogEntry::new(text));
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bumped on every append; views redraw and re-scroll when it changes
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Scroll/focus state of one log panel
///
/// Without focus the view follows the newest entry. With focus the focused
/// entry stays visible and its full text is revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogView {
    focus: Option<usize>,
    /// First row of the focused entry's expanded text
    detail_offset: usize,
}

impl LogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn is_following(&self) -> bool {
        self.focus.is_none()
    }

    /// Move focus one entry up; from follow mode this lands on the newest
    pub fn focus_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.focus = Some(match self.focus {
            None => len - 1,
            Some(i) => i.saturating_sub(1),
        });
        self.detail_offset = 0;
    }

    /// Move focus one entry down, stopping at the newest
    pub fn focus_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if let Some(i) = self.focus {
            self.focus = Some((i + 1).min(len - 1));
            self.detail_offset = 0;
        }
    }

    /// Drop focus and resume auto-scroll
    pub fn follow(&mut self) {
        self.focus = None;
        self.detail_offset = 0;
    }

    pub fn detail_offset(&self) -> usize {
        self.detail_offset
    }

    /// Scroll the expanded text down by `rows`, never past `max_offset`
    pub fn scroll_detail_down(&mut self, rows: usize, max_offset: usize) {
        if self.focus.is_some() {
            self.detail_offset = (self.detail_offset + rows).min(max_offset);
        }
    }

    pub fn scroll_detail_up(&mut self, rows: usize) {
        self.detail_offset = self.detail_offset.saturating_sub(rows);
    }

    /// Entry indices visible in a viewport of `height` rows
    pub fn window(&self, len: usize, height: usize) -> Range<usize> {
        if height == 0 || len == 0 {
            return 0..0;
        }
        match self.focus {
            None => len.saturating_sub(height)..len,
            Some(focus) => {
                let focus = focus.min(len - 1);
                let start = (focus + 1).saturating_sub(height);
                start..(start + height).min(len)
            }
        }
    }
}
