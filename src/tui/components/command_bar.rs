//! # CommandBar Component
//!
//! Single-line text input for navigation commands.
//!
//! Submitting an empty line is allowed - the parser treats it as a valid
//! no-op instruction, so Enter always emits `Submit`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the CommandBar
#[derive(Debug, Clone, PartialEq)]
pub enum CommandEvent {
    /// User submitted the line (Enter pressed). May be empty.
    Submit(String),
    /// Text content or cursor position changed
    ContentChanged,
}

/// Single-line command input.
pub struct CommandBar {
    /// Text buffer (internal state)
    pub buffer: String,
    /// Cursor byte offset into `buffer`
    cursor: usize,
    /// Dimmed while the result list has focus (prop)
    pub dimmed: bool,
}

impl Default for CommandBar {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandBar {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            dimmed: false,
        }
    }

    /// The visible slice of the buffer and the cursor column within it,
    /// scrolled so the cursor always fits in `inner_width` columns.
    fn visible(&self, inner_width: u16) -> (&str, u16) {
        let inner_width = inner_width as usize;
        if inner_width == 0 {
            return ("", 0);
        }

        // Display column of the cursor
        let cursor_col: usize = self.buffer[..self.cursor]
            .chars()
            .map(|c| c.width().unwrap_or(0))
            .sum();

        if cursor_col < inner_width {
            return (&self.buffer, cursor_col as u16);
        }

        // Scroll left edge so the cursor sits on the last column
        let start_col = cursor_col + 1 - inner_width;
        let mut col = 0;
        let mut start_byte = self.buffer.len();
        for (idx, c) in self.buffer.char_indices() {
            if col >= start_col {
                start_byte = idx;
                break;
            }
            col += c.width().unwrap_or(0);
        }
        (&self.buffer[start_byte..], (cursor_col - col) as u16)
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(s.len())
}

impl Component for CommandBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2);
        let (visible_text, cursor_x) = self.visible(inner_width);

        let style = if self.dimmed {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title("Command")
            .border_style(style);

        let input = Paragraph::new(visible_text.to_string())
            .block(block)
            .style(style);

        frame.render_widget(input, area);

        if !self.dimmed {
            frame.set_cursor_position((area.x + 1 + cursor_x, area.y + 1));
        }
    }
}

impl EventHandler for CommandBar {
    type Event = CommandEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(CommandEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(CommandEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(CommandEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                    Some(CommandEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                    Some(CommandEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                Some(CommandEvent::ContentChanged)
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                Some(CommandEvent::ContentChanged)
            }
            TuiEvent::Submit => {
                let text = std::mem::take(&mut self.buffer);
                self.cursor = 0;
                Some(CommandEvent::Submit(text))
            }
            _ => None,
        }
    }
}
