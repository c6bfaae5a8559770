//! # InputBox Component
//!
//! Single-line text input bound to `Model::field`.
//!
//! ## State Management
//!
//! The text itself is a prop: the model owns it, and the run loop syncs
//! `field` here before every frame. The component owns only presentation
//! state - the cursor byte offset and a horizontal scroll offset. Every
//! edit is reported as [`InputEvent::Edited`] carrying the full new
//! content (not a delta), which the run loop turns into a `FieldChanged`
//! action; the model comes back changed and the prop catches up. Enter is
//! the send control and becomes [`InputEvent::Submitted`].

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The content changed; carries the full new text.
    Edited(String),
    /// The user pressed Enter; carries a snapshot of the field at that
    /// moment.
    Submitted(String),
}

/// Byte offset of the character boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map_or(0, |(i, _)| i)
}

/// Byte offset of the character boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len(), |c| pos + c.len_utf8())
}

/// Text input component.
///
/// # Props
///
/// - `field`: current input text, synced from the model each frame
///
/// # State
///
/// - `cursor`: byte offset into `field` (always on a char boundary)
/// - `scroll`: leading display columns hidden when the text overflows
pub struct InputBox {
    pub field: String,
    cursor: usize,
    scroll: u16,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            field: String::new(),
            cursor: 0,
            scroll: 0,
        }
    }

    /// Sync the text prop from the model, keeping the cursor in bounds.
    pub fn set_field(&mut self, field: &str) {
        if self.field != field {
            self.field = field.to_string();
        }
        if self.cursor > self.field.len() {
            self.cursor = self.field.len();
        }
        while self.cursor < self.field.len() && !self.field.is_char_boundary(self.cursor) {
            self.cursor = prev_char_boundary(&self.field, self.cursor);
        }
    }

    fn insert(&mut self, text: &str) -> InputEvent {
        let mut next = self.field.clone();
        next.insert_str(self.cursor, text);
        self.cursor += text.len();
        self.field = next.clone();
        InputEvent::Edited(next)
    }

    /// Display columns occupied by the text before the cursor.
    fn cursor_column(&self) -> u16 {
        self.field[..self.cursor].width() as u16
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<InputEvent> {
        match event {
            TuiEvent::InputChar(c) => Some(self.insert(&c.to_string())),
            TuiEvent::Paste(data) => Some(self.insert(data)),
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let start = prev_char_boundary(&self.field, self.cursor);
                let mut next = self.field.clone();
                next.replace_range(start..self.cursor, "");
                self.cursor = start;
                self.field = next.clone();
                Some(InputEvent::Edited(next))
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.field, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.field, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.field.len();
                None
            }
            TuiEvent::Submit => Some(InputEvent::Submitted(self.field.clone())),
            _ => None,
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2); // borders

        // Keep the cursor inside the visible window.
        let cursor_col = self.cursor_column();
        if cursor_col < self.scroll {
            self.scroll = cursor_col;
        } else if inner_width > 0 && cursor_col >= self.scroll + inner_width {
            self.scroll = cursor_col - inner_width + 1;
        }

        let input = Paragraph::new(self.field.as_str())
            .scroll((0, self.scroll))
            .block(Block::bordered().title("Input ([Enter] send)"));
        frame.render_widget(input, area);

        frame.set_cursor_position(Position {
            x: area.x + 1 + cursor_col.saturating_sub(self.scroll),
            y: area.y + 1,
        });
    }
}
