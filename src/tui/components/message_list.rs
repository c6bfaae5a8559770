//! # MessageList Component
//!
//! Scrollable view of the message log.
//!
//! `MessageList` is a transient component (created each frame) wrapping
//! `&mut MessageListState` (persistent presentation state) and the model's
//! message slice (props). Since `Component::render` takes `&mut self`, the
//! render pass can update the height cache and scroll state, aligning with
//! Ratatui's `StatefulWidget` pattern.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Scroll state for the message list.
/// Must be persisted in the parent TuiState.
pub struct MessageListState {
    pub scroll_state: ScrollViewState,
    /// Rendered height of each message, in list order.
    pub heights: Vec<u16>,
    /// When true, auto-scroll to bottom on new content.
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames).
    pub viewport_height: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            heights: Vec::new(),
            stick_to_bottom: true, // Start attached to bottom
            viewport_height: 0,
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let total: u16 = self.heights.iter().sum();
        let max_y = total.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Re-engage auto-scroll if a scroll-down landed at the bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let total: u16 = self.heights.iter().sum();
        let max_y = total.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// EventHandler is implemented on `MessageListState` rather than
/// `MessageList` because event handling needs persistent state while the
/// component itself is recreated each frame with fresh props.
impl EventHandler for MessageListState {
    type Event = (); // Scrolling is handled internally; nothing propagates.

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
                None
            }
            _ => None,
        }
    }
}

/// Scrollable message log view, created fresh each frame.
pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub messages: &'a [String],
}

impl<'a> MessageList<'a> {
    pub fn new(state: &'a mut MessageListState, messages: &'a [String]) -> Self {
        Self { state, messages }
    }

    fn item_paragraph(text: &str) -> Paragraph<'_> {
        Paragraph::new(text)
            .block(Block::bordered())
            .wrap(Wrap { trim: false })
    }
}

impl Component for MessageList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let inner_width = content_width.saturating_sub(2);

        // Measure every message; entries are append-only and widths rarely
        // change, so a full recompute stays cheap at this scale.
        self.state.heights = self
            .messages
            .iter()
            .map(|text| Self::item_paragraph(text).line_count(inner_width) as u16)
            .collect();
        let total_height: u16 = self.state.heights.iter().sum();

        self.state.viewport_height = area.height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (text, &height) in self.messages.iter().zip(&self.state.heights) {
            let item_rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(Self::item_paragraph(text), item_rect);
            y_offset += height;
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
