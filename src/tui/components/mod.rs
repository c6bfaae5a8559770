//! # TUI Components
//!
//! UI components for the terminal interface.
//!
//! Two patterns, as elsewhere in this codebase:
//!
//! - **Stateless (props-based)**: `TitleBar` receives all data as
//!   parameters and just draws.
//! - **Stateful (event-driven)**: `InputBox` and `MessageList` hold
//!   presentation state (cursor position, scroll offset) and emit
//!   high-level events through the `EventHandler` trait.
//!
//! Domain data is never owned here. The message log and the input text live
//! in `core::state::Model`; components receive them as props each frame, so
//! dependencies stay explicit and components stay testable.

mod title_bar;
pub use title_bar::TitleBar;

pub mod input_box;
pub use input_box::{InputBox, InputEvent};

pub mod message_list;
pub use message_list::{MessageList, MessageListState};
