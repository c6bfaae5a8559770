//! # Actions
//!
//! Everything that can happen in Relay becomes an `Action`.
//! User edits the input? That's `Action::FieldChanged`.
//! The peer sends a message in? That's `Action::ExternalMessageReceived`.
//!
//! The `update()` function takes an action and the current model,
//! then returns the new model. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! Action + Model  →  update()  →  New Model
//! ```
//!
//! This makes everything testable: `assert_eq!(update(action, &model), expected)`.
//! Actions are ephemeral - built at the triggering event, folded into the
//! model exactly once, then dropped. They are never stored or replayed.

use crate::core::state::Model;

/// A discrete, immutable description of something that happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing happened. Primes the action stream so the first observable
    /// model equals the initial model.
    NoOp,
    /// The text input changed; carries the widget's full new content,
    /// not a delta.
    FieldChanged(String),
    /// The user triggered "send"; carries a snapshot of `field` at that
    /// moment.
    LocalMessageSubmitted(String),
    /// The boundary delivered an inbound message from the environment.
    ExternalMessageReceived(String),
}

/// The reducer: pure, total, side-effect free.
///
/// Submitting does NOT clear `field` - the input keeps its content after
/// send, matching the behavior of the original widget this reproduces.
pub fn update(action: Action, current: &Model) -> Model {
    match action {
        Action::NoOp => current.clone(),
        Action::FieldChanged(text) => Model {
            field: text,
            ..current.clone()
        },
        Action::LocalMessageSubmitted(text) | Action::ExternalMessageReceived(text) => {
            let mut next = current.clone();
            next.messages.push(text);
            next
        }
    }
}

/// The outbound filter: the payload to relay to the environment, if any.
///
/// A stable filter-map over the action stream - exactly the text of every
/// `LocalMessageSubmitted`, in stream order. Everything else stays local.
pub fn relayed(action: &Action) -> Option<&str> {
    match action {
        Action::LocalMessageSubmitted(text) => Some(text),
        Action::NoOp | Action::FieldChanged(_) | Action::ExternalMessageReceived(_) => None,
    }
}
