//! # Action Hub and Model Sequencer
//!
//! The hub is the single merged stream of actions: direct UI interaction and
//! inbound boundary messages both land here, in arrival order, and are
//! consumed by exactly one event loop. It is an owned value handed to
//! whatever wires the application together - never a module-level global -
//! so multiple independent instances can coexist (one per test, say).
//!
//! The sequencer folds `update()` over that stream:
//!
//! ```text
//! Model[0] = update(NoOp, initial)
//! Model[i] = update(Action[i], Model[i-1])
//! ```
//!
//! Every action yields one observable model transition. Nothing is skipped,
//! coalesced, or batched - the outbound filter has to see every
//! `LocalMessageSubmitted` exactly once, so the loop steps the sequencer
//! once per action.

use std::sync::mpsc;

use log::warn;

use crate::core::action::{Action, update};
use crate::core::state::Model;

/// Cloneable handle for injecting actions into a [`Hub`].
///
/// Handed to the TUI adapter and to the boundary's inbound channel. Sending
/// after the hub is gone logs and drops - producers never panic.
#[derive(Clone)]
pub struct ActionSender {
    tx: mpsc::Sender<Action>,
}

impl ActionSender {
    pub fn dispatch(&self, action: Action) {
        if self.tx.send(action).is_err() {
            warn!("Hub receiver dropped; action discarded");
        }
    }
}

/// The merged, ordered stream of actions from all origins.
///
/// Primed with one `NoOp` at construction, so the first model the sequencer
/// exposes equals the initial model.
pub struct Hub {
    tx: mpsc::Sender<Action>,
    rx: mpsc::Receiver<Action>,
}

impl Hub {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let hub = Self { tx, rx };
        hub.sender().dispatch(Action::NoOp);
        hub
    }

    pub fn sender(&self) -> ActionSender {
        ActionSender {
            tx: self.tx.clone(),
        }
    }

    /// Next pending action, if any. Never blocks.
    pub fn try_next(&self) -> Option<Action> {
        self.rx.try_recv().ok()
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}

/// Folds the reducer over consumed actions, owning the current model.
///
/// The sequencer is the only writer of the model; everything else reads
/// snapshots through [`Sequencer::model`].
pub struct Sequencer {
    current: Model,
}

impl Sequencer {
    pub fn new(initial: Model) -> Self {
        Self { current: initial }
    }

    /// Consume one action and expose the resulting model.
    pub fn advance(&mut self, action: Action) -> &Model {
        self.current = update(action, &self.current);
        &self.current
    }

    pub fn model(&self) -> &Model {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_is_primed_with_noop() {
        let hub = Hub::new();
        assert_eq!(hub.try_next(), Some(Action::NoOp));
        assert_eq!(hub.try_next(), None);
    }

    #[test]
    fn test_hub_preserves_dispatch_order() {
        let hub = Hub::new();
        let ui = hub.sender();
        let boundary = hub.sender();
        ui.dispatch(Action::FieldChanged("a".to_string()));
        boundary.dispatch(Action::ExternalMessageReceived("b".to_string()));
        ui.dispatch(Action::LocalMessageSubmitted("a".to_string()));

        let drained: Vec<Action> = std::iter::from_fn(|| hub.try_next()).collect();
        assert_eq!(
            drained,
            vec![
                Action::NoOp,
                Action::FieldChanged("a".to_string()),
                Action::ExternalMessageReceived("b".to_string()),
                Action::LocalMessageSubmitted("a".to_string()),
            ]
        );
    }

    #[test]
    fn test_dispatch_after_hub_dropped_does_not_panic() {
        let hub = Hub::new();
        let sender = hub.sender();
        drop(hub);
        sender.dispatch(Action::NoOp);
    }

    #[test]
    fn test_sequencer_first_model_equals_initial() {
        let mut seq = Sequencer::new(Model::new());
        let first = seq.advance(Action::NoOp).clone();
        assert_eq!(first, Model::new());
    }

    #[test]
    fn test_sequencer_folds_one_model_per_action() {
        let hub = Hub::new();
        let sender = hub.sender();
        sender.dispatch(Action::FieldChanged("hi".to_string()));
        sender.dispatch(Action::LocalMessageSubmitted("hi".to_string()));

        let mut seq = Sequencer::new(Model::new());
        let mut snapshots = Vec::new();
        while let Some(action) = hub.try_next() {
            snapshots.push(seq.advance(action).clone());
        }

        assert_eq!(snapshots.len(), 3); // priming NoOp + two real actions
        assert_eq!(snapshots[0], Model::new());
        assert_eq!(snapshots[1].field, "hi");
        assert!(snapshots[1].messages.is_empty());
        assert_eq!(snapshots[2].messages, vec!["hi".to_string()]);
        assert_eq!(snapshots[2].field, "hi");
    }
}
