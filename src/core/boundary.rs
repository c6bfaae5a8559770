//! # External Boundary
//!
//! The two one-directional channels between the core loop and its host
//! environment. Neither side knows anything about the other beyond strings.
//!
//! ```text
//!   environment ──send()──▶ Inbound ──ExternalMessageReceived──▶ Hub
//!   Hub actions ──relayed()──▶ Outbound ──handler(text)──▶ environment
//! ```
//!
//! Inbound never fails: any string (empty, unicode, arbitrarily long) turns
//! into exactly one action, in call order. Outbound delivers every relayed
//! value exactly once, in produced order. A value produced before any
//! handler has registered is buffered and flushed at registration - and the
//! condition is logged, never silently swallowed. Delivery happens after the
//! model has already incorporated the submission, so a missing subscriber
//! never rolls state back.

use std::collections::VecDeque;

use log::{debug, warn};

use crate::core::action::Action;
use crate::core::hub::ActionSender;

/// Environment-facing entry point: each call injects one
/// `ExternalMessageReceived` into the hub.
#[derive(Clone)]
pub struct Inbound {
    sender: ActionSender,
}

impl Inbound {
    pub fn new(sender: ActionSender) -> Self {
        Self { sender }
    }

    pub fn send(&self, text: impl Into<String>) {
        self.sender
            .dispatch(Action::ExternalMessageReceived(text.into()));
    }
}

/// Delivery side of the boundary: at most one registered handler.
pub struct Outbound {
    handler: Option<Box<dyn FnMut(&str) + Send>>,
    /// Values produced before `subscribe` was called, oldest first.
    pending: VecDeque<String>,
}

impl Outbound {
    pub fn new() -> Self {
        Self {
            handler: None,
            pending: VecDeque::new(),
        }
    }

    /// Register the environment's handler. Replaces any previous handler and
    /// immediately flushes values produced before registration, in order.
    pub fn subscribe(&mut self, handler: impl FnMut(&str) + Send + 'static) {
        let mut handler = Box::new(handler);
        for text in self.pending.drain(..) {
            handler(&text);
        }
        self.handler = Some(handler);
    }

    /// Deliver one relayed value to the environment.
    pub fn deliver(&mut self, text: &str) {
        match self.handler.as_mut() {
            Some(handler) => {
                debug!("Relaying outbound message ({} bytes)", text.len());
                handler(text);
            }
            None => {
                warn!("No outbound subscriber registered; buffering message");
                self.pending.push_back(text.to_string());
            }
        }
    }
}

impl Default for Outbound {
    fn default() -> Self {
        Self::new()
    }
}
