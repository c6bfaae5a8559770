//! # Core Application Logic
//!
//! This module contains Relay's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Model (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Hub / Sequencer      │
//!                    │  • boundary channels    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Peer     │      │   Other    │
//!     │  Adapter   │      │ (boundary) │      │  adapters  │
//!     │ (ratatui)  │      │            │      │  (future)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Model` struct — all application state in one place
//! - [`action`]: The `Action` enum, the `update()` reducer, and the
//!   `relayed()` outbound filter
//! - [`hub`]: The merged action stream and the model fold
//! - [`boundary`]: The two one-directional channels to the environment

pub mod action;
pub mod boundary;
pub mod hub;
pub mod state;
