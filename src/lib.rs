//! Relay library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// The demo counterpart sitting on the far side of the boundary.
#[derive(Clone, Debug, Default, ValueEnum)]
pub enum Peer {
    /// Keeps its own log of relayed messages and relays each one back in.
    #[default]
    Echo,
    /// Logs deliveries and stays quiet.
    Silent,
}
