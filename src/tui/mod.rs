//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm. Swapping
//! it for a different adapter (web, tests, etc.) leaves the core untouched.
//!
//! ## Event loop
//!
//! One iteration = drain the hub, redraw if anything changed, then poll the
//! terminal. Each drained action is stepped through the sequencer
//! individually and checked against the outbound filter, so every
//! `LocalMessageSubmitted` is relayed exactly once even when several actions
//! arrive in one batch. All computation is synchronous run-to-completion;
//! the sequencer is the only writer of the model.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::Peer;
use crate::core::action::{Action, relayed};
use crate::core::boundary::{Inbound, Outbound};
use crate::core::hub::{Hub, Sequencer};
use crate::core::state::Model;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Wire the demo peer onto the boundary.
///
/// The echo peer keeps its own log of everything relayed to it and relays
/// each message back in with a `peer: ` prefix, exercising both channel
/// directions. The silent peer only logs deliveries.
fn connect_peer(peer: Peer, inbound: &Inbound, outbound: &mut Outbound) {
    match peer {
        Peer::Echo => {
            let reply = inbound.clone();
            let mut peer_log: Vec<String> = Vec::new();
            outbound.subscribe(move |text| {
                peer_log.push(text.to_string());
                debug!("Peer log now holds {} messages", peer_log.len());
                reply.send(format!("peer: {text}"));
            });
        }
        Peer::Silent => {
            outbound.subscribe(|text| debug!("Peer received: {text}"));
        }
    }
}

pub fn run(peer: Peer) -> std::io::Result<()> {
    let hub = Hub::new();
    let inbound = Inbound::new(hub.sender());
    let mut outbound = Outbound::new();
    connect_peer(peer, &inbound, &mut outbound);

    let mut sequencer = Sequencer::new(Model::new());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let ui_sender = hub.sender();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Fold every pending action (the priming NoOp included). Each one
        // steps the sequencer exactly once and passes the outbound filter
        // exactly once - no coalescing, so the peer sees every submission.
        while let Some(action) = hub.try_next() {
            debug!("Event loop received: {:?}", action);
            if let Some(text) = relayed(&action) {
                outbound.deliver(text);
            }
            sequencer.advance(action);
            needs_redraw = true;
        }

        if needs_redraw {
            tui.input_box.set_field(&sequencer.model().field);
            terminal.draw(|f| ui::draw_ui(f, sequencer.model(), &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(200));
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Quit => should_quit = true,
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown => {
                    tui.message_list.handle_event(&event);
                }
                _ => {
                    if let Some(input_event) = tui.input_box.handle_event(&event) {
                        match input_event {
                            InputEvent::Edited(text) => {
                                ui_sender.dispatch(Action::FieldChanged(text));
                            }
                            InputEvent::Submitted(text) => {
                                ui_sender.dispatch(Action::LocalMessageSubmitted(text));
                            }
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}
