//! End-to-end tests of the headless loop: hub, sequencer, outbound filter,
//! and boundary wired together the same way `tui::run` wires them, minus
//! the terminal.

use std::sync::{Arc, Mutex};

use relay::core::action::{Action, relayed};
use relay::core::boundary::{Inbound, Outbound};
use relay::core::hub::{Hub, Sequencer};
use relay::core::state::Model;

struct Harness {
    hub: Hub,
    inbound: Inbound,
    outbound: Outbound,
    sequencer: Sequencer,
}

impl Harness {
    fn new() -> Self {
        let hub = Hub::new();
        let inbound = Inbound::new(hub.sender());
        Self {
            hub,
            inbound,
            outbound: Outbound::new(),
            sequencer: Sequencer::new(Model::new()),
        }
    }

    fn with_recording_peer() -> (Self, Arc<Mutex<Vec<String>>>) {
        let mut harness = Self::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        harness
            .outbound
            .subscribe(move |text| sink.lock().unwrap().push(text.to_string()));
        (harness, log)
    }

    /// Drain the hub, stepping the sequencer and the outbound filter once
    /// per action. Returns every model snapshot produced.
    fn drain(&mut self) -> Vec<Model> {
        let mut snapshots = Vec::new();
        while let Some(action) = self.hub.try_next() {
            if let Some(text) = relayed(&action) {
                self.outbound.deliver(text);
            }
            snapshots.push(self.sequencer.advance(action).clone());
        }
        snapshots
    }
}

#[test]
fn first_observable_model_is_the_initial_model() {
    let (mut harness, log) = Harness::with_recording_peer();
    let snapshots = harness.drain();
    assert_eq!(snapshots, vec![Model::new()]);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn typing_then_sending_appends_without_clearing_field() {
    let (mut harness, log) = Harness::with_recording_peer();
    let ui = harness.hub.sender();
    ui.dispatch(Action::FieldChanged("hi".to_string()));
    ui.dispatch(Action::LocalMessageSubmitted("hi".to_string()));

    let final_model = harness.drain().pop().unwrap();
    assert_eq!(final_model.field, "hi");
    assert_eq!(final_model.messages, vec!["hi".to_string()]);
    assert_eq!(*log.lock().unwrap(), vec!["hi".to_string()]);
}

#[test]
fn inbound_message_appends_last_and_relays_nothing() {
    let (mut harness, log) = Harness::with_recording_peer();
    harness.inbound.send("hello");

    let final_model = harness.drain().pop().unwrap();
    assert_eq!(
        final_model.messages.last().map(String::as_str),
        Some("hello")
    );
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn mixed_stream_relays_only_local_submissions_in_order() {
    let (mut harness, log) = Harness::with_recording_peer();
    let ui = harness.hub.sender();
    ui.dispatch(Action::FieldChanged("a".to_string()));
    ui.dispatch(Action::LocalMessageSubmitted("a".to_string()));
    harness.inbound.send("b");
    ui.dispatch(Action::LocalMessageSubmitted("c".to_string()));

    let snapshots = harness.drain();
    assert_eq!(*log.lock().unwrap(), vec!["a".to_string(), "c".to_string()]);

    // One snapshot per action: priming NoOp + four real actions.
    assert_eq!(snapshots.len(), 5);
    let final_model = snapshots.last().unwrap();
    assert_eq!(
        final_model.messages,
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    );
}

#[test]
fn rapid_sequential_sends_stay_ordered() {
    let (mut harness, log) = Harness::with_recording_peer();
    let ui = harness.hub.sender();
    ui.dispatch(Action::LocalMessageSubmitted("x".to_string()));
    ui.dispatch(Action::LocalMessageSubmitted("y".to_string()));

    let final_model = harness.drain().pop().unwrap();
    assert_eq!(final_model.messages, vec!["x".to_string(), "y".to_string()]);
    assert_eq!(*log.lock().unwrap(), vec!["x".to_string(), "y".to_string()]);
}

#[test]
fn submissions_before_subscribe_are_flushed_on_registration() {
    let mut harness = Harness::new();
    harness
        .hub
        .sender()
        .dispatch(Action::LocalMessageSubmitted("early".to_string()));
    let snapshots = harness.drain();

    // The model incorporated the submission even with nobody listening.
    assert_eq!(
        snapshots.last().unwrap().messages,
        vec!["early".to_string()]
    );

    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    harness
        .outbound
        .subscribe(move |text| sink.lock().unwrap().push(text.to_string()));
    assert_eq!(*log.lock().unwrap(), vec!["early".to_string()]);
}

#[test]
fn echo_peer_round_trip() {
    let mut harness = Harness::new();
    let reply = harness.inbound.clone();
    harness
        .outbound
        .subscribe(move |text| reply.send(format!("peer: {text}")));

    harness
        .hub
        .sender()
        .dispatch(Action::LocalMessageSubmitted("ping".to_string()));
    // The peer's reply lands in the hub during delivery, so one drain folds
    // both the submission and the echoed message.
    let final_model = harness.drain().pop().unwrap();
    assert_eq!(
        final_model.messages,
        vec!["ping".to_string(), "peer: ping".to_string()]
    );
}
