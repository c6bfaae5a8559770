//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

/// An outbound handler that records every delivered message, plus a handle
/// to inspect the recording.
pub fn recording_handler() -> (impl FnMut(&str) + Send + 'static, Arc<Mutex<Vec<String>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    let handler = move |text: &str| {
        sink.lock().unwrap().push(text.to_string());
    };
    (handler, log)
}
