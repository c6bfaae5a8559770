//! # Application State
//!
//! Core business state for Relay. This module contains domain data only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! Model
//! ├── field: String          // uncommitted text input content
//! └── messages: Vec<String>  // append-only message log
//! ```
//!
//! A `Model` is a snapshot: `update(action, &model)` in action.rs returns a
//! fresh value and never mutates an existing one. The log grows monotonically
//! within a session; entries are never reordered or removed.

/// One snapshot of application state.
///
/// `field` holds whatever the user has typed but not yet sent. It carries no
/// constraint beyond being a string - empty and unicode content are fine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Model {
    pub field: String,
    pub messages: Vec<String>,
}

impl Model {
    pub fn new() -> Self {
        Self {
            field: String::new(),
            messages: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_new_is_empty() {
        let model = Model::new();
        assert!(model.field.is_empty());
        assert!(model.messages.is_empty());
        assert_eq!(model, Model::default());
    }
}
