//! Error types for machine construction and operation.

use thiserror::Error;

/// Errors detected while validating or parsing a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured initial state has no definition in the graph.
    #[error("Initial state '{0}' is not defined in the graph")]
    UndefinedInitial(String),

    /// Two state definitions share a name.
    #[error("State '{0}' is defined more than once")]
    DuplicateState(String),

    /// The configuration JSON could not be parsed or rendered.
    #[error("Configuration serialization failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by state-mutating operations.
///
/// Exhausted undo/redo history is not an error; those operations report
/// availability through their boolean return. These variants cover invalid
/// caller input, and a failed operation never mutates the machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsmError {
    /// The requested state has no definition in the graph.
    #[error("Cannot change to unknown state '{0}'")]
    UnknownState(String),

    /// The current state has no transition for the event.
    #[error("Cannot trigger '{event}' from state '{from}'")]
    NoTransition { event: String, from: String },
}
