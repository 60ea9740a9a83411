//! Core engine types and logic.
//!
//! This module contains the whole of the machine:
//! - State definitions and the ordered graph holding them
//! - Typed construction configuration
//! - The `Fsm` engine with single-level undo/redo
//!
//! Everything here is a synchronous in-memory read or mutation; there are
//! no suspension points and no I/O.

mod config;
mod error;
mod graph;
mod machine;

pub use config::Config;
pub use error::{ConfigError, FsmError};
pub use graph::{StateDef, StateGraph};
pub use machine::Fsm;
