//! Machina: a declarative finite-state-machine engine.
//!
//! A machine is described by a graph of named states, each carrying a table
//! of event-triggered transitions, plus the name of the state the machine
//! starts in. The engine tracks the active state, moves between states
//! either by following transition rules ([`Fsm::trigger`]) or by jumping
//! unconditionally ([`Fsm::change_state`]), and remembers exactly one step
//! back and one step forward for undo/redo.
//!
//! # Core Concepts
//!
//! - **StateGraph**: the immutable set of named states and their transition
//!   tables, kept in definition order
//! - **Config**: the typed construction input, states plus initial state
//! - **Fsm**: the engine itself, with single-level undo/redo
//!
//! # Example
//!
//! ```rust
//! use machina::{Config, Fsm, StateDef};
//!
//! let config = Config {
//!     states: vec![
//!         StateDef::named("idle").on("start", "running"),
//!         StateDef::named("running").on("stop", "idle"),
//!     ],
//!     initial: "idle".to_string(),
//! };
//!
//! let mut fsm = Fsm::new(config)?;
//! fsm.trigger("start")?;
//! assert_eq!(fsm.current_state(), "running");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.current_state(), "idle");
//! assert!(fsm.redo());
//! assert_eq!(fsm.current_state(), "running");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::builder::{BuildError, FsmBuilder};
pub use crate::core::{Config, ConfigError, Fsm, FsmError, StateDef, StateGraph};
