//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder and a declarative macro for
//! creating machines with minimal boilerplate on top of the typed
//! [`Config`](crate::Config).

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::FsmBuilder;
