//! Build errors for the machine builder.

use crate::core::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(name) before .build()")]
    MissingInitial,

    #[error("No states declared. Add at least one state")]
    NoStates,

    /// Configuration validation failed after assembly.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
