//! Typed construction input for the engine.

use crate::core::error::ConfigError;
use crate::core::graph::StateDef;
use serde::{Deserialize, Serialize};

/// Configuration for [`Fsm::new`](crate::Fsm::new).
///
/// Both fields are required: a machine cannot exist without a graph and a
/// starting state. States are a sequence, and their order here becomes the
/// graph's definition order.
///
/// # Example
///
/// ```rust
/// use machina::{Config, StateDef};
///
/// let config = Config {
///     states: vec![
///         StateDef::named("locked").on("coin", "unlocked"),
///         StateDef::named("unlocked").on("push", "locked"),
///     ],
///     initial: "locked".to_string(),
/// };
///
/// assert_eq!(config.states.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// The state definitions, in definition order.
    pub states: Vec<StateDef>,
    /// Name of the state the machine starts in.
    pub initial: String,
}

impl Config {
    /// Parse a configuration from JSON.
    ///
    /// # Example
    ///
    /// ```rust
    /// use machina::Config;
    ///
    /// let config = Config::from_json(
    ///     r#"{
    ///         "states": [
    ///             {"name": "locked", "transitions": {"coin": "unlocked"}},
    ///             {"name": "unlocked", "transitions": {"push": "locked"}}
    ///         ],
    ///         "initial": "locked"
    ///     }"#,
    /// )?;
    ///
    /// assert_eq!(config.initial, "locked");
    /// # Ok::<(), machina::ConfigError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the configuration as JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}
