//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::{Config, Fsm, StateDef};

/// Builder for constructing an [`Fsm`] with a fluent API.
///
/// States keep the order in which they are declared, which becomes the
/// graph's definition order.
///
/// # Example
///
/// ```rust
/// use machina::{FsmBuilder, StateDef};
///
/// let mut fsm = FsmBuilder::new()
///     .initial("locked")
///     .state(StateDef::named("locked").on("coin", "unlocked"))
///     .state(StateDef::named("unlocked").on("push", "locked"))
///     .build()?;
///
/// fsm.trigger("coin")?;
/// assert_eq!(fsm.current_state(), "unlocked");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct FsmBuilder {
    initial: Option<String>,
    states: Vec<StateDef>,
}

impl FsmBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the starting state (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Declare a state.
    pub fn state(mut self, def: StateDef) -> Self {
        self.states.push(def);
        self
    }

    /// Declare multiple states at once.
    pub fn states(mut self, defs: impl IntoIterator<Item = StateDef>) -> Self {
        self.states.extend(defs);
        self
    }

    /// Build the machine.
    /// Returns an error if required pieces are missing or validation fails.
    pub fn build(self) -> Result<Fsm, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitial)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let fsm = Fsm::new(Config {
            states: self.states,
            initial,
        })?;

        Ok(fsm)
    }
}

impl Default for FsmBuilder {
    fn default() -> Self {
        Self::new()
    }
}
