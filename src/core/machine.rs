//! The state machine engine.

use crate::core::config::Config;
use crate::core::error::{ConfigError, FsmError};
use crate::core::graph::StateGraph;
use std::collections::HashSet;
use std::mem;

/// A finite-state machine over a declarative transition graph.
///
/// The machine tracks the active state, the state it was in before the most
/// recent successful move, and a one-slot redo memory filled by
/// [`undo`](Fsm::undo). Moves happen either by following the current
/// state's transition table ([`trigger`](Fsm::trigger)) or by jumping to a
/// named state directly ([`change_state`](Fsm::change_state)).
///
/// Every operation is a synchronous in-memory read or mutation. The machine
/// carries no internal locking; a concurrent host must confine an instance
/// to one thread or wrap it in its own mutex.
///
/// # Example
///
/// ```rust
/// use machina::{Config, Fsm, StateDef};
///
/// let mut fsm = Fsm::new(Config {
///     states: vec![
///         StateDef::named("locked").on("coin", "unlocked"),
///         StateDef::named("unlocked").on("push", "locked"),
///     ],
///     initial: "locked".to_string(),
/// })?;
///
/// fsm.trigger("coin")?;
/// assert_eq!(fsm.current_state(), "unlocked");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.current_state(), "locked");
/// assert!(fsm.redo());
/// assert_eq!(fsm.current_state(), "unlocked");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    graph: StateGraph,
    initial: String,
    current: String,
    previous: String,
    undone: Option<String>,
}

impl Fsm {
    /// Create a machine from a validated configuration.
    ///
    /// The machine starts with the active and remembered-previous state both
    /// equal to `config.initial`, and no redo pending.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DuplicateState`] if two definitions share a name
    /// - [`ConfigError::UndefinedInitial`] if `config.initial` names no
    ///   defined state
    ///
    /// Transition destinations are not validated; a destination may name a
    /// state outside the graph, in which case the machine can move there
    /// and simply has no outgoing transitions from it.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let graph: StateGraph = config.states.into_iter().collect();

        let mut seen = HashSet::new();
        for name in graph.names() {
            if !seen.insert(name) {
                return Err(ConfigError::DuplicateState(name.to_string()));
            }
        }

        if !graph.contains(&config.initial) {
            return Err(ConfigError::UndefinedInitial(config.initial));
        }

        Ok(Self {
            graph,
            initial: config.initial.clone(),
            current: config.initial.clone(),
            previous: config.initial,
            undone: None,
        })
    }

    /// Name of the active state.
    pub fn current_state(&self) -> &str {
        &self.current
    }

    /// Name of the state the machine was configured to start in.
    pub fn initial_state(&self) -> &str {
        &self.initial
    }

    /// The transition graph the machine runs over.
    pub fn graph(&self) -> &StateGraph {
        &self.graph
    }

    /// All state names, in definition order.
    pub fn states(&self) -> Vec<&str> {
        self.graph.names().collect()
    }

    /// Names of the states whose transition table handles `event`, in
    /// definition order.
    ///
    /// Unknown events are not an error; they match no states.
    ///
    /// # Example
    ///
    /// ```rust
    /// use machina::{Config, Fsm, StateDef};
    ///
    /// let fsm = Fsm::new(Config {
    ///     states: vec![
    ///         StateDef::named("draft").on("submit", "review"),
    ///         StateDef::named("review").on("reject", "draft"),
    ///     ],
    ///     initial: "draft".to_string(),
    /// })?;
    ///
    /// assert_eq!(fsm.states_handling("submit"), vec!["draft"]);
    /// assert!(fsm.states_handling("archive").is_empty());
    /// # Ok::<(), machina::ConfigError>(())
    /// ```
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.graph.handling(event)
    }

    /// Jump straight to `state`, bypassing transition rules.
    ///
    /// On success the departed state is remembered for [`undo`](Fsm::undo);
    /// a pending redo is left untouched.
    ///
    /// # Errors
    ///
    /// [`FsmError::UnknownState`] if `state` has no definition in the
    /// graph. The machine is unchanged on failure.
    pub fn change_state(&mut self, state: &str) -> Result<(), FsmError> {
        if !self.graph.contains(state) {
            return Err(FsmError::UnknownState(state.to_string()));
        }
        self.previous = mem::replace(&mut self.current, state.to_string());
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// On success the departed state is remembered for [`undo`](Fsm::undo);
    /// a pending redo is left untouched.
    ///
    /// # Errors
    ///
    /// [`FsmError::NoTransition`] if the current state has no transition
    /// for `event`, including when the current state itself has no
    /// definition in the graph. The machine is unchanged on failure.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let destination = self
            .graph
            .get(&self.current)
            .and_then(|def| def.destination(event))
            .ok_or_else(|| FsmError::NoTransition {
                event: event.to_string(),
                from: self.current.clone(),
            })?
            .to_string();

        self.previous = mem::replace(&mut self.current, destination);
        Ok(())
    }

    /// Return the active state to the configured initial state.
    ///
    /// Only the active state moves: the remembered-previous state and any
    /// pending redo survive a reset.
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
    }

    /// Step back to the state active before the last move.
    ///
    /// Returns `false` without mutating when the machine is at its initial
    /// state or no move has happened since the last divergence. On success
    /// the departed state is kept for one [`redo`](Fsm::redo), and a second
    /// consecutive `undo` returns `false`.
    pub fn undo(&mut self) -> bool {
        if self.current == self.initial || self.current == self.previous {
            return false;
        }
        let undone = mem::replace(&mut self.current, self.previous.clone());
        self.undone = Some(undone);
        true
    }

    /// Re-enter the state the last [`undo`](Fsm::undo) left.
    ///
    /// Returns `false` when no undo is pending. The redo slot is consumed
    /// on success.
    pub fn redo(&mut self) -> bool {
        match self.undone.take() {
            Some(state) => {
                self.current = state;
                true
            }
            None => false,
        }
    }

    /// Forget the step back and any pending redo.
    ///
    /// After this, [`undo`](Fsm::undo) returns `false` until another
    /// successful move. Always returns `true`.
    pub fn clear_history(&mut self) -> bool {
        self.undone = None;
        self.previous = self.current.clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::StateDef;

    fn workflow() -> Fsm {
        Fsm::new(Config {
            states: vec![
                StateDef::named("draft").on("submit", "review"),
                StateDef::named("review")
                    .on("approve", "published")
                    .on("reject", "draft"),
                StateDef::named("published").on("retract", "draft"),
            ],
            initial: "draft".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn new_machine_starts_in_initial_state() {
        let mut fsm = workflow();
        assert_eq!(fsm.current_state(), "draft");
        assert_eq!(fsm.initial_state(), "draft");
        assert!(!fsm.undo());
        assert!(!fsm.redo());
    }

    #[test]
    fn new_rejects_undefined_initial() {
        let result = Fsm::new(Config {
            states: vec![StateDef::named("draft")],
            initial: "archived".to_string(),
        });
        assert!(matches!(result, Err(ConfigError::UndefinedInitial(s)) if s == "archived"));
    }

    #[test]
    fn new_rejects_duplicate_state_names() {
        let result = Fsm::new(Config {
            states: vec![StateDef::named("draft"), StateDef::named("draft")],
            initial: "draft".to_string(),
        });
        assert!(matches!(result, Err(ConfigError::DuplicateState(s)) if s == "draft"));
    }

    #[test]
    fn change_state_jumps_without_transition_rules() {
        let mut fsm = workflow();
        fsm.change_state("published").unwrap();
        assert_eq!(fsm.current_state(), "published");
    }

    #[test]
    fn change_state_to_unknown_fails_without_moving() {
        let mut fsm = workflow();
        fsm.trigger("submit").unwrap();

        let err = fsm.change_state("archived").unwrap_err();
        assert_eq!(err, FsmError::UnknownState("archived".to_string()));
        assert_eq!(fsm.current_state(), "review");
    }

    #[test]
    fn trigger_follows_transition_table() {
        let mut fsm = workflow();
        fsm.trigger("submit").unwrap();
        assert_eq!(fsm.current_state(), "review");
        fsm.trigger("approve").unwrap();
        assert_eq!(fsm.current_state(), "published");
    }

    #[test]
    fn trigger_without_transition_fails_without_moving() {
        let mut fsm = workflow();
        let err = fsm.trigger("approve").unwrap_err();
        assert_eq!(
            err,
            FsmError::NoTransition {
                event: "approve".to_string(),
                from: "draft".to_string(),
            }
        );
        assert_eq!(fsm.current_state(), "draft");
    }

    #[test]
    fn trigger_from_state_outside_graph_fails() {
        // "limbo" is reachable through a transition but has no definition.
        let mut fsm = Fsm::new(Config {
            states: vec![StateDef::named("start").on("leap", "limbo")],
            initial: "start".to_string(),
        })
        .unwrap();

        fsm.trigger("leap").unwrap();
        assert_eq!(fsm.current_state(), "limbo");

        let err = fsm.trigger("leap").unwrap_err();
        assert!(matches!(err, FsmError::NoTransition { ref from, .. } if from == "limbo"));
        assert_eq!(fsm.current_state(), "limbo");
    }

    #[test]
    fn undo_returns_to_departed_state() {
        let mut fsm = workflow();
        fsm.trigger("submit").unwrap();

        assert!(fsm.undo());
        assert_eq!(fsm.current_state(), "draft");
    }

    #[test]
    fn undo_twice_fails_the_second_time() {
        let mut fsm = workflow();
        fsm.trigger("submit").unwrap();
        fsm.trigger("approve").unwrap();

        assert!(fsm.undo());
        assert_eq!(fsm.current_state(), "review");
        assert!(!fsm.undo());
        assert_eq!(fsm.current_state(), "review");
    }

    #[test]
    fn undo_at_initial_state_fails() {
        let mut fsm = workflow();
        assert!(!fsm.undo());

        // A round trip back to the initial state also blocks undo.
        fsm.trigger("submit").unwrap();
        fsm.trigger("reject").unwrap();
        assert!(!fsm.undo());
    }

    #[test]
    fn redo_reenters_the_undone_state() {
        let mut fsm = workflow();
        fsm.trigger("submit").unwrap();

        assert!(fsm.undo());
        assert!(fsm.redo());
        assert_eq!(fsm.current_state(), "review");

        // The slot is consumed.
        assert!(!fsm.redo());
    }

    #[test]
    fn redo_without_pending_undo_fails() {
        let mut fsm = workflow();
        fsm.trigger("submit").unwrap();
        assert!(!fsm.redo());
        assert_eq!(fsm.current_state(), "review");
    }

    #[test]
    fn moves_leave_a_pending_redo_untouched() {
        let mut fsm = workflow();
        fsm.trigger("submit").unwrap();
        assert!(fsm.undo());

        // A fresh jump does not clear the redo slot.
        fsm.change_state("published").unwrap();
        assert!(fsm.redo());
        assert_eq!(fsm.current_state(), "review");
    }

    #[test]
    fn reset_returns_to_initial_only() {
        let mut fsm = workflow();
        fsm.trigger("submit").unwrap();
        fsm.trigger("approve").unwrap();

        fsm.reset();
        assert_eq!(fsm.current_state(), "draft");

        // Back at the initial state, undo is unavailable.
        assert!(!fsm.undo());
    }

    #[test]
    fn pending_redo_survives_reset() {
        let mut fsm = workflow();
        fsm.trigger("submit").unwrap();
        assert!(fsm.undo());

        fsm.reset();
        assert!(fsm.redo());
        assert_eq!(fsm.current_state(), "review");
    }

    #[test]
    fn clear_history_blocks_undo_until_next_move() {
        let mut fsm = workflow();
        fsm.trigger("submit").unwrap();

        assert!(fsm.clear_history());
        assert!(!fsm.undo());
        assert!(!fsm.redo());

        fsm.trigger("approve").unwrap();
        assert!(fsm.undo());
        assert_eq!(fsm.current_state(), "review");
    }

    #[test]
    fn states_returns_names_in_definition_order() {
        let fsm = workflow();
        assert_eq!(fsm.states(), vec!["draft", "review", "published"]);
    }

    #[test]
    fn states_handling_filters_by_event() {
        let fsm = workflow();
        assert_eq!(fsm.states_handling("submit"), vec!["draft"]);
        assert_eq!(fsm.states_handling("retract"), vec!["published"]);
        assert!(fsm.states_handling("archive").is_empty());
    }

    #[test]
    fn two_state_walkthrough() {
        let mut fsm = Fsm::new(Config {
            states: vec![
                StateDef::named("a").on("go", "b"),
                StateDef::named("b").on("back", "a"),
            ],
            initial: "a".to_string(),
        })
        .unwrap();

        fsm.trigger("go").unwrap();
        assert_eq!(fsm.current_state(), "b");

        assert!(fsm.undo());
        assert_eq!(fsm.current_state(), "a");

        assert!(fsm.redo());
        assert_eq!(fsm.current_state(), "b");

        fsm.trigger("back").unwrap();
        assert_eq!(fsm.current_state(), "a");

        assert_eq!(fsm.states_handling("go"), vec!["a"]);
    }
}
