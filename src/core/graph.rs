//! State graph storage: named states and their transition tables.
//!
//! A graph is an ordered collection of [`StateDef`]s. Definition order is
//! significant: every query that yields multiple states walks them in the
//! order they were defined.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named state and its transition table.
///
/// The transition table maps event names to destination state names.
/// Destinations are plain names and are not required to be defined in the
/// graph holding this state; a machine that reaches an undefined state
/// simply has no outgoing transitions from it.
///
/// # Example
///
/// ```rust
/// use machina::StateDef;
///
/// let state = StateDef::named("draft")
///     .on("submit", "review")
///     .on("discard", "trash");
///
/// assert_eq!(state.destination("submit"), Some("review"));
/// assert!(state.handles("discard"));
/// assert!(!state.handles("approve"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateDef {
    /// The state's name. Must be unique within a graph.
    pub name: String,
    /// Event name to destination state name.
    #[serde(default)]
    pub transitions: HashMap<String, String>,
}

impl StateDef {
    /// Create a definition with an empty transition table.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: HashMap::new(),
        }
    }

    /// Add a transition for `event` towards `to`, returning the definition.
    ///
    /// A repeated event name overwrites the earlier destination.
    pub fn on(mut self, event: impl Into<String>, to: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), to.into());
        self
    }

    /// Destination for `event`, if this state handles it.
    pub fn destination(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether this state has a transition for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Ordered, immutable collection of state definitions.
///
/// Built once from a configuration and never mutated afterwards. Lookup is
/// by state name; iteration follows definition order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateGraph {
    states: Vec<StateDef>,
}

impl StateGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Append a state definition, keeping definition order.
    pub fn insert(&mut self, def: StateDef) {
        self.states.push(def);
    }

    /// Look up a state by name.
    pub fn get(&self, name: &str) -> Option<&StateDef> {
        self.states.iter().find(|def| def.name == name)
    }

    /// Whether a state with `name` is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All state names, in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|def| def.name.as_str())
    }

    /// Names of the states whose table handles `event`, in definition order.
    pub fn handling(&self, event: &str) -> Vec<&str> {
        self.iter()
            .filter(|def| def.handles(event))
            .map(|def| def.name.as_str())
            .collect()
    }

    /// All state definitions, in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &StateDef> {
        self.states.iter()
    }

    /// Number of defined states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the graph has no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl FromIterator<StateDef> for StateGraph {
    fn from_iter<I: IntoIterator<Item = StateDef>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}
