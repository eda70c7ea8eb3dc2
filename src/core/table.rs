//! Static transition table.
//!
//! The table maps each state name to the events it reacts to and the state
//! each event leads to. The engine never mutates a table once a machine owns
//! it. Enumeration follows insertion order, which for deserialized tables is
//! the key order of the source document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque name of a state.
pub type StateName = String;

/// Opaque name of an event.
pub type EventName = String;

/// Outgoing rules of a single state.
///
/// # Example
///
/// ```rust
/// use rewind::core::StateRules;
///
/// let rules = StateRules::new()
///     .on("study", "busy")
///     .on("get_hungry", "hungry");
///
/// assert_eq!(rules.target("study"), Some("busy"));
/// assert_eq!(rules.target("sleep"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRules {
    /// Event name to target state
    #[serde(default)]
    pub transitions: IndexMap<EventName, StateName>,
}

impl StateRules {
    /// Create rules with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, returning the updated rules.
    ///
    /// A later rule for the same event replaces the earlier target.
    pub fn on(mut self, event: impl Into<EventName>, target: impl Into<StateName>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target state for `event`, if this state has a rule for it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Check whether this state has a rule keyed by `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

impl<E, T> FromIterator<(E, T)> for StateRules
where
    E: Into<EventName>,
    T: Into<StateName>,
{
    fn from_iter<I: IntoIterator<Item = (E, T)>>(iter: I) -> Self {
        Self {
            transitions: iter
                .into_iter()
                .map(|(event, target)| (event.into(), target.into()))
                .collect(),
        }
    }
}

/// Mapping from state name to its outgoing rules.
///
/// Serializes as a plain JSON object:
/// `{ "<state>": { "transitions": { "<event>": "<target>" } } }`.
///
/// # Example
///
/// ```rust
/// use rewind::core::{StateRules, TransitionTable};
///
/// let mut table = TransitionTable::new();
/// table.insert("normal", StateRules::new().on("study", "busy"));
/// table.insert("busy", StateRules::new().on("get_tired", "sleeping"));
/// table.insert("sleeping", StateRules::new());
///
/// assert_eq!(table.target("normal", "study"), Some("busy"));
/// assert_eq!(table.target("sleeping", "study"), None);
/// assert_eq!(table.state_names(), vec!["normal", "busy", "sleeping"]);
/// assert_eq!(table.states_with_event("get_tired"), vec!["busy"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionTable {
    states: IndexMap<StateName, StateRules>,
}

impl TransitionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the rules for `state`.
    ///
    /// Replacing keeps the state's original enumeration position.
    pub fn insert(&mut self, state: impl Into<StateName>, rules: StateRules) {
        self.states.insert(state.into(), rules);
    }

    /// Check whether `state` is a key of the table.
    pub fn contains(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Outgoing rules of `state`.
    pub fn rules(&self, state: &str) -> Option<&StateRules> {
        self.states.get(state)
    }

    /// Resolve `event` fired from `state`.
    ///
    /// Returns `None` both when `state` is not in the table and when it has
    /// no rule for `event`.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.rules(state).and_then(|rules| rules.target(event))
    }

    /// All state names in enumeration order.
    pub fn state_names(&self) -> Vec<&str> {
        self.states.keys().map(String::as_str).collect()
    }

    /// States that have a rule keyed by `event`, in enumeration order.
    pub fn states_with_event(&self, event: &str) -> Vec<&str> {
        self.states
            .iter()
            .filter(|(_, rules)| rules.handles(event))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Iterate over `(state, rules)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateRules)> {
        self.states.iter().map(|(name, rules)| (name.as_str(), rules))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<N: Into<StateName>> FromIterator<(N, StateRules)> for TransitionTable {
    fn from_iter<I: IntoIterator<Item = (N, StateRules)>>(iter: I) -> Self {
        Self {
            states: iter
                .into_iter()
                .map(|(name, rules)| (name.into(), rules))
                .collect(),
        }
    }
}
