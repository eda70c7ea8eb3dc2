//! Builder for constructing state machines.

use crate::config::MachineConfig;
use crate::core::{EventName, StateName, StateRules, TransitionTable};
use crate::error::{FsmError, Result};
use crate::machine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use rewind::builder::StateMachineBuilder;
///
/// let machine = StateMachineBuilder::new()
///     .initial("red")
///     .state("red", [("timer", "green")])
///     .state("green", [("timer", "yellow")])
///     .state("yellow", [("timer", "red")])
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state(), "red");
/// assert_eq!(machine.states_with_event("timer").len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct StateMachineBuilder {
    initial: Option<StateName>,
    table: TransitionTable,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateName>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Define a state with its outgoing `(event, target)` rules.
    ///
    /// Defining the same state twice replaces its rules.
    pub fn state<I, E, T>(mut self, name: impl Into<StateName>, transitions: I) -> Self
    where
        I: IntoIterator<Item = (E, T)>,
        E: Into<EventName>,
        T: Into<StateName>,
    {
        self.table
            .insert(name, transitions.into_iter().collect::<StateRules>());
        self
    }

    /// Define a state from prebuilt rules.
    pub fn rules(mut self, name: impl Into<StateName>, rules: StateRules) -> Self {
        self.table.insert(name, rules);
        self
    }

    /// Use an entire table, replacing any states defined so far.
    pub fn table(mut self, table: TransitionTable) -> Self {
        self.table = table;
        self
    }

    /// Finish into a configuration without building a machine.
    pub fn into_config(self) -> Result<MachineConfig> {
        let initial = self.initial.ok_or_else(|| {
            FsmError::invalid_argument("initial state not specified, call .initial(state)")
        })?;
        Ok(MachineConfig::new(initial, self.table))
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<StateMachine> {
        self.into_config().map(StateMachine::new)
    }
}
