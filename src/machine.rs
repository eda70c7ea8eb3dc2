//! State machine with linear history and undo/redo.

use crate::config::MachineConfig;
use crate::core::{
    validate_table, History, StateName, TableValidation, TransitionTable, BASELINE_LABEL,
};
use crate::error::{FsmError, Result};
use tracing::{debug, warn};

/// Finite state machine over a static, string-keyed transition table.
///
/// Each instance owns its table, current state and history. Instances are
/// not synchronized; wrap one in a mutex to share it across threads.
///
/// Forward moves (`change_state`, `trigger`) fail before mutating anything
/// when they are not allowed. Navigation (`undo`, `redo`) never fails and
/// reports whether it moved.
///
/// # Example
///
/// ```rust
/// use rewind::{transition_table, MachineConfig, StateMachine};
///
/// let mut machine = StateMachine::new(MachineConfig::new(
///     "normal",
///     transition_table! {
///         "normal" => { "study" => "busy" },
///         "busy" => { "get_tired" => "sleeping" },
///         "sleeping" => { "get_up" => "normal" },
///     },
/// ));
///
/// machine.trigger("study").unwrap();
/// machine.trigger("get_tired").unwrap();
/// assert_eq!(machine.state(), "sleeping");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "busy");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "sleeping");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    initial: StateName,
    current: StateName,
    table: TransitionTable,
    history: History,
}

impl StateMachine {
    /// Create a machine in its configured initial state.
    ///
    /// The initial state is not checked against the table; use
    /// [`StateMachine::validate`] to detect that up front.
    pub fn new(config: MachineConfig) -> Self {
        let MachineConfig { initial, states } = config;
        debug!(initial = %initial, states = states.len(), "state machine created");

        Self {
            current: initial.clone(),
            initial,
            table: states,
            history: History::new(),
        }
    }

    /// Create a machine from a configuration that may be absent.
    ///
    /// Fails with [`FsmError::InvalidArgument`] when `config` is `None`.
    pub fn try_new(config: Option<MachineConfig>) -> Result<Self> {
        config
            .map(Self::new)
            .ok_or_else(|| FsmError::invalid_argument("a machine configuration is required"))
    }

    /// Create a machine from a JSON configuration document.
    ///
    /// A `null` document or a malformed one fails with
    /// [`FsmError::InvalidArgument`].
    pub fn from_json(json: &str) -> Result<Self> {
        Self::try_new(MachineConfig::from_json(json)?)
    }

    /// Get current state (pure)
    pub fn state(&self) -> &str {
        &self.current
    }

    /// Get configured initial state (pure)
    pub fn initial_state(&self) -> &str {
        &self.initial
    }

    /// Get transition table (pure)
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Get state history (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Jump to `target` without consulting transition rules.
    ///
    /// Fails with [`FsmError::UnknownState`] if `target` is not a key of the
    /// table. On success the move is recorded and pending redo is discarded.
    pub fn change_state(&mut self, target: &str) -> Result<()> {
        if !self.table.contains(target) {
            return Err(FsmError::UnknownState {
                state: target.to_string(),
            });
        }

        self.enter(target.to_string());
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// Fails with [`FsmError::UndefinedTransition`] when the current state
    /// has no rule for `event`, including when the current state itself is
    /// not in the table.
    pub fn trigger(&mut self, event: &str) -> Result<()> {
        let target = self
            .table
            .target(&self.current, event)
            .ok_or_else(|| FsmError::UndefinedTransition {
                state: self.current.clone(),
                event: event.to_string(),
            })?
            .to_string();

        debug!(event, from = %self.current, to = %target, "event triggered");
        self.enter(target);
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// History and pending redo are left untouched.
    pub fn reset(&mut self) {
        debug!(from = %self.current, to = %self.initial, "state machine reset");
        self.current = self.initial.clone();
    }

    /// State names, optionally restricted to those handling `event`.
    ///
    /// Both forms enumerate in table order.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            Some(event) => self.states_with_event(event),
            None => self.all_states(),
        }
    }

    /// All state names in table order.
    pub fn all_states(&self) -> Vec<&str> {
        self.table.state_names()
    }

    /// States that define a rule for `event`, in table order.
    pub fn states_with_event(&self, event: &str) -> Vec<&str> {
        self.table.states_with_event(event)
    }

    /// Step back to the previous history entry.
    ///
    /// Returns `false` and does nothing when the history holds only its
    /// baseline entry.
    pub fn undo(&mut self) -> bool {
        match self.history.step_back(&self.current) {
            Some(previous) => {
                debug!(from = %self.current, to = %previous, "undo");
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Replay the most recently undone state.
    ///
    /// Returns `false` and does nothing when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.step_forward() {
            Some(next) => {
                debug!(from = %self.current, to = %next, "redo");
                self.current = next;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Reset history to its baseline entry and move to the baseline label.
    ///
    /// The current state becomes [`BASELINE_LABEL`], not the configured
    /// initial state, even when the table has no such state.
    pub fn clear_history(&mut self) {
        if !self.table.contains(BASELINE_LABEL) {
            warn!(
                baseline = BASELINE_LABEL,
                "history cleared onto a state missing from the transition table"
            );
        }
        debug!(from = %self.current, "history cleared");

        self.history.clear();
        self.current = BASELINE_LABEL.to_string();
    }

    /// Check the initial state and every rule target against the table.
    pub fn validate(&self) -> TableValidation {
        validate_table(&self.initial, &self.table)
    }

    fn enter(&mut self, target: StateName) {
        self.history.record(target.clone());
        self.current = target;
    }
}
