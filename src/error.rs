//! Errors raised by state machine construction and forward transitions.
//!
//! Navigation through history (`undo`/`redo`) never produces these; it
//! reports unavailability through a `bool` instead.

use thiserror::Error;

/// Errors that can occur when building or driving a state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// Construction was attempted without a usable configuration.
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// `change_state` targeted a state that is not in the transition table.
    #[error("Unknown state '{state}'")]
    UnknownState { state: String },

    /// `trigger` fired an event with no rule from the current state.
    #[error("No transition for event '{event}' from state '{state}'")]
    UndefinedTransition { state: String, event: String },
}

impl FsmError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FsmError>;
