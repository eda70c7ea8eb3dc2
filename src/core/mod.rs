//! Core data types of the engine.
//!
//! This module contains the pieces the state machine is assembled from:
//! - The static transition table and its per-state rules
//! - The linear history and its undo log
//! - Opt-in table validation
//!
//! Nothing here performs I/O; every type is plain owned data.

mod history;
mod table;
mod validation;

pub use history::{History, BASELINE_LABEL};
pub use table::{EventName, StateName, StateRules, TransitionTable};
pub use validation::{validate_table, TableIssue, TableValidation};
