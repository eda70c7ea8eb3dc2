//! Opt-in consistency checks for a transition table.
//!
//! Machines are built without validating their table. These checks exist for
//! callers that want to catch dangling references up front. Every issue is
//! accumulated rather than stopping at the first one.

use super::table::TransitionTable;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single inconsistency found in a transition table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableIssue {
    #[error("Table defines no states")]
    EmptyTable,

    #[error("Initial state '{initial}' is not defined in the table")]
    UnknownInitial { initial: String },

    #[error("State '{state}' maps event '{event}' to undefined state '{target}'")]
    DanglingTarget {
        state: String,
        event: String,
        target: String,
    },
}

/// Outcome of validating a table.
pub type TableValidation = Validation<(), NonEmptyVec<TableIssue>>;

/// Check `table` and the `initial` state against it, collecting ALL issues.
///
/// # Example
///
/// ```rust
/// use rewind::core::{validate_table, StateRules, TableIssue, TransitionTable};
/// use stillwater::validation::Validation;
///
/// let table: TransitionTable = [
///     ("a", StateRules::new().on("go", "b")),
///     ("b", StateRules::new().on("jump", "nowhere")),
/// ]
/// .into_iter()
/// .collect();
///
/// match validate_table("missing", &table) {
///     Validation::Failure(issues) => assert_eq!(issues.len(), 2),
///     Validation::Success(_) => panic!("expected issues"),
/// }
/// ```
pub fn validate_table(initial: &str, table: &TransitionTable) -> TableValidation {
    let mut checks: Vec<TableValidation> = Vec::new();

    if table.is_empty() {
        checks.push(Validation::fail(TableIssue::EmptyTable));
    }

    if !table.is_empty() && !table.contains(initial) {
        checks.push(Validation::fail(TableIssue::UnknownInitial {
            initial: initial.to_string(),
        }));
    }

    for (state, rules) in table.iter() {
        for (event, target) in &rules.transitions {
            let check = if table.contains(target) {
                Validation::success(())
            } else {
                Validation::fail(TableIssue::DanglingTarget {
                    state: state.to_string(),
                    event: event.clone(),
                    target: target.clone(),
                })
            };
            checks.push(check);
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
