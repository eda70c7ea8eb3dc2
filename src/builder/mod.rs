//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and the `transition_table!` macro
//! for creating machines with minimal boilerplate.

pub mod machine;
pub mod macros;

pub use machine::StateMachineBuilder;

use crate::core::StateRules;

/// Create rules for a state that reacts to a single event.
///
/// # Example
///
/// ```
/// use rewind::builder::single_rule;
///
/// let rules = single_rule("timer", "green");
/// assert_eq!(rules.target("timer"), Some("green"));
/// ```
pub fn single_rule(event: &str, target: &str) -> StateRules {
    StateRules::new().on(event, target)
}

/// Create rules mapping every listed event to the same target.
///
/// # Example
///
/// ```
/// use rewind::builder::funnel;
///
/// let rules = funnel(["fail", "abort", "timeout"], "error");
/// assert_eq!(rules.target("abort"), Some("error"));
/// assert_eq!(rules.transitions.len(), 3);
/// ```
pub fn funnel<'a, I>(events: I, target: &str) -> StateRules
where
    I: IntoIterator<Item = &'a str>,
{
    events
        .into_iter()
        .map(|event| (event, target))
        .collect()
}
