//! Macros for ergonomic transition table construction.

/// Build a [`TransitionTable`](crate::core::TransitionTable) literal.
///
/// States are inserted in the order written, which is the order
/// `StateMachine::all_states` reports them in.
///
/// # Example
///
/// ```
/// use rewind::transition_table;
///
/// let table = transition_table! {
///     "normal" => { "study" => "busy" },
///     "busy" => { "get_tired" => "sleeping", "get_hungry" => "hungry" },
///     "hungry" => { "eat" => "normal" },
///     "sleeping" => {},
/// };
///
/// assert_eq!(table.len(), 4);
/// assert_eq!(table.target("busy", "get_hungry"), Some("hungry"));
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        $(
            $state:expr => { $($event:expr => $target:expr),* $(,)? }
        ),* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut table = $crate::core::TransitionTable::new();
        $(
            table.insert(
                $state,
                $crate::core::StateRules::new()$(.on($event, $target))*,
            );
        )*
        table
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn transition_table_macro_preserves_order() {
        let table = transition_table! {
            "b" => { "go" => "a" },
            "a" => { "go" => "b", "stay" => "a" },
        };

        assert_eq!(table.state_names(), vec!["b", "a"]);
        assert_eq!(table.target("a", "stay"), Some("a"));
    }

    #[test]
    fn transition_table_macro_accepts_empty_states() {
        let table = transition_table! {
            "only" => {},
        };

        assert!(table.contains("only"));
        assert!(table.states_with_event("go").is_empty());
    }

    #[test]
    fn transition_table_macro_accepts_owned_names() {
        let name = String::from("dynamic");
        let table = transition_table! {
            name.clone() => { "loop" => name.clone() },
        };

        assert_eq!(table.target("dynamic", "loop"), Some("dynamic"));
    }

    #[test]
    fn empty_invocation_builds_empty_table() {
        let table = transition_table! {};
        assert!(table.is_empty());
    }
}
