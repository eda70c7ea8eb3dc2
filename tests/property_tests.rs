//! Property-based tests for the state machine.
//!
//! These tests use proptest to verify history and undo/redo laws hold
//! across many randomly generated operation sequences.

use proptest::prelude::*;
use rewind::{transition_table, FsmError, MachineConfig, StateMachine};

const STATES: [&str; 4] = ["normal", "a", "b", "c"];
const EVENTS: [&str; 5] = ["go", "back", "skip", "home", "fly"];

fn machine() -> StateMachine {
    StateMachine::new(MachineConfig::new(
        "normal",
        transition_table! {
            "normal" => { "go" => "a", "skip" => "b" },
            "a" => { "go" => "b", "back" => "normal" },
            "b" => { "go" => "c", "back" => "a" },
            "c" => { "back" => "b", "home" => "normal" },
        },
    ))
}

#[derive(Clone, Debug)]
enum Op {
    Change(&'static str),
    Trigger(&'static str),
    Undo,
    Redo,
    Reset,
    Clear,
}

prop_compose! {
    fn arbitrary_state()(index in 0..STATES.len()) -> &'static str {
        STATES[index]
    }
}

prop_compose! {
    fn arbitrary_event()(index in 0..EVENTS.len()) -> &'static str {
        EVENTS[index]
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_state().prop_map(Op::Change),
        arbitrary_event().prop_map(Op::Trigger),
        Just(Op::Undo),
        Just(Op::Redo),
        Just(Op::Reset),
        Just(Op::Clear),
    ]
}

fn apply(machine: &mut StateMachine, op: &Op) {
    match op {
        Op::Change(state) => {
            let _ = machine.change_state(state);
        }
        Op::Trigger(event) => {
            let _ = machine.trigger(event);
        }
        Op::Undo => {
            machine.undo();
        }
        Op::Redo => {
            machine.redo();
        }
        Op::Reset => machine.reset(),
        Op::Clear => machine.clear_history(),
    }
}

proptest! {
    #[test]
    fn state_is_always_a_table_key(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = machine();

        for op in &ops {
            apply(&mut machine, op);
            prop_assert!(machine.table().contains(machine.state()));
        }
    }

    #[test]
    fn history_never_empties(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = machine();

        for op in &ops {
            apply(&mut machine, op);
            prop_assert!(!machine.history().entries().is_empty());
            prop_assert_eq!(machine.can_redo(), machine.history().undo_log().next().is_some());
        }
    }

    #[test]
    fn reads_are_idempotent(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        event in arbitrary_event(),
    ) {
        let mut machine = machine();
        for op in &ops {
            apply(&mut machine, op);
        }

        let state = machine.state().to_string();
        let all = machine.states(None).join(",");
        let filtered = machine.states(Some(event)).join(",");

        for _ in 0..3 {
            prop_assert_eq!(machine.state(), state.as_str());
            prop_assert_eq!(machine.states(None).join(","), all.clone());
            prop_assert_eq!(machine.states(Some(event)).join(","), filtered.clone());
        }
    }

    #[test]
    fn undo_redo_is_inverse_of_change(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        target in arbitrary_state(),
    ) {
        let mut machine = machine();
        for op in &ops {
            apply(&mut machine, op);
        }
        // undo lands on the previous history entry, which after a reset is
        // not necessarily the state held before the jump
        let before = machine.history().entries().last().cloned().unwrap();

        machine.change_state(target).unwrap();
        prop_assert!(machine.undo());
        prop_assert_eq!(machine.state(), before.as_str());
        prop_assert!(machine.redo());
        prop_assert_eq!(machine.state(), target);
    }

    #[test]
    fn undo_redo_is_inverse_without_reset(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        target in arbitrary_state(),
    ) {
        let mut machine = machine();
        for op in ops.iter().filter(|op| !matches!(op, Op::Reset)) {
            apply(&mut machine, op);
        }
        let before = machine.state().to_string();

        machine.change_state(target).unwrap();
        prop_assert!(machine.undo());
        prop_assert_eq!(machine.state(), before.as_str());
        prop_assert!(machine.redo());
        prop_assert_eq!(machine.state(), target);
    }

    #[test]
    fn multi_step_undo_redo_preserves_order(
        path in prop::collection::vec(arbitrary_state(), 1..8)
    ) {
        let mut machine = machine();
        let mut visited = vec![machine.state().to_string()];
        for state in &path {
            machine.change_state(state).unwrap();
            visited.push(state.to_string());
        }

        for expected in visited.iter().rev().skip(1) {
            prop_assert!(machine.undo());
            prop_assert_eq!(machine.state(), expected.as_str());
        }
        prop_assert!(!machine.undo());

        for expected in visited.iter().skip(1) {
            prop_assert!(machine.redo());
            prop_assert_eq!(machine.state(), expected.as_str());
        }
        prop_assert!(!machine.redo());
    }

    #[test]
    fn forward_move_discards_redo(
        path in prop::collection::vec(arbitrary_state(), 1..6),
        undos in 1usize..6,
        target in arbitrary_state(),
    ) {
        let mut machine = machine();
        for state in &path {
            machine.change_state(state).unwrap();
        }
        for _ in 0..undos {
            machine.undo();
        }
        prop_assert!(machine.can_redo());

        machine.change_state(target).unwrap();
        prop_assert!(!machine.redo());
    }

    #[test]
    fn failed_moves_change_nothing(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
    ) {
        let mut machine = machine();
        for op in &ops {
            apply(&mut machine, op);
        }
        let state = machine.state().to_string();
        let history = machine.history().clone();

        let unknown = matches!(
            machine.change_state("nowhere"),
            Err(FsmError::UnknownState { .. })
        );
        prop_assert!(unknown);
        let undefined = matches!(
            machine.trigger("fly"),
            Err(FsmError::UndefinedTransition { .. })
        );
        prop_assert!(undefined);
        prop_assert_eq!(machine.state(), state.as_str());
        prop_assert_eq!(machine.history(), &history);
    }

    #[test]
    fn clear_history_leaves_nothing_to_undo(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
    ) {
        let mut machine = machine();
        for op in &ops {
            apply(&mut machine, op);
        }

        machine.clear_history();
        prop_assert_eq!(machine.state(), "normal");
        prop_assert!(!machine.undo());
        prop_assert!(!machine.redo());
    }
}
