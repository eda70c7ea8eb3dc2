//! Rewind: a finite state machine with linear history and undo/redo
//!
//! A machine is configured once with an initial state and a static table of
//! event-triggered transitions between string-named states. It tracks the
//! current state, records every forward move in a history, and can walk that
//! history backward and forward again.
//!
//! # Core Concepts
//!
//! - **Transition table**: per state, which events lead to which next states
//! - **History**: the path of states entered, starting from a baseline entry
//! - **Undo log**: states stepped back over, replayed by `redo`
//!
//! Forward moves (`change_state`, `trigger`) fail with an error when they are
//! not allowed. Navigation (`undo`, `redo`) never fails; it returns `false`
//! when there is nothing to do.
//!
//! # Example
//!
//! ```rust
//! use rewind::{FsmError, StateMachine};
//!
//! let mut machine = StateMachine::from_json(r#"{
//!     "initial": "normal",
//!     "states": {
//!         "normal": { "transitions": { "study": "busy" } },
//!         "busy": { "transitions": { "get_tired": "sleeping", "get_hungry": "hungry" } },
//!         "hungry": { "transitions": { "eat": "normal" } },
//!         "sleeping": { "transitions": { "get_hungry": "hungry", "get_up": "normal" } }
//!     }
//! }"#).unwrap();
//!
//! machine.trigger("study").unwrap();
//! assert_eq!(machine.state(), "busy");
//!
//! assert!(matches!(
//!     machine.trigger("eat"),
//!     Err(FsmError::UndefinedTransition { .. })
//! ));
//!
//! assert_eq!(machine.states(Some("get_hungry")), vec!["busy", "sleeping"]);
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "normal");
//! assert!(!machine.undo());
//! assert!(machine.redo());
//! assert_eq!(machine.state(), "busy");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use builder::StateMachineBuilder;
pub use config::MachineConfig;
pub use self::core::{History, StateRules, TransitionTable, BASELINE_LABEL};
pub use error::{FsmError, Result};
pub use machine::StateMachine;
