//! Linear state history with an undo log.
//!
//! History is the path of states entered through forward transitions,
//! starting from a fixed baseline entry. Stepping back moves entries into the
//! undo log; stepping forward replays them. Any new forward transition
//! discards the undo log.

use super::table::StateName;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Label of the entry every fresh history starts from.
///
/// `StateMachine::clear_history` also forces the current state to this
/// label, whether or not the transition table defines it.
pub const BASELINE_LABEL: &str = "normal";

/// Ordered history of entered states plus the buffer consumed by redo.
///
/// The history is never empty: it always holds at least the baseline entry.
///
/// # Example
///
/// ```rust
/// use rewind::core::{History, BASELINE_LABEL};
///
/// let mut history = History::new();
/// history.record("busy");
/// history.record("hungry");
///
/// assert_eq!(history.step_back("hungry").as_deref(), Some("busy"));
/// assert_eq!(history.step_back("busy").as_deref(), Some(BASELINE_LABEL));
/// assert_eq!(history.step_back(BASELINE_LABEL), None);
///
/// assert_eq!(history.step_forward().as_deref(), Some("busy"));
/// assert_eq!(history.step_forward().as_deref(), Some("hungry"));
/// assert_eq!(history.step_forward(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRecord")]
pub struct History {
    entries: Vec<StateName>,
    /// Front is the most recently undone state.
    undo_log: VecDeque<StateName>,
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct HistoryRecord {
    entries: Vec<StateName>,
    #[serde(default)]
    undo_log: VecDeque<StateName>,
}

impl TryFrom<HistoryRecord> for History {
    type Error = String;

    fn try_from(record: HistoryRecord) -> Result<Self, Self::Error> {
        if record.entries.is_empty() {
            return Err("history must hold at least its baseline entry".to_string());
        }
        Ok(Self {
            entries: record.entries,
            undo_log: record.undo_log,
        })
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a history holding only the baseline entry.
    pub fn new() -> Self {
        Self {
            entries: vec![BASELINE_LABEL.to_string()],
            undo_log: VecDeque::new(),
        }
    }

    /// Append a state entered by a forward transition.
    ///
    /// Discards everything pending in the undo log.
    pub fn record(&mut self, state: impl Into<StateName>) {
        self.entries.push(state.into());
        self.undo_log.clear();
    }

    /// Step back one entry.
    ///
    /// `current` is pushed onto the front of the undo log and the last entry
    /// is dropped. Returns the state to move to, or `None` when only the
    /// baseline remains, in which case nothing changes.
    pub fn step_back(&mut self, current: &str) -> Option<StateName> {
        if self.entries.len() <= 1 {
            return None;
        }

        let previous = self.entries[self.entries.len() - 2].clone();
        self.undo_log.push_front(current.to_string());
        self.entries.pop();
        Some(previous)
    }

    /// Replay the front of the undo log.
    ///
    /// The replayed state is appended to the entries. Returns `None` when
    /// there is nothing to redo.
    pub fn step_forward(&mut self) -> Option<StateName> {
        let next = self.undo_log.pop_front()?;
        self.entries.push(next.clone());
        Some(next)
    }

    /// Reset to the baseline entry and drop the undo log.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.entries.push(BASELINE_LABEL.to_string());
        self.undo_log.clear();
    }

    /// Entries in the order they were entered, baseline first.
    pub fn entries(&self) -> &[StateName] {
        &self.entries
    }

    /// Pending redo states, most recently undone first.
    pub fn undo_log(&self) -> impl Iterator<Item = &str> {
        self.undo_log.iter().map(String::as_str)
    }

    pub fn can_undo(&self) -> bool {
        self.entries.len() > 1
    }

    /// Equivalent to the undo log being non-empty.
    pub fn can_redo(&self) -> bool {
        !self.undo_log.is_empty()
    }

    /// Number of entries, including the baseline.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the baseline entry is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
