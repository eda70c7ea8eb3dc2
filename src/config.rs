//! Machine configuration.
//!
//! The configuration is the only structured input to the engine. It mirrors
//! this JSON shape:
//!
//! ```json
//! {
//!   "initial": "normal",
//!   "states": {
//!     "normal": { "transitions": { "study": "busy" } },
//!     "busy":   { "transitions": { "get_tired": "normal" } }
//!   }
//! }
//! ```

use crate::core::{StateName, TransitionTable};
use crate::error::{FsmError, Result};
use serde::{Deserialize, Serialize};

/// Initial state plus transition table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// State the machine starts in and returns to on `reset`
    pub initial: StateName,
    /// Static transition table
    pub states: TransitionTable,
}

impl MachineConfig {
    pub fn new(initial: impl Into<StateName>, states: TransitionTable) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration document.
    ///
    /// A document consisting of `null` carries no configuration and yields
    /// `Ok(None)`. Malformed documents are reported as
    /// [`FsmError::InvalidArgument`].
    pub fn from_json(json: &str) -> Result<Option<Self>> {
        serde_json::from_str::<Option<Self>>(json)
            .map_err(|e| FsmError::invalid_argument(format!("malformed machine config: {e}")))
    }

    /// Render the configuration back to its JSON shape.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
