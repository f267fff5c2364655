//! # Actions
//!
//! One variant per actuator call. The sequencer plans a run as a list of
//! actions and the recording actuator and simulator log what they receive
//! in the same form, so plans and traces compare directly.

use crate::actuator::Actuator;
use crate::error::Result;
use crate::lookup;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single call on the actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Read the value of a lever
    GetLever {
        /// Lever index, 0-based
        index: usize,
    },

    /// Pull a lever with a value
    PullLever {
        value: i64,
    },

    /// Move the actor up
    MoveUp {
        steps: u32,
    },

    /// Move the actor right
    MoveRight {
        steps: u32,
    },

    /// Move the actor left
    MoveLeft {
        steps: u32,
    },

    /// Register the munch lookup callback with the host
    TellMunch,
}

impl Action {
    /// Name of the actuator call
    pub fn name(&self) -> &'static str {
        match self {
            Action::GetLever { .. } => "get_lever",
            Action::PullLever { .. } => "pull_lever",
            Action::MoveUp { .. } => "move_up",
            Action::MoveRight { .. } => "move_right",
            Action::MoveLeft { .. } => "move_left",
            Action::TellMunch => "tell_munch",
        }
    }

    /// Issue this action on an actuator.
    ///
    /// Returns the reading for `GetLever` and `None` for every other call.
    /// `TellMunch` registers [`lookup::find_key`].
    pub fn dispatch<A: Actuator + ?Sized>(&self, actuator: &mut A) -> Result<Option<i64>> {
        match *self {
            Action::GetLever { index } => return actuator.get_lever(index).map(Some),
            Action::PullLever { value } => actuator.pull_lever(value)?,
            Action::MoveUp { steps } => actuator.move_up(steps)?,
            Action::MoveRight { steps } => actuator.move_right(steps)?,
            Action::MoveLeft { steps } => actuator.move_left(steps)?,
            Action::TellMunch => actuator.tell_munch(lookup::find_key)?,
        }
        Ok(None)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::GetLever { index } => write!(f, "{}({})", self.name(), index),
            Action::PullLever { value } => write!(f, "{}({})", self.name(), value),
            Action::MoveUp { steps }
            | Action::MoveRight { steps }
            | Action::MoveLeft { steps } => write!(f, "{}({})", self.name(), steps),
            Action::TellMunch => write!(f, "{}(find_key)", self.name()),
        }
    }
}
