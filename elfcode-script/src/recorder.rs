//! # Recording actuator
//!
//! Serves fixed lever values and logs every call it receives. Used to check
//! call order and to print a plan without simulating the room.

use crate::action::Action;
use crate::actuator::{Actuator, MunchFn};
use crate::error::{self, Result};
use crate::levers::LEVER_COUNT;

#[derive(Debug, Clone)]
pub struct RecordingActuator {
    levers: [i64; LEVER_COUNT],
    calls: Vec<Action>,
    munch: Option<MunchFn>,
    /// Zero-based call number that fails instead of being recorded
    fail_at: Option<usize>,
}

impl RecordingActuator {
    pub fn new(levers: [i64; LEVER_COUNT]) -> Self {
        Self {
            levers,
            calls: Vec::new(),
            munch: None,
            fail_at: None,
        }
    }

    /// Fail the call with zero-based number `call` (and nothing after it
    /// gets recorded, since callers stop).
    pub fn with_failure_at(mut self, call: usize) -> Self {
        self.fail_at = Some(call);
        self
    }

    /// Calls received so far, in order
    pub fn calls(&self) -> &[Action] {
        &self.calls
    }

    /// The registered munch callback, if `tell_munch` was called
    pub fn munch(&self) -> Option<MunchFn> {
        self.munch
    }

    fn record(&mut self, action: Action) -> Result<()> {
        if self.fail_at == Some(self.calls.len()) {
            return Err(error::actuator_failed(action.name(), "injected failure")
                .with_operation("recorder::record"));
        }
        self.calls.push(action);
        Ok(())
    }
}

impl Actuator for RecordingActuator {
    fn get_lever(&mut self, index: usize) -> Result<i64> {
        let value = *self
            .levers
            .get(index)
            .ok_or_else(|| error::lever_out_of_range(index, LEVER_COUNT))?;
        self.record(Action::GetLever { index })?;
        Ok(value)
    }

    fn pull_lever(&mut self, value: i64) -> Result<()> {
        self.record(Action::PullLever { value })
    }

    fn move_up(&mut self, steps: u32) -> Result<()> {
        self.record(Action::MoveUp { steps })
    }

    fn move_right(&mut self, steps: u32) -> Result<()> {
        self.record(Action::MoveRight { steps })
    }

    fn move_left(&mut self, steps: u32) -> Result<()> {
        self.record(Action::MoveLeft { steps })
    }

    fn tell_munch(&mut self, callback: MunchFn) -> Result<()> {
        self.record(Action::TellMunch)?;
        self.munch = Some(callback);
        Ok(())
    }
}
