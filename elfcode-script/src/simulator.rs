//! # Level simulator
//!
//! An offline stand-in for the game host. It serves the level's lever
//! values, walks the actor over the grid, refuses moves that leave the room
//! and keeps the munch callback so it can be invoked on the level's records
//! once the route is done.

use crate::action::Action;
use crate::actuator::{Actuator, MunchFn};
use crate::error::{self, Result};
use crate::level::{LevelConfig, Position};
use crate::levers::LEVER_COUNT;
use serde::{Deserialize, Serialize};

/// Answer the munch gave for the level's record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunchOutcome {
    pub answer: String,
    pub expected: Option<String>,
}

impl MunchOutcome {
    /// True when the answer matches the expected key, or no key is expected
    /// and the munch found something.
    pub fn is_solved(&self) -> bool {
        match &self.expected {
            Some(expected) => *expected == self.answer,
            None => !self.answer.is_empty(),
        }
    }
}

#[derive(Debug)]
pub struct LevelSimulator {
    level: LevelConfig,
    position: Position,
    trace: Vec<Action>,
    pulls: Vec<i64>,
    munch: Option<MunchFn>,
}

impl LevelSimulator {
    pub fn new(level: LevelConfig) -> Result<Self> {
        level.validate()?;
        let position = level.start;
        Ok(Self {
            level,
            position,
            trace: Vec::new(),
            pulls: Vec::new(),
            munch: None,
        })
    }

    pub fn level(&self) -> &LevelConfig {
        &self.level
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Accepted calls, in order
    pub fn trace(&self) -> &[Action] {
        &self.trace
    }

    /// Values levers were pulled with, in order
    pub fn pulls(&self) -> &[i64] {
        &self.pulls
    }

    pub fn has_munch(&self) -> bool {
        self.munch.is_some()
    }

    /// Call the registered munch with the level's records.
    pub fn invoke_munch(&self) -> Result<MunchOutcome> {
        let callback = self.munch.ok_or_else(|| {
            error::callback_rejected("no munch callback registered")
                .with_operation("simulator::invoke_munch")
        })?;
        let answer = callback(&self.level.munch_records);
        tracing::info!(answer = %answer, records = self.level.munch_records.len(), "munch answered");
        Ok(MunchOutcome {
            answer,
            expected: self.level.expected_key.clone(),
        })
    }

    /// Move by `steps` cells along `(dx, dy)`. A target outside the room,
    /// or past the range of `i64` in an unbounded room, is refused.
    fn step(&mut self, direction: &'static str, steps: u32, dx: i64, dy: i64) -> Result<()> {
        let delta = i64::from(steps);
        let Position { x, y } = self.position;
        let next = dx
            .checked_mul(delta)
            .and_then(|d| x.checked_add(d))
            .zip(dy.checked_mul(delta).and_then(|d| y.checked_add(d)))
            .map(|(x, y)| Position::new(x, y))
            .filter(|next| self.level.bounds.map_or(true, |bounds| bounds.contains(*next)));

        let Some(next) = next else {
            tracing::warn!(direction, steps, x, y, "move blocked");
            return Err(error::move_blocked(direction, steps, x, y).with_operation("simulator::step"));
        };
        self.position = next;
        Ok(())
    }
}

impl Actuator for LevelSimulator {
    fn get_lever(&mut self, index: usize) -> Result<i64> {
        let value = *self.level.levers.get(index).ok_or_else(|| {
            tracing::warn!(index, "no such lever");
            error::lever_out_of_range(index, LEVER_COUNT).with_operation("simulator::get_lever")
        })?;
        self.trace.push(Action::GetLever { index });
        Ok(value)
    }

    fn pull_lever(&mut self, value: i64) -> Result<()> {
        self.pulls.push(value);
        self.trace.push(Action::PullLever { value });
        Ok(())
    }

    fn move_up(&mut self, steps: u32) -> Result<()> {
        self.step("up", steps, 0, 1)?;
        self.trace.push(Action::MoveUp { steps });
        Ok(())
    }

    fn move_right(&mut self, steps: u32) -> Result<()> {
        self.step("right", steps, 1, 0)?;
        self.trace.push(Action::MoveRight { steps });
        Ok(())
    }

    fn move_left(&mut self, steps: u32) -> Result<()> {
        self.step("left", steps, -1, 0)?;
        self.trace.push(Action::MoveLeft { steps });
        Ok(())
    }

    fn tell_munch(&mut self, callback: MunchFn) -> Result<()> {
        if self.munch.is_some() {
            return Err(error::callback_rejected("munch callback already registered")
                .with_operation("simulator::tell_munch"));
        }
        self.munch = Some(callback);
        self.trace.push(Action::TellMunch);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::level::Bounds;
    use crate::lookup::find_key;

    fn open_level() -> LevelConfig {
        LevelConfig {
            bounds: None,
            ..LevelConfig::default()
        }
    }

    #[test]
    fn test_moves_track_position() {
        let mut sim = LevelSimulator::new(open_level()).unwrap();
        sim.move_right(5).unwrap();
        sim.move_up(2).unwrap();
        sim.move_left(7).unwrap();

        assert_eq!(sim.position(), Position::new(4, 2));
        assert_eq!(sim.trace().len(), 3);
    }

    #[test]
    fn test_move_blocked_by_bounds() {
        let mut level = LevelConfig::default();
        level.bounds = Some(Bounds { width: 3, height: 3 });
        level.start = Position::new(0, 0);
        let mut sim = LevelSimulator::new(level).unwrap();

        let err = sim.move_left(1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MoveBlocked);
        assert_eq!(sim.position(), Position::new(0, 0));
        assert!(sim.trace().is_empty());

        sim.move_up(2).unwrap();
        assert_eq!(sim.move_up(1).unwrap_err().kind(), ErrorKind::MoveBlocked);
    }

    #[test]
    fn test_move_past_i64_range_is_blocked() {
        let level = LevelConfig::from_json(
            r#"{"levers": [1, 2, 3, 4, 5, 6], "start": {"x": 9223372036854775805, "y": 0}}"#,
        )
        .unwrap();
        let mut sim = LevelSimulator::new(level).unwrap();

        // right 1, left 3, then right 5 would pass i64::MAX
        let err = crate::sequencer::solve(&mut sim).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MoveBlocked);
        assert_eq!(err.trail(), &["simulator::step", "sequencer::solve"]);
        assert_eq!(sim.position(), Position::new(i64::MAX - 4, 4));
        assert_eq!(sim.pulls(), &[1, 3]);
    }

    #[test]
    fn test_lever_out_of_range() {
        let mut sim = LevelSimulator::new(open_level()).unwrap();
        assert_eq!(sim.get_lever(3).unwrap(), 4);
        let err = sim.get_lever(6).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LeverOutOfRange);
        assert_eq!(err.operation(), "simulator::get_lever");
    }

    #[test]
    fn test_invoke_munch_requires_registration() {
        let sim = LevelSimulator::new(open_level()).unwrap();
        let err = sim.invoke_munch().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CallbackRejected);
    }

    #[test]
    fn test_second_registration_rejected() {
        let mut sim = LevelSimulator::new(open_level()).unwrap();
        sim.tell_munch(find_key).unwrap();
        let err = sim.tell_munch(find_key).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CallbackRejected);
        assert_eq!(sim.trace(), &[Action::TellMunch]);
    }

    #[test]
    fn test_invoke_munch_on_level_records() {
        let mut sim = LevelSimulator::new(open_level()).unwrap();
        sim.tell_munch(find_key).unwrap();

        let outcome = sim.invoke_munch().unwrap();
        assert_eq!(outcome.answer, "stick");
        assert!(outcome.is_solved());
    }

    #[test]
    fn test_outcome_without_expectation() {
        let found = MunchOutcome { answer: "k".into(), expected: None };
        let missing = MunchOutcome { answer: String::new(), expected: None };
        assert!(found.is_solved());
        assert!(!missing.is_solved());
    }
}
