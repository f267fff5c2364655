//! # Sequencer
//!
//! The fixed route through the lever room. Each pass moves right, pulls a
//! lever, climbs, moves back left two further than it went right, pulls the
//! next lever and climbs again: per pass the actor ends 2 left and 4 up.
//! After three passes the munch callback is registered and the actor walks
//! right to the exit.

use crate::action::Action;
use crate::actuator::Actuator;
use crate::error::Result;
use crate::levers::{compute_prefix_sums, PrefixSums};
use serde::{Deserialize, Serialize};

/// Rightward distance of the first pass
pub const FIRST_RUN: u32 = 1;
/// Each pass runs this much further right than the previous one
pub const RUN_STRIDE: usize = 4;
/// Passes continue while the run is below this
pub const RUN_LIMIT: u32 = 13;
/// Height of each climb
pub const CLIMB: u32 = 2;
/// The leftward run overshoots the rightward one by this much
pub const LEFT_OVERSHOOT: u32 = 2;
/// Final walk to the exit
pub const EXIT_RUN: u32 = 11;

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Prefix sums the levers were pulled with
    pub sums: PrefixSums,
    /// Calls issued after the lever reads, in order
    pub actions: Vec<Action>,
}

/// The calls issued after the levers are read, in order.
pub fn plan(sums: &PrefixSums) -> Vec<Action> {
    let mut actions = Vec::with_capacity(20);
    let mut pos = 0;

    for run in (FIRST_RUN..RUN_LIMIT).step_by(RUN_STRIDE) {
        actions.push(Action::MoveRight { steps: run });
        actions.push(Action::PullLever { value: sums[pos] });
        actions.push(Action::MoveUp { steps: CLIMB });
        actions.push(Action::MoveLeft { steps: run + LEFT_OVERSHOOT });
        actions.push(Action::PullLever { value: sums[pos + 1] });
        actions.push(Action::MoveUp { steps: CLIMB });
        pos += 2;
    }

    actions.push(Action::TellMunch);
    actions.push(Action::MoveRight { steps: EXIT_RUN });
    actions
}

/// Read the levers and drive the whole route.
///
/// The first failing call aborts the run; its error is returned with the
/// step number added to the context.
pub fn solve<A: Actuator + ?Sized>(actuator: &mut A) -> Result<RunReport> {
    let sums = compute_prefix_sums(actuator)?;
    tracing::info!(sums = ?sums.as_slice(), "levers summed");

    let actions = plan(&sums);
    for (step, action) in actions.iter().enumerate() {
        tracing::debug!(step, %action, "issuing");
        action.dispatch(actuator).map_err(|e| {
            e.with_operation("sequencer::solve")
                .with_context("step", step.to_string())
                .with_context("action", action.to_string())
        })?;
    }

    tracing::info!(calls = actions.len(), "route complete");
    Ok(RunReport { sums, actions })
}

/// [`solve`] without the report.
pub fn run<A: Actuator + ?Sized>(actuator: &mut A) -> Result<()> {
    solve(actuator).map(|_| ())
}
