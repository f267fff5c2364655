//! # elfcode-script
//!
//! Solver for the elfcode lever room.
//!
//! ## Core Concepts
//! - **Actuator**: trait over the game's `elf` object (moves, levers, munch)
//! - **PrefixSums**: running sums of the six lever readings
//! - **Action**: one actuator call; the sequencer plans and issues them in order
//! - **Lookup**: the munch callback, last key whose value is the sentinel
//! - **LevelSimulator**: a grid-bounded actuator for running a level offline

pub mod action;
pub mod actuator;
pub mod error;
pub mod level;
pub mod levers;
pub mod lookup;
pub mod recorder;
pub mod sequencer;
pub mod simulator;

pub use action::Action;
pub use actuator::{Actuator, MunchFn};
pub use error::{Error, ErrorKind, Result};
pub use level::{Bounds, LevelConfig, Position};
pub use levers::{compute_prefix_sums, PrefixSums, LEVER_COUNT};
pub use lookup::{find_key, find_key_for_sentinel, Record, DEFAULT_SENTINEL};
pub use recorder::RecordingActuator;
pub use sequencer::{plan, run, solve, RunReport};
pub use simulator::{LevelSimulator, MunchOutcome};
