//! # Actuator
//!
//! The host game's `elf` object. Every call may have positional side
//! effects, so callers must issue them in order and stop at the first error.

use crate::error::Result;
use crate::lookup::Record;

/// The munch callback: receives the host's record set, returns the chosen key.
pub type MunchFn = fn(&[Record]) -> String;

/// Movement and lever primitives supplied by the host
pub trait Actuator {
    /// Current value of lever `index`
    fn get_lever(&mut self, index: usize) -> Result<i64>;

    /// Pull a lever with `value`
    fn pull_lever(&mut self, value: i64) -> Result<()>;

    fn move_up(&mut self, steps: u32) -> Result<()>;

    fn move_right(&mut self, steps: u32) -> Result<()>;

    fn move_left(&mut self, steps: u32) -> Result<()>;

    /// Hand the lookup callback to the host, which calls it later with its
    /// own record set.
    fn tell_munch(&mut self, callback: MunchFn) -> Result<()>;
}

impl<A: Actuator + ?Sized> Actuator for &mut A {
    fn get_lever(&mut self, index: usize) -> Result<i64> {
        (**self).get_lever(index)
    }

    fn pull_lever(&mut self, value: i64) -> Result<()> {
        (**self).pull_lever(value)
    }

    fn move_up(&mut self, steps: u32) -> Result<()> {
        (**self).move_up(steps)
    }

    fn move_right(&mut self, steps: u32) -> Result<()> {
        (**self).move_right(steps)
    }

    fn move_left(&mut self, steps: u32) -> Result<()> {
        (**self).move_left(steps)
    }

    fn tell_munch(&mut self, callback: MunchFn) -> Result<()> {
        (**self).tell_munch(callback)
    }
}
