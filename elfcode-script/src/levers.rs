//! # Levers
//!
//! Reads the six lever values and turns them into running sums.

use crate::actuator::Actuator;
use crate::error::{self, Result};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Number of levers in the room
pub const LEVER_COUNT: usize = 6;

/// Running sums of the lever readings: `sums[k] = v[0] + ... + v[k]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixSums([i64; LEVER_COUNT]);

impl PrefixSums {
    /// Accumulate lever values. Fails with `InvalidArgument` on overflow.
    pub fn from_values(values: [i64; LEVER_COUNT]) -> Result<Self> {
        let mut sums = [0i64; LEVER_COUNT];
        let mut total = 0i64;
        for (index, value) in values.iter().enumerate() {
            total = total
                .checked_add(*value)
                .ok_or_else(|| error::sum_overflow(index))?;
            sums[index] = total;
        }
        Ok(PrefixSums(sums))
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }
}

impl Index<usize> for PrefixSums {
    type Output = i64;

    fn index(&self, index: usize) -> &i64 {
        &self.0[index]
    }
}

/// Read every lever once, in index order, and return the running sums.
///
/// Stops at the first failing read; later levers are not touched.
pub fn compute_prefix_sums<A: Actuator + ?Sized>(actuator: &mut A) -> Result<PrefixSums> {
    let mut values = [0i64; LEVER_COUNT];
    for (index, slot) in values.iter_mut().enumerate() {
        *slot = actuator.get_lever(index)?;
    }
    tracing::debug!(?values, "levers read");
    PrefixSums::from_values(values)
}
