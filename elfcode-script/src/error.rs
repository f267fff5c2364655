//! Script error types
//!
//! Re-exports elfcode-error and adds actuator-specific constructors.

pub use elfcode_error::{Error, ErrorKind, Result};

/// Create a LeverOutOfRange error
pub fn lever_out_of_range(index: usize, count: usize) -> Error {
    Error::lever_out_of_range(index, count)
}

/// Create a MoveBlocked error
pub fn move_blocked(direction: &'static str, steps: u32, x: i64, y: i64) -> Error {
    Error::new(
        ErrorKind::MoveBlocked,
        format!("moving {} by {} from ({}, {}) leaves the room", direction, steps, x, y),
    )
    .with_context("direction", direction)
    .with_context("steps", steps.to_string())
    .with_context("x", x.to_string())
    .with_context("y", y.to_string())
}

/// Create a CallbackRejected error
pub fn callback_rejected(reason: impl Into<String>) -> Error {
    Error::new(ErrorKind::CallbackRejected, reason)
}

/// Create an ActuatorFailed error
pub fn actuator_failed(call: impl Into<String>, reason: impl Into<String>) -> Error {
    Error::actuator_failed(call, reason)
}

/// Create an InvalidArgument error for an overflowing lever sum
pub fn sum_overflow(index: usize) -> Error {
    Error::invalid_argument(format!("prefix sum overflows at lever {}", index))
        .with_context("index", index.to_string())
}

/// Create a ConfigInvalid error
pub fn config_invalid(message: impl Into<String>) -> Error {
    Error::config_invalid(message)
}
