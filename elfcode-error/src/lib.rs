//! # elfcode-error
//!
//! Error type shared by the elfcode crates.
//!
//! An [`Error`] is created once, where the failure happens, with an
//! [`ErrorKind`] and a message. Callers that pass it on only push their
//! operation onto the trail and add context; the kind never changes.
//!
//! ```rust
//! use elfcode_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::lever_out_of_range(7, 6)
//!         .with_operation("simulator::get_lever")
//!         .with_context("attempt", "1"))
//! }
//!
//! assert_eq!(example().unwrap_err().kind(), ErrorKind::LeverOutOfRange);
//! ```

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the elfcode Error
pub type Result<T> = std::result::Result<T, Error>;
