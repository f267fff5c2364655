//! Error kinds for elfcode operations

use std::fmt;

/// What went wrong.
///
/// Matching on the kind tells a caller where the failure came from: the
/// level file, the arguments, or the actuator refusing a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    // Level / arguments
    /// Level configuration is inconsistent
    ConfigInvalid,
    /// Argument outside what the operation accepts
    InvalidArgument,

    // Actuator
    /// Lever index outside the room's levers
    LeverOutOfRange,
    /// Movement would leave the room
    MoveBlocked,
    /// The munch callback is missing or was refused
    CallbackRejected,
    /// The actuator failed the call
    ActuatorFailed,

    // Files
    /// Level or record JSON could not be decoded
    SerializationFailed,
    FileNotFound,
    PermissionDenied,
    IoFailed,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ConfigInvalid => "ConfigInvalid",
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::LeverOutOfRange => "LeverOutOfRange",
            ErrorKind::MoveBlocked => "MoveBlocked",
            ErrorKind::CallbackRejected => "CallbackRejected",
            ErrorKind::ActuatorFailed => "ActuatorFailed",
            ErrorKind::SerializationFailed => "SerializationFailed",
            ErrorKind::FileNotFound => "FileNotFound",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::IoFailed => "IoFailed",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
