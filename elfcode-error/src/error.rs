//! The elfcode Error

use crate::ErrorKind;
use std::fmt;

/// Error raised by a level, an actuator call or the route around it.
///
/// The `trail` lists the operations the error passed through, innermost
/// first; [`Error::operation`] is the outermost one.
///
/// ```rust
/// use elfcode_error::{Error, ErrorKind};
///
/// let err = Error::new(ErrorKind::MoveBlocked, "actor would leave the room")
///     .with_operation("simulator::step")
///     .with_operation("sequencer::solve")
///     .with_context("step", "9");
///
/// assert_eq!(err.operation(), "sequencer::solve");
/// assert_eq!(err.trail(), &["simulator::step", "sequencer::solve"]);
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    trail: Vec<&'static str>,
    context: Vec<(&'static str, String)>,
    source: Option<anyhow::Error>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            trail: Vec::new(),
            context: Vec::new(),
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Outermost operation, or `""` if none was recorded
    pub fn operation(&self) -> &'static str {
        self.trail.last().copied().unwrap_or("")
    }

    pub fn trail(&self) -> &[&'static str] {
        &self.trail
    }

    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Push the operation the error is leaving through.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        self.trail.push(operation);
        self
    }

    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Attach the underlying error. Only conversions at the IO and JSON
    /// boundary set one.
    pub fn set_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(source.into());
        self
    }
}

// Single line for logs and the CLI:
// `MoveBlocked in sequencer::solve <- simulator::step [steps=7, x=0]: message`
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        for (i, op) in self.trail.iter().rev().enumerate() {
            f.write_str(if i == 0 { " in " } else { " <- " })?;
            f.write_str(op)?;
        }

        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            write!(f, " [{}]", pairs.join(", "))?;
        }

        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Error");
        s.field("kind", &self.kind)
            .field("message", &self.message)
            .field("trail", &self.trail)
            .field("context", &self.context);
        if let Some(source) = &self.source {
            s.field("source", source);
        }
        s.finish()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string()).set_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorKind::SerializationFailed, err.to_string())
            .with_context("line", err.line().to_string())
            .with_context("column", err.column().to_string())
            .set_source(err)
    }
}

impl Error {
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn lever_out_of_range(index: usize, count: usize) -> Self {
        Self::new(
            ErrorKind::LeverOutOfRange,
            format!("lever {} out of range 0..{}", index, count),
        )
        .with_context("index", index.to_string())
        .with_context("count", count.to_string())
    }

    /// `call` is the actuator method that failed
    pub fn actuator_failed(call: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::ActuatorFailed, reason).with_context("call", call)
    }
}
