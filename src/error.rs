//! Simulation error type.

use std::fmt;

/// Error reported by a simulation run.
///
/// Every error is fatal to the run: no partial result is produced, and
/// retrying with the same input yields the same error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// No process descriptors were supplied.
    EmptyInput,
    /// The algorithm selector is not one of `fcfs`, `sjf`, `rr`, `priority`.
    UnknownAlgorithm(String),
    /// A descriptor is missing a field or carries an invalid value.
    MalformedDescriptor {
        /// Position of the descriptor in the input.
        index: usize,
        /// Identifier of the descriptor, when one could be read.
        pid: Option<String>,
        /// What is wrong with it.
        reason: String,
    },
    /// The Round-Robin quantum is not positive.
    InvalidQuantum(i64),
}

/// Categories of simulation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`ScheduleError::EmptyInput`].
    EmptyInput,
    /// See [`ScheduleError::UnknownAlgorithm`].
    UnknownAlgorithm,
    /// See [`ScheduleError::MalformedDescriptor`].
    MalformedDescriptor,
    /// See [`ScheduleError::InvalidQuantum`].
    InvalidQuantum,
}

impl ScheduleError {
    /// Creates a malformed-descriptor error.
    pub fn malformed(index: usize, pid: Option<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDescriptor {
            index,
            pid,
            reason: reason.into(),
        }
    }

    /// Error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::UnknownAlgorithm(_) => ErrorKind::UnknownAlgorithm,
            Self::MalformedDescriptor { .. } => ErrorKind::MalformedDescriptor,
            Self::InvalidQuantum(_) => ErrorKind::InvalidQuantum,
        }
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => f.write_str("No processes provided"),
            Self::UnknownAlgorithm(name) => write!(f, "Algorithm {name} not implemented"),
            Self::MalformedDescriptor {
                index,
                pid: Some(pid),
                reason,
            } => write!(f, "Process '{pid}' (index {index}): {reason}"),
            Self::MalformedDescriptor {
                index,
                pid: None,
                reason,
            } => write!(f, "Process at index {index}: {reason}"),
            Self::InvalidQuantum(q) => write!(f, "Time quantum must be positive, got {q}"),
        }
    }
}

impl std::error::Error for ScheduleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ScheduleError::EmptyInput.to_string(), "No processes provided");
        assert_eq!(
            ScheduleError::UnknownAlgorithm("lottery".into()).to_string(),
            "Algorithm lottery not implemented"
        );
        assert_eq!(
            ScheduleError::malformed(2, Some("P3".into()), "burst must be positive").to_string(),
            "Process 'P3' (index 2): burst must be positive"
        );
        assert_eq!(
            ScheduleError::malformed(0, None, "missing field `pid`").to_string(),
            "Process at index 0: missing field `pid`"
        );
        assert_eq!(
            ScheduleError::InvalidQuantum(0).to_string(),
            "Time quantum must be positive, got 0"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(ScheduleError::EmptyInput.kind(), ErrorKind::EmptyInput);
        assert_eq!(
            ScheduleError::InvalidQuantum(-1).kind(),
            ErrorKind::InvalidQuantum
        );
        assert_eq!(
            ScheduleError::malformed(1, None, "x").kind(),
            ErrorKind::MalformedDescriptor
        );
    }
}
