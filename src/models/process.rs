//! Process descriptor model.
//!
//! A process descriptor is the input entity of a simulation run: an
//! identifier, an arrival time, a CPU burst and an optional priority.
//! Descriptors carry no behavior and are never mutated by a policy.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque process identifier.
///
/// Accepts either an integer or a string on the wire, and serializes back
/// in the same shape it was given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pid {
    /// Numeric identifier (e.g. `3`).
    Number(i64),
    /// Textual identifier (e.g. `"P1"`).
    Name(String),
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pid::Number(n) => write!(f, "{n}"),
            Pid::Name(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Pid {
    fn from(s: &str) -> Self {
        Pid::Name(s.to_string())
    }
}

impl From<String> for Pid {
    fn from(s: String) -> Self {
        Pid::Name(s)
    }
}

impl From<i64> for Pid {
    fn from(n: i64) -> Self {
        Pid::Number(n)
    }
}

/// A process to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique process identifier.
    pub pid: Pid,
    /// Arrival time. Must be non-negative.
    pub arrival: i64,
    /// Total CPU time required. Must be positive.
    pub burst: i64,
    /// Scheduling priority (lower = more important). Only read by the
    /// priority policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl ProcessDescriptor {
    /// Creates a descriptor without a priority.
    pub fn new(pid: impl Into<Pid>, arrival: i64, burst: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival <= time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_builder() {
        let p = ProcessDescriptor::new("P1", 3, 7).with_priority(2);
        assert_eq!(p.pid, Pid::Name("P1".into()));
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 7);
        assert_eq!(p.priority, Some(2));
        assert!(!p.has_arrived(2));
        assert!(p.has_arrived(3));
    }

    #[test]
    fn test_pid_accepts_number_or_string() {
        let p: ProcessDescriptor =
            serde_json::from_str(r#"{"pid": 4, "arrival": 0, "burst": 1}"#).unwrap();
        assert_eq!(p.pid, Pid::Number(4));
        assert_eq!(p.pid.to_string(), "4");

        let p: ProcessDescriptor =
            serde_json::from_str(r#"{"pid": "P9", "arrival": 0, "burst": 1}"#).unwrap();
        assert_eq!(p.pid, Pid::Name("P9".into()));
        assert_eq!(p.pid.to_string(), "P9");
        assert_eq!(p.priority, None);
    }

    #[test]
    fn test_priority_omitted_when_absent() {
        let json = serde_json::to_value(ProcessDescriptor::new(1i64, 0, 2)).unwrap();
        assert!(json.get("priority").is_none());
        assert_eq!(json["pid"], 1);
    }
}
