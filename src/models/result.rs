//! Simulation output model.
//!
//! A `RunResult` holds one `CompletionRecord` per process, the execution
//! timeline, and the averaged statistics. Its JSON shape is the public wire
//! format:
//!
//! ```text
//! { "processes": [...], "timeline": [...], "avg_tat": 8.33, "avg_wt": 4.33 }
//! ```

use serde::{Deserialize, Serialize};

use super::{Pid, Timeline};
use crate::scheduler::Algorithm;

/// Per-process completion statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Process identifier.
    pub pid: Pid,
    /// Arrival time.
    pub arrival: i64,
    /// Burst time.
    pub burst: i64,
    /// Priority. Only populated by the priority policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// Time at which the last unit of burst finished.
    pub completion: i64,
    /// `completion - arrival`.
    pub turnaround: i64,
    /// `turnaround - burst`.
    pub waiting: i64,
}

/// Result of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Completion records, in policy-defined order.
    pub processes: Vec<CompletionRecord>,
    /// Execution intervals, in execution order.
    pub timeline: Timeline,
    /// Mean turnaround time, rounded to 2 decimals.
    pub avg_tat: f64,
    /// Mean waiting time, rounded to 2 decimals.
    pub avg_wt: f64,
    /// Algorithm that produced the run. Not part of the wire format.
    #[serde(skip)]
    pub algorithm: Option<Algorithm>,
}

impl RunResult {
    /// Finds the record for `pid`.
    pub fn record_for(&self, pid: &Pid) -> Option<&CompletionRecord> {
        self.processes.iter().find(|r| &r.pid == pid)
    }

    /// Process identifiers in result order.
    pub fn completion_order(&self) -> Vec<&Pid> {
        self.processes.iter().map(|r| &r.pid).collect()
    }

    /// Number of completed processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}
