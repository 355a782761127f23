//! Scheduling policies and the simulation entry point.
//!
//! # Policies
//!
//! | Algorithm | Preemptive | Selection | Record order |
//! |-----------|-----------|-----------|--------------|
//! | FCFS | no | earliest arrival | arrival |
//! | SJF | no | shortest burst | completion |
//! | RR | yes (quantum) | FIFO queue | completion |
//! | Priority | no | lowest priority value | completion |
//!
//! Every policy is a pure function of its input: descriptors are borrowed,
//! working state is private to the run, and nothing survives the call.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5: CPU Scheduling

mod aggregate;
mod fcfs;
mod kpi;
mod nonpreemptive;
mod round_robin;

pub use aggregate::{mean_rounded, round2};
pub use kpi::RunKpi;
pub use round_robin::RequeueOrder;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dispatching::rules::{HighestPriority, ShortestBurst};
use crate::error::ScheduleError;
use crate::models::{ProcessDescriptor, RunResult};
use crate::validation::check_input;

/// Default Round-Robin time quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[serde(rename = "fcfs")]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    #[serde(rename = "sjf")]
    Sjf,
    /// Round-Robin with a fixed quantum.
    #[serde(rename = "rr")]
    RoundRobin,
    /// Priority, non-preemptive.
    #[serde(rename = "priority")]
    Priority,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
    ];

    /// Wire name (`fcfs`, `sjf`, `rr`, `priority`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::RoundRobin => "rr",
            Algorithm::Priority => "priority",
        }
    }

    /// Human-readable summary, as shown next to the algorithm picker.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => {
                "First-Come-First-Served: processes run to completion in arrival order"
            }
            Algorithm::Sjf => {
                "Shortest-Job-First: the ready process with the smallest burst runs next, \
                 without preemption"
            }
            Algorithm::RoundRobin => {
                "Round-Robin: ready processes take turns for at most one time quantum each"
            }
            Algorithm::Priority => {
                "Priority: the ready process with the lowest priority value runs next, \
                 without preemption"
            }
        }
    }

    /// Whether the algorithm can interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScheduleError::UnknownAlgorithm(s.to_string()))
    }
}

/// Simulation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Round-Robin time quantum. Must be positive.
    pub quantum: i64,
    /// Round-Robin requeue tie-break.
    pub requeue_order: RequeueOrder,
}

impl SimulationConfig {
    /// Creates the default configuration (quantum 2, arrivals first).
    pub fn new() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            requeue_order: RequeueOrder::ArrivalsFirst,
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the Round-Robin requeue order.
    pub fn with_requeue_order(mut self, order: RequeueOrder) -> Self {
        self.requeue_order = order;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one simulation.
///
/// Validates the input, then dispatches to the selected policy. The
/// descriptors are only borrowed; each run works on private copies.
///
/// # Errors
/// - `EmptyInput` if `processes` is empty
/// - `MalformedDescriptor` for a negative arrival, non-positive burst,
///   duplicate pid, (for `Priority`) a missing priority, or a workload
///   whose schedule would end past `i64::MAX`
/// - `InvalidQuantum` for a non-positive quantum under `RoundRobin`
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::ProcessDescriptor;
/// use cpu_sched_sim::scheduler::{simulate, Algorithm, SimulationConfig};
///
/// let processes = vec![
///     ProcessDescriptor::new("P1", 0, 6),
///     ProcessDescriptor::new("P2", 1, 4),
///     ProcessDescriptor::new("P3", 2, 2),
/// ];
/// let result = simulate(&processes, Algorithm::Fcfs, &SimulationConfig::default()).unwrap();
/// assert_eq!(result.avg_tat, 8.33);
/// assert_eq!(result.avg_wt, 4.33);
/// ```
pub fn simulate(
    processes: &[ProcessDescriptor],
    algorithm: Algorithm,
    config: &SimulationConfig,
) -> Result<RunResult, ScheduleError> {
    check_input(processes, algorithm, config)?;

    let mut result = match algorithm {
        Algorithm::Fcfs => fcfs::run(processes),
        Algorithm::Sjf => nonpreemptive::run(&ShortestBurst, processes),
        Algorithm::RoundRobin => round_robin::run(processes, config.quantum, config.requeue_order),
        Algorithm::Priority => nonpreemptive::run(&HighestPriority, processes),
    }?;
    result.algorithm = Some(algorithm);
    Ok(result)
}

/// Reusable simulator bound to one configuration.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::ProcessDescriptor;
/// use cpu_sched_sim::scheduler::{Algorithm, Simulator};
///
/// let sim = Simulator::new().with_quantum(3);
/// let result = sim.run(&[ProcessDescriptor::new("P1", 0, 7)], Algorithm::RoundRobin).unwrap();
/// assert_eq!(result.timeline.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.config.quantum = quantum;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs one algorithm.
    pub fn run(
        &self,
        processes: &[ProcessDescriptor],
        algorithm: Algorithm,
    ) -> Result<RunResult, ScheduleError> {
        simulate(processes, algorithm, &self.config)
    }

    /// Runs every algorithm on the same input, in `Algorithm::ALL` order.
    ///
    /// Priority is skipped when a descriptor lacks a priority.
    pub fn compare(
        &self,
        processes: &[ProcessDescriptor],
    ) -> Result<Vec<(Algorithm, RunResult)>, ScheduleError> {
        let has_priorities = processes.iter().all(|p| p.priority.is_some());
        Algorithm::ALL
            .into_iter()
            .filter(|&a| a != Algorithm::Priority || has_priorities)
            .map(|a| self.run(processes, a).map(|r| (a, r)))
            .collect()
    }
}
