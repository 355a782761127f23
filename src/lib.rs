//! Deterministic CPU-scheduling simulator.
//!
//! Computes execution timelines and turnaround/waiting statistics for a
//! static process workload under four classical disciplines: FCFS,
//! non-preemptive SJF, Round-Robin, and non-preemptive Priority. Nothing is
//! executed; the crate only models the decisions a scheduler would make.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessDescriptor`, `RunningProcess`,
//!   `ExecutionInterval`, `Timeline`, `CompletionRecord`, `RunResult`
//! - **`dispatching`**: Simulation clock and selection rules shared by the
//!   non-preemptive policies
//! - **`scheduler`**: The four policies, `simulate`, and run KPIs
//! - **`validation`**: Input integrity checks
//! - **`request`**: JSON request/response boundary
//! - **`workload`**: Random workload generation
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::models::ProcessDescriptor;
//! use cpu_sched_sim::scheduler::{simulate, Algorithm, SimulationConfig};
//!
//! let processes = vec![
//!     ProcessDescriptor::new("P1", 0, 6),
//!     ProcessDescriptor::new("P2", 1, 4),
//!     ProcessDescriptor::new("P3", 2, 2),
//! ];
//! let result = simulate(&processes, Algorithm::RoundRobin, &SimulationConfig::default()).unwrap();
//! assert_eq!(result.timeline.len(), 6);
//! println!("{}", result.timeline.render_gantt());
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod request;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{ErrorKind, ScheduleError};
pub use scheduler::{simulate, Algorithm, SimulationConfig};
