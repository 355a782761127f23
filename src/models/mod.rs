//! Simulation domain models.
//!
//! Provides the data types for CPU-scheduling simulation inputs and outputs.
//!
//! # Entities
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessDescriptor` | Input process (pid, arrival, burst, priority) |
//! | `RunningProcess` | Private Round-Robin working copy with remaining burst |
//! | `ExecutionInterval` / `Timeline` | Gantt chart data |
//! | `CompletionRecord` / `RunResult` | Per-process statistics and averages |

mod process;
mod result;
mod run;
mod timeline;

pub use process::{Pid, ProcessDescriptor};
pub use result::{CompletionRecord, RunResult};
pub use run::{ProcessState, RunningProcess};
pub use timeline::{ExecutionInterval, Timeline};
