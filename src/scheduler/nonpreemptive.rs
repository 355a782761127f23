//! Non-preemptive rule-driven dispatch (SJF, Priority).
//!
//! # Algorithm
//!
//! 1. Start with every process pending, in input order.
//! 2. Compute the ready set (`arrival <= now`). If empty, jump to the
//!    earliest pending arrival.
//! 3. Pick the lowest-scoring ready process under the rule; ties go to the
//!    first one in pending order.
//! 4. Remove it from pending (order-preserving) and run it to completion.
//!
//! # Complexity
//! O(n²).

use log::debug;

use super::aggregate::RunRecorder;
use crate::dispatching::{select_next, SelectionRule, SimulationClock};
use crate::error::ScheduleError;
use crate::models::{ProcessDescriptor, RunResult};

/// Runs a non-preemptive policy. Records are in completion order.
pub(crate) fn run<R>(rule: &R, processes: &[ProcessDescriptor]) -> Result<RunResult, ScheduleError>
where
    R: SelectionRule + ?Sized,
{
    let mut pending: Vec<&ProcessDescriptor> = processes.iter().collect();
    let mut clock = SimulationClock::new();
    let mut recorder = RunRecorder::new(rule.reports_priority());

    while !pending.is_empty() {
        let ready = clock.ready_indices(pending.iter().map(|p| p.arrival));
        let Some(chosen) = select_next(rule, &pending, &ready) else {
            clock.skip_idle(pending.iter().map(|p| p.arrival));
            continue;
        };

        let process = pending.remove(chosen);
        let (start, end) = clock.run_for(process.burst);
        debug!(
            "{}: dispatch {} at {start} (score {}, {} ready), runs until {end}",
            rule.name(),
            process.pid,
            rule.evaluate(process),
            ready.len()
        );
        recorder.interval(&process.pid, start, end);
        recorder.complete(process, end);
    }

    recorder.finish()
}
