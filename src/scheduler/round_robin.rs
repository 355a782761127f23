//! Round-Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Clone every descriptor into a `RunningProcess` and stable-sort the
//!    copies by arrival.
//! 2. Admit every copy with `arrival <= now` to the tail of a FIFO queue.
//!    If the queue is empty, jump to the next arrival.
//! 3. Run the head for `min(quantum, remaining)`.
//! 4. Admit processes that arrived during the slice, then either finalize
//!    the executed process or put it back at the tail, behind the new
//!    arrivals (`RequeueOrder::ArrivalsFirst`).
//!
//! # Complexity
//! O(n log n + Σburst / quantum).

use std::collections::VecDeque;
use std::iter::Peekable;
use std::vec;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::aggregate::RunRecorder;
use crate::dispatching::SimulationClock;
use crate::error::ScheduleError;
use crate::models::{ProcessDescriptor, RunResult, RunningProcess};

/// Order in which a preempted process and processes that arrived during
/// its slice re-enter the ready queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequeueOrder {
    /// New arrivals are queued before the preempted process.
    #[default]
    ArrivalsFirst,
    /// The preempted process is queued before new arrivals.
    PreemptedFirst,
}

type Incoming = Peekable<vec::IntoIter<RunningProcess>>;

/// Runs Round-Robin. Records are in completion order.
pub(crate) fn run(
    processes: &[ProcessDescriptor],
    quantum: i64,
    order: RequeueOrder,
) -> Result<RunResult, ScheduleError> {
    if quantum <= 0 {
        return Err(ScheduleError::InvalidQuantum(quantum));
    }

    let mut copies: Vec<RunningProcess> = processes.iter().map(RunningProcess::new).collect();
    copies.sort_by_key(|p| p.descriptor().arrival);
    let mut incoming = copies.into_iter().peekable();

    let mut ready: VecDeque<RunningProcess> = VecDeque::new();
    let mut clock = SimulationClock::new();
    let mut recorder = RunRecorder::new(false);

    loop {
        admit_arrivals(&mut incoming, &mut ready, clock.now());

        let Some(mut current) = ready.pop_front() else {
            match incoming.peek() {
                Some(next) => {
                    clock.skip_idle_to(next.descriptor().arrival);
                    continue;
                }
                None => break,
            }
        };

        let slice = current.execute(quantum);
        let (start, end) = clock.run_for(slice);
        debug!(
            "rr: dispatch {} at {start} for {slice}, {} remaining",
            current.descriptor().pid,
            current.remaining()
        );
        recorder.interval(&current.descriptor().pid, start, end);

        match order {
            RequeueOrder::ArrivalsFirst => {
                admit_arrivals(&mut incoming, &mut ready, clock.now());
                settle(current, &mut ready, &mut recorder, clock.now());
            }
            RequeueOrder::PreemptedFirst => {
                settle(current, &mut ready, &mut recorder, clock.now());
                admit_arrivals(&mut incoming, &mut ready, clock.now());
            }
        }
    }

    recorder.finish()
}

fn admit_arrivals(incoming: &mut Incoming, ready: &mut VecDeque<RunningProcess>, now: i64) {
    while let Some(mut process) = incoming.next_if(|p| p.descriptor().has_arrived(now)) {
        trace!("rr: admit {} at {now}", process.descriptor().pid);
        process.admit();
        ready.push_back(process);
    }
}

fn settle(
    mut process: RunningProcess,
    ready: &mut VecDeque<RunningProcess>,
    recorder: &mut RunRecorder,
    now: i64,
) {
    if process.is_finished() {
        recorder.complete(process.descriptor(), now);
    } else {
        process.admit();
        ready.push_back(process);
    }
}
