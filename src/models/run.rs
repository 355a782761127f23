//! Round-Robin working copy of a process.
//!
//! A `RunningProcess` owns a private clone of its descriptor plus the burst
//! time still to execute. It is the only mutable per-process state in the
//! crate; the caller's descriptors stay untouched.

use super::ProcessDescriptor;

/// Lifecycle of a simulated process.
///
/// `Pending → Ready → Running → {Ready | Completed}`. `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    /// Not yet arrived (or not yet admitted).
    Pending,
    /// Waiting in the ready queue.
    Ready,
    /// Currently holding the CPU.
    Running,
    /// All burst time consumed.
    Completed,
}

/// Mutable working copy used by preemptive simulation.
#[derive(Debug, Clone)]
pub struct RunningProcess {
    descriptor: ProcessDescriptor,
    remaining: i64,
    state: ProcessState,
}

impl RunningProcess {
    /// Creates a pending working copy with `remaining = burst`.
    pub fn new(descriptor: &ProcessDescriptor) -> Self {
        Self {
            remaining: descriptor.burst,
            descriptor: descriptor.clone(),
            state: ProcessState::Pending,
        }
    }

    /// The underlying descriptor.
    pub fn descriptor(&self) -> &ProcessDescriptor {
        &self.descriptor
    }

    /// Burst time not yet executed.
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ProcessState {
        self.state
    }

    /// Moves a pending or preempted process into the ready queue.
    pub fn admit(&mut self) {
        debug_assert!(matches!(
            self.state,
            ProcessState::Pending | ProcessState::Running
        ));
        self.state = ProcessState::Ready;
    }

    /// Runs the process for at most `quantum` units.
    ///
    /// Returns the time actually consumed, `min(quantum, remaining)`. The
    /// process ends up `Completed` once `remaining` hits zero, otherwise it
    /// stays `Running` until re-admitted.
    pub fn execute(&mut self, quantum: i64) -> i64 {
        debug_assert_eq!(self.state, ProcessState::Ready);
        let slice = quantum.min(self.remaining);
        self.remaining -= slice;
        self.state = if self.remaining == 0 {
            ProcessState::Completed
        } else {
            ProcessState::Running
        };
        slice
    }

    /// Whether all burst time has been consumed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state == ProcessState::Completed
    }
}
