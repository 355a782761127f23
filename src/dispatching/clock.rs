//! Simulated CPU clock and ready-set logic.

use log::trace;

/// Simulation clock shared by all policies.
///
/// Tracks the current simulated time, decides which processes have
/// arrived, and jumps over idle gaps. Time never moves backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationClock {
    now: i64,
}

impl SimulationClock {
    /// Creates a clock at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock at the given time.
    pub fn at_time(now: i64) -> Self {
        Self { now }
    }

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> i64 {
        self.now
    }

    /// Positions (in iteration order) of the arrivals that are `<= now`.
    pub fn ready_indices<I>(&self, arrivals: I) -> Vec<usize>
    where
        I: IntoIterator<Item = i64>,
    {
        arrivals
            .into_iter()
            .enumerate()
            .filter(|&(_, arrival)| arrival <= self.now)
            .map(|(i, _)| i)
            .collect()
    }

    /// Jumps to `arrival` if it lies in the future.
    ///
    /// No interval is emitted for the gap. Returns `true` if time moved.
    pub fn skip_idle_to(&mut self, arrival: i64) -> bool {
        if arrival > self.now {
            trace!("cpu idle from {} to {}", self.now, arrival);
            self.now = arrival;
            true
        } else {
            false
        }
    }

    /// Jumps to the earliest of `arrivals` if nothing has arrived yet.
    ///
    /// Returns `true` if time moved. An empty iterator leaves the clock
    /// untouched.
    pub fn skip_idle<I>(&mut self, arrivals: I) -> bool
    where
        I: IntoIterator<Item = i64>,
    {
        match arrivals.into_iter().min() {
            Some(next) => self.skip_idle_to(next),
            None => false,
        }
    }

    /// Occupies the CPU for `duration` units.
    ///
    /// Returns the `(start, end)` of the execution span. Validated input
    /// keeps `end` within `i64::MAX`.
    pub fn run_for(&mut self, duration: i64) -> (i64, i64) {
        debug_assert!(duration > 0);
        debug_assert!(self.now.checked_add(duration).is_some(), "clock overflow");
        let start = self.now;
        self.now += duration;
        (start, self.now)
    }
}
