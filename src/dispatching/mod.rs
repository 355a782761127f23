//! Selection rules and simulation clock for dispatching.
//!
//! Non-preemptive policies share one loop and differ only in how they pick
//! the next process from the ready set. That choice is a `SelectionRule`.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{rules, select_next};
//! use cpu_sched_sim::models::ProcessDescriptor;
//!
//! let pending = vec![
//!     ProcessDescriptor::new("P1", 0, 5),
//!     ProcessDescriptor::new("P2", 0, 2),
//!     ProcessDescriptor::new("P3", 0, 2),
//! ];
//! let refs: Vec<&ProcessDescriptor> = pending.iter().collect();
//!
//! // P2 and P3 tie on burst; the first one in pending order wins.
//! assert_eq!(select_next(&rules::ShortestBurst, &refs, &[0, 1, 2]), Some(1));
//! ```

mod clock;
pub mod rules;

pub use clock::SimulationClock;

use crate::models::ProcessDescriptor;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// A rule that ranks ready processes for non-preemptive dispatch.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a ready process.
    fn evaluate(&self, process: &ProcessDescriptor) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Whether completion records produced under this rule carry the
    /// process priority.
    fn reports_priority(&self) -> bool {
        false
    }
}

/// Picks the ready process with the lowest score.
///
/// `ready` holds positions into `pending`. Ties go to the candidate that
/// comes first in `ready`, which is the current pending order. Returns the
/// chosen position in `pending`, or `None` if `ready` is empty.
pub fn select_next<R>(rule: &R, pending: &[&ProcessDescriptor], ready: &[usize]) -> Option<usize>
where
    R: SelectionRule + ?Sized,
{
    let mut best: Option<(usize, RuleScore)> = None;
    for &idx in ready {
        let score = rule.evaluate(pending[idx]);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}
