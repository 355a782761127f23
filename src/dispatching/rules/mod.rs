//! Built-in selection rules.
//!
//! - **ShortestBurst**: Shortest-Job-First, non-preemptive
//! - **HighestPriority**: lowest priority number first
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionRule};
use crate::models::ProcessDescriptor;

/// Shortest burst first.
///
/// Minimizes average waiting time among non-preemptive policies, at the
/// cost of possible starvation of long jobs.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &ProcessDescriptor) -> RuleScore {
        process.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Lowest priority number first.
///
/// Processes without a priority rank last.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &ProcessDescriptor) -> RuleScore {
        process.priority.unwrap_or(RuleScore::MAX)
    }

    fn description(&self) -> &'static str {
        "Priority (lower value = higher priority)"
    }

    fn reports_priority(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_burst_score() {
        let p = ProcessDescriptor::new("P1", 0, 7);
        assert_eq!(ShortestBurst.evaluate(&p), 7);
        assert!(!ShortestBurst.reports_priority());
    }

    #[test]
    fn test_highest_priority_score() {
        let p = ProcessDescriptor::new("P1", 0, 7).with_priority(3);
        assert_eq!(HighestPriority.evaluate(&p), 3);
        assert!(HighestPriority.reports_priority());

        let unranked = ProcessDescriptor::new("P2", 0, 7);
        assert_eq!(HighestPriority.evaluate(&unranked), RuleScore::MAX);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(ShortestBurst.name(), "SJF");
        assert_eq!(HighestPriority.description(), "Priority (lower value = higher priority)");
    }
}
