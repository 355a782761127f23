//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival (ties keep input order).
//! 2. Run each to completion in that order, jumping over idle gaps.
//!
//! # Complexity
//! O(n log n).

use log::debug;

use super::aggregate::RunRecorder;
use crate::dispatching::SimulationClock;
use crate::error::ScheduleError;
use crate::models::{ProcessDescriptor, RunResult};

/// Runs FCFS. Records are in arrival order.
pub(crate) fn run(processes: &[ProcessDescriptor]) -> Result<RunResult, ScheduleError> {
    let mut order: Vec<&ProcessDescriptor> = processes.iter().collect();
    order.sort_by_key(|p| p.arrival);

    let mut clock = SimulationClock::new();
    let mut recorder = RunRecorder::new(false);

    for process in order {
        clock.skip_idle_to(process.arrival);
        let (start, end) = clock.run_for(process.burst);
        debug!("fcfs: dispatch {} at {start}, runs until {end}", process.pid);
        recorder.interval(&process.pid, start, end);
        recorder.complete(process, end);
    }

    recorder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pid;

    fn scenario() -> Vec<ProcessDescriptor> {
        vec![
            ProcessDescriptor::new("P1", 0, 6),
            ProcessDescriptor::new("P2", 1, 4),
            ProcessDescriptor::new("P3", 2, 2),
        ]
    }

    #[test]
    fn test_fcfs_scenario() {
        let result = run(&scenario()).unwrap();
        let completions: Vec<i64> = result.processes.iter().map(|r| r.completion).collect();
        let turnarounds: Vec<i64> = result.processes.iter().map(|r| r.turnaround).collect();
        let waitings: Vec<i64> = result.processes.iter().map(|r| r.waiting).collect();
        assert_eq!(completions, vec![6, 10, 12]);
        assert_eq!(turnarounds, vec![6, 9, 10]);
        assert_eq!(waitings, vec![0, 5, 8]);
        assert_eq!(result.avg_tat, 8.33);
        assert_eq!(result.avg_wt, 4.33);
    }

    #[test]
    fn test_fcfs_sorts_by_arrival() {
        let processes = vec![
            ProcessDescriptor::new("late", 5, 1),
            ProcessDescriptor::new("early", 0, 2),
        ];
        let result = run(&processes).unwrap();
        assert_eq!(result.processes[0].pid, Pid::from("early"));
        assert_eq!(result.processes[1].pid, Pid::from("late"));
    }

    #[test]
    fn test_fcfs_ties_keep_input_order() {
        let processes = vec![
            ProcessDescriptor::new("B", 0, 3),
            ProcessDescriptor::new("A", 0, 1),
            ProcessDescriptor::new("C", 0, 2),
        ];
        let result = run(&processes).unwrap();
        let order: Vec<String> = result.processes.iter().map(|r| r.pid.to_string()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 2),
            ProcessDescriptor::new("P2", 5, 3),
        ];
        let result = run(&processes).unwrap();
        let p2 = &result.timeline.intervals()[1];
        // No interval for the gap [2, 5)
        assert_eq!(result.timeline.len(), 2);
        assert_eq!((p2.start, p2.end), (5, 8));
        assert_eq!(result.processes[1].waiting, 0);
    }

    #[test]
    fn test_fcfs_deterministic() {
        let a = serde_json::to_string(&run(&scenario()).unwrap()).unwrap();
        let b = serde_json::to_string(&run(&scenario()).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
