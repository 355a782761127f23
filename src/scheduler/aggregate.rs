//! Completion-record construction and averaged statistics.

use log::info;

use crate::error::ScheduleError;
use crate::models::{
    CompletionRecord, ExecutionInterval, Pid, ProcessDescriptor, RunResult, Timeline,
};

/// Collects intervals and completion records while a policy runs, then
/// folds them into a `RunResult`.
#[derive(Debug)]
pub(crate) struct RunRecorder {
    timeline: Timeline,
    records: Vec<CompletionRecord>,
    report_priority: bool,
}

impl RunRecorder {
    /// Creates a recorder. With `report_priority`, records copy the
    /// descriptor's priority.
    pub(crate) fn new(report_priority: bool) -> Self {
        Self {
            timeline: Timeline::new(),
            records: Vec::new(),
            report_priority,
        }
    }

    /// Appends an execution interval to the timeline.
    pub(crate) fn interval(&mut self, pid: &Pid, start: i64, end: i64) {
        self.timeline.push(ExecutionInterval::new(pid.clone(), start, end));
    }

    /// Marks `process` completed at `completion`.
    pub(crate) fn complete(&mut self, process: &ProcessDescriptor, completion: i64) {
        let turnaround = completion - process.arrival;
        let waiting = turnaround - process.burst;
        debug_assert!(waiting >= 0, "negative waiting time for {}", process.pid);

        self.records.push(CompletionRecord {
            pid: process.pid.clone(),
            arrival: process.arrival,
            burst: process.burst,
            priority: if self.report_priority {
                process.priority
            } else {
                None
            },
            completion,
            turnaround,
            waiting,
        });
    }

    /// Computes averages over the completed set.
    ///
    /// # Errors
    /// `EmptyInput` if nothing completed.
    pub(crate) fn finish(self) -> Result<RunResult, ScheduleError> {
        let count = self.records.len();
        // Widened: n turnarounds near i64::MAX must not wrap
        let total_tat: i128 = self.records.iter().map(|r| r.turnaround as i128).sum();
        let total_wt: i128 = self.records.iter().map(|r| r.waiting as i128).sum();

        let avg_tat = mean_rounded(total_tat, count)?;
        let avg_wt = mean_rounded(total_wt, count)?;
        info!(
            "simulated {} processes, makespan {}, avg_tat {}, avg_wt {}",
            count,
            self.timeline.makespan(),
            avg_tat,
            avg_wt
        );

        Ok(RunResult {
            processes: self.records,
            timeline: self.timeline,
            avg_tat,
            avg_wt,
            algorithm: None,
        })
    }
}

/// Arithmetic mean of `total` over `count` items, rounded to 2 decimals.
///
/// # Errors
/// `EmptyInput` if `count` is zero.
pub fn mean_rounded(total: i128, count: usize) -> Result<f64, ScheduleError> {
    if count == 0 {
        return Err(ScheduleError::EmptyInput);
    }
    Ok(round2(total as f64 / count as f64))
}

/// Rounds to 2 decimal places (half away from zero).
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_rounded() {
        assert_eq!(mean_rounded(25, 3).unwrap(), 8.33);
        assert_eq!(mean_rounded(13, 3).unwrap(), 4.33);
        assert_eq!(mean_rounded(6, 4).unwrap(), 1.5);
        assert_eq!(mean_rounded(0, 2).unwrap(), 0.0);
    }

    #[test]
    fn test_mean_of_nothing_is_error() {
        assert_eq!(mean_rounded(0, 0), Err(ScheduleError::EmptyInput));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(-1.0 / 3.0), -0.33);
        assert_eq!(round2(7.0), 7.0);
    }

    #[test]
    fn test_recorder_derives_statistics() {
        let p1 = ProcessDescriptor::new("P1", 0, 3).with_priority(4);
        let p2 = ProcessDescriptor::new("P2", 1, 2).with_priority(1);

        let mut rec = RunRecorder::new(false);
        rec.interval(&p1.pid, 0, 3);
        rec.complete(&p1, 3);
        rec.interval(&p2.pid, 3, 5);
        rec.complete(&p2, 5);
        let result = rec.finish().unwrap();

        let r2 = result.record_for(&"P2".into()).unwrap();
        assert_eq!(r2.turnaround, 4);
        assert_eq!(r2.waiting, 2);
        assert_eq!(r2.priority, None);
        assert_eq!(result.avg_tat, 3.5);
        assert_eq!(result.avg_wt, 1.0);
        assert_eq!(result.timeline.len(), 2);
    }

    #[test]
    fn test_recorder_reports_priority() {
        let p = ProcessDescriptor::new("P1", 0, 3).with_priority(4);
        let mut rec = RunRecorder::new(true);
        rec.interval(&p.pid, 0, 3);
        rec.complete(&p, 3);
        let result = rec.finish().unwrap();
        assert_eq!(result.processes[0].priority, Some(4));
    }

    #[test]
    fn test_totals_do_not_wrap() {
        let late = ProcessDescriptor::new("late", 0, i64::MAX - 1);
        let next = ProcessDescriptor::new("next", 0, 1);

        let mut rec = RunRecorder::new(false);
        rec.interval(&late.pid, 0, i64::MAX - 1);
        rec.complete(&late, i64::MAX - 1);
        rec.interval(&next.pid, i64::MAX - 1, i64::MAX);
        rec.complete(&next, i64::MAX);
        let result = rec.finish().unwrap();

        assert!(result.avg_tat > 4.0e18);
        assert!(result.avg_wt > 4.0e18);
    }

    #[test]
    fn test_empty_recorder_fails() {
        let rec = RunRecorder::new(false);
        assert_eq!(rec.finish(), Err(ScheduleError::EmptyInput));
    }
}
