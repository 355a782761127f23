//! Execution timeline (Gantt chart data).
//!
//! A timeline is the ordered list of CPU execution intervals produced by a
//! simulation run. Non-preemptive policies contribute one interval per
//! process; Round-Robin may contribute several.
//!
//! Idle gaps are never stored as intervals. They are derived on demand
//! (`idle_time`, `render_gantt`).

use serde::{Deserialize, Serialize};

use super::Pid;

/// A contiguous span during which one process held the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process that ran.
    pub pid: Pid,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive). Always greater than `start`.
    pub end: i64,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(pid: Pid, start: i64, end: i64) -> Self {
        debug_assert!(start < end, "empty execution interval for {pid}");
        Self { pid, start, end }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered sequence of execution intervals.
///
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    intervals: Vec<ExecutionInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval.
    pub fn push(&mut self, interval: ExecutionInterval) {
        debug_assert!(
            self.intervals
                .last()
                .is_none_or(|last| last.end <= interval.start),
            "overlapping interval for {}",
            interval.pid
        );
        self.intervals.push(interval);
    }

    /// All intervals in execution order.
    pub fn intervals(&self) -> &[ExecutionInterval] {
        &self.intervals
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether no interval was recorded.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Makespan: end of the last interval (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.intervals.last().map(|i| i.end).unwrap_or(0)
    }

    /// Intervals executed by `pid`.
    pub fn intervals_for(&self, pid: &Pid) -> Vec<&ExecutionInterval> {
        self.intervals.iter().filter(|i| &i.pid == pid).collect()
    }

    /// First time `pid` was dispatched.
    pub fn first_start(&self, pid: &Pid) -> Option<i64> {
        self.intervals.iter().find(|i| &i.pid == pid).map(|i| i.start)
    }

    /// Total CPU time spent on `pid`.
    pub fn cpu_time_for(&self, pid: &Pid) -> i64 {
        self.intervals_for(pid).iter().map(|i| i.duration()).sum()
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.intervals.iter().map(|i| i.duration()).sum()
    }

    /// Time the CPU sat idle between t=0 and the makespan.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// CPU utilization: busy time / makespan.
    ///
    /// Returns `None` if the makespan is zero.
    pub fn utilization(&self) -> Option<f64> {
        let horizon = self.makespan();
        if horizon <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / horizon as f64)
    }

    /// Number of dispatches that switched to a different process.
    pub fn context_switches(&self) -> usize {
        self.intervals
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid)
            .count()
    }

    /// Renders a two-line text Gantt chart.
    ///
    /// The first line holds one block per interval (idle gaps shown as
    /// `idle`); the second line marks the time at every block boundary.
    ///
    /// ```
    /// use cpu_sched_sim::models::{ExecutionInterval, Timeline};
    ///
    /// let mut t = Timeline::new();
    /// t.push(ExecutionInterval::new("P1".into(), 0, 6));
    /// t.push(ExecutionInterval::new("P2".into(), 6, 10));
    /// assert_eq!(t.render_gantt(), "| P1 | P2 |\n0    6    10");
    /// ```
    pub fn render_gantt(&self) -> String {
        let mut bar = String::from("|");
        let mut axis = String::new();
        let mut cursor = 0;

        for interval in &self.intervals {
            if interval.start > cursor {
                push_block(&mut bar, &mut axis, "idle", cursor);
            }
            push_block(&mut bar, &mut axis, &interval.pid.to_string(), interval.start);
            cursor = interval.end;
        }

        if self.intervals.is_empty() {
            return String::new();
        }
        push_marker(&mut axis, bar.len() - 1, cursor);
        format!("{bar}\n{axis}")
    }
}

fn push_block(bar: &mut String, axis: &mut String, label: &str, start: i64) {
    push_marker(axis, bar.len() - 1, start);
    bar.push(' ');
    bar.push_str(label);
    bar.push_str(" |");
}

fn push_marker(axis: &mut String, column: usize, time: i64) {
    if axis.len() < column {
        let pad = column - axis.len();
        axis.extend(std::iter::repeat_n(' ', pad));
    } else if !axis.is_empty() {
        axis.push(' ');
    }
    axis.push_str(&time.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.push(ExecutionInterval::new("P1".into(), 0, 2));
        t.push(ExecutionInterval::new("P2".into(), 2, 4));
        t.push(ExecutionInterval::new("P1".into(), 4, 5));
        t.push(ExecutionInterval::new("P3".into(), 8, 10));
        t
    }

    #[test]
    fn test_timeline_makespan_and_busy() {
        let t = sample_timeline();
        assert_eq!(t.makespan(), 10);
        assert_eq!(t.busy_time(), 7);
        assert_eq!(t.idle_time(), 3);
        assert!((t.utilization().unwrap() - 0.7).abs() < 1e-10);
    }

    #[test]
    fn test_intervals_for_pid() {
        let t = sample_timeline();
        let p1: Pid = "P1".into();
        assert_eq!(t.intervals_for(&p1).len(), 2);
        assert_eq!(t.cpu_time_for(&p1), 3);
        assert_eq!(t.first_start(&"P3".into()), Some(8));
        assert_eq!(t.first_start(&"P9".into()), None);
    }

    #[test]
    fn test_context_switches() {
        let t = sample_timeline();
        assert_eq!(t.context_switches(), 3);

        let mut same = Timeline::new();
        same.push(ExecutionInterval::new("P1".into(), 0, 2));
        same.push(ExecutionInterval::new("P1".into(), 2, 4));
        assert_eq!(same.context_switches(), 0);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
        assert!(t.utilization().is_none());
        assert_eq!(t.render_gantt(), "");
    }

    #[test]
    fn test_render_gantt_three_blocks() {
        let mut t = Timeline::new();
        t.push(ExecutionInterval::new("P1".into(), 0, 6));
        t.push(ExecutionInterval::new("P2".into(), 6, 10));
        t.push(ExecutionInterval::new("P3".into(), 10, 12));
        assert_eq!(t.render_gantt(), "| P1 | P2 | P3 |\n0    6    10   12");
    }

    #[test]
    fn test_render_gantt_idle_gap() {
        let mut t = Timeline::new();
        t.push(ExecutionInterval::new("A".into(), 2, 3));
        assert_eq!(t.render_gantt(), "| idle | A |\n0      2   3");
    }

    #[test]
    fn test_serializes_as_array() {
        let t = sample_timeline();
        let json = serde_json::to_value(&t).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["pid"], "P1");
        assert_eq!(json[0]["start"], 0);
        assert_eq!(json[0]["end"], 2);
    }
}
