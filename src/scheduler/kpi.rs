//! Schedule quality metrics (KPIs).
//!
//! Computes CPU-scheduling performance indicators from a completed run,
//! beyond the two averages carried by `RunResult` itself.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | End of the last execution interval |
//! | Busy / Idle time | CPU time spent running / idling within the makespan |
//! | Utilization | busy / makespan |
//! | Throughput | processes / makespan |
//! | Max Waiting | Largest waiting time of any process |
//! | Avg Response | Mean of (first dispatch − arrival) |
//! | Context Switches | Adjacent intervals belonging to different processes |

use serde::{Deserialize, Serialize};

use super::aggregate::round2;
use crate::models::RunResult;

/// Run performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Time the CPU was executing a process.
    pub busy_time: i64,
    /// Time the CPU sat idle before the makespan.
    pub idle_time: i64,
    /// busy_time / makespan (0.0..1.0). Zero for an empty run.
    pub utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Largest waiting time of any process.
    pub max_waiting: i64,
    /// Mean response time (first dispatch − arrival), 2 decimals.
    pub avg_response: f64,
    /// Number of switches between different processes.
    pub context_switches: usize,
}

impl RunKpi {
    /// Computes KPIs from a run result.
    pub fn calculate(result: &RunResult) -> Self {
        let timeline = &result.timeline;
        let makespan = timeline.makespan();
        let count = result.processes.len();

        let mut total_response: i64 = 0;
        for record in &result.processes {
            if let Some(first) = timeline.first_start(&record.pid) {
                total_response += first - record.arrival;
            }
        }

        let throughput = if makespan > 0 {
            count as f64 / makespan as f64
        } else {
            0.0
        };

        let avg_response = if count == 0 {
            0.0
        } else {
            round2(total_response as f64 / count as f64)
        };

        Self {
            makespan,
            busy_time: timeline.busy_time(),
            idle_time: timeline.idle_time(),
            utilization: timeline.utilization().unwrap_or(0.0),
            throughput,
            max_waiting: result.processes.iter().map(|r| r.waiting).max().unwrap_or(0),
            avg_response,
            context_switches: timeline.context_switches(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessDescriptor;
    use crate::scheduler::{simulate, Algorithm, SimulationConfig};

    fn scenario() -> Vec<ProcessDescriptor> {
        vec![
            ProcessDescriptor::new("P1", 0, 6),
            ProcessDescriptor::new("P2", 1, 4),
            ProcessDescriptor::new("P3", 2, 2),
        ]
    }

    #[test]
    fn test_kpi_fcfs() {
        let result = simulate(&scenario(), Algorithm::Fcfs, &SimulationConfig::default()).unwrap();
        let kpi = RunKpi::calculate(&result);
        assert_eq!(kpi.makespan, 12);
        assert_eq!(kpi.busy_time, 12);
        assert_eq!(kpi.idle_time, 0);
        assert!((kpi.utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
        assert_eq!(kpi.max_waiting, 8);
        // Non-preemptive: response == waiting → (0 + 5 + 8) / 3
        assert_eq!(kpi.avg_response, 4.33);
        assert_eq!(kpi.context_switches, 2);
    }

    #[test]
    fn test_kpi_round_robin_response() {
        let result =
            simulate(&scenario(), Algorithm::RoundRobin, &SimulationConfig::default()).unwrap();
        let kpi = RunKpi::calculate(&result);
        // First dispatches: P1@0, P2@2, P3@4 → (0 + 1 + 2) / 3
        assert_eq!(kpi.avg_response, 1.0);
        assert_eq!(kpi.context_switches, 5);
    }

    #[test]
    fn test_kpi_idle_time() {
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 2),
            ProcessDescriptor::new("P2", 6, 2),
        ];
        let result = simulate(&processes, Algorithm::Fcfs, &SimulationConfig::default()).unwrap();
        let kpi = RunKpi::calculate(&result);
        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.idle_time, 4);
        assert!((kpi.utilization - 0.5).abs() < 1e-10);
    }
}
