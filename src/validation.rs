//! Input validation for simulation runs.
//!
//! Checks descriptor integrity before any policy runs. Detects:
//! - Empty input
//! - Negative arrival times
//! - Non-positive burst times
//! - Missing priorities (priority policy only)
//! - Duplicate process identifiers
//! - Non-positive Round-Robin quantum
//! - Workloads whose schedule would run past `i64::MAX`

use std::collections::HashSet;

use crate::error::ScheduleError;
use crate::models::ProcessDescriptor;
use crate::scheduler::{Algorithm, SimulationConfig};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ScheduleError>>;

/// Validates the input of a simulation run.
///
/// Checks:
/// 1. At least one descriptor is present
/// 2. Every `arrival` is non-negative
/// 3. Every `burst` is positive
/// 4. Every descriptor has a `priority` when `algorithm` is `Priority`
/// 5. No two descriptors share a pid
/// 6. The quantum is positive when `algorithm` is `RoundRobin`
/// 7. The schedule ends at or before `i64::MAX`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
/// Empty input short-circuits with a single `EmptyInput` error.
pub fn validate_input(
    processes: &[ProcessDescriptor],
    algorithm: Algorithm,
    config: &SimulationConfig,
) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ScheduleError::EmptyInput]);
    }

    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, p) in processes.iter().enumerate() {
        let pid = || Some(p.pid.to_string());

        if p.arrival < 0 {
            errors.push(ScheduleError::malformed(
                index,
                pid(),
                format!("arrival must be non-negative, got {}", p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ScheduleError::malformed(
                index,
                pid(),
                format!("burst must be positive, got {}", p.burst),
            ));
        }

        if algorithm == Algorithm::Priority && p.priority.is_none() {
            errors.push(ScheduleError::malformed(
                index,
                pid(),
                "priority is required for priority scheduling",
            ));
        }

        if !seen.insert(&p.pid) {
            errors.push(ScheduleError::malformed(index, pid(), "duplicate pid"));
        }
    }

    if algorithm == Algorithm::RoundRobin && config.quantum <= 0 {
        errors.push(ScheduleError::InvalidQuantum(config.quantum));
    }

    if errors.is_empty() {
        if let Some(err) = check_horizon(processes) {
            errors.push(err);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that the simulated clock cannot overflow.
///
/// Every policy keeps the CPU busy whenever a process is ready, so all of
/// them share the makespan of arrival-order dispatch. Accumulating that
/// makespan with checked arithmetic bounds every time the run produces.
fn check_horizon(processes: &[ProcessDescriptor]) -> Option<ScheduleError> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival);

    let mut end: i64 = 0;
    for index in order {
        let p = &processes[index];
        match end.max(p.arrival).checked_add(p.burst) {
            Some(next) => end = next,
            None => {
                return Some(ScheduleError::malformed(
                    index,
                    Some(p.pid.to_string()),
                    "schedule would run past the end of the time range",
                ));
            }
        }
    }
    None
}

/// Validates the input and returns the first issue found.
pub fn check_input(
    processes: &[ProcessDescriptor],
    algorithm: Algorithm,
    config: &SimulationConfig,
) -> Result<(), ScheduleError> {
    validate_input(processes, algorithm, config)
        .map_err(|errors| errors.into_iter().next().unwrap_or(ScheduleError::EmptyInput))
}
