//! Random workload generation.
//!
//! Produces process sets shaped like the ones an interactive front end
//! seeds its input table with: pids `P1..Pn`, arrivals `0, 1, 2, ...`, and
//! bursts drawn uniformly from `1..=10`.

use rand::Rng;

use crate::models::ProcessDescriptor;

/// Smallest generated burst.
pub const MIN_BURST: i64 = 1;
/// Largest generated burst.
pub const MAX_BURST: i64 = 10;

/// Generates `count` processes without priorities.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::workload;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let processes = workload::generate(3, &mut rng);
/// assert_eq!(processes.len(), 3);
/// assert_eq!(processes[2].pid.to_string(), "P3");
/// assert_eq!(processes[2].arrival, 2);
/// ```
pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Vec<ProcessDescriptor> {
    (0..count)
        .map(|i| {
            ProcessDescriptor::new(
                format!("P{}", i + 1),
                i as i64,
                rng.random_range(MIN_BURST..=MAX_BURST),
            )
        })
        .collect()
}

/// Generates `count` processes with priorities drawn from `1..=count`.
pub fn generate_with_priorities<R: Rng>(count: usize, rng: &mut R) -> Vec<ProcessDescriptor> {
    let max_priority = count.max(1) as i64;
    generate(count, rng)
        .into_iter()
        .map(|p| {
            let priority = rng.random_range(1..=max_priority);
            p.with_priority(priority)
        })
        .collect()
}
