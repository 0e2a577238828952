//! Seeded random workload generation.
//!
//! Produces reproducible process sets for experiments and property tests.
//! The same generator settings and seed always yield the same workload.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedError};
use crate::models::ProcessSpec;

/// Random process-set generator.
///
/// Ranges are inclusive. Generated processes are sorted by arrival time
/// (so they are valid Round Robin input) and named `P1..Pn` in that order.
///
/// # Example
///
/// ```
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let generator = WorkloadGenerator::new(5, 42).with_priority_range(1, 3);
/// let a = generator.generate().unwrap();
/// let b = generator.generate().unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes to generate.
    pub count: usize,
    /// RNG seed.
    pub seed: u64,
    /// Inclusive arrival time range.
    pub arrival_range: (i64, i64),
    /// Inclusive burst time range.
    pub burst_range: (i64, i64),
    /// Inclusive priority range. `None` = no priorities.
    pub priority_range: Option<(i32, i32)>,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges
    /// (arrival 0..=20, burst 1..=10, no priorities).
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            arrival_range: (0, 20),
            burst_range: (1, 10),
            priority_range: None,
        }
    }

    /// Sets the inclusive arrival range.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.arrival_range = (min, max);
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst_range = (min, max);
        self
    }

    /// Assigns priorities drawn from the inclusive range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = Some((min, max));
        self
    }

    /// Generates the workload.
    ///
    /// # Errors
    /// `Configuration` if a range is inverted, arrivals can be negative,
    /// or bursts can be non-positive.
    pub fn generate(&self) -> Result<Vec<ProcessSpec>> {
        self.check_ranges()?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let (arrival_min, arrival_max) = self.arrival_range;
        let (burst_min, burst_max) = self.burst_range;

        let mut drawn: Vec<(i64, i64, Option<i32>)> = (0..self.count)
            .map(|_| {
                let arrival = rng.random_range(arrival_min..=arrival_max);
                let burst = rng.random_range(burst_min..=burst_max);
                let priority = self
                    .priority_range
                    .map(|(lo, hi)| rng.random_range(lo..=hi));
                (arrival, burst, priority)
            })
            .collect();
        drawn.sort_by_key(|&(arrival, _, _)| arrival);

        Ok(drawn
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                let mut spec = ProcessSpec::new(format!("P{}", i + 1), arrival, burst);
                spec.priority = priority;
                spec
            })
            .collect())
    }

    fn check_ranges(&self) -> Result<()> {
        let (arrival_min, arrival_max) = self.arrival_range;
        let (burst_min, burst_max) = self.burst_range;

        if arrival_min < 0 || arrival_min > arrival_max {
            return Err(SchedError::Configuration(format!(
                "invalid arrival range {arrival_min}..={arrival_max}"
            )));
        }
        if burst_min <= 0 || burst_min > burst_max {
            return Err(SchedError::Configuration(format!(
                "invalid burst range {burst_min}..={burst_max}"
            )));
        }
        if let Some((lo, hi)) = self.priority_range {
            if lo > hi {
                return Err(SchedError::Configuration(format!(
                    "invalid priority range {lo}..={hi}"
                )));
            }
        }
        Ok(())
    }
}
