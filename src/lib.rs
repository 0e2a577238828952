//! CPU scheduling simulator.
//!
//! Simulates the classic uniprocessor scheduling disciplines on a virtual
//! clock and reports per-process completion, turnaround, waiting, and
//! response times plus their averages.
//!
//! # Modules
//!
//! - **`models`**: `ProcessSpec` (input), `ProcessState` (per-run working
//!   copy), `Timeline`, `SimulationOutcome`
//! - **`scheduler`**: `Fcfs`, `SjfNonPreemptive`, `SjfPreemptive`,
//!   `RoundRobin`, `PriorityScheduler`, and the `Averages` calculator
//! - **`dispatching`**: Selection rules and the shared tie-breaking order
//! - **`validation`**: Input checks run before every simulation
//! - **`simulation`**: Serializable requests that pick an algorithm at runtime
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::ProcessSpec;
//! use u_cpusched::scheduler::{Fcfs, Scheduler};
//!
//! let processes = vec![
//!     ProcessSpec::new("P1", 5, 8),
//!     ProcessSpec::new("P2", 1, 4),
//!     ProcessSpec::new("P3", 2, 9),
//!     ProcessSpec::new("P4", 3, 5),
//! ];
//! let outcome = Fcfs::new().schedule(&processes).unwrap();
//! assert_eq!(outcome.completion_order(), vec!["P2", "P3", "P4", "P1"]);
//!
//! let averages = outcome.averages().unwrap();
//! assert_eq!(averages.avg_waiting_time, 7.0);
//! ```
//!
//! Presentation (tables, charts) is left to the caller; every result type
//! is `Serialize`.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::{Result, SchedError};
