//! Dispatching rules and total-order selection for CPU scheduling.
//!
//! A dispatching rule maps each ready process to an integer key; the
//! process with the lowest key runs next. Ties are always broken by
//! `(arrival_time, input index)`, so every selection is reproducible.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, select_next};
//! use u_cpusched::models::{ProcessSpec, ProcessState};
//!
//! let states = ProcessState::from_specs(&[
//!     ProcessSpec::new("long", 0, 9),
//!     ProcessSpec::new("short", 0, 2),
//! ]);
//! let next = select_next(&rules::Spt, &states, |p| p.has_arrived(0));
//! assert_eq!(next, Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
pub mod rules;

pub use engine::{compare, select_next, sorted_candidates};

use crate::models::ProcessState;
use std::fmt::Debug;

/// Key returned by a dispatching rule.
///
/// Lower keys = higher priority (dispatched first).
pub type RuleKey = i64;

/// A dispatching rule that ranks ready processes.
///
/// # Key Convention
/// **Lower key = dispatched first.** Rules return smaller values for
/// processes that should run sooner.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "SRPT").
    fn name(&self) -> &'static str;

    /// Ranks a process; lower runs first.
    fn key(&self, process: &ProcessState) -> RuleKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
