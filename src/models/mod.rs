//! CPU scheduling domain models.
//!
//! Provides the data types that flow through every scheduler: the
//! immutable process input, the per-run working state, and the outcome
//! (finished processes plus execution timeline).
//!
//! # Lifecycle
//!
//! | Stage | Type | Owner |
//! |-------|------|-------|
//! | Input | `ProcessSpec` | Caller |
//! | Simulation | `ProcessState` | Active scheduler |
//! | Result | `SimulationOutcome` | Caller (read-only) |

mod outcome;
mod process;
mod timeline;

pub use outcome::SimulationOutcome;
pub use process::{ProcessSpec, ProcessState};
pub use timeline::{ExecutionSlice, Timeline};
