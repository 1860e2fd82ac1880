//! CPU scheduling domain models.
//!
//! Provides the input and output types of a simulation run.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Caller-supplied unit of CPU work |
//! | `ProcessRow` | Unparsed process as typed into a table editor |
//! | `ExecutionInterval` | One stretch of CPU time (or idle) |
//! | `Schedule` | Contiguous timeline of intervals |

mod process;
mod schedule;

pub use process::{Process, ProcessRow, DEFAULT_PRIORITY};
pub use schedule::{ExecutionInterval, Schedule, IDLE_ID};
