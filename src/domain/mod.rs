//! Domain models for the scheduler
//!
//! Contains the scheduling algorithm without any I/O concerns.

mod task;
mod graph;
mod urgency;
mod scheduler;

pub use task::{parse_due_date, ScheduleTask};
pub use graph::{DependencyGraph, GraphError};
pub use urgency::{days_until_due, UrgencyPolicy};
pub use scheduler::{CycleReport, PriorityScheduler, Schedule, ScheduleOutcome, ScheduledTask};
