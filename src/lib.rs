//! Smart Scheduler - dependency-aware task sequencing
//!
//! Given named tasks with effort estimates, optional due dates and
//! prerequisites, produces one execution order that respects every
//! prerequisite, or reports that a cycle makes ordering impossible.
//! Ties among ready tasks are broken by an urgency score.

pub mod domain;
pub mod service;
pub mod storage;
pub mod cli;

pub use domain::{PriorityScheduler, ScheduleOutcome, ScheduleTask, UrgencyPolicy};
pub use service::{ScheduleRequest, ScheduleResponse, SmartScheduler};
