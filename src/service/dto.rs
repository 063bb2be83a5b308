//! Request and response shapes exchanged with the application layer

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::domain::ScheduleTask;

/// Status message for a successful schedule
pub fn success_message(count: usize) -> String {
    format!(
        "Successfully scheduled {} tasks based on dependencies, due dates, and estimated hours.",
        count
    )
}

/// Status message when a dependency cycle blocks scheduling
pub const CYCLE_MESSAGE: &str =
    "Error: Circular dependency detected in tasks. Please review task dependencies.";

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("All tasks must have a title (task #{index} is blank)")]
    EmptyTitle { index: usize },

    #[error("Task title used more than once: {0}")]
    DuplicateTitle(String),
}

/// A batch of tasks to schedule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleRequest {
    pub tasks: Vec<ScheduleTask>,
}

impl ScheduleRequest {
    pub fn new(tasks: Vec<ScheduleTask>) -> Self {
        Self { tasks }
    }

    /// Checks the request before it is handed to the scheduler
    ///
    /// Titles must be non-blank and unique. Dependencies on unknown titles
    /// are allowed; see [`ScheduleRequest::unknown_dependencies`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(self.tasks.len());
        for (index, task) in self.tasks.iter().enumerate() {
            if task.title.trim().is_empty() {
                return Err(ValidationError::EmptyTitle { index: index + 1 });
            }
            if !seen.insert(task.title.as_str()) {
                return Err(ValidationError::DuplicateTitle(task.title.clone()));
            }
        }
        Ok(())
    }

    /// Returns `(task, dependency)` pairs whose dependency is not in the batch
    pub fn unknown_dependencies(&self) -> Vec<(&str, &str)> {
        let titles: HashSet<&str> = self.tasks.iter().map(|t| t.title.as_str()).collect();

        self.tasks
            .iter()
            .flat_map(|task| {
                task.dependencies
                    .iter()
                    .filter(|dep| !titles.contains(dep.as_str()))
                    .map(move |dep| (task.title.as_str(), dep.as_str()))
            })
            .collect()
    }
}

/// The scheduler's answer to a request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    /// Task titles in execution order; empty when scheduling failed
    pub recommended_order: Vec<String>,

    /// Human-readable status
    pub message: String,

    /// Whether an order was produced; not part of the wire shape
    #[serde(skip)]
    scheduled: bool,
}

impl ScheduleResponse {
    pub fn success(order: Vec<String>) -> Self {
        let message = success_message(order.len());
        Self {
            recommended_order: order,
            message,
            scheduled: true,
        }
    }

    pub fn cycle() -> Self {
        Self {
            recommended_order: Vec::new(),
            message: CYCLE_MESSAGE.to_string(),
            scheduled: false,
        }
    }

    pub fn failure(detail: impl std::fmt::Display) -> Self {
        Self {
            recommended_order: Vec::new(),
            message: format!("Error generating schedule: {}", detail),
            scheduled: false,
        }
    }

    /// Returns true if the response was built from a successful schedule
    ///
    /// An empty request schedules zero tasks and still counts as success.
    pub fn is_success(&self) -> bool {
        self.scheduled
    }
}
