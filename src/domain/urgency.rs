//! Urgency scoring
//!
//! Maps a task to an integer score used only to order tasks that are ready
//! at the same time. Lower scores are scheduled first.
//!
//! ```text
//! score = max(0, days_until_due) * day_weight     (task has a parseable due date)
//!       = undated_penalty                         (no due date)
//! score -= estimated_hours * effort_weight
//! ```
//!
//! Overdue tasks clamp to the most urgent date bucket. The result has no
//! floor and may be negative. Arithmetic saturates at the `i64` bounds, so
//! extreme weights order tasks coarsely instead of overflowing.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::task::ScheduleTask;

/// Weights for the urgency score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrgencyPolicy {
    /// Score added per whole day until the due date
    pub day_weight: i64,

    /// Score given to tasks without a usable due date
    pub undated_penalty: i64,

    /// Score subtracted per estimated hour
    pub effort_weight: i64,
}

impl Default for UrgencyPolicy {
    fn default() -> Self {
        Self {
            day_weight: 10,
            undated_penalty: 10_000,
            effort_weight: 5,
        }
    }
}

impl UrgencyPolicy {
    /// Computes the urgency score of a task relative to `now`
    pub fn score(&self, task: &ScheduleTask, now: NaiveDateTime) -> i64 {
        let date_term = match days_until_due(task, now) {
            Some(days) => days.max(0).saturating_mul(self.day_weight),
            None => self.undated_penalty,
        };

        let effort_term = i64::from(task.estimated_hours).saturating_mul(self.effort_weight);
        date_term.saturating_sub(effort_term)
    }
}

/// Whole days from `now` until the task's due date, truncated toward zero
///
/// Negative when the task is overdue by at least a full day. `None` when the
/// task has no parseable due date.
pub fn days_until_due(task: &ScheduleTask, now: NaiveDateTime) -> Option<i64> {
    task.parsed_due_date()
        .map(|due| due.signed_duration_since(now).num_days())
}
