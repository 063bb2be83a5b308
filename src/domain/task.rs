//! Task domain model
//!
//! A schedulable task is identified by its title for the duration of one
//! request. It carries an effort estimate, an optional due date (kept as the
//! raw string the caller sent) and the titles of its prerequisites.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Date-time layouts accepted for due dates, tried in order
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Date-only layouts accepted for due dates (interpreted as midnight)
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// A task submitted for scheduling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTask {
    /// Unique key within one request
    pub title: String,

    /// Estimated effort in hours
    #[serde(default)]
    pub estimated_hours: u32,

    /// Due date as sent by the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Titles of tasks that must complete first
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl ScheduleTask {
    /// Creates a task with no due date and no dependencies
    pub fn new(title: impl Into<String>, estimated_hours: u32) -> Self {
        Self {
            title: title.into(),
            estimated_hours,
            due_date: None,
            dependencies: Vec::new(),
        }
    }

    /// Sets the due date
    pub fn due(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Adds a prerequisite by title
    pub fn after(mut self, dependency: impl Into<String>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }

    /// Returns the parsed due date, or `None` when absent or unparseable
    pub fn parsed_due_date(&self) -> Option<NaiveDateTime> {
        self.due_date.as_deref().and_then(parse_due_date)
    }
}

/// Parses a due date string into a local wall-clock timestamp
///
/// Date-only values resolve to midnight. RFC 3339 values with an offset are
/// converted to local time. Blank input is treated as no due date.
pub fn parse_due_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
