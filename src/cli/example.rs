//! Sample requests (`sched example`)

use anyhow::Result;

use super::output::Output;
use crate::domain::ScheduleTask;
use crate::service::ScheduleRequest;

/// Which sample task set to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExampleKind {
    /// Four tasks with a fork and a join
    Simple,
    /// Six tasks in a mostly linear chain
    Complex,
    /// Four independent tasks ordered only by due date
    Parallel,
}

impl ExampleKind {
    /// Builds the sample request
    pub fn request(self) -> ScheduleRequest {
        let tasks = match self {
            ExampleKind::Simple => vec![
                ScheduleTask::new("Design API", 5).due("2025-11-01"),
                ScheduleTask::new("Implement Backend", 12)
                    .due("2025-11-05")
                    .after("Design API"),
                ScheduleTask::new("Build Frontend", 10)
                    .due("2025-11-07")
                    .after("Design API"),
                ScheduleTask::new("End-to-End Test", 8)
                    .due("2025-11-10")
                    .after("Implement Backend")
                    .after("Build Frontend"),
            ],
            ExampleKind::Complex => vec![
                ScheduleTask::new("Setup Database", 4).due("2025-11-01"),
                ScheduleTask::new("Create User Model", 3)
                    .due("2025-11-02")
                    .after("Setup Database"),
                ScheduleTask::new("Create Auth Service", 8)
                    .due("2025-11-03")
                    .after("Create User Model"),
                ScheduleTask::new("Build Login Page", 6)
                    .due("2025-11-04")
                    .after("Create Auth Service"),
                ScheduleTask::new("Write Tests", 10)
                    .due("2025-11-05")
                    .after("Create Auth Service"),
                ScheduleTask::new("Deploy", 5)
                    .due("2025-11-06")
                    .after("Build Login Page")
                    .after("Write Tests"),
            ],
            ExampleKind::Parallel => vec![
                ScheduleTask::new("Research Competitors", 8).due("2025-11-15"),
                ScheduleTask::new("Design Logo", 6).due("2025-11-10"),
                ScheduleTask::new("Write Documentation", 12).due("2025-11-20"),
                ScheduleTask::new("Create Marketing Plan", 10).due("2025-11-12"),
            ],
        };

        ScheduleRequest::new(tasks)
    }
}

/// Prints a sample request document
pub fn run(output: &Output, kind: ExampleKind) -> Result<()> {
    let request = kind.request();
    output.verbose_ctx("example", &format!("{:?}: {} tasks", kind, request.tasks.len()));
    output.data(&request);
    Ok(())
}
