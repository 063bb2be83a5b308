//! Request/response entry point around the priority scheduler

use chrono::NaiveDateTime;

use super::dto::{ScheduleRequest, ScheduleResponse};
use crate::domain::{GraphError, PriorityScheduler, ScheduleOutcome, UrgencyPolicy};

/// Turns schedule requests into responses
///
/// Every outcome, including cycles and malformed batches, is folded into a
/// [`ScheduleResponse`]; callers never see an error from this type.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartScheduler {
    scheduler: PriorityScheduler,
}

impl SmartScheduler {
    pub fn new(policy: UrgencyPolicy) -> Self {
        Self {
            scheduler: PriorityScheduler::new(policy),
        }
    }

    pub fn policy(&self) -> &UrgencyPolicy {
        self.scheduler.policy()
    }

    /// Computes the full outcome, including cycle diagnostics
    pub fn plan(
        &self,
        request: &ScheduleRequest,
        now: NaiveDateTime,
    ) -> Result<ScheduleOutcome, GraphError> {
        self.scheduler.schedule(&request.tasks, now)
    }

    /// Computes a recommended execution order for the request
    pub fn generate_schedule(&self, request: &ScheduleRequest, now: NaiveDateTime) -> ScheduleResponse {
        Self::respond(&self.plan(request, now))
    }

    /// Converts a scheduling result into the response shape
    pub fn respond(result: &Result<ScheduleOutcome, GraphError>) -> ScheduleResponse {
        match result {
            Ok(ScheduleOutcome::Scheduled(schedule)) => ScheduleResponse::success(schedule.order()),
            Ok(ScheduleOutcome::Cycle(_)) => ScheduleResponse::cycle(),
            Err(e) => ScheduleResponse::failure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScheduleTask;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 25)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn simple_example_schedules_all_tasks() {
        let request = ScheduleRequest::new(vec![
            ScheduleTask::new("Design API", 5).due("2025-11-01"),
            ScheduleTask::new("Implement Backend", 12).due("2025-11-05").after("Design API"),
            ScheduleTask::new("Build Frontend", 10).due("2025-11-07").after("Design API"),
            ScheduleTask::new("End-to-End Test", 8)
                .due("2025-11-10")
                .after("Implement Backend")
                .after("Build Frontend"),
        ]);

        let response = SmartScheduler::default().generate_schedule(&request, now());

        assert!(response.is_success());
        assert_eq!(
            response.recommended_order,
            vec!["Design API", "Implement Backend", "Build Frontend", "End-to-End Test"]
        );
        assert_eq!(
            response.message,
            "Successfully scheduled 4 tasks based on dependencies, due dates, and estimated hours."
        );
    }

    #[test]
    fn cycle_returns_cycle_message() {
        let request = ScheduleRequest::new(vec![
            ScheduleTask::new("A", 1).after("B"),
            ScheduleTask::new("B", 1).after("A"),
        ]);

        let response = SmartScheduler::default().generate_schedule(&request, now());

        assert!(response.recommended_order.is_empty());
        assert_eq!(
            response.message,
            "Error: Circular dependency detected in tasks. Please review task dependencies."
        );
    }

    #[test]
    fn duplicate_titles_become_error_response() {
        let request = ScheduleRequest::new(vec![
            ScheduleTask::new("Same", 1),
            ScheduleTask::new("Same", 2),
        ]);

        let response = SmartScheduler::default().generate_schedule(&request, now());

        assert!(response.recommended_order.is_empty());
        assert_eq!(
            response.message,
            "Error generating schedule: Duplicate task title: Same"
        );
    }

    #[test]
    fn empty_request_succeeds_with_zero_tasks() {
        let response = SmartScheduler::default().generate_schedule(&ScheduleRequest::default(), now());
        assert!(response.recommended_order.is_empty());
        assert!(response.is_success());
        assert!(response.message.starts_with("Successfully scheduled 0 tasks"));
    }

    #[test]
    fn huge_day_weight_still_returns_a_response() {
        let request = ScheduleRequest::new(vec![
            ScheduleTask::new("A", 1).due("2025-11-04"),
            ScheduleTask::new("B", 1).due("2025-10-28"),
        ]);
        let scheduler = SmartScheduler::new(UrgencyPolicy {
            day_weight: i64::MAX / 2,
            undated_penalty: 10_000,
            effort_weight: 5,
        });

        let response = scheduler.generate_schedule(&request, now());

        assert!(response.is_success());
        assert_eq!(response.recommended_order, vec!["B", "A"]);
    }

    #[test]
    fn custom_policy_changes_tie_break() {
        let request = ScheduleRequest::new(vec![
            ScheduleTask::new("Soon", 1).due("2025-10-27"),
            ScheduleTask::new("Huge", 80),
        ]);

        let default_order = SmartScheduler::default()
            .generate_schedule(&request, now())
            .recommended_order;
        assert_eq!(default_order, vec!["Soon", "Huge"]);

        let effort_first = SmartScheduler::new(UrgencyPolicy {
            day_weight: 10,
            undated_penalty: 0,
            effort_weight: 5,
        });
        let order = effort_first.generate_schedule(&request, now()).recommended_order;
        assert_eq!(order, vec!["Huge", "Soon"]);
    }
}
