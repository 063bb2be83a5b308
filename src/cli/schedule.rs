//! Schedule commands (schedule, validate)

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};

use super::output::Output;
use crate::domain::{parse_due_date, ScheduleOutcome};
use crate::service::{ScheduleRequest, SmartScheduler};
use crate::storage::{load_request, Config};

/// Exit status when no order could be produced
pub const EXIT_UNSCHEDULABLE: i32 = 2;

/// Resolves the clock value used for urgency scoring
pub fn resolve_now(now: Option<&str>) -> Result<NaiveDateTime> {
    match now {
        None => Ok(Local::now().naive_local()),
        Some(raw) => parse_due_date(raw).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid --now value '{}': expected a date like 2025-11-01 or 2025-11-01T09:00:00",
                raw
            )
        }),
    }
}

fn read_request(output: &Output, context: &str, input: &str) -> Result<ScheduleRequest> {
    let source = if input == "-" { "stdin" } else { input };
    output.verbose_ctx(context, &format!("Reading request from {}", source));

    let (request, format) =
        load_request(input).with_context(|| format!("Failed to load request from {}", source))?;

    output.verbose_ctx(
        context,
        &format!("Parsed {} request with {} tasks", format, request.tasks.len()),
    );
    Ok(request)
}

/// Computes and prints a recommended order
///
/// Exits with [`EXIT_UNSCHEDULABLE`] when no order could be produced.
pub fn schedule(
    output: &Output,
    config: &Config,
    input: &str,
    now: Option<&str>,
    explain: bool,
) -> Result<()> {
    let request = read_request(output, "schedule", input)?;
    request.validate().context("Invalid schedule request")?;

    for (task, dependency) in request.unknown_dependencies() {
        output.verbose_ctx(
            "schedule",
            &format!("Ignoring dependency '{}' of '{}': not in this batch", dependency, task),
        );
    }

    let now = resolve_now(now)?;
    let scheduler = SmartScheduler::new(config.policy());
    output.verbose_ctx("schedule", &format!("Scoring against {}", now));
    output.verbose_ctx("schedule", &format!("Policy: {:?}", scheduler.policy()));

    let result = scheduler.plan(&request, now);
    let response = SmartScheduler::respond(&result);

    if let Ok(ScheduleOutcome::Scheduled(schedule)) = &result {
        for entry in schedule.entries() {
            output.verbose_ctx(
                "schedule",
                &format!("{} (score {}, ready #{})", entry.title, entry.score, entry.ready_seq + 1),
            );
        }
    }
    if let Ok(ScheduleOutcome::Cycle(report)) = &result {
        output.verbose_ctx(
            "schedule",
            &format!(
                "Queue drained after {} of {} tasks",
                report.scheduled,
                request.tasks.len()
            ),
        );
    }

    if output.is_json() {
        output.data(&response);
    } else {
        println!("{}", response.message);

        match &result {
            Ok(ScheduleOutcome::Scheduled(schedule)) if !schedule.is_empty() => {
                println!();
                if explain {
                    println!("{:<4} {:<8} {:<6} TITLE", "#", "SCORE", "READY");
                    println!("{}", "-".repeat(60));
                    for (i, entry) in schedule.entries().iter().enumerate() {
                        println!(
                            "{:<4} {:<8} {:<6} {}",
                            i + 1,
                            entry.score,
                            entry.ready_seq + 1,
                            entry.title
                        );
                    }
                } else {
                    println!("Recommended order:");
                    for (i, title) in response.recommended_order.iter().enumerate() {
                        println!("  {}. {}", i + 1, title);
                    }
                }
            }
            Ok(ScheduleOutcome::Cycle(report)) => {
                println!();
                println!("Dependency cycles:");
                for cycle in &report.cycles {
                    println!("  {}", cycle.join(" <-> "));
                }
                println!();
                println!("Unschedulable tasks: {}", report.unscheduled.join(", "));
            }
            _ => {}
        }
    }

    if !matches!(result, Ok(ScheduleOutcome::Scheduled(_))) {
        std::process::exit(EXIT_UNSCHEDULABLE);
    }

    Ok(())
}

/// Checks a request without scheduling it
pub fn validate(output: &Output, input: &str) -> Result<()> {
    let request = read_request(output, "validate", input)?;
    request.validate().context("Invalid schedule request")?;

    let unknown = request.unknown_dependencies();
    for (task, dependency) in &unknown {
        output.warn(&format!(
            "'{}' depends on '{}', which is not in this request (ignored)",
            task, dependency
        ));
    }

    if output.is_json() {
        let items: Vec<_> = unknown
            .iter()
            .map(|(task, dependency)| {
                serde_json::json!({
                    "task": task,
                    "dependency": dependency,
                })
            })
            .collect();
        output.data(&serde_json::json!({
            "valid": true,
            "tasks": request.tasks.len(),
            "unknown_dependencies": items,
        }));
    } else {
        output.success(&format!("Request is valid: {} tasks", request.tasks.len()));
    }

    Ok(())
}
