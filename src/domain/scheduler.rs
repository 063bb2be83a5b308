//! Priority topological sorter
//!
//! Kahn's algorithm driven by a min-priority ready queue. Among tasks whose
//! prerequisites are all scheduled, the lowest urgency score goes first;
//! equal scores leave the queue in the order they entered it.

use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::graph::{DependencyGraph, GraphError};
use super::task::ScheduleTask;
use super::urgency::UrgencyPolicy;

/// A task waiting in the ready queue
#[derive(Debug, PartialEq, Eq)]
struct ReadyTask {
    score: i64,
    seq: u64,
    pos: usize,
}

impl Ord for ReadyTask {
    // Reversed so that `BinaryHeap` pops the lowest (score, seq) first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for ReadyTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One entry of a computed schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    /// Task title
    pub title: String,

    /// Urgency score the task was queued with
    pub score: i64,

    /// Position in which the task became ready (0 = first)
    pub ready_seq: u64,
}

/// A complete execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<ScheduledTask>,
}

impl Schedule {
    /// Returns the task titles in execution order
    pub fn order(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.title.clone()).collect()
    }

    /// Returns the scheduled entries with their scores
    pub fn entries(&self) -> &[ScheduledTask] {
        &self.entries
    }

    /// Returns the number of scheduled tasks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was scheduled
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the schedule, returning the titles in execution order
    pub fn into_order(self) -> Vec<String> {
        self.entries.into_iter().map(|e| e.title).collect()
    }
}

/// Why no order could be produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// How many tasks were emitted before the queue ran dry
    pub scheduled: usize,

    /// Tasks that never became ready, in input order
    pub unscheduled: Vec<String>,

    /// Dependency cycles blocking those tasks
    pub cycles: Vec<Vec<String>>,
}

/// Result of one scheduling pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// Every task was placed
    Scheduled(Schedule),

    /// At least one cycle kept some tasks from ever becoming ready
    Cycle(CycleReport),
}

impl ScheduleOutcome {
    /// Returns the schedule, if one was produced
    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            ScheduleOutcome::Scheduled(schedule) => Some(schedule),
            ScheduleOutcome::Cycle(_) => None,
        }
    }

    /// Returns true if a cycle prevented scheduling
    pub fn is_cycle(&self) -> bool {
        matches!(self, ScheduleOutcome::Cycle(_))
    }
}

/// Orders tasks by dependencies, breaking ties by urgency
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler {
    policy: UrgencyPolicy,
}

impl PriorityScheduler {
    pub fn new(policy: UrgencyPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &UrgencyPolicy {
        &self.policy
    }

    /// Builds the dependency graph and schedules the tasks
    pub fn schedule(
        &self,
        tasks: &[ScheduleTask],
        now: NaiveDateTime,
    ) -> Result<ScheduleOutcome, GraphError> {
        let graph = DependencyGraph::from_tasks(tasks)?;
        Ok(self.schedule_graph(&graph, tasks, now))
    }

    /// Schedules tasks over a graph built from the same task list
    ///
    /// `tasks[i]` must be the task at graph position `i`.
    pub fn schedule_graph(
        &self,
        graph: &DependencyGraph,
        tasks: &[ScheduleTask],
        now: NaiveDateTime,
    ) -> ScheduleOutcome {
        let mut in_degree = graph.in_degrees();
        let mut queue = BinaryHeap::with_capacity(graph.len());
        let mut next_seq: u64 = 0;

        let mut enqueue = |queue: &mut BinaryHeap<ReadyTask>, pos: usize| {
            queue.push(ReadyTask {
                score: self.policy.score(&tasks[pos], now),
                seq: next_seq,
                pos,
            });
            next_seq += 1;
        };

        for pos in graph.roots() {
            enqueue(&mut queue, pos);
        }

        let mut entries = Vec::with_capacity(graph.len());
        while let Some(ready) = queue.pop() {
            entries.push(ScheduledTask {
                title: graph.title(ready.pos).to_string(),
                score: ready.score,
                ready_seq: ready.seq,
            });

            for &succ in graph.successors(ready.pos) {
                in_degree[succ] -= 1;
                if in_degree[succ] == 0 {
                    enqueue(&mut queue, succ);
                }
            }
        }

        if entries.len() < graph.len() {
            let unscheduled = in_degree
                .iter()
                .enumerate()
                .filter(|(_, &degree)| degree > 0)
                .map(|(pos, _)| graph.title(pos).to_string())
                .collect();

            return ScheduleOutcome::Cycle(CycleReport {
                scheduled: entries.len(),
                unscheduled,
                cycles: graph.cycles(),
            });
        }

        ScheduleOutcome::Scheduled(Schedule { entries })
    }
}
