//! Dependency graph for tasks
//!
//! Built once per scheduling request from the flat task list. Edges point
//! from a prerequisite to the task that waits on it ("must complete before").
//! Dependency titles that do not name a task in the same request are dropped:
//! they refer to work outside this batch and impose no constraint here.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use thiserror::Error;

use super::task::ScheduleTask;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("Duplicate task title: {0}")]
    DuplicateTask(String),
}

/// Forward adjacency plus in-degree counts for one batch of tasks
///
/// Tasks are addressed by their position in the input list; titles map to
/// those positions through an index.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    /// Task titles in input order
    titles: Vec<String>,

    /// Map from title to position
    index: HashMap<String, usize>,

    /// For each task, the tasks that depend on it, in edge insertion order
    dependents: Vec<Vec<usize>>,

    /// For each task, the number of prerequisites found in this batch
    in_degree: Vec<usize>,

    /// Number of edges whose prerequisite exists in the batch
    edge_count: usize,
}

impl DependencyGraph {
    /// Builds the graph from a task list
    ///
    /// Fails only when two tasks share a title.
    pub fn from_tasks(tasks: &[ScheduleTask]) -> Result<Self, GraphError> {
        let mut graph = Self {
            titles: Vec::with_capacity(tasks.len()),
            index: HashMap::with_capacity(tasks.len()),
            dependents: vec![Vec::new(); tasks.len()],
            in_degree: vec![0; tasks.len()],
            edge_count: 0,
        };

        // First pass: register every title
        for (pos, task) in tasks.iter().enumerate() {
            if graph.index.insert(task.title.clone(), pos).is_some() {
                return Err(GraphError::DuplicateTask(task.title.clone()));
            }
            graph.titles.push(task.title.clone());
        }

        // Second pass: add edges for dependencies known to this batch
        for (pos, task) in tasks.iter().enumerate() {
            for dependency in &task.dependencies {
                if let Some(&dep_pos) = graph.index.get(dependency) {
                    graph.dependents[dep_pos].push(pos);
                    graph.in_degree[pos] += 1;
                    graph.edge_count += 1;
                }
            }
        }

        Ok(graph)
    }

    /// Returns the number of tasks in the graph
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Returns true if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Returns the number of edges between tasks of this batch
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the position of a task by title
    pub fn position(&self, title: &str) -> Option<usize> {
        self.index.get(title).copied()
    }

    /// Returns the title at a position
    pub fn title(&self, pos: usize) -> &str {
        &self.titles[pos]
    }

    /// Returns true if the graph contains the task
    pub fn contains(&self, title: &str) -> bool {
        self.index.contains_key(title)
    }

    /// Returns the positions of tasks waiting on the task at `pos`
    pub fn successors(&self, pos: usize) -> &[usize] {
        &self.dependents[pos]
    }

    /// Returns the titles of tasks that depend on `title`
    pub fn dependents(&self, title: &str) -> Vec<&str> {
        match self.position(title) {
            Some(pos) => self.dependents[pos]
                .iter()
                .map(|&succ| self.titles[succ].as_str())
                .collect(),
            None => vec![],
        }
    }

    /// Returns the number of in-batch prerequisites of `title`
    pub fn in_degree(&self, title: &str) -> Option<usize> {
        self.position(title).map(|pos| self.in_degree[pos])
    }

    /// Returns a working copy of all in-degrees, indexed by position
    pub fn in_degrees(&self) -> Vec<usize> {
        self.in_degree.clone()
    }

    /// Returns positions of tasks with no in-batch prerequisites, in input order
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.in_degree
            .iter()
            .enumerate()
            .filter(|(_, &degree)| degree == 0)
            .map(|(pos, _)| pos)
    }

    /// Returns the dependency cycles in the graph
    ///
    /// Each cycle is a strongly connected component with more than one task,
    /// or a single task that depends on itself. Members are listed in input
    /// order, and cycles are ordered by their first member.
    pub fn cycles(&self) -> Vec<Vec<String>> {
        let graph = self.to_digraph();

        let mut components: Vec<Vec<usize>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || component
                        .first()
                        .is_some_and(|&node| graph.contains_edge(node, node))
            })
            .map(|component| {
                let mut members: Vec<usize> = component.into_iter().map(|node| node.index()).collect();
                members.sort_unstable();
                members
            })
            .collect();

        components.sort_by_key(|members| members.first().copied());

        components
            .into_iter()
            .map(|members| members.into_iter().map(|pos| self.titles[pos].clone()).collect())
            .collect()
    }

    /// Builds a petgraph view where node index equals task position
    fn to_digraph(&self) -> DiGraph<(), ()> {
        let mut graph = DiGraph::with_capacity(self.len(), self.edge_count);
        for _ in 0..self.len() {
            graph.add_node(());
        }
        for (from, successors) in self.dependents.iter().enumerate() {
            for &to in successors {
                graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
            }
        }
        graph
    }
}
