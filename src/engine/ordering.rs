// ==========================================
// GradPath Planner - Dependency Orderer
// ==========================================
// Kahn's algorithm over PrereqGraph.
// Queue seeding and dependent visits follow sorted code order, so the
// result is stable for a given graph.
// ==========================================

use crate::engine::error::{PlannerError, PlannerResult};
use crate::engine::graph::PrereqGraph;
use std::collections::{BTreeMap, VecDeque};
use tracing::{debug, instrument, warn};

pub struct DependencyOrderer;

impl DependencyOrderer {
    /// Compute one topological order of the graph.
    ///
    /// # Returns
    /// - `Ok(order)`: every node exactly once, prerequisites first
    /// - `Err(PlannerError::CycleDetected)`: the relation is not a DAG
    #[instrument(skip(graph), fields(nodes = graph.node_count()))]
    pub fn order(graph: &PrereqGraph) -> PlannerResult<Vec<String>> {
        let mut indegree: BTreeMap<&str, usize> = graph
            .nodes
            .iter()
            .map(|n| (n.as_str(), graph.prerequisites_of(n).len()))
            .collect();

        let mut queue: VecDeque<&str> = indegree
            .iter()
            .filter(|(_, d)| **d == 0)
            .map(|(n, _)| *n)
            .collect();

        let mut order: Vec<String> = Vec::with_capacity(graph.node_count());
        while let Some(node) = queue.pop_front() {
            order.push(node.to_string());
            for next in graph.dependents_of(node) {
                if let Some(d) = indegree.get_mut(next.as_str()) {
                    *d -= 1;
                    if *d == 0 {
                        queue.push_back(next.as_str());
                    }
                }
            }
        }

        if order.len() < graph.node_count() {
            let unresolved: Vec<String> = indegree
                .into_iter()
                .filter(|(_, d)| *d > 0)
                .map(|(n, _)| n.to_string())
                .collect();
            warn!(unresolved = ?unresolved, "prerequisite cycle detected");
            return Err(PlannerError::CycleDetected { unresolved });
        }

        debug!(ordered = order.len(), "dependency order computed");
        Ok(order)
    }
}
