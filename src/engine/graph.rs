// ==========================================
// GradPath Planner - Graph Builder
// ==========================================
// Input: required-prerequisite relation (course -> prereqs)
// Output: PrereqGraph with forward edges (prereq -> dependents),
//         reverse map (course -> prereqs) and the full node set
// ==========================================

use crate::domain::relation::RelationMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

static NO_NEIGHBOURS: BTreeSet<String> = BTreeSet::new();

// ==========================================
// PrereqGraph
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrereqGraph {
    /// Every code mentioned as a course or as a prerequisite
    pub nodes: BTreeSet<String>,
    /// prereq -> dependents
    pub edges: BTreeMap<String, BTreeSet<String>>,
    /// course -> prereqs
    pub prereqs: BTreeMap<String, BTreeSet<String>>,
}

impl PrereqGraph {
    pub fn dependents_of(&self, code: &str) -> &BTreeSet<String> {
        self.edges.get(code).unwrap_or(&NO_NEIGHBOURS)
    }

    pub fn prerequisites_of(&self, code: &str) -> &BTreeSet<String> {
        self.prereqs.get(code).unwrap_or(&NO_NEIGHBOURS)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ==========================================
// GraphBuilder
// ==========================================
pub struct GraphBuilder;

impl GraphBuilder {
    /// Build the bidirectional dependency graph.
    ///
    /// Never fails; an empty relation yields an empty graph.
    pub fn build(relation: &RelationMap) -> PrereqGraph {
        let mut graph = PrereqGraph {
            prereqs: relation.clone(),
            ..PrereqGraph::default()
        };

        for (course, reqs) in relation {
            graph.nodes.insert(course.clone());
            for req in reqs {
                graph.nodes.insert(req.clone());
                graph
                    .edges
                    .entry(req.clone())
                    .or_default()
                    .insert(course.clone());
            }
        }

        graph
    }
}
