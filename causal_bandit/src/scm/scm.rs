/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::{BTreeSet, HashMap};

use causal_bandit_rand::Rng;

use crate::alias::NodeId;
use crate::errors::{GraphError, SimError};
use crate::graph::GraphCore;
use crate::model::AssignmentModel;

/// Composition of per-node [`AssignmentModel`]s over a [`GraphCore`]:
/// ancestral topological sampling with optional intervention
/// substitutions.
#[derive(Debug, Clone)]
pub struct Scm {
    graph: GraphCore,
    models: HashMap<NodeId, AssignmentModel>,
}

impl Scm {
    pub fn new(graph: GraphCore, models: HashMap<NodeId, AssignmentModel>) -> Self {
        Scm { graph, models }
    }

    pub fn graph(&self) -> &GraphCore {
        &self.graph
    }

    pub fn models(&self) -> &HashMap<NodeId, AssignmentModel> {
        &self.models
    }

    /// Topologically sorts the DAG, then samples each node in order: an
    /// `Action` node pulls its value from `set_values` (a missing key is
    /// fatal), every other node samples conditionally on its
    /// already-sampled parents.
    pub fn sample(
        &self,
        rng: &mut impl Rng,
        set_values: &HashMap<NodeId, i64>,
    ) -> Result<HashMap<NodeId, i64>, SimError> {
        let order = self.topological_order()?;
        let mut assignment = HashMap::with_capacity(order.len());
        for node in order {
            let model = self
                .models
                .get(&node)
                .ok_or_else(|| GraphError::UnknownNode(node.clone()))?;
            let value = model.sample(&node, rng, &assignment, set_values.get(&node).copied())?;
            assignment.insert(node, value);
        }
        Ok(assignment)
    }

    /// Kahn's algorithm over a `BTreeSet` frontier so that ties among
    /// simultaneously-ready nodes break in a fixed (lexicographic) order —
    /// required for the simulator's reproducibility guarantee.
    fn topological_order(&self) -> Result<Vec<NodeId>, GraphError> {
        let mut indeg: HashMap<NodeId, usize> = HashMap::new();
        for n in self.graph.nodes() {
            indeg.insert(n.clone(), self.graph.parents(n)?.len());
        }
        let mut frontier: BTreeSet<NodeId> = indeg
            .iter()
            .filter(|(_, d)| **d == 0)
            .map(|(n, _)| n.clone())
            .collect();

        let mut order = Vec::with_capacity(indeg.len());
        while let Some(n) = frontier.iter().next().cloned() {
            frontier.remove(&n);
            order.push(n.clone());
            for c in self.graph.children(&n)? {
                let d = indeg.get_mut(c).expect("child present in indegree map");
                *d -= 1;
                if *d == 0 {
                    frontier.insert(c.clone());
                }
            }
        }
        if order.len() != indeg.len() {
            return Err(GraphError::CycleDetected);
        }
        Ok(order)
    }
}
