/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::{HashMap, HashSet, VecDeque};

use crate::alias::NodeId;
use crate::errors::GraphError;

/// Which of the four disjoint node sets a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Observed,
    Set,
    Selection,
    Latent,
}

/// A DAG over observed nodes, intervened (set) nodes, selection-diagram
/// S-nodes, and latent-confounder points (each with exactly two children).
/// Nodes are addressed by [`NodeId`]; there are no bidirectional references
/// between node records, only index-style lookups through the owning graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphCore {
    kinds: HashMap<NodeId, NodeKind>,
    children: HashMap<NodeId, Vec<NodeId>>,
    parents: HashMap<NodeId, Vec<NodeId>>,
}

impl GraphCore {
    /// Builds a graph from a node-kind list and a directed edge list,
    /// validating acyclicity and the structural invariants of each node
    /// kind. Cycles and unknown-node references are rejected here.
    pub fn new(nodes: Vec<(NodeId, NodeKind)>, edges: Vec<(NodeId, NodeId)>) -> Result<Self, GraphError> {
        let kinds: HashMap<NodeId, NodeKind> = nodes.into_iter().collect();
        let mut children: HashMap<NodeId, Vec<NodeId>> =
            kinds.keys().map(|n| (n.clone(), Vec::new())).collect();
        let mut parents: HashMap<NodeId, Vec<NodeId>> =
            kinds.keys().map(|n| (n.clone(), Vec::new())).collect();

        for (u, v) in edges {
            if !kinds.contains_key(&u) {
                return Err(GraphError::UnknownNode(u));
            }
            if !kinds.contains_key(&v) {
                return Err(GraphError::UnknownNode(v));
            }
            children.get_mut(&u).unwrap().push(v.clone());
            parents.get_mut(&v).unwrap().push(u);
        }

        let graph = GraphCore {
            kinds,
            children,
            parents,
        };
        graph.check_acyclic()?;
        graph.check_node_invariants()?;
        Ok(graph)
    }

    /// Builds a graph without re-checking node-kind invariants, used
    /// internally by [`GraphCore::do_intervene`] and
    /// [`GraphCore::selection_diagram`] whose outputs may transiently leave
    /// a latent point with fewer than two children.
    pub(crate) fn new_unchecked(
        kinds: HashMap<NodeId, NodeKind>,
        children: HashMap<NodeId, Vec<NodeId>>,
        parents: HashMap<NodeId, Vec<NodeId>>,
    ) -> Self {
        GraphCore {
            kinds,
            children,
            parents,
        }
    }

    fn check_acyclic(&self) -> Result<(), GraphError> {
        let mut indeg: HashMap<&NodeId, usize> =
            self.kinds.keys().map(|n| (n, self.parents[n].len())).collect();
        let mut queue: VecDeque<&NodeId> = indeg
            .iter()
            .filter(|(_, d)| **d == 0)
            .map(|(n, _)| *n)
            .collect();
        let mut visited = 0usize;
        while let Some(n) = queue.pop_front() {
            visited += 1;
            for c in &self.children[n] {
                let d = indeg.get_mut(c).unwrap();
                *d -= 1;
                if *d == 0 {
                    queue.push_back(c);
                }
            }
        }
        if visited != self.kinds.len() {
            return Err(GraphError::CycleDetected);
        }
        Ok(())
    }

    fn check_node_invariants(&self) -> Result<(), GraphError> {
        for (n, kind) in &self.kinds {
            match kind {
                NodeKind::Selection => {
                    if !self.parents[n].is_empty() || self.children[n].is_empty() {
                        return Err(GraphError::InvalidNodeKind(n.clone()));
                    }
                }
                NodeKind::Latent => {
                    if !self.parents[n].is_empty() || self.children[n].len() != 2 {
                        return Err(GraphError::InvalidNodeKind(n.clone()));
                    }
                }
                NodeKind::Set => {
                    if !self.parents[n].is_empty() {
                        return Err(GraphError::InvalidNodeKind(n.clone()));
                    }
                }
                NodeKind::Observed => {}
            }
        }
        Ok(())
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.kinds.keys()
    }

    pub fn kind(&self, n: &NodeId) -> Option<NodeKind> {
        self.kinds.get(n).copied()
    }

    pub fn contains(&self, n: &NodeId) -> bool {
        self.kinds.contains_key(n)
    }

    pub fn parents(&self, n: &NodeId) -> Result<&[NodeId], GraphError> {
        self.parents
            .get(n)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownNode(n.clone()))
    }

    pub fn children(&self, n: &NodeId) -> Result<&[NodeId], GraphError> {
        self.children
            .get(n)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownNode(n.clone()))
    }

    pub fn ancestors(&self, n: &NodeId) -> Result<HashSet<NodeId>, GraphError> {
        self.reachable(n, true)
    }

    pub fn descendants(&self, n: &NodeId) -> Result<HashSet<NodeId>, GraphError> {
        self.reachable(n, false)
    }

    fn reachable(&self, n: &NodeId, upward: bool) -> Result<HashSet<NodeId>, GraphError> {
        if !self.contains(n) {
            return Err(GraphError::UnknownNode(n.clone()));
        }
        let adj = if upward { &self.parents } else { &self.children };
        let mut seen = HashSet::new();
        let mut stack = vec![n.clone()];
        while let Some(cur) = stack.pop() {
            for next in &adj[&cur] {
                if seen.insert(next.clone()) {
                    stack.push(next.clone());
                }
            }
        }
        Ok(seen)
    }

    /// `descendants(a) ∩ ancestors(b) ∪ {b}`.
    pub fn causal_path(&self, a: &NodeId, b: &NodeId) -> Result<HashSet<NodeId>, GraphError> {
        let desc = self.descendants(a)?;
        let mut anc = self.ancestors(b)?;
        anc.retain(|n| desc.contains(n));
        anc.insert(b.clone());
        Ok(anc)
    }

    pub(crate) fn children_map(&self) -> &HashMap<NodeId, Vec<NodeId>> {
        &self.children
    }

    pub(crate) fn parents_map(&self) -> &HashMap<NodeId, Vec<NodeId>> {
        &self.parents
    }

    pub(crate) fn kinds_map(&self) -> &HashMap<NodeId, NodeKind> {
        &self.kinds
    }

    /// `do(n)`: moves `n` into the set-node kind, deletes its incoming
    /// observed edges, and removes every latent edge incident to it. The
    /// resulting graph may leave a latent point with fewer than two
    /// children; this is expected for an intervened graph and is never
    /// re-validated.
    pub fn do_intervene(&self, n: &NodeId) -> Result<GraphCore, GraphError> {
        if !self.contains(n) {
            return Err(GraphError::UnknownNode(n.clone()));
        }
        let mut kinds = self.kinds.clone();
        let mut children = self.children.clone();
        let mut parents = self.parents.clone();

        kinds.insert(n.clone(), NodeKind::Set);
        let old_parents = parents.insert(n.clone(), Vec::new()).unwrap_or_default();
        for p in old_parents {
            if let Some(c) = children.get_mut(&p) {
                c.retain(|x| x != n);
            }
        }
        Ok(GraphCore::new_unchecked(kinds, children, parents))
    }

    /// Restricts the graph to `keep`, dropping every other node and any
    /// edge incident to it.
    pub fn restricted_to(&self, keep: &HashSet<NodeId>) -> Result<GraphCore, GraphError> {
        let kinds: HashMap<NodeId, NodeKind> = keep
            .iter()
            .map(|n| {
                self.kind(n)
                    .map(|k| (n.clone(), k))
                    .ok_or_else(|| GraphError::UnknownNode(n.clone()))
            })
            .collect::<Result<_, _>>()?;
        let mut children: HashMap<NodeId, Vec<NodeId>> =
            keep.iter().map(|n| (n.clone(), Vec::new())).collect();
        let mut parents: HashMap<NodeId, Vec<NodeId>> =
            keep.iter().map(|n| (n.clone(), Vec::new())).collect();
        for n in keep {
            for c in &self.children[n] {
                if keep.contains(c) {
                    children.get_mut(n).unwrap().push(c.clone());
                    parents.get_mut(c).unwrap().push(n.clone());
                }
            }
        }
        GraphCore::new(kinds.into_iter().collect(), {
            let mut edges = Vec::new();
            for (n, cs) in &children {
                for c in cs {
                    edges.push((n.clone(), c.clone()));
                }
            }
            edges
        })
    }

    /// `selection_diagram(S)`: attaches one fresh S-node with a single
    /// outgoing edge to each node in `s`.
    pub fn selection_diagram(&self, s: &[NodeId]) -> Result<GraphCore, GraphError> {
        let mut kinds = self.kinds.clone();
        let mut children = self.children.clone();
        let mut parents = self.parents.clone();

        for node in s {
            if !self.contains(node) {
                return Err(GraphError::UnknownNode(node.clone()));
            }
            let s_node = NodeId::new(format!("S_{node}"));
            kinds.insert(s_node.clone(), NodeKind::Selection);
            children.insert(s_node.clone(), vec![node.clone()]);
            parents.insert(s_node.clone(), Vec::new());
            parents.get_mut(node).unwrap().push(s_node);
        }
        Ok(GraphCore::new_unchecked(kinds, children, parents))
    }
}
