/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::HashSet;

use crate::alias::NodeId;
use crate::errors::GraphError;
use crate::graph::GraphCore;

enum TripleKind {
    Chain,
    Fork,
    Collider,
}

impl GraphCore {
    /// Enumerates every simple path between `x` and `y` in the undirected
    /// skeleton; `x`/`y` are d-separated given `z` iff every such path is
    /// blocked.
    pub fn is_d_separated(
        &self,
        x: &NodeId,
        y: &NodeId,
        z: &HashSet<NodeId>,
    ) -> Result<bool, GraphError> {
        if !self.contains(x) {
            return Err(GraphError::UnknownNode(x.clone()));
        }
        if !self.contains(y) {
            return Err(GraphError::UnknownNode(y.clone()));
        }
        for path in self.all_simple_paths_skeleton(x, y) {
            if !self.path_blocked(&path, z)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn undirected_neighbors(&self, n: &NodeId) -> Vec<NodeId> {
        let mut v = self.children_map()[n].clone();
        v.extend(self.parents_map()[n].iter().cloned());
        v
    }

    fn all_simple_paths_skeleton(&self, x: &NodeId, y: &NodeId) -> Vec<Vec<NodeId>> {
        let mut results = Vec::new();
        let mut visited = HashSet::new();
        visited.insert(x.clone());
        self.dfs_paths(x, y, &mut visited, &mut vec![x.clone()], &mut results);
        results
    }

    fn dfs_paths(
        &self,
        cur: &NodeId,
        target: &NodeId,
        visited: &mut HashSet<NodeId>,
        path: &mut Vec<NodeId>,
        out: &mut Vec<Vec<NodeId>>,
    ) {
        if cur == target {
            out.push(path.clone());
            return;
        }
        for next in self.undirected_neighbors(cur) {
            if visited.insert(next.clone()) {
                path.push(next.clone());
                self.dfs_paths(&next, target, visited, path, out);
                path.pop();
                visited.remove(&next);
            }
        }
    }

    fn path_blocked(&self, path: &[NodeId], z: &HashSet<NodeId>) -> Result<bool, GraphError> {
        if path.len() < 3 {
            return Ok(false);
        }
        for w in path.windows(3) {
            let (a, b, c) = (&w[0], &w[1], &w[2]);
            match self.classify_triple(a, b, c)? {
                TripleKind::Chain | TripleKind::Fork => {
                    if z.contains(b) {
                        return Ok(true);
                    }
                }
                TripleKind::Collider => {
                    let mut closure = self.descendants(b)?;
                    closure.insert(b.clone());
                    if closure.is_disjoint(z) {
                        return Ok(true);
                    }
                }
            }
        }
        Ok(false)
    }

    fn classify_triple(&self, a: &NodeId, b: &NodeId, c: &NodeId) -> Result<TripleKind, GraphError> {
        let a_to_b = self.children_map()[a].contains(b);
        let b_to_a = self.children_map()[b].contains(a);
        let b_to_c = self.children_map()[b].contains(c);
        let c_to_b = self.children_map()[c].contains(b);
        match (a_to_b, b_to_a, b_to_c, c_to_b) {
            (true, false, true, false) => Ok(TripleKind::Chain),
            (false, true, false, true) => Ok(TripleKind::Chain),
            (false, true, true, false) => Ok(TripleKind::Fork),
            (true, false, false, true) => Ok(TripleKind::Collider),
            _ => Err(GraphError::UnclassifiableTriple(a.clone(), b.clone(), c.clone())),
        }
    }
}
