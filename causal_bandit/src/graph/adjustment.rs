/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::HashSet;

use crate::alias::NodeId;
use crate::errors::GraphError;
use crate::graph::graph_core::NodeKind;
use crate::graph::GraphCore;

impl GraphCore {
    fn without_outgoing(&self, x: &NodeId) -> GraphCore {
        let mut children = self.children_map().clone();
        let mut parents = self.parents_map().clone();
        let removed = children.insert(x.clone(), Vec::new()).unwrap_or_default();
        for c in removed {
            if let Some(p) = parents.get_mut(&c) {
                p.retain(|n| n != x);
            }
        }
        GraphCore::new_unchecked(self.kinds_map().clone(), children, parents)
    }

    fn observed_candidates(&self, exclude: &[&NodeId]) -> Vec<NodeId> {
        self.nodes()
            .filter(|n| matches!(self.kind(n), Some(NodeKind::Observed)))
            .filter(|n| !exclude.contains(n))
            .cloned()
            .collect()
    }

    /// Standard backdoor criterion: `z` contains no descendant of `x`, and
    /// `x ⫫ y | z` once `x`'s outgoing edges are removed.
    pub fn is_valid_backdoor_adjustment_set(
        &self,
        x: &NodeId,
        y: &NodeId,
        z: &HashSet<NodeId>,
    ) -> Result<bool, GraphError> {
        let desc_x = self.descendants(x)?;
        if z.iter().any(|n| desc_x.contains(n)) {
            return Ok(false);
        }
        self.without_outgoing(x).is_d_separated(x, y, z)
    }

    /// Enumerates every valid backdoor adjustment set over the powerset of
    /// `observed \ {x, y} \ descendants(x)`.
    pub fn get_all_backdoor_adjustment_sets(
        &self,
        x: &NodeId,
        y: &NodeId,
    ) -> Result<Vec<HashSet<NodeId>>, GraphError> {
        let desc_x = self.descendants(x)?;
        let candidates: Vec<NodeId> = self
            .observed_candidates(&[x, y])
            .into_iter()
            .filter(|n| !desc_x.contains(n))
            .collect();

        let mut out = Vec::new();
        for subset in powerset(&candidates) {
            let set: HashSet<NodeId> = subset.into_iter().collect();
            if self.is_valid_backdoor_adjustment_set(x, y, &set)? {
                out.push(set);
            }
        }
        Ok(out)
    }

    /// Front-door validity: `z` intercepts every directed `x→y` path, no
    /// unblocked backdoor path runs from `x` to any member of `z`, and `x`
    /// is itself a valid backdoor adjustment for every `z → y` edge.
    fn is_valid_frontdoor_adjustment_set(
        &self,
        x: &NodeId,
        y: &NodeId,
        z: &HashSet<NodeId>,
    ) -> Result<bool, GraphError> {
        if !self.all_directed_paths_blocked(x, y, z) {
            return Ok(false);
        }
        let reduced = self.without_outgoing(x);
        for zi in z {
            if !reduced.is_d_separated(x, zi, &HashSet::new())? {
                return Ok(false);
            }
        }
        for zi in z {
            let xs: HashSet<NodeId> = std::iter::once(x.clone()).collect();
            if !self.is_valid_backdoor_adjustment_set(zi, y, &xs)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Enumerates every valid front-door adjustment set over the powerset
    /// of `observed \ {x, y}`.
    pub fn get_all_frontdoor_adjustment_sets(
        &self,
        x: &NodeId,
        y: &NodeId,
    ) -> Result<Vec<HashSet<NodeId>>, GraphError> {
        let candidates = self.observed_candidates(&[x, y]);
        let mut out = Vec::new();
        for subset in powerset(&candidates) {
            if subset.is_empty() {
                continue;
            }
            let set: HashSet<NodeId> = subset.into_iter().collect();
            if self.is_valid_frontdoor_adjustment_set(x, y, &set)? {
                out.push(set);
            }
        }
        Ok(out)
    }

    fn all_directed_paths_blocked(&self, x: &NodeId, y: &NodeId, z: &HashSet<NodeId>) -> bool {
        self.all_simple_directed_paths(x, y).iter().all(|p| {
            let interior = &p[1..p.len().saturating_sub(1)];
            interior.iter().any(|n| z.contains(n))
        })
    }

    pub(crate) fn all_simple_directed_paths(&self, x: &NodeId, y: &NodeId) -> Vec<Vec<NodeId>> {
        let mut out = Vec::new();
        let mut visited = HashSet::new();
        visited.insert(x.clone());
        self.dfs_directed(x, y, &mut visited, &mut vec![x.clone()], &mut out);
        out
    }

    fn dfs_directed(
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
        for next in self.children_map().get(cur).cloned().unwrap_or_default() {
            if visited.insert(next.clone()) {
                path.push(next.clone());
                self.dfs_directed(&next, target, visited, path, out);
                path.pop();
                visited.remove(&next);
            }
        }
    }
}

fn powerset(items: &[NodeId]) -> Vec<Vec<NodeId>> {
    let mut out = vec![Vec::new()];
    for item in items {
        let extended: Vec<Vec<NodeId>> = out
            .iter()
            .map(|s| {
                let mut s2 = s.clone();
                s2.push(item.clone());
                s2
            })
            .collect();
        out.extend(extended);
    }
    out
}
