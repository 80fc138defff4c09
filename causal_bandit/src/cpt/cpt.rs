/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::HashMap;

use crate::alias::{Count, Domain, NodeId};

/// Count table for node `X` keyed by the full assignment of `Pa(X) ∪ {X}`.
/// Every cell of the Cartesian product of domains is present from
/// construction onward; the key set never changes afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cpt {
    node: NodeId,
    parents: Vec<NodeId>,
    domains: HashMap<NodeId, Domain>,
    table: HashMap<Vec<i64>, Count>,
}

impl Cpt {
    pub fn new(node: NodeId, parents: Vec<NodeId>, domains: HashMap<NodeId, Domain>) -> Self {
        let order = Self::order(&node, &parents);
        let doms: Vec<&Domain> = order
            .iter()
            .map(|v| {
                domains
                    .get(v)
                    .unwrap_or_else(|| panic!("CPT constructed without a domain for '{v}'"))
            })
            .collect();

        let mut keys: Vec<Vec<i64>> = vec![Vec::new()];
        for d in doms {
            keys = keys
                .into_iter()
                .flat_map(|prefix| {
                    d.iter().map(move |val| {
                        let mut next = prefix.clone();
                        next.push(*val);
                        next
                    })
                })
                .collect();
        }

        let table = keys.into_iter().map(|k| (k, 0)).collect();
        Cpt {
            node,
            parents,
            domains,
            table,
        }
    }

    fn order(node: &NodeId, parents: &[NodeId]) -> Vec<NodeId> {
        std::iter::once(node.clone())
            .chain(parents.iter().cloned())
            .collect()
    }

    pub fn node(&self) -> &NodeId {
        &self.node
    }

    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    pub fn domains(&self) -> &HashMap<NodeId, Domain> {
        &self.domains
    }

    /// Increments the row that is the projection of `sample` onto
    /// `Pa(X) ∪ {X}`.
    pub fn add(&mut self, sample: &HashMap<NodeId, i64>) {
        let order = Self::order(&self.node, &self.parents);
        let key: Vec<i64> = order
            .iter()
            .map(|v| {
                *sample
                    .get(v)
                    .unwrap_or_else(|| panic!("sample missing value for CPT variable '{v}'"))
            })
            .collect();
        *self
            .table
            .get_mut(&key)
            .unwrap_or_else(|| panic!("key outside this CPT's Cartesian product")) += 1;
    }

    /// Returns the stored count if `partial` fully specifies every key
    /// variable, otherwise the sum over every row that is a superset of
    /// `partial`'s assignment.
    pub fn lookup(&self, partial: &HashMap<NodeId, i64>) -> Count {
        let order = Self::order(&self.node, &self.parents);
        self.table
            .iter()
            .filter(|(key, _)| {
                order
                    .iter()
                    .enumerate()
                    .all(|(i, v)| partial.get(v).map_or(true, |pv| *pv == key[i]))
            })
            .map(|(_, count)| *count)
            .sum()
    }

    /// Sums counts elementwise with `other`, in place. Both CPTs must share
    /// the same `(node, parents, domains)` schema.
    pub fn merge(&mut self, other: &Cpt) {
        debug_assert_eq!(self.node, other.node, "merging CPTs for different nodes");
        debug_assert_eq!(self.parents, other.parents, "merging CPTs with different parents");
        for (key, count) in other.table.iter() {
            *self.table.entry(key.clone()).or_insert(0) += count;
        }
    }

    /// Non-mutating counterpart of [`Cpt::merge`].
    pub fn merged(&self, other: &Cpt) -> Cpt {
        let mut out = self.clone();
        out.merge(other);
        out
    }

    /// Groups the table by parent assignment, returning one count vector
    /// per row ordered by `self.node`'s own domain values — the shape
    /// divergence computation needs to compare `P(node | Pa(node))` across
    /// two agents' CPTs for the same node.
    pub fn rows(&self) -> HashMap<Vec<i64>, Vec<Count>> {
        let node_domain = self
            .domains
            .get(&self.node)
            .expect("CPT always carries a domain for its own node");
        let index_of: HashMap<i64, usize> = node_domain
            .values()
            .iter()
            .enumerate()
            .map(|(i, v)| (*v, i))
            .collect();

        let mut rows: HashMap<Vec<i64>, Vec<Count>> = HashMap::new();
        for (key, count) in &self.table {
            let parent_assignment = key[1..].to_vec();
            let entry = rows
                .entry(parent_assignment)
                .or_insert_with(|| vec![0; node_domain.len()]);
            entry[index_of[&key[0]]] = *count;
        }
        rows
    }
}
