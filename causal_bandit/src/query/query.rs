/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::HashMap;

use crate::alias::NodeId;
use crate::query::{Assignment, CptMap};

/// An atomic conditional query `P(Q | E)` evaluated against the CPT of
/// `node`. `q`/`e` map every variable that appears (the node itself and a
/// subset of its parents) to one of the three [`Assignment`] states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    node: NodeId,
    q: HashMap<NodeId, Assignment>,
    e: HashMap<NodeId, Assignment>,
}

impl Query {
    pub fn new(
        node: NodeId,
        q: HashMap<NodeId, Assignment>,
        e: HashMap<NodeId, Assignment>,
    ) -> Self {
        Query { node, q, e }
    }

    /// The structural alias requesting the raw numerator count rather than a
    /// ratio: `P(Q | {})`. Pair with [`Query::raw_count`], which returns the
    /// numerator directly instead of dividing by `count(E) = count({})`.
    pub fn count(node: NodeId, q: HashMap<NodeId, Assignment>) -> Self {
        Query {
            node,
            q,
            e: HashMap::new(),
        }
    }

    pub fn node(&self) -> &NodeId {
        &self.node
    }

    pub fn q(&self) -> &HashMap<NodeId, Assignment> {
        &self.q
    }

    pub fn e(&self) -> &HashMap<NodeId, Assignment> {
        &self.e
    }

    pub fn all_assigned(&self) -> bool {
        self.q.values().all(Assignment::is_assigned) && self.e.values().all(Assignment::is_assigned)
    }

    /// First unassigned-or-domain variable found, used by `over` to drive
    /// expansion one dimension at a time.
    pub fn first_unresolved(&self) -> Option<NodeId> {
        self.q
            .iter()
            .chain(self.e.iter())
            .find(|(_, a)| !a.is_assigned())
            .map(|(k, _)| k.clone())
    }

    /// Attaches a domain to `var`'s entry only while it is still
    /// `Unassigned`; a no-op if `var` is absent or already resolved.
    pub(crate) fn set_if_unassigned(&mut self, var: &NodeId, domain: crate::alias::Domain) {
        for slot in [self.q.get_mut(var), self.e.get_mut(var)].into_iter().flatten() {
            if matches!(slot, Assignment::Unassigned) {
                *slot = Assignment::Domain(domain.clone());
            }
        }
    }

    /// Rewrites `var`'s entry in `q`/`e` if present; a no-op otherwise, per
    /// the query algebra's idempotence/no-op invariant.
    pub fn assign_one(&mut self, var: &NodeId, value: Assignment) {
        if let Some(slot) = self.q.get_mut(var) {
            *slot = value.clone();
        }
        if let Some(slot) = self.e.get_mut(var) {
            *slot = value;
        }
    }

    /// Evaluates `count(Q ∪ E) / count(E)` against `node`'s CPT. Requires
    /// every variable to be [`Assignment::Assigned`]; returns `None` when the
    /// denominator count is zero ("undefined").
    pub fn evaluate(&self, cpts: &CptMap) -> Option<f64> {
        let cpt = cpts.get(&self.node)?;

        let mut full: HashMap<NodeId, i64> = HashMap::new();
        for (k, a) in self.e.iter().chain(self.q.iter()) {
            full.insert(k.clone(), a.value()?);
        }
        let mut given: HashMap<NodeId, i64> = HashMap::new();
        for (k, a) in self.e.iter() {
            given.insert(k.clone(), a.value()?);
        }

        let denom = cpt.lookup(&given) as f64;
        if denom == 0.0 {
            return None;
        }
        let numer = cpt.lookup(&full) as f64;
        Some(numer / denom)
    }

    /// Evaluates the raw numerator `count(Q ∪ E)` against `node`'s CPT,
    /// skipping the `count(E)` division — the evaluator for a [`Query`]
    /// built via [`Query::count`], or for any query where the algebra wants
    /// a bare count rather than a probability. Requires every variable to be
    /// [`Assignment::Assigned`].
    pub fn raw_count(&self, cpts: &CptMap) -> Option<f64> {
        let cpt = cpts.get(&self.node)?;

        let mut full: HashMap<NodeId, i64> = HashMap::new();
        for (k, a) in self.e.iter().chain(self.q.iter()) {
            full.insert(k.clone(), a.value()?);
        }
        Some(cpt.lookup(&full) as f64)
    }
}
