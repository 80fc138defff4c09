/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::{HashMap, HashSet};

use crate::alias::{Domain, NodeId};
use crate::errors::GraphError;
use crate::graph::GraphCore;
use crate::query::{Assignment, CptMap, Expr, Query};

/// The result of [`GraphCore::get_transport_formula`]: either the target
/// interventional distribution is directly identifiable by adjusting for
/// `z`, or it requires summing a backdoor-adjusted expression over the gap
/// between `z` and a shortest valid superset `z_star`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFormula {
    DirectAdjustment {
        x: NodeId,
        y: NodeId,
        z: HashSet<NodeId>,
    },
    BackdoorAdjustment {
        x: NodeId,
        y: NodeId,
        z: HashSet<NodeId>,
        z_star: HashSet<NodeId>,
    },
}

impl TransportFormula {
    /// Numerically evaluates `P(y = y_val | do(x = x_val), z)` against
    /// `cpts`. `x` need not be a direct parent of `y` (a mediator may sit
    /// between them), so `P(y | x, S*)` is read via [`conditional_from_cpts`]
    /// rather than a single CPT row. `DirectAdjustment` evaluates that one
    /// conditional directly; `BackdoorAdjustment` sums it, weighted by
    /// `P(z_star \ z | z)`, over every assignment of `z_star \ z` (the
    /// trivial case, `z_star == z`, collapses to one term with weight `1`,
    /// matching `Σ_{S*\Z} P(y|x,S*)·P(S*|Z)`'s reduction when `S* = Z`).
    /// `None` if a domain or a conditioning count is missing.
    pub fn evaluate_numeric(
        &self,
        graph: &GraphCore,
        cpts: &CptMap,
        x_val: i64,
        y_val: i64,
        given: &HashMap<NodeId, i64>,
    ) -> Result<Option<f64>, GraphError> {
        let (x, y, z, z_star) = match self {
            TransportFormula::DirectAdjustment { x, y, z } => (x, y, z, z),
            TransportFormula::BackdoorAdjustment { x, y, z, z_star } => (x, y, z, z_star),
        };

        let extra: Vec<NodeId> = z_star.iter().filter(|n| !z.contains(*n)).cloned().collect();
        let extra_domains: Option<Vec<Domain>> = extra
            .iter()
            .map(|n| cpts.get(n).and_then(|c| c.domains().get(n).cloned()))
            .collect();
        let Some(extra_domains) = extra_domains else {
            return Ok(None);
        };
        let assignments = if extra.is_empty() {
            vec![Vec::new()]
        } else {
            cartesian_product(&extra_domains)
        };

        let mut total = 0.0;
        for assignment in &assignments {
            let mut full_given: HashMap<NodeId, i64> = z
                .iter()
                .filter_map(|n| given.get(n).map(|v| (n.clone(), *v)))
                .collect();
            for (n, v) in extra.iter().zip(assignment.iter()) {
                full_given.insert(n.clone(), *v);
            }
            full_given.insert(x.clone(), x_val);

            let Some(p_y) = conditional_from_cpts(graph, cpts, y, y_val, &full_given)? else {
                continue;
            };

            let mut weight = 1.0;
            for (n, v) in extra.iter().zip(assignment.iter()) {
                let e: HashMap<NodeId, Assignment> = z
                    .iter()
                    .filter_map(|zn| given.get(zn).map(|val| (zn.clone(), Assignment::Assigned(*val))))
                    .collect();
                let q = Query::new(
                    n.clone(),
                    [(n.clone(), Assignment::Assigned(*v))].into_iter().collect(),
                    e,
                );
                let Some(p) = q.evaluate(cpts) else {
                    return Ok(None);
                };
                weight *= p;
            }
            total += p_y * weight;
        }
        Ok(Some(total))
    }
}

/// `P(target = target_val | given)`, recovered by Bayes' rule from
/// [`GraphCore::from_cpts`]'s ancestral-factor joint: evaluated once per
/// value in `target`'s own domain (every other variable in `given` held
/// fixed across every evaluation), then the `target_val` branch divided by
/// the sum of all of them. The shared ancestor factors `from_cpts` always
/// multiplies in cancel out of that ratio, leaving the true conditional
/// regardless of how many unbound ancestors it closed over.
pub fn conditional_from_cpts(
    graph: &GraphCore,
    cpts: &CptMap,
    target: &NodeId,
    target_val: i64,
    given: &HashMap<NodeId, i64>,
) -> Result<Option<f64>, GraphError> {
    let Some(domain) = cpts.get(target).and_then(|c| c.domains().get(target).cloned()) else {
        return Ok(None);
    };

    let mut numer = None;
    let mut denom = 0.0;
    for v in domain.iter() {
        let mut g = given.clone();
        g.insert(target.clone(), *v);
        let Some(joint) = graph.from_cpts(target, &g)?.evaluate(cpts) else {
            continue;
        };
        denom += joint;
        if *v == target_val {
            numer = Some(joint);
        }
    }
    let Some(numer) = numer else {
        return Ok(None);
    };
    if denom == 0.0 {
        return Ok(None);
    }
    Ok(Some(numer / denom))
}

/// Every combination of one value per domain, in domain order.
fn cartesian_product(domains: &[Domain]) -> Vec<Vec<i64>> {
    let mut rows: Vec<Vec<i64>> = vec![Vec::new()];
    for d in domains {
        rows = rows
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
    rows
}

impl GraphCore {
    /// Resolves the transport formula for `P(y | do(x), z)` across
    /// populations that may differ on `s_nodes`: direct adjustment when
    /// every attached S-node is d-separated from `y` in the intervened
    /// selection diagram, else the shortest backdoor-adjustment superset of
    /// `z`, else `None`.
    pub fn get_transport_formula(
        &self,
        x: &NodeId,
        y: &NodeId,
        z: &HashSet<NodeId>,
        s_nodes: &[NodeId],
    ) -> Result<Option<TransportFormula>, GraphError> {
        let diagram = self.selection_diagram(s_nodes)?.do_intervene(x)?;
        let mut z_and_x = z.clone();
        z_and_x.insert(x.clone());

        let mut directly_transportable = true;
        for node in s_nodes {
            let s_id = NodeId::new(format!("S_{node}"));
            if !diagram.is_d_separated(&s_id, y, &z_and_x)? {
                directly_transportable = false;
                break;
            }
        }
        if directly_transportable {
            return Ok(Some(TransportFormula::DirectAdjustment {
                x: x.clone(),
                y: y.clone(),
                z: z.clone(),
            }));
        }

        let candidates = self.get_all_backdoor_adjustment_sets(x, y)?;
        let shortest = candidates
            .into_iter()
            .filter(|s| z.iter().all(|n| s.contains(n)))
            .min_by_key(|s| s.len());

        Ok(shortest.map(|z_star| TransportFormula::BackdoorAdjustment {
            x: x.clone(),
            y: y.clone(),
            z: z.clone(),
            z_star,
        }))
    }

    /// Re-expresses `P(target | given)` as the product of the conditional
    /// CPT factors `P(n | Pa(n))` for every `n` in the ancestral support of
    /// `target` (including `target` itself), binding any value present in
    /// `given`.
    pub fn from_cpts(
        &self,
        target: &NodeId,
        given: &HashMap<NodeId, i64>,
    ) -> Result<Expr, GraphError> {
        let mut support: Vec<NodeId> = self.ancestors(target)?.into_iter().collect();
        support.push(target.clone());
        support.sort();

        let mut factors = Vec::with_capacity(support.len());
        for node in &support {
            let parents = self.parents(node)?.to_vec();
            let mut q = HashMap::new();
            q.insert(node.clone(), to_assignment(given, node));
            let mut e = HashMap::new();
            for p in &parents {
                e.insert(p.clone(), to_assignment(given, p));
            }
            factors.push(Expr::Atomic(Query::new(node.clone(), q, e)));
        }
        Ok(Expr::Product(factors))
    }
}

fn to_assignment(given: &HashMap<NodeId, i64>, node: &NodeId) -> Assignment {
    given
        .get(node)
        .map(|v| Assignment::Assigned(*v))
        .unwrap_or(Assignment::Unassigned)
}
