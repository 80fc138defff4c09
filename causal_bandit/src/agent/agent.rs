/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::{HashMap, HashSet};

use causal_bandit_rand::{Beta, Distribution, Rng};

use crate::agent::{Asr, Otp};
use crate::alias::{Domain, NodeId};
use crate::databank::DataBank;
use crate::graph::{conditional_from_cpts, GraphCore};
use crate::query::{Assignment, CptMap, Query};

const TIE_TOLERANCE: f64 = 1e-12;

/// The static facts an agent needs about the environment to weigh an
/// action, bundled so `Agent::choose` doesn't grow an ever-longer parameter
/// list as more policies are added.
pub struct DecisionContext<'a> {
    pub action_var: &'a NodeId,
    pub reward_var: &'a NodeId,
    pub action_domain: &'a Domain,
    pub graph: &'a GraphCore,
    /// The variables this agent's own choice conditions on — the
    /// `Sensitive` policy's criterion for admitting a peer wholesale.
    pub feature_vars: &'a HashSet<NodeId>,
}

/// A single learner in the population: its own observation counts, an
/// action-selection rule, and an information-sharing policy that decides
/// how much of the rest of the population's evidence it is allowed to see.
#[derive(Debug, Clone)]
pub struct Agent {
    id: NodeId,
    otp: Otp,
    asr: Asr,
    cpts: CptMap,
}

impl Agent {
    pub fn new(id: NodeId, otp: Otp, asr: Asr, cpts: CptMap) -> Self {
        Agent { id, otp, asr, cpts }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn otp(&self) -> Otp {
        self.otp
    }

    pub fn own_cpts(&self) -> &CptMap {
        &self.cpts
    }

    /// Increments every owned CPT — including the dedicated reward CPT —
    /// against one fully-resolved sample (context, chosen action, and
    /// outcome variables together).
    pub fn observe(&mut self, sample: &HashMap<NodeId, i64>) {
        for cpt in self.cpts.values_mut() {
            cpt.add(sample);
        }
    }

    /// The agent's effective belief state after folding in whatever peer
    /// evidence its [`Otp`] policy admits.
    pub fn get_cpts(&self, databank: &DataBank, feature_vars: &HashSet<NodeId>) -> CptMap {
        match self.otp {
            Otp::Solo => self.cpts.clone(),
            Otp::Naive => {
                let mut pooled = self.cpts.clone();
                for peer in databank.agents() {
                    if peer == &self.id {
                        continue;
                    }
                    if let Some(peer_cpts) = databank.cpts(peer) {
                        merge_into(&mut pooled, peer_cpts);
                    }
                }
                pooled
            }
            Otp::Sensitive => {
                let mut pooled = self.cpts.clone();
                for peer in databank.sensitive_peers(&self.id, feature_vars) {
                    if let Some(peer_cpts) = databank.cpts(&peer) {
                        merge_into(&mut pooled, peer_cpts);
                    }
                }
                pooled
            }
            Otp::Adjust => {
                let mut pooled = self.cpts.clone();
                for peer in databank.agents() {
                    if peer == &self.id {
                        continue;
                    }
                    let divergent = databank.div_nodes(&self.id, peer);
                    if let Some(peer_cpts) = databank.cpts(peer) {
                        for (node, cpt) in peer_cpts {
                            if divergent.contains(node) {
                                continue;
                            }
                            pooled
                                .entry(node.clone())
                                .and_modify(|c| c.merge(cpt))
                                .or_insert_with(|| cpt.clone());
                        }
                    }
                }
                pooled
            }
        }
    }

    /// Picks an action according to the agent's [`Asr`], falling back to a
    /// uniform draw whenever the chosen policy has no opinion (no evidence
    /// yet for any arm).
    pub fn choose(
        &mut self,
        features: &HashMap<NodeId, i64>,
        databank: &DataBank,
        ctx: &DecisionContext,
        rng: &mut impl Rng,
    ) -> i64 {
        if matches!(self.asr, Asr::Thompson) {
            return self.thompson_sample(features, ctx, databank, rng);
        }
        if self.decide_random_draw(features, rng) {
            Self::choose_random(ctx.action_domain, rng)
        } else {
            self.choose_optimal(features, ctx, databank, rng)
                .unwrap_or_else(|| Self::choose_random(ctx.action_domain, rng))
        }
    }

    /// Consults (and advances) the non-Thompson `Asr` state to decide
    /// whether this call draws uniformly at random rather than exploiting.
    fn decide_random_draw(&mut self, features: &HashMap<NodeId, i64>, rng: &mut impl Rng) -> bool {
        match &mut self.asr {
            Asr::EpsilonGreedy { epsilon } => rng.random_bool(*epsilon),
            Asr::EpsilonFirst {
                rand_trials,
                remaining,
            } => {
                let key = feature_key(features);
                let left = remaining.entry(key).or_insert(*rand_trials);
                if *left > 0 {
                    *left -= 1;
                    true
                } else {
                    false
                }
            }
            Asr::EpsilonDecreasing {
                cooling_rate,
                epsilon,
            } => {
                let key = feature_key(features);
                let eps = epsilon.entry(key).or_insert(1.0);
                let draw = rng.random_bool(*eps);
                *eps *= *cooling_rate;
                draw
            }
            Asr::Thompson => unreachable!("Thompson sampling is dispatched before this point"),
        }
    }

    fn choose_random(domain: &Domain, rng: &mut impl Rng) -> i64 {
        let idx = rng.random_range(0..domain.len());
        domain.values()[idx]
    }

    /// Argmax over the action domain of the estimated `P(reward = 1 | ...)`,
    /// breaking ties with a uniform draw among the tied arms. `None` if no
    /// arm has any evidence at all.
    fn choose_optimal(
        &self,
        features: &HashMap<NodeId, i64>,
        ctx: &DecisionContext,
        databank: &DataBank,
        rng: &mut impl Rng,
    ) -> Option<i64> {
        let pooled = (!matches!(self.otp, Otp::Adjust))
            .then(|| self.get_cpts(databank, ctx.feature_vars));

        let mut best_val = f64::MIN;
        let mut ties: Vec<i64> = Vec::new();
        let mut any = false;
        for a in ctx.action_domain.iter() {
            let (alpha, beta) = match &pooled {
                Some(cpts) => self.reward_counts(features, *a, ctx, cpts),
                None => self.adjust_pseudo_counts(features, *a, ctx, databank),
            };
            if alpha + beta == 0.0 {
                continue;
            }
            any = true;
            let value = alpha / (alpha + beta);
            if value > best_val + TIE_TOLERANCE {
                best_val = value;
                ties.clear();
                ties.push(*a);
            } else if (value - best_val).abs() <= TIE_TOLERANCE {
                ties.push(*a);
            }
        }
        if !any {
            return None;
        }
        Some(ties[rng.random_range(0..ties.len())])
    }

    /// Draws one posterior sample per arm from `Beta(alpha + 1, beta + 1)`
    /// and plays the arm with the highest draw.
    fn thompson_sample(
        &self,
        features: &HashMap<NodeId, i64>,
        ctx: &DecisionContext,
        databank: &DataBank,
        rng: &mut impl Rng,
    ) -> i64 {
        let pooled = (!matches!(self.otp, Otp::Adjust))
            .then(|| self.get_cpts(databank, ctx.feature_vars));

        let mut best_val = f64::MIN;
        let mut ties: Vec<i64> = Vec::new();
        for a in ctx.action_domain.iter() {
            let (alpha, beta) = match &pooled {
                Some(cpts) => self.reward_counts(features, *a, ctx, cpts),
                None => self.adjust_pseudo_counts(features, *a, ctx, databank),
            };
            let draw = Beta::new(alpha + 1.0, beta + 1.0)
                .expect("alpha and beta are always positive after the +1 smoothing")
                .sample(rng);
            if draw > best_val + TIE_TOLERANCE {
                best_val = draw;
                ties.clear();
                ties.push(*a);
            } else if (draw - best_val).abs() <= TIE_TOLERANCE {
                ties.push(*a);
            }
        }
        ties[rng.random_range(0..ties.len())]
    }

    /// Reward-CPT hit counts for `reward = 1` and `reward = 0` given the
    /// context and candidate action, read out of an already-pooled view.
    /// `(0, 0)` if the pooled view has no reward CPT or the context doesn't
    /// cover every one of the reward CPT's other parents.
    fn reward_counts(
        &self,
        features: &HashMap<NodeId, i64>,
        action: i64,
        ctx: &DecisionContext,
        cpts: &CptMap,
    ) -> (f64, f64) {
        let Some(reward_cpt) = cpts.get(ctx.reward_var) else {
            return (0.0, 0.0);
        };
        let Some(given) = reward_given(reward_cpt.parents(), features, action, ctx.action_var) else {
            return (0.0, 0.0);
        };
        let mut given1 = given.clone();
        given1.insert(ctx.reward_var.clone(), 1);
        let mut given0 = given;
        given0.insert(ctx.reward_var.clone(), 0);
        (
            reward_cpt.lookup(&given1) as f64,
            reward_cpt.lookup(&given0) as f64,
        )
    }

    /// The `Adjust` policy's reward pseudo-counts, ported from
    /// `AdjustAgent.thompson_sample`'s weighted accumulation: for every peer
    /// whose action-to-reward causal path isn't entirely flagged divergent,
    /// and for every value `w` the reward CPT's own non-action parents can
    /// take, accumulate `count(action, context) · P(w | action) · P(Y = r |
    /// w, context, action)` into `alpha` (`r = 1`) and `beta` (`r = 0`).
    /// `P(w | action)` and the `count`/`P(Y = r | …)` terms draw on the same
    /// per-node non-divergent pooling `get_cpts` already does for `Adjust`;
    /// `P(Y = r | …)` goes through `GraphCore::from_cpts` + `Expr::evaluate`
    /// so an unbound mediator between `action_var` and `reward_var` is
    /// marginalized out rather than required to be a direct CPT parent.
    /// When a peer's divergence touches some but not all of the `w`
    /// variables, `GraphCore::get_transport_formula` gates whether a valid
    /// adjustment even exists before that peer is allowed to contribute.
    fn adjust_pseudo_counts(
        &self,
        features: &HashMap<NodeId, i64>,
        action: i64,
        ctx: &DecisionContext,
        databank: &DataBank,
    ) -> (f64, f64) {
        let pooled = self.get_cpts(databank, ctx.feature_vars);
        let Some(reward_cpt) = pooled.get(ctx.reward_var) else {
            return (0.0, 0.0);
        };
        let w_vars: Vec<NodeId> = reward_cpt
            .parents()
            .iter()
            .filter(|p| *p != ctx.action_var)
            .cloned()
            .collect();
        let w_domains: Option<Vec<Domain>> = w_vars
            .iter()
            .map(|w| reward_cpt.domains().get(w).cloned())
            .collect();
        let Some(w_domains) = w_domains else {
            return (0.0, 0.0);
        };
        let w_assignments = cartesian_product(&w_domains);

        let causal_path = ctx
            .graph
            .causal_path(ctx.action_var, ctx.reward_var)
            .unwrap_or_default();

        let mut alpha = 0.0;
        let mut beta = 0.0;
        for peer in std::iter::once(&self.id).chain(databank.agents().iter().filter(|p| *p != &self.id)) {
            let divergent = if peer == &self.id {
                HashSet::new()
            } else {
                databank.div_nodes(&self.id, peer)
            };
            if !causal_path.is_empty() && causal_path.iter().all(|n| divergent.contains(n)) {
                continue;
            }
            if !divergent.is_empty() {
                let s_nodes: Vec<NodeId> =
                    w_vars.iter().filter(|w| divergent.contains(*w)).cloned().collect();
                if !s_nodes.is_empty() {
                    let z: HashSet<NodeId> = w_vars
                        .iter()
                        .filter(|w| !divergent.contains(*w))
                        .cloned()
                        .collect();
                    match ctx.graph.get_transport_formula(ctx.action_var, ctx.reward_var, &z, &s_nodes) {
                        Ok(Some(_)) => {}
                        _ => continue,
                    }
                }
            }

            let Some(peer_cpts) = databank.cpts(peer) else {
                continue;
            };
            let Some(action_cpt) = peer_cpts.get(ctx.action_var) else {
                continue;
            };
            let Some(action_given) = reward_given(action_cpt.parents(), features, action, ctx.action_var)
            else {
                continue;
            };
            let mut action_full: HashMap<NodeId, Assignment> = action_given
                .into_iter()
                .map(|(k, v)| (k, Assignment::Assigned(v)))
                .collect();
            action_full.insert(ctx.action_var.clone(), Assignment::Assigned(action));
            let Some(count) = Query::count(ctx.action_var.clone(), action_full).raw_count(peer_cpts)
            else {
                continue;
            };
            if count == 0.0 {
                continue;
            }

            for w_values in &w_assignments {
                let Some(wp) = w_prob(&pooled, ctx.action_var, action, features, &w_vars, w_values)
                else {
                    continue;
                };
                if wp == 0.0 {
                    continue;
                }
                let Some(y1) = y_prob(
                    ctx.graph,
                    peer_cpts,
                    ctx.reward_var,
                    ctx.action_var,
                    action,
                    features,
                    &w_vars,
                    w_values,
                ) else {
                    continue;
                };
                alpha += count * wp * y1;
                beta += count * wp * (1.0 - y1);
            }
        }
        (alpha, beta)
    }
}

/// `P(w_vars = w_values | action)`, read off the pooled view's action CPT
/// via Bayesian conditioning when a `w` is itself one of `action_var`'s own
/// parents (the standard backdoor-confounder shape `W -> action`); any `w`
/// outside that set falls back to its own unconditional marginal.
fn w_prob(
    pooled: &CptMap,
    action_var: &NodeId,
    action: i64,
    features: &HashMap<NodeId, i64>,
    w_vars: &[NodeId],
    w_values: &[i64],
) -> Option<f64> {
    let action_cpt = pooled.get(action_var)?;
    let action_parents = action_cpt.parents();

    let mut q = HashMap::new();
    let mut e = HashMap::new();
    e.insert(action_var.clone(), Assignment::Assigned(action));
    for p in action_parents {
        if let Some(pos) = w_vars.iter().position(|w| w == p) {
            q.insert(p.clone(), Assignment::Assigned(w_values[pos]));
        } else {
            e.insert(p.clone(), Assignment::Assigned(*features.get(p)?));
        }
    }
    let mut joint = if q.is_empty() {
        1.0
    } else {
        Query::new(action_var.clone(), q, e).evaluate(pooled)?
    };

    for (w, val) in w_vars.iter().zip(w_values.iter()) {
        if !action_parents.contains(w) {
            let marginal = Query::new(
                w.clone(),
                [(w.clone(), Assignment::Assigned(*val))].into_iter().collect(),
                HashMap::new(),
            )
            .evaluate(pooled)?;
            joint *= marginal;
        }
    }
    Some(joint)
}

/// `P(reward_var = 1 | w_vars = w_values, features, action)`. `action_var`
/// need not be a direct parent of `reward_var` (a mediator may sit between
/// them), so this goes through [`conditional_from_cpts`] rather than a
/// single CPT row — see its doc comment for the Bayes-cancellation that
/// makes `GraphCore::from_cpts`'s joint-valued ancestral factorization
/// usable as a true conditional.
#[allow(clippy::too_many_arguments)]
fn y_prob(
    graph: &GraphCore,
    cpts: &CptMap,
    reward_var: &NodeId,
    action_var: &NodeId,
    action: i64,
    features: &HashMap<NodeId, i64>,
    w_vars: &[NodeId],
    w_values: &[i64],
) -> Option<f64> {
    let mut given = features.clone();
    given.insert(action_var.clone(), action);
    for (w, val) in w_vars.iter().zip(w_values.iter()) {
        given.insert(w.clone(), *val);
    }
    conditional_from_cpts(graph, cpts, reward_var, 1, &given).ok()?
}

/// Every combination of one value per domain, in domain order — the same
/// shape `Environment`'s own feature-space enumeration uses, duplicated here
/// rather than shared across modules for a single small helper.
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

fn merge_into(pooled: &mut CptMap, other: &CptMap) {
    for (node, cpt) in other {
        pooled
            .entry(node.clone())
            .and_modify(|c| c.merge(cpt))
            .or_insert_with(|| cpt.clone());
    }
}

/// Builds the reward CPT's conditioning assignment from a feature context
/// and a candidate action, substituting `action` for whichever parent is
/// the action variable. `None` if the context is missing a value for one of
/// the other parents.
fn reward_given(
    parents: &[NodeId],
    features: &HashMap<NodeId, i64>,
    action: i64,
    action_var: &NodeId,
) -> Option<HashMap<NodeId, i64>> {
    let mut given = HashMap::new();
    for p in parents {
        let v = if p == action_var {
            action
        } else {
            *features.get(p)?
        };
        given.insert(p.clone(), v);
    }
    Some(given)
}

/// Canonical, sorted-by-id projection of a feature assignment used to key
/// per-context `Asr` state.
fn feature_key(features: &HashMap<NodeId, i64>) -> Vec<i64> {
    let mut keys: Vec<&NodeId> = features.keys().collect();
    keys.sort();
    keys.into_iter().map(|k| features[k]).collect()
}
