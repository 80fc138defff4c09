/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::{HashMap, HashSet};

use causal_bandit_rand::Rng;

use crate::alias::{Domain, NodeId};
use crate::errors::SimError;
use crate::model::AssignmentModel;
use crate::scm::Scm;

/// Default number of Monte-Carlo draws used to estimate the optimal-action
/// reward table at construction, matching the source simulator.
pub const DEFAULT_OPTIMAL_ACTION_ITERATIONS: usize = 1000;

/// Wraps an [`Scm`] with a designated action variable and reward variable,
/// splitting sampling into a pre-action context draw and a post-action
/// outcome draw, and precomputing the optimal action/reward per feature
/// (context) assignment.
#[derive(Debug, Clone)]
pub struct Environment {
    scm: Scm,
    pre_scm: Scm,
    post_scm: Scm,
    action_var: NodeId,
    reward_var: NodeId,
    pre_nodes: Vec<NodeId>,
    action_domain: Domain,
    action_rewards: HashMap<(Vec<i64>, i64), f64>,
}

impl Environment {
    pub fn new(
        scm: Scm,
        action_var: NodeId,
        reward_var: NodeId,
        rng: &mut impl Rng,
    ) -> Result<Self, SimError> {
        Self::with_iterations(
            scm,
            action_var,
            reward_var,
            DEFAULT_OPTIMAL_ACTION_ITERATIONS,
            rng,
        )
    }

    pub fn with_iterations(
        scm: Scm,
        action_var: NodeId,
        reward_var: NodeId,
        iterations: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, SimError> {
        let graph = scm.graph().clone();

        let mut pre_nodes: Vec<NodeId> = graph.ancestors(&action_var)?.into_iter().collect();
        pre_nodes.sort();
        let pre_set: HashSet<NodeId> = pre_nodes.iter().cloned().collect();

        let pre_graph = graph.restricted_to(&pre_set)?;
        let pre_models: HashMap<NodeId, AssignmentModel> = pre_nodes
            .iter()
            .map(|n| (n.clone(), scm.models()[n].clone()))
            .collect();
        let pre_scm = Scm::new(pre_graph, pre_models);

        // Every pre-action node's model is replaced with an `Action` stub
        // over that node's own parents and domain — not just the action
        // variable itself — so the post sampler can substitute a full
        // context, not only the chosen action.
        let mut post_models = scm.models().clone();
        for n in &pre_nodes {
            let domain = Domain::range(scm.models()[n].domain_size());
            let parents = scm.models()[n].parents().to_vec();
            post_models.insert(n.clone(), AssignmentModel::action(parents, domain));
        }
        let post_scm = Scm::new(graph, post_models);

        let action_domain = Domain::range(scm.models()[&action_var].domain_size());
        let feature_domains: Vec<Domain> = pre_nodes
            .iter()
            .map(|n| Domain::range(scm.models()[n].domain_size()))
            .collect();
        let feature_space = cartesian_product(&feature_domains);

        let mut action_rewards = HashMap::new();
        for feature in &feature_space {
            let feature_map: HashMap<NodeId, i64> =
                pre_nodes.iter().cloned().zip(feature.iter().copied()).collect();
            for a in action_domain.iter() {
                let mut set_values = feature_map.clone();
                set_values.insert(action_var.clone(), *a);
                let mut total = 0.0;
                for _ in 0..iterations {
                    let sample = post_scm.sample(rng, &set_values)?;
                    total += *sample
                        .get(&reward_var)
                        .expect("reward variable missing from sampled assignment")
                        as f64;
                }
                action_rewards.insert((feature.clone(), *a), total / iterations as f64);
            }
        }

        Ok(Environment {
            scm,
            pre_scm,
            post_scm,
            action_var,
            reward_var,
            pre_nodes,
            action_domain,
            action_rewards,
        })
    }

    pub fn scm(&self) -> &Scm {
        &self.scm
    }

    pub fn action_var(&self) -> &NodeId {
        &self.action_var
    }

    pub fn reward_var(&self) -> &NodeId {
        &self.reward_var
    }

    pub fn pre_nodes(&self) -> &[NodeId] {
        &self.pre_nodes
    }

    pub fn action_domain(&self) -> &Domain {
        &self.action_domain
    }

    pub fn sample_context(&self, rng: &mut impl Rng) -> Result<HashMap<NodeId, i64>, SimError> {
        self.pre_scm.sample(rng, &HashMap::new())
    }

    pub fn sample_outcome(
        &self,
        rng: &mut impl Rng,
        context: &HashMap<NodeId, i64>,
        action: i64,
    ) -> Result<HashMap<NodeId, i64>, SimError> {
        let mut set_values = context.clone();
        set_values.insert(self.action_var.clone(), action);
        self.post_scm.sample(rng, &set_values)
    }

    fn feature_key(&self, feature: &HashMap<NodeId, i64>) -> Vec<i64> {
        self.pre_nodes
            .iter()
            .map(|n| *feature.get(n).expect("feature assignment missing a pre-action node"))
            .collect()
    }

    pub fn optimal_action_rewards(&self, feature: &HashMap<NodeId, i64>) -> HashMap<i64, f64> {
        let key = self.feature_key(feature);
        self.action_domain
            .iter()
            .map(|a| {
                let reward = *self
                    .action_rewards
                    .get(&(key.clone(), *a))
                    .unwrap_or(&0.0);
                (*a, reward)
            })
            .collect()
    }

    pub fn optimal_actions(&self, feature: &HashMap<NodeId, i64>) -> Vec<i64> {
        let rewards = self.optimal_action_rewards(feature);
        let max = rewards.values().cloned().fold(f64::MIN, f64::max);
        let mut actions: Vec<i64> = rewards
            .iter()
            .filter(|(_, v)| (**v - max).abs() < 1e-12)
            .map(|(a, _)| *a)
            .collect();
        actions.sort_unstable();
        actions
    }

    pub fn optimal_reward(&self, feature: &HashMap<NodeId, i64>) -> f64 {
        self.optimal_action_rewards(feature)
            .values()
            .cloned()
            .fold(f64::MIN, f64::max)
    }
}

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
