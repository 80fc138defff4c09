/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use causal_bandit_rand::{Distribution, Rng, Uniform};

use crate::agent::{Asr, Otp};
use crate::alias::{Domain, NodeId};
use crate::environment::Environment;
use crate::errors::{CausalBanditError, ConfigError};
use crate::graph::{GraphCore, NodeKind};
use crate::model::AssignmentModel;
use crate::scm::Scm;

/// A field that is either a single value or, when the experiment sweeps it,
/// a list of values to run independently. `serde(untagged)` lets either
/// shape appear directly in config text with no wrapper key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: Clone> OneOrMany<T> {
    fn is_many(&self) -> bool {
        matches!(self, OneOrMany::Many(_))
    }

    /// The first value — the baseline used for every knob that isn't this
    /// experiment's swept independent variable.
    pub(crate) fn baseline(&self) -> T {
        match self {
            OneOrMany::One(v) => v.clone(),
            OneOrMany::Many(vs) => vs[0].clone(),
        }
    }

    pub(crate) fn values(&self) -> Vec<T> {
        match self {
            OneOrMany::One(v) => vec![v.clone()],
            OneOrMany::Many(vs) => vs.clone(),
        }
    }
}

/// ASR family selector at the configuration layer; the scalar knobs that
/// parameterise a family (`epsilon`, `rand_trials`, `cooling_rate`) live
/// alongside it on [`ExperimentConfig`] rather than nested inside this enum,
/// matching spec.md §6's "`asr` or list; plus scalar knobs" phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsrKind {
    #[serde(rename = "EG")]
    EpsilonGreedy,
    #[serde(rename = "EF")]
    EpsilonFirst,
    #[serde(rename = "ED")]
    EpsilonDecreasing,
    #[serde(rename = "TS")]
    Thompson,
}

impl AsrKind {
    pub fn build(self, epsilon: f64, rand_trials: u64, cooling_rate: f64) -> Asr {
        match self {
            AsrKind::EpsilonGreedy => Asr::epsilon_greedy(epsilon),
            AsrKind::EpsilonFirst => Asr::epsilon_first(rand_trials),
            AsrKind::EpsilonDecreasing => Asr::epsilon_decreasing(cooling_rate),
            AsrKind::Thompson => Asr::thompson(),
        }
    }
}

/// A scalar perturbation probability, or a `(lo, hi)` range resampled once
/// per Monte-Carlo trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeMutationChance {
    Scalar(f64),
    Range(f64, f64),
}

impl NodeMutationChance {
    pub fn resolve(self, rng: &mut impl Rng) -> f64 {
        match self {
            NodeMutationChance::Scalar(p) => p,
            NodeMutationChance::Range(a, b) => {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                if hi - lo < f64::EPSILON {
                    return lo;
                }
                Uniform::new(lo, hi)
                    .expect("lo < hi guaranteed by the ordering and equality checks above")
                    .sample(rng)
            }
        }
    }
}

/// A node-local mechanism as it appears in configuration text, before it is
/// resolved against its parents' domains into an [`AssignmentModel`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum NodeModelSpec {
    Random { probs: Vec<f64> },
    Discrete { parents: Vec<String>, rows: Vec<DiscreteRow> },
    Action { parents: Vec<String>, domain: Vec<i64> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscreteRow {
    pub given: Vec<i64>,
    pub probs: Vec<f64>,
}

impl NodeModelSpec {
    fn parents(&self) -> &[String] {
        match self {
            NodeModelSpec::Random { .. } => &[],
            NodeModelSpec::Discrete { parents, .. } => parents,
            NodeModelSpec::Action { parents, .. } => parents,
        }
    }

    fn domain_size(&self) -> usize {
        match self {
            NodeModelSpec::Random { probs } => probs.len(),
            NodeModelSpec::Discrete { rows, .. } => rows.first().map_or(0, |r| r.probs.len()),
            NodeModelSpec::Action { domain, .. } => domain.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKindSpec {
    Observed,
    Set,
    Selection,
    Latent,
}

impl From<NodeKindSpec> for NodeKind {
    fn from(k: NodeKindSpec) -> Self {
        match k {
            NodeKindSpec::Observed => NodeKind::Observed,
            NodeKindSpec::Set => NodeKind::Set,
            NodeKindSpec::Selection => NodeKind::Selection,
            NodeKindSpec::Latent => NodeKind::Latent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSpec {
    pub nodes: Vec<(String, NodeKindSpec)>,
    pub edges: Vec<(String, String)>,
}

/// One agent's structural causal model, as it appears in configuration
/// text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentSpec {
    pub graph: GraphSpec,
    pub models: HashMap<String, NodeModelSpec>,
    pub action_var: String,
    pub reward_var: String,
}

impl EnvironmentSpec {
    /// Resolves node-model specs into [`AssignmentModel`]s, validates the
    /// graph, and Monte-Carlo-estimates the optimal-action reward table.
    pub fn build(&self, rng: &mut impl Rng) -> Result<Environment, CausalBanditError> {
        let nodes: Vec<(NodeId, NodeKind)> = self
            .graph
            .nodes
            .iter()
            .map(|(n, k)| (NodeId::new(n.clone()), (*k).into()))
            .collect();
        let edges: Vec<(NodeId, NodeId)> = self
            .graph
            .edges
            .iter()
            .map(|(a, b)| (NodeId::new(a.clone()), NodeId::new(b.clone())))
            .collect();
        let graph = GraphCore::new(nodes, edges)?;

        let mut action_nodes: Vec<NodeId> = Vec::new();
        let mut models = HashMap::new();
        for (name, spec) in &self.models {
            let node = NodeId::new(name.clone());
            let parents: Vec<NodeId> = spec.parents().iter().map(|p| NodeId::new(p.clone())).collect();
            let model = match spec {
                NodeModelSpec::Random { probs } => AssignmentModel::random(&node, probs.clone())?,
                NodeModelSpec::Discrete { parents: pnames, rows } => {
                    let parent_domains: Vec<Domain> = pnames
                        .iter()
                        .map(|p| {
                            self.models
                                .get(p)
                                .map(|m| Domain::range(m.domain_size()))
                                .ok_or_else(|| ConfigError::UnknownNode(NodeId::new(p.clone())))
                        })
                        .collect::<Result<_, _>>()?;
                    let table: HashMap<Vec<i64>, Vec<f64>> =
                        rows.iter().map(|r| (r.given.clone(), r.probs.clone())).collect();
                    AssignmentModel::discrete(&node, parents.clone(), table, &parent_domains)?
                }
                NodeModelSpec::Action { domain, .. } => {
                    action_nodes.push(node.clone());
                    AssignmentModel::action(parents.clone(), Domain::new(domain.clone()))
                }
            };
            models.insert(node, model);
        }
        if let [a, b, ..] = action_nodes.as_slice() {
            return Err(ConfigError::MultipleActionNodes(a.clone(), b.clone()).into());
        }

        let scm = Scm::new(graph, models);
        let environment = Environment::new(
            scm,
            NodeId::new(self.action_var.clone()),
            NodeId::new(self.reward_var.clone()),
            rng,
        )?;
        Ok(environment)
    }
}

/// Which of the six sweepable knobs is this experiment's independent
/// variable, carrying its resolved level list.
#[derive(Debug, Clone)]
pub enum IndependentVariable {
    Otp(Vec<Otp>),
    Asr(Vec<AsrKind>),
    Tau(Vec<f64>),
    Epsilon(Vec<f64>),
    RandTrials(Vec<u64>),
    CoolingRate(Vec<f64>),
}

/// Full description of one experiment: a population of agent environments,
/// the swept knob (if any), and Monte-Carlo driver settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub environments: Vec<EnvironmentSpec>,
    pub otp: OneOrMany<Otp>,
    pub asr: OneOrMany<AsrKind>,
    pub tau: OneOrMany<f64>,
    pub epsilon: OneOrMany<f64>,
    pub rand_trials: OneOrMany<u64>,
    pub cooling_rate: OneOrMany<f64>,
    pub horizon: usize,
    pub mc_sims: usize,
    pub is_community: bool,
    pub rand_envs: bool,
    pub node_mutation_chance: NodeMutationChance,
    pub seed: u64,
}

impl ExperimentConfig {
    /// Resolves exactly one of `{otp, tau, asr, epsilon, rand_trials,
    /// cooling_rate}` as the swept independent variable. More than one
    /// supplied as a list is a configuration error; a list with zero levels
    /// is too, since a sweep over nothing can never be run. When none is
    /// supplied as a list, `otp` degenerates into a harmless one-level
    /// sweep over its own scalar value.
    pub fn independent_variable(&self) -> Result<IndependentVariable, ConfigError> {
        let many_count = [
            self.otp.is_many(),
            self.asr.is_many(),
            self.tau.is_many(),
            self.epsilon.is_many(),
            self.rand_trials.is_many(),
            self.cooling_rate.is_many(),
        ]
        .iter()
        .filter(|m| **m)
        .count();
        if many_count > 1 {
            return Err(ConfigError::MultipleIndependentVariables);
        }

        let iv = if self.otp.is_many() {
            IndependentVariable::Otp(self.otp.values())
        } else if self.asr.is_many() {
            IndependentVariable::Asr(self.asr.values())
        } else if self.tau.is_many() {
            IndependentVariable::Tau(self.tau.values())
        } else if self.epsilon.is_many() {
            IndependentVariable::Epsilon(self.epsilon.values())
        } else if self.rand_trials.is_many() {
            IndependentVariable::RandTrials(self.rand_trials.values())
        } else if self.cooling_rate.is_many() {
            IndependentVariable::CoolingRate(self.cooling_rate.values())
        } else {
            IndependentVariable::Otp(self.otp.values())
        };

        let level_count = match &iv {
            IndependentVariable::Otp(v) => v.len(),
            IndependentVariable::Asr(v) => v.len(),
            IndependentVariable::Tau(v) => v.len(),
            IndependentVariable::Epsilon(v) => v.len(),
            IndependentVariable::RandTrials(v) => v.len(),
            IndependentVariable::CoolingRate(v) => v.len(),
        };
        if level_count == 0 {
            return Err(ConfigError::NoIndependentVariable);
        }
        Ok(iv)
    }
}
