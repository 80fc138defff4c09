/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::HashMap;

use causal_bandit_rand::{Rng, StdRng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::agent::Agent;
use crate::alias::{Domain, NodeId};
use crate::cpt::Cpt;
use crate::environment::Environment;
use crate::errors::CausalBanditError;
use crate::model::AssignmentModel;
use crate::process::config::{AsrKind, ExperimentConfig, IndependentVariable};
use crate::process::results::ResultTable;
use crate::query::CptMap;
use crate::scm::Scm;
use crate::world::World;

/// One experiment level's fully-resolved knobs: the swept field takes this
/// level's value, every other field is pinned to its configured baseline.
/// One agent per level shares a single [`World`] with its peers, so that
/// every level of the independent variable is compared against the same
/// environment draws within one Monte-Carlo trial.
struct LevelParams {
    label: String,
    otp: crate::agent::Otp,
    asr_kind: AsrKind,
    tau: f64,
    epsilon: f64,
    rand_trials: u64,
    cooling_rate: f64,
}

fn levels(config: &ExperimentConfig) -> Result<Vec<LevelParams>, CausalBanditError> {
    let iv = config.independent_variable()?;
    let base_otp = config.otp.baseline();
    let base_asr = config.asr.baseline();
    let base_tau = config.tau.baseline();
    let base_epsilon = config.epsilon.baseline();
    let base_rand_trials = config.rand_trials.baseline();
    let base_cooling_rate = config.cooling_rate.baseline();

    let built = match iv {
        IndependentVariable::Otp(vs) => vs
            .into_iter()
            .map(|v| LevelParams {
                label: format!("{v:?}"),
                otp: v,
                asr_kind: base_asr,
                tau: base_tau,
                epsilon: base_epsilon,
                rand_trials: base_rand_trials,
                cooling_rate: base_cooling_rate,
            })
            .collect(),
        IndependentVariable::Asr(vs) => vs
            .into_iter()
            .map(|v| LevelParams {
                label: format!("{v:?}"),
                otp: base_otp,
                asr_kind: v,
                tau: base_tau,
                epsilon: base_epsilon,
                rand_trials: base_rand_trials,
                cooling_rate: base_cooling_rate,
            })
            .collect(),
        IndependentVariable::Tau(vs) => vs
            .into_iter()
            .map(|v| LevelParams {
                label: format!("{v}"),
                otp: base_otp,
                asr_kind: base_asr,
                tau: v,
                epsilon: base_epsilon,
                rand_trials: base_rand_trials,
                cooling_rate: base_cooling_rate,
            })
            .collect(),
        IndependentVariable::Epsilon(vs) => vs
            .into_iter()
            .map(|v| LevelParams {
                label: format!("{v}"),
                otp: base_otp,
                asr_kind: base_asr,
                tau: base_tau,
                epsilon: v,
                rand_trials: base_rand_trials,
                cooling_rate: base_cooling_rate,
            })
            .collect(),
        IndependentVariable::RandTrials(vs) => vs
            .into_iter()
            .map(|v| LevelParams {
                label: format!("{v}"),
                otp: base_otp,
                asr_kind: base_asr,
                tau: base_tau,
                epsilon: base_epsilon,
                rand_trials: v,
                cooling_rate: base_cooling_rate,
            })
            .collect(),
        IndependentVariable::CoolingRate(vs) => vs
            .into_iter()
            .map(|v| LevelParams {
                label: format!("{v}"),
                otp: base_otp,
                asr_kind: base_asr,
                tau: base_tau,
                epsilon: base_epsilon,
                rand_trials: base_rand_trials,
                cooling_rate: v,
            })
            .collect(),
    };
    Ok(built)
}

/// Runs `config.mc_sims` trials, each a single population with one agent per
/// level of the swept independent variable, and buckets every agent's
/// `cpr`/`poa` trajectory by the level it represents.
pub fn run_experiment(config: &ExperimentConfig) -> Result<ResultTable, CausalBanditError> {
    let levels = levels(config)?;
    let trials = run_trials(config, &levels)?;

    let mut table = ResultTable::new();
    for trial in trials {
        for (level, (cpr, poa)) in levels.iter().zip(trial) {
            table.push(&level.label, cpr, poa);
        }
    }
    Ok(table)
}

#[cfg(feature = "parallel")]
fn run_trials(
    config: &ExperimentConfig,
    levels: &[LevelParams],
) -> Result<Vec<Vec<(Vec<f64>, Vec<u8>)>>, CausalBanditError> {
    (0..config.mc_sims)
        .into_par_iter()
        .map(|worker| run_trial(config, levels, config.seed ^ worker as u64))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_trials(
    config: &ExperimentConfig,
    levels: &[LevelParams],
) -> Result<Vec<Vec<(Vec<f64>, Vec<u8>)>>, CausalBanditError> {
    (0..config.mc_sims)
        .map(|worker| run_trial(config, levels, config.seed ^ worker as u64))
        .collect()
}

/// One full population's worth of episodes, seeded deterministically so the
/// same `(config, worker)` pair always reproduces the same run. Returns one
/// `(cpr, poa)` pair per level, in the same order as `levels`.
fn run_trial(
    config: &ExperimentConfig,
    levels: &[LevelParams],
    seed: u64,
) -> Result<Vec<(Vec<f64>, Vec<u8>)>, CausalBanditError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut world = build_world(config, levels, &mut rng)?;
    world.run(&mut rng)?;
    let rows = world
        .agents()
        .map(|a| (world.cpr(a.id()).to_vec(), world.poa(a.id()).to_vec()))
        .collect();
    Ok(rows)
}

/// Builds one agent per level, each paired with its own environment: one
/// sampled assignment replicated (and optionally independently re-randomized)
/// across every agent when `is_community` is set, otherwise one independent
/// draw per agent, shuffled across the population.
fn build_world(
    config: &ExperimentConfig,
    levels: &[LevelParams],
    rng: &mut StdRng,
) -> Result<World, CausalBanditError> {
    let envs = build_environments(config, levels.len(), rng)?;

    let mut population = Vec::with_capacity(levels.len());
    for (i, (level, env)) in levels.iter().zip(envs).enumerate() {
        let id = NodeId::new(format!("agent-{i}"));
        let asr = level
            .asr_kind
            .build(level.epsilon, level.rand_trials, level.cooling_rate);
        let cpts = build_agent_cpts(&env)?;
        let agent = Agent::new(id, level.otp, asr, cpts);
        population.push((agent, env));
    }

    let tau = levels.first().map_or(0.0, |l| l.tau);
    Ok(World::new(population, tau, config.horizon))
}

fn build_environments(
    config: &ExperimentConfig,
    num_agents: usize,
    rng: &mut StdRng,
) -> Result<Vec<Environment>, CausalBanditError> {
    let mut envs = Vec::with_capacity(num_agents);

    if config.is_community {
        let template = config.environments[0].build(rng)?;
        for _ in 0..num_agents {
            envs.push(maybe_randomize(config, &template, rng)?);
        }
    } else {
        for i in 0..num_agents {
            let spec = &config.environments[i % config.environments.len()];
            let built = spec.build(rng)?;
            envs.push(maybe_randomize(config, &built, rng)?);
        }
        shuffle(&mut envs, rng);
    }
    Ok(envs)
}

fn maybe_randomize(
    config: &ExperimentConfig,
    env: &Environment,
    rng: &mut StdRng,
) -> Result<Environment, CausalBanditError> {
    if !config.rand_envs {
        return Ok(env.clone());
    }
    let p = config.node_mutation_chance.resolve(rng);
    let scm = env.scm();
    let mut models = scm.models().clone();
    for (node, model) in models.iter_mut() {
        if node == env.action_var() {
            continue;
        }
        if rng.random_bool(p) {
            *model = model.randomize(rng);
        }
    }
    let randomized = Scm::new(scm.graph().clone(), models);
    let env = Environment::new(
        randomized,
        env.action_var().clone(),
        env.reward_var().clone(),
        rng,
    )?;
    Ok(env)
}

fn shuffle(envs: &mut [Environment], rng: &mut StdRng) {
    for i in (1..envs.len()).rev() {
        let j = rng.random_range(0..i + 1);
        envs.swap(i, j);
    }
}

/// One zero-initialised `Cpt` per node of `env`'s graph, keyed over that
/// node's own parents within the agent's own causal model.
fn build_agent_cpts(env: &Environment) -> Result<CptMap, CausalBanditError> {
    let graph = env.scm().graph();
    let models = env.scm().models();
    let mut domains: HashMap<NodeId, Domain> = HashMap::new();
    for node in graph.nodes() {
        domains.insert(node.clone(), domain_of(&models[node]));
    }

    let mut cpts = CptMap::new();
    for node in graph.nodes() {
        let parents = graph.parents(node)?.to_vec();
        cpts.insert(node.clone(), Cpt::new(node.clone(), parents, domains.clone()));
    }
    Ok(cpts)
}

fn domain_of(model: &AssignmentModel) -> Domain {
    Domain::range(model.domain_size())
}
