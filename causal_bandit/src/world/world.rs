/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::{HashMap, HashSet};

use causal_bandit_rand::Rng;

use crate::agent::{Agent, DecisionContext, Otp};
use crate::alias::NodeId;
use crate::databank::DataBank;
use crate::environment::Environment;
use crate::errors::SimError;

/// Orchestrates one Monte-Carlo trial. Each agent is embedded in its own
/// [`Environment`] — populations silently diverge on the mechanism of one
/// or more nodes, which is exactly what the shared [`DataBank`] measures —
/// while all agents share one horizon and act in one fixed order per
/// episode.
#[derive(Debug, Clone)]
pub struct World {
    population: Vec<(Agent, Environment)>,
    databank: DataBank,
    horizon: usize,
    cpr: HashMap<NodeId, Vec<f64>>,
    poa: HashMap<NodeId, Vec<u8>>,
}

impl World {
    pub fn new(population: Vec<(Agent, Environment)>, tau: f64, horizon: usize) -> Self {
        let mut databank = DataBank::new(tau);
        let mut cpr = HashMap::new();
        let mut poa = HashMap::new();
        for (agent, _) in &population {
            databank.add_agent(agent.id().clone());
            cpr.insert(agent.id().clone(), vec![0.0; horizon]);
            poa.insert(agent.id().clone(), vec![0u8; horizon]);
        }
        World {
            population,
            databank,
            horizon,
            cpr,
            poa,
        }
    }

    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        self.population.iter().map(|(a, _)| a)
    }

    pub fn databank(&self) -> &DataBank {
        &self.databank
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Cumulative pseudo-regret trajectory for `agent`, one entry per
    /// episode, non-decreasing by construction.
    pub fn cpr(&self, agent: &NodeId) -> &[f64] {
        self.cpr.get(agent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Optimal-action indicator trajectory for `agent`.
    pub fn poa(&self, agent: &NodeId) -> &[u8] {
        self.poa.get(agent).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn run(&mut self, rng: &mut impl Rng) -> Result<(), SimError> {
        for t in 0..self.horizon {
            self.run_episode(t, rng)?;
        }
        Ok(())
    }

    /// One episode, in three phases: every agent acts in fixed population
    /// order against its own environment and the pre-update `DataBank` view
    /// (`choose` sees divergence as of episode `t - 1`); divergence is then
    /// refreshed once for the whole population (only when a peer-aware OTP
    /// is present); only then are this episode's `cpr`/`poa` trajectories
    /// recorded.
    fn run_episode(&mut self, t: usize, rng: &mut impl Rng) -> Result<(), SimError> {
        let mut outcomes = Vec::with_capacity(self.population.len());
        for i in 0..self.population.len() {
            let (agent, environment) = &mut self.population[i];
            let agent_id = agent.id().clone();
            let feature_vars: HashSet<NodeId> = environment.pre_nodes().iter().cloned().collect();
            let context = environment.sample_context(rng)?;

            let ctx = DecisionContext {
                action_var: environment.action_var(),
                reward_var: environment.reward_var(),
                action_domain: environment.action_domain(),
                graph: environment.scm().graph(),
                feature_vars: &feature_vars,
            };
            let action = agent.choose(&context, &self.databank, &ctx, rng);
            let outcome = environment.sample_outcome(rng, &context, action)?;

            let rewards = environment.optimal_action_rewards(&context);
            let optimal_reward = rewards.values().cloned().fold(f64::MIN, f64::max);
            let chosen_reward = rewards.get(&action).copied().unwrap_or(0.0);

            agent.observe(&outcome);
            self.databank.record_sample(&agent_id, outcome.clone());
            self.databank.sync_cpts(&agent_id, agent.own_cpts().clone());

            outcomes.push((agent_id, optimal_reward, chosen_reward));
        }

        if self
            .population
            .iter()
            .any(|(a, _)| matches!(a.otp(), Otp::Sensitive | Otp::Adjust))
        {
            self.databank.update_divergence();
        }

        for (agent_id, optimal_reward, chosen_reward) in outcomes {
            let poa_flag = u8::from((optimal_reward - chosen_reward).abs() < 1e-12);
            let pseudo_regret = (optimal_reward - chosen_reward).max(0.0);
            let prev = if t == 0 { 0.0 } else { self.cpr[&agent_id][t - 1] };
            self.cpr.get_mut(&agent_id).expect("agent registered in World::new")[t] =
                prev + pseudo_regret;
            self.poa.get_mut(&agent_id).expect("agent registered in World::new")[t] = poa_flag;
        }
        Ok(())
    }
}
