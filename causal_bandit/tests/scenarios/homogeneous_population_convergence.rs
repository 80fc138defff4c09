/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::HashMap;

use causal_bandit::agent::Otp;
use causal_bandit::process::config::{
    AsrKind, DiscreteRow, EnvironmentSpec, GraphSpec, NodeKindSpec, NodeModelSpec,
    NodeMutationChance, OneOrMany,
};
use causal_bandit::run_experiment;
use causal_bandit::ExperimentConfig;

fn homogeneous_config() -> ExperimentConfig {
    let mut models = HashMap::new();
    models.insert(
        "A".to_string(),
        NodeModelSpec::Action {
            parents: vec![],
            domain: vec![0, 1],
        },
    );
    models.insert(
        "Y".to_string(),
        NodeModelSpec::Discrete {
            parents: vec!["A".to_string()],
            rows: vec![
                DiscreteRow {
                    given: vec![0],
                    probs: vec![0.8, 0.2],
                },
                DiscreteRow {
                    given: vec![1],
                    probs: vec![0.2, 0.8],
                },
            ],
        },
    );
    let env_spec = EnvironmentSpec {
        graph: GraphSpec {
            nodes: vec![
                ("A".to_string(), NodeKindSpec::Observed),
                ("Y".to_string(), NodeKindSpec::Observed),
            ],
            edges: vec![("A".to_string(), "Y".to_string())],
        },
        models,
        action_var: "A".to_string(),
        reward_var: "Y".to_string(),
    };
    ExperimentConfig {
        environments: vec![env_spec],
        otp: OneOrMany::Many(vec![Otp::Solo, Otp::Naive, Otp::Sensitive, Otp::Adjust]),
        asr: OneOrMany::One(AsrKind::EpsilonGreedy),
        tau: OneOrMany::One(0.05),
        epsilon: OneOrMany::One(0.1),
        rand_trials: OneOrMany::One(10),
        cooling_rate: OneOrMany::One(0.99),
        horizon: 300,
        mc_sims: 15,
        is_community: true,
        rand_envs: false,
        node_mutation_chance: NodeMutationChance::Scalar(0.0),
        seed: 4242,
    }
}

/// Every information-sharing policy, run against an identical population of
/// environments (so there is nothing for a divergence-aware policy to
/// screen out), should settle on the better arm (`A = 1`, reward 0.8) far
/// more often than chance once the episode count is large.
#[test]
fn every_otp_converges_to_near_optimal_play_on_a_homogeneous_population() {
    let config = homogeneous_config();
    let table = run_experiment(&config).unwrap();

    for level in ["Solo", "Naive", "Sensitive", "Adjust"] {
        let rows = table.poa(level);
        assert!(!rows.is_empty());
        let window = 50;
        let mut hits = 0u64;
        let mut total = 0u64;
        for row in rows {
            for flag in &row[row.len() - window..] {
                total += 1;
                hits += *flag as u64;
            }
        }
        let rate = hits as f64 / total as f64;
        assert!(
            rate >= 0.75,
            "level {level} converged to an optimal-play rate of only {rate}"
        );
    }
}
