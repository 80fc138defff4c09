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

/// `W -> X -> Y`, `W -> Y`: a binary context `W` observed before the action
/// `X` is chosen, with the better arm flipping depending on `W`. A single
/// Solo/Thompson-sampling agent has to learn both per-context optima.
fn context_bandit_config() -> ExperimentConfig {
    let mut models = HashMap::new();
    models.insert(
        "W".to_string(),
        NodeModelSpec::Random {
            probs: vec![0.5, 0.5],
        },
    );
    models.insert(
        "X".to_string(),
        NodeModelSpec::Action {
            parents: vec!["W".to_string()],
            domain: vec![0, 1],
        },
    );
    models.insert(
        "Y".to_string(),
        NodeModelSpec::Discrete {
            parents: vec!["W".to_string(), "X".to_string()],
            rows: vec![
                DiscreteRow {
                    given: vec![0, 0],
                    probs: vec![0.7, 0.3],
                },
                DiscreteRow {
                    given: vec![0, 1],
                    probs: vec![0.3, 0.7],
                },
                DiscreteRow {
                    given: vec![1, 0],
                    probs: vec![0.4, 0.6],
                },
                DiscreteRow {
                    given: vec![1, 1],
                    probs: vec![0.8, 0.2],
                },
            ],
        },
    );
    let env_spec = EnvironmentSpec {
        graph: GraphSpec {
            nodes: vec![
                ("W".to_string(), NodeKindSpec::Observed),
                ("X".to_string(), NodeKindSpec::Observed),
                ("Y".to_string(), NodeKindSpec::Observed),
            ],
            edges: vec![
                ("W".to_string(), "X".to_string()),
                ("X".to_string(), "Y".to_string()),
                ("W".to_string(), "Y".to_string()),
            ],
        },
        models,
        action_var: "X".to_string(),
        reward_var: "Y".to_string(),
    };
    ExperimentConfig {
        environments: vec![env_spec],
        otp: OneOrMany::One(Otp::Solo),
        asr: OneOrMany::One(AsrKind::Thompson),
        tau: OneOrMany::One(0.1),
        epsilon: OneOrMany::One(0.1),
        rand_trials: OneOrMany::One(10),
        cooling_rate: OneOrMany::One(0.99),
        horizon: 3000,
        mc_sims: 8,
        is_community: true,
        rand_envs: false,
        node_mutation_chance: NodeMutationChance::Scalar(0.0),
        seed: 55,
    }
}

#[test]
fn a_solo_thompson_agent_learns_the_per_context_optimal_action() {
    let config = context_bandit_config();
    let table = run_experiment(&config).unwrap();
    let rows = table.poa("Solo");
    assert_eq!(rows.len(), config.mc_sims);

    let window = 300;
    let mut hits = 0u64;
    let mut total = 0u64;
    for row in rows {
        for flag in &row[row.len() - window..] {
            total += 1;
            hits += *flag as u64;
        }
    }
    let rate = hits as f64 / total as f64;
    assert!(rate >= 0.8, "per-context optimal-play rate was only {rate}");
}
