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

fn two_arm_config() -> ExperimentConfig {
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
                    probs: vec![0.7, 0.3],
                },
                DiscreteRow {
                    given: vec![1],
                    probs: vec![0.4, 0.6],
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
        otp: OneOrMany::Many(vec![Otp::Solo, Otp::Naive]),
        asr: OneOrMany::One(AsrKind::EpsilonGreedy),
        tau: OneOrMany::One(0.1),
        epsilon: OneOrMany::One(0.15),
        rand_trials: OneOrMany::One(5),
        cooling_rate: OneOrMany::One(0.99),
        horizon: 40,
        mc_sims: 5,
        is_community: true,
        rand_envs: false,
        node_mutation_chance: NodeMutationChance::Scalar(0.0),
        seed: 101,
    }
}

/// Cumulative pseudo-regret can only ever grow or stay flat within a single
/// run, for every level the experiment sweeps over.
#[test]
fn cumulative_pseudo_regret_never_decreases_across_any_trial() {
    let config = two_arm_config();
    let table = run_experiment(&config).unwrap();
    for level in ["Solo", "Naive"] {
        let rows = table.cpr(level);
        assert_eq!(rows.len(), config.mc_sims);
        for row in rows {
            assert_eq!(row.len(), config.horizon);
            for window in row.windows(2) {
                assert!(window[1] >= window[0] - 1e-12);
            }
        }
    }
}
