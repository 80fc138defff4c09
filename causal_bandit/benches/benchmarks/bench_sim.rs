/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::HashMap;

use criterion::{criterion_group, Criterion};

use causal_bandit::agent::Otp;
use causal_bandit::process::config::{
    AsrKind, DiscreteRow, EnvironmentSpec, GraphSpec, NodeKindSpec, NodeModelSpec,
    NodeMutationChance, OneOrMany,
};
use causal_bandit::run_experiment;
use causal_bandit::ExperimentConfig;

fn config() -> ExperimentConfig {
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
        horizon: 50,
        mc_sims: 10,
        is_community: true,
        rand_envs: false,
        node_mutation_chance: NodeMutationChance::Scalar(0.0),
        seed: 7,
    }
}

fn monte_carlo_trial_benchmark(criterion: &mut Criterion) {
    let cfg = config();
    criterion.bench_function("run_experiment_four_otp_levels", |b| {
        b.iter(|| run_experiment(&cfg).unwrap())
    });
}

criterion_group! {
    name = monte_carlo_trial;
    config = Criterion::default().sample_size(20);
    targets =
        monte_carlo_trial_benchmark,
}
