/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::HashMap;

use causal_bandit_rand::StdRng;

use crate::agent::{Agent, Asr, Otp};
use crate::alias::{Domain, NodeId};
use crate::cpt::Cpt;
use crate::environment::Environment;
use crate::graph::{GraphCore, NodeKind};
use crate::model::AssignmentModel;
use crate::query::CptMap;
use crate::scm::Scm;

pub(crate) fn context_node() -> NodeId {
    NodeId::new("X")
}

pub(crate) fn action_node() -> NodeId {
    NodeId::new("A")
}

pub(crate) fn reward_node() -> NodeId {
    NodeId::new("Y")
}

pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A minimal two-armed bandit: `X -> A -> Y`, `X -> Y`, with `Y`'s reward
/// probability depending on both the context and the chosen arm.
pub(crate) fn two_arm_environment() -> Environment {
    let nodes = vec![
        (context_node(), NodeKind::Observed),
        (action_node(), NodeKind::Observed),
        (reward_node(), NodeKind::Observed),
    ];
    let edges = vec![
        (context_node(), action_node()),
        (context_node(), reward_node()),
        (action_node(), reward_node()),
    ];
    let graph = GraphCore::new(nodes, edges).expect("fixture graph is acyclic");

    let mut models: HashMap<NodeId, AssignmentModel> = HashMap::new();
    models.insert(
        context_node(),
        AssignmentModel::random(&context_node(), vec![0.5, 0.5]).expect("fixture row normalized"),
    );
    models.insert(
        action_node(),
        AssignmentModel::action(vec![context_node()], Domain::range(2)),
    );

    let mut table: HashMap<Vec<i64>, Vec<f64>> = HashMap::new();
    table.insert(vec![0, 0], vec![0.8, 0.2]);
    table.insert(vec![0, 1], vec![0.2, 0.8]);
    table.insert(vec![1, 0], vec![0.3, 0.7]);
    table.insert(vec![1, 1], vec![0.6, 0.4]);
    models.insert(
        reward_node(),
        AssignmentModel::discrete(
            &reward_node(),
            vec![context_node(), action_node()],
            table,
            &[Domain::range(2), Domain::range(2)],
        )
        .expect("fixture table is total and row-normalized"),
    );

    let scm = Scm::new(graph, models);
    let mut rng = seeded_rng(42);
    Environment::new(scm, action_node(), reward_node(), &mut rng).expect("fixture environment builds")
}

/// One zero-initialised `Cpt` per node of `env`'s graph — the same shape
/// `Agent::new` expects for a freshly-constructed learner.
pub(crate) fn empty_cpts(env: &Environment) -> CptMap {
    let graph = env.scm().graph();
    let models = env.scm().models();
    let mut domains: HashMap<NodeId, Domain> = HashMap::new();
    for node in graph.nodes() {
        domains.insert(node.clone(), Domain::range(models[node].domain_size()));
    }
    let mut cpts = CptMap::new();
    for node in graph.nodes() {
        let parents = graph.parents(node).expect("fixture graph node").to_vec();
        cpts.insert(node.clone(), Cpt::new(node.clone(), parents, domains.clone()));
    }
    cpts
}

pub(crate) fn agent(id: &str, otp: Otp, asr: Asr, env: &Environment) -> Agent {
    Agent::new(NodeId::new(id), otp, asr, empty_cpts(env))
}
