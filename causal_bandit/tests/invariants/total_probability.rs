/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::HashMap;

use causal_bandit::alias::{Domain, NodeId};
use causal_bandit::cpt::Cpt;
use causal_bandit::query::{Assignment, CptMap, Expr, Query};

fn n(s: &str) -> NodeId {
    NodeId::new(s)
}

fn cpts() -> CptMap {
    let mut domains = HashMap::new();
    domains.insert(n("Y"), Domain::range(3));
    domains.insert(n("A"), Domain::range(2));
    let mut cpt = Cpt::new(n("Y"), vec![n("A")], domains);
    for _ in 0..5 {
        cpt.add(&[(n("A"), 0), (n("Y"), 0)].into_iter().collect());
    }
    for _ in 0..3 {
        cpt.add(&[(n("A"), 0), (n("Y"), 1)].into_iter().collect());
    }
    for _ in 0..2 {
        cpt.add(&[(n("A"), 0), (n("Y"), 2)].into_iter().collect());
    }
    let mut map = CptMap::new();
    map.insert(n("Y"), cpt);
    map
}

/// Summing `P(Y = y | A = 0)` over every value of `y` must recover 1 — the
/// basic law of total probability any valid conditional distribution
/// satisfies.
#[test]
fn marginalizing_a_conditional_distribution_over_its_full_domain_sums_to_one() {
    let expr = Expr::Atomic(Query::new(
        n("Y"),
        [(n("Y"), Assignment::Unassigned)].into_iter().collect(),
        [(n("A"), Assignment::Assigned(0))].into_iter().collect(),
    ));
    let mut domains = HashMap::new();
    domains.insert(n("Y"), Domain::range(3));
    let marginalized = expr.over(&domains);
    let total = marginalized.evaluate(&cpts()).unwrap();
    assert!((total - 1.0).abs() < 1e-9);
}
