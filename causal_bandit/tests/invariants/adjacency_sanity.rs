/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use causal_bandit::alias::NodeId;
use causal_bandit::graph::{GraphCore, NodeKind};

fn n(s: &str) -> NodeId {
    NodeId::new(s)
}

/// Every edge `(u, v)` supplied at construction must show up as `v` being a
/// child of `u` and `u` being a parent of `v` — never one without the other.
#[test]
fn every_edge_is_symmetric_across_children_and_parents_maps() {
    let graph = GraphCore::new(
        vec![
            (n("C"), NodeKind::Observed),
            (n("X"), NodeKind::Observed),
            (n("M"), NodeKind::Observed),
            (n("Y"), NodeKind::Observed),
        ],
        vec![
            (n("C"), n("X")),
            (n("C"), n("Y")),
            (n("X"), n("M")),
            (n("M"), n("Y")),
        ],
    )
    .unwrap();

    for (u, v) in [(n("C"), n("X")), (n("C"), n("Y")), (n("X"), n("M")), (n("M"), n("Y"))] {
        assert!(graph.children(&u).unwrap().contains(&v));
        assert!(graph.parents(&v).unwrap().contains(&u));
    }
}

#[test]
fn a_cycle_is_rejected_at_construction() {
    let result = GraphCore::new(
        vec![(n("X"), NodeKind::Observed), (n("Y"), NodeKind::Observed)],
        vec![(n("X"), n("Y")), (n("Y"), n("X"))],
    );
    assert!(result.is_err());
}

#[test]
fn an_edge_to_an_unknown_node_is_rejected_at_construction() {
    let result = GraphCore::new(
        vec![(n("X"), NodeKind::Observed)],
        vec![(n("X"), n("Ghost"))],
    );
    assert!(result.is_err());
}
