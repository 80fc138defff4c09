/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::error::Error;
use std::fmt;

use crate::alias::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    UnknownNode(NodeId),
    CycleDetected,
    /// A triple along a simple path in the skeleton matched none of the four
    /// directed-edge patterns (chain/chain/fork/collider) during d-separation.
    UnclassifiableTriple(NodeId, NodeId, NodeId),
    DuplicateActionNode(NodeId),
    /// A selection/latent/set node violates its kind's structural
    /// invariant (e.g. an S-node with in-degree > 0, a latent point
    /// without exactly two children).
    InvalidNodeKind(NodeId),
}

impl Error for GraphError {}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownNode(id) => write!(f, "GraphError: unknown node '{id}'"),
            GraphError::CycleDetected => write!(f, "GraphError: cycle detected"),
            GraphError::UnclassifiableTriple(a, b, c) => write!(
                f,
                "GraphError: unclassifiable triple ({a}, {b}, {c}) in skeleton"
            ),
            GraphError::DuplicateActionNode(id) => {
                write!(f, "GraphError: duplicate action node '{id}'")
            }
            GraphError::InvalidNodeKind(id) => {
                write!(f, "GraphError: node '{id}' violates its kind's structural invariant")
            }
        }
    }
}
