/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

/// Which peers' evidence an agent folds into its own belief state before
/// choosing an action. A closed, four-way tag matched directly in
/// [`crate::agent::Agent`]'s methods, in keeping with the rest of this
/// crate's tagged-variant types (`AssignmentModel`, `Expr`,
/// `TransportFormula`) rather than a `Box<dyn Strategy>` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Otp {
    /// Uses only its own observations.
    Solo,
    /// Pools every peer's observations unconditionally.
    Naive,
    /// Pools a peer's observations only when every node that peer diverges
    /// on is itself conditioned on by the agent's features.
    Sensitive,
    /// Pools a peer's observations node-by-node, admitting a node unless it
    /// is individually flagged divergent, and otherwise falls back to a
    /// transport-formula-gated, per-peer weighted reward estimate along the
    /// action-to-reward causal path.
    Adjust,
}
