/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

mod adjustment;
mod d_separation;
mod graph_core;
mod transport;

pub use graph_core::{GraphCore, NodeKind};
pub use transport::{conditional_from_cpts, TransportFormula};
