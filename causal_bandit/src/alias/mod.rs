/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

mod alias_base;
mod domain;
mod node_id;

pub use alias_base::{Count, Probability};
pub use domain::Domain;
pub use node_id::NodeId;
