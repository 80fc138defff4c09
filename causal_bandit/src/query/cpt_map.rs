/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::HashMap;

use crate::alias::NodeId;
use crate::cpt::Cpt;

/// The policy-specific view of an agent's knowledge handed to the query
/// algebra: one [`Cpt`] per node, keyed by node id.
pub type CptMap = HashMap<NodeId, Cpt>;
