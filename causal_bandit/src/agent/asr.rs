/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::HashMap;

/// Action-selection rule. Each non-Thompson variant keeps its own
/// per-context mutable state, keyed by the feature assignment an agent faces
/// when `choose` is called — a fresh context starts its own counter/cooling
/// schedule rather than sharing one across the whole domain.
#[derive(Debug, Clone, PartialEq)]
pub enum Asr {
    EpsilonGreedy {
        epsilon: f64,
    },
    EpsilonFirst {
        rand_trials: u64,
        remaining: HashMap<Vec<i64>, u64>,
    },
    EpsilonDecreasing {
        cooling_rate: f64,
        epsilon: HashMap<Vec<i64>, f64>,
    },
    Thompson,
}

impl Asr {
    pub fn epsilon_greedy(epsilon: f64) -> Self {
        Asr::EpsilonGreedy { epsilon }
    }

    pub fn epsilon_first(rand_trials: u64) -> Self {
        Asr::EpsilonFirst {
            rand_trials,
            remaining: HashMap::new(),
        }
    }

    /// Per-context epsilon starts at `1.0` and is multiplied by
    /// `cooling_rate` on every `choose` call for that context, whether or
    /// not the call happened to draw randomly.
    pub fn epsilon_decreasing(cooling_rate: f64) -> Self {
        Asr::EpsilonDecreasing {
            cooling_rate,
            epsilon: HashMap::new(),
        }
    }

    pub fn thompson() -> Self {
        Asr::Thompson
    }
}
