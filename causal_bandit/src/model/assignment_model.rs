/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::HashMap;

use causal_bandit_rand::{Distribution, Rng, Uniform, UniformSimplex};

use crate::alias::{Domain, NodeId};
use crate::errors::{ConfigError, ModelError};

const NORMALIZATION_TOLERANCE: f64 = 1e-9;

/// A node-local probability mechanism: a tagged variant rather than a
/// trait-object hierarchy, since the three shapes (`Random`/`Discrete`/
/// `Action`) are closed and known up front.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentModel {
    Random {
        probs: Vec<f64>,
    },
    Discrete {
        parents: Vec<NodeId>,
        table: HashMap<Vec<i64>, Vec<f64>>,
    },
    Action {
        parents: Vec<NodeId>,
        domain: Domain,
    },
}

fn row_normalized(probs: &[f64]) -> bool {
    (probs.iter().sum::<f64>() - 1.0).abs() <= NORMALIZATION_TOLERANCE
}

fn sample_categorical(probs: &[f64], rng: &mut impl Rng) -> i64 {
    let u = Uniform::new(0.0, 1.0)
        .expect("0.0..1.0 is always a valid range")
        .sample(rng);
    let mut cumulative = 0.0;
    for (i, p) in probs.iter().enumerate() {
        cumulative += p;
        if u < cumulative {
            return i as i64;
        }
    }
    (probs.len() - 1) as i64
}

impl AssignmentModel {
    pub fn random(node: &NodeId, probs: Vec<f64>) -> Result<Self, ConfigError> {
        if !row_normalized(&probs) {
            return Err(ConfigError::RowNotNormalized(node.clone()));
        }
        Ok(AssignmentModel::Random { probs })
    }

    /// `table` must be total over the Cartesian product of `parent_domains`
    /// (one row per combination) and every row must sum to 1 within
    /// `1e-9`.
    pub fn discrete(
        node: &NodeId,
        parents: Vec<NodeId>,
        table: HashMap<Vec<i64>, Vec<f64>>,
        parent_domains: &[Domain],
    ) -> Result<Self, ConfigError> {
        let expected_rows = cartesian_product(parent_domains);
        if expected_rows.len() != table.len()
            || expected_rows.iter().any(|k| !table.contains_key(k))
        {
            return Err(ConfigError::IncompleteTable(node.clone()));
        }
        if table.values().any(|row| !row_normalized(row)) {
            return Err(ConfigError::RowNotNormalized(node.clone()));
        }
        Ok(AssignmentModel::Discrete { parents, table })
    }

    pub fn action(parents: Vec<NodeId>, domain: Domain) -> Self {
        AssignmentModel::Action { parents, domain }
    }

    pub fn parents(&self) -> &[NodeId] {
        match self {
            AssignmentModel::Random { .. } => &[],
            AssignmentModel::Discrete { parents, .. } => parents,
            AssignmentModel::Action { parents, .. } => parents,
        }
    }

    pub fn domain_size(&self) -> usize {
        match self {
            AssignmentModel::Random { probs } => probs.len(),
            AssignmentModel::Discrete { table, .. } => {
                table.values().next().map_or(0, Vec::len)
            }
            AssignmentModel::Action { domain, .. } => domain.len(),
        }
    }

    /// Samples a value given already-sampled parent values, or (for
    /// `Action` nodes) an externally supplied intervention value. Missing
    /// intervention values are fatal.
    pub fn sample(
        &self,
        node: &NodeId,
        rng: &mut impl Rng,
        parent_values: &HashMap<NodeId, i64>,
        set_value: Option<i64>,
    ) -> Result<i64, ModelError> {
        match self {
            AssignmentModel::Random { probs } => Ok(sample_categorical(probs, rng)),
            AssignmentModel::Discrete { parents, table } => {
                let key: Vec<i64> = parents
                    .iter()
                    .map(|p| *parent_values.get(p).expect("parent sampled before child"))
                    .collect();
                let row = table
                    .get(&key)
                    .expect("Discrete model validated total over parent domains");
                Ok(sample_categorical(row, rng))
            }
            AssignmentModel::Action { .. } => {
                set_value.ok_or_else(|| ModelError::MissingActionValue(node.clone()))
            }
        }
    }

    /// Dirichlet-like resampling: replaces each row of probabilities with a
    /// uniformly-random point on its simplex. `Action` stubs have no
    /// parameters and are returned unchanged.
    pub fn randomize(&self, rng: &mut impl Rng) -> Self {
        match self {
            AssignmentModel::Random { probs } => AssignmentModel::Random {
                probs: UniformSimplex::new(probs.len())
                    .expect("a constructed model always has a non-empty domain")
                    .sample(rng),
            },
            AssignmentModel::Discrete { parents, table } => {
                let row_len = table.values().next().map_or(0, Vec::len);
                let simplex = UniformSimplex::new(row_len)
                    .expect("a constructed model always has a non-empty domain");
                let table = table
                    .iter()
                    .map(|(k, _)| (k.clone(), simplex.sample(rng)))
                    .collect();
                AssignmentModel::Discrete {
                    parents: parents.clone(),
                    table,
                }
            }
            AssignmentModel::Action { .. } => self.clone(),
        }
    }
}


fn cartesian_product(domains: &[Domain]) -> Vec<Vec<i64>> {
    let mut rows: Vec<Vec<i64>> = vec![Vec::new()];
    for d in domains {
        rows = rows
            .into_iter()
            .flat_map(|prefix| {
                d.iter().map(move |val| {
                    let mut next = prefix.clone();
                    next.push(*val);
                    next
                })
            })
            .collect();
    }
    rows
}
