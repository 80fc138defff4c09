/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use crate::errors::UniformDistributionError;
use crate::traits::{Distribution, Rng};
use crate::types::dist::beta::sample_gamma;

/// A uniform distribution over the `(k-1)`-probability simplex, i.e. vectors
/// of `k` non-negative entries summing to one. Equivalent to `Dirichlet(1,
/// ..., 1)`: each coordinate is an independent `Gamma(1, 1)` draw normalized
/// by their sum. Used to resample a fresh conditional-probability row when an
/// assignment model's domain is randomized rather than fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformSimplex {
    dimensions: usize,
}

impl UniformSimplex {
    pub fn new(dimensions: usize) -> Result<Self, UniformDistributionError> {
        if dimensions == 0 {
            return Err(UniformDistributionError::EmptyRange);
        }
        Ok(UniformSimplex { dimensions })
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

impl Distribution<Vec<f64>> for UniformSimplex {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        if self.dimensions == 1 {
            return vec![1.0];
        }
        let draws: Vec<f64> = (0..self.dimensions).map(|_| sample_gamma(1.0, rng)).collect();
        let total: f64 = draws.iter().sum();
        draws.into_iter().map(|v| v / total).collect()
    }
}
