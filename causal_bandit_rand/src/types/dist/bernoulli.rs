/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use crate::errors::BernoulliDistributionError;
use crate::traits::{Distribution, Rng};

const SCALE: f64 = 2.0 * (1u64 << 63) as f64;

/// A coin flip with probability `p` of returning `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bernoulli {
    p_int: u64,
}

impl Bernoulli {
    pub fn new(p: f64) -> Result<Self, BernoulliDistributionError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(BernoulliDistributionError::InvalidProbability);
        }
        if p == 1.0 {
            return Ok(Bernoulli { p_int: u64::MAX });
        }
        Ok(Bernoulli {
            p_int: (p * SCALE) as u64,
        })
    }

    pub fn from_ratio(numerator: u32, denominator: u32) -> Result<Self, BernoulliDistributionError> {
        if denominator == 0 || numerator > denominator {
            return Err(BernoulliDistributionError::InvalidProbability);
        }
        if numerator == denominator {
            return Ok(Bernoulli { p_int: u64::MAX });
        }
        Ok(Bernoulli {
            p_int: ((numerator as f64 / denominator as f64) * SCALE) as u64,
        })
    }

    pub fn p(&self) -> f64 {
        self.p_int as f64 / SCALE
    }
}

impl Distribution<bool> for Bernoulli {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        if self.p_int == u64::MAX {
            return true;
        }
        rng.next_u64() < self.p_int
    }
}
