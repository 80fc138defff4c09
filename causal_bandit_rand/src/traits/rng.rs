/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use crate::traits::rng_core::RngCore;
use crate::traits::sample_range::SampleRange;

/// Extension of [`RngCore`] with the convenience sampling methods used
/// throughout the simulator: ranges, coin flips and ratios.
pub trait Rng: RngCore {
    fn random_range<T, R>(&mut self, range: R) -> T
    where
        R: SampleRange<T>,
    {
        if range.is_empty() {
            panic!("cannot sample empty range");
        }
        range
            .sample_single(self)
            .unwrap_or_else(|_| panic!("cannot sample empty range"))
    }

    fn random_bool(&mut self, p: f64) -> bool {
        assert!((0.0..=1.0).contains(&p), "p must lie in [0, 1]");
        if p >= 1.0 {
            return true;
        }
        if p <= 0.0 {
            return false;
        }
        let threshold = (p * u64::MAX as f64) as u64;
        self.next_u64() < threshold
    }

    fn random_ratio(&mut self, numerator: u32, denominator: u32) -> bool {
        assert!(denominator > 0, "denominator must be non-zero");
        assert!(numerator <= denominator, "numerator must not exceed denominator");
        if numerator == denominator {
            return true;
        }
        if numerator == 0 {
            return false;
        }
        self.random_bool(numerator as f64 / denominator as f64)
    }
}

impl<R: Rng + ?Sized> Rng for &mut R {}
