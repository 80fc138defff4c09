/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use crate::errors::UniformDistributionError;
use crate::traits::rng::Rng;
use crate::traits::sample_borrow::SampleBorrow;

/// A type for which a [`Uniform`] distribution can be built.
///
/// [`Uniform`]: crate::types::dist::uniform::Uniform
pub trait SampleUniform: Sized {
    type Sampler: UniformSampler<X = Self>;
}

/// Back-end that actually draws uniformly distributed values of `Self::X`.
pub trait UniformSampler: Sized {
    type X;

    fn new<B1, B2>(low: B1, high: B2) -> Result<Self, UniformDistributionError>
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized;

    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Result<Self, UniformDistributionError>
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized;

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X;
}
