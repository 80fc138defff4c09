/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use crate::errors::UniformDistributionError;
use crate::traits::{Distribution, Rng, SampleBorrow, SampleUniform, UniformSampler};

/// A uniform distribution over `[low, high)` (or `[low, high]` via
/// `new_inclusive`) for any type with a [`SampleUniform`] implementation.
#[derive(Debug, Clone, Copy)]
pub struct Uniform<T: SampleUniform>(T::Sampler);

impl<T: SampleUniform> Uniform<T> {
    pub fn new<B1, B2>(low: B1, high: B2) -> Result<Self, UniformDistributionError>
    where
        B1: SampleBorrow<T> + Sized,
        B2: SampleBorrow<T> + Sized,
    {
        Ok(Uniform(T::Sampler::new(low, high)?))
    }

    pub fn new_inclusive<B1, B2>(low: B1, high: B2) -> Result<Self, UniformDistributionError>
    where
        B1: SampleBorrow<T> + Sized,
        B2: SampleBorrow<T> + Sized,
    {
        Ok(Uniform(T::Sampler::new_inclusive(low, high)?))
    }
}

impl<T: SampleUniform> Distribution<T> for Uniform<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.0.sample(rng)
    }
}

macro_rules! impl_uniform_int {
    ($ty:ty, $sampler:ident) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $sampler {
            low: $ty,
            range: u64,
        }

        impl UniformSampler for $sampler {
            type X = $ty;

            fn new<B1, B2>(low: B1, high: B2) -> Result<Self, UniformDistributionError>
            where
                B1: SampleBorrow<Self::X> + Sized,
                B2: SampleBorrow<Self::X> + Sized,
            {
                let low = *low.borrow();
                let high = *high.borrow();
                if low >= high {
                    return Err(UniformDistributionError::InvalidRange);
                }
                Ok($sampler {
                    low,
                    range: (high as u64) - (low as u64),
                })
            }

            fn new_inclusive<B1, B2>(low: B1, high: B2) -> Result<Self, UniformDistributionError>
            where
                B1: SampleBorrow<Self::X> + Sized,
                B2: SampleBorrow<Self::X> + Sized,
            {
                let low = *low.borrow();
                let high = *high.borrow();
                if low > high {
                    return Err(UniformDistributionError::InvalidRange);
                }
                Ok($sampler {
                    low,
                    range: (high as u64) - (low as u64) + 1,
                })
            }

            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
                let offset = rng.next_u64() % self.range;
                self.low + offset as $ty
            }
        }

        impl SampleUniform for $ty {
            type Sampler = $sampler;
        }
    };
}

impl_uniform_int!(u32, UniformU32Sampler);
impl_uniform_int!(u64, UniformU64Sampler);

macro_rules! impl_uniform_float {
    ($ty:ty, $sampler:ident) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $sampler {
            low: $ty,
            high: $ty,
        }

        impl UniformSampler for $sampler {
            type X = $ty;

            fn new<B1, B2>(low: B1, high: B2) -> Result<Self, UniformDistributionError>
            where
                B1: SampleBorrow<Self::X> + Sized,
                B2: SampleBorrow<Self::X> + Sized,
            {
                let low = *low.borrow();
                let high = *high.borrow();
                if !low.is_finite() || !high.is_finite() {
                    return Err(UniformDistributionError::NonFinite);
                }
                if low >= high {
                    return Err(UniformDistributionError::EmptyRange);
                }
                Ok($sampler { low, high })
            }

            fn new_inclusive<B1, B2>(low: B1, high: B2) -> Result<Self, UniformDistributionError>
            where
                B1: SampleBorrow<Self::X> + Sized,
                B2: SampleBorrow<Self::X> + Sized,
            {
                let low = *low.borrow();
                let high = *high.borrow();
                if !low.is_finite() || !high.is_finite() {
                    return Err(UniformDistributionError::NonFinite);
                }
                if low > high {
                    return Err(UniformDistributionError::EmptyRange);
                }
                Ok($sampler { low, high })
            }

            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
                let frac = rng.next_u64() as $ty / u64::MAX as $ty;
                self.low + frac * (self.high - self.low)
            }
        }

        impl SampleUniform for $ty {
            type Sampler = $sampler;
        }
    };
}

impl_uniform_float!(f32, UniformF32Sampler);
impl_uniform_float!(f64, UniformF64Sampler);
