// SPDX-License-Identifier: MIT
// Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.

#![forbid(unsafe_code)]

pub mod errors;
pub mod traits;
pub mod types;

pub use errors::{
    BernoulliDistributionError, BetaDistributionError, RngError, UniformDistributionError,
};
pub use traits::{
    DistIter, DistMap, Distribution, Rng, RngCore, SampleBorrow, SampleRange, SampleUniform,
    UniformSampler,
};
pub use types::dist::{Bernoulli, Beta, StandardUniform, Uniform, UniformSimplex};
pub use types::rand::{rng, StdRng};
