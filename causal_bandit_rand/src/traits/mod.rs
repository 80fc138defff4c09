/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

mod distribution;
mod rng;
mod rng_core;
mod sample_borrow;
mod sample_range;
mod sample_uniform;

pub use distribution::{DistIter, DistMap, Distribution};
pub use rng::Rng;
pub use rng_core::RngCore;
pub use sample_borrow::SampleBorrow;
pub use sample_range::SampleRange;
pub use sample_uniform::{SampleUniform, UniformSampler};
