/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use crate::traits::{Distribution, Rng, RngCore};

/// The "raw" distribution of a type: the full range of bit patterns a
/// generator can produce, reinterpreted as the target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardUniform;

impl Distribution<u32> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.next_u32()
    }
}

impl Distribution<u64> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        rng.next_u64()
    }
}

impl Distribution<bool> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.next_u64() % 2 == 0
    }
}
