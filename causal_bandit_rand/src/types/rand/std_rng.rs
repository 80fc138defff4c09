/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::traits::{Rng, RngCore};

/// xoshiro256** pseudo-random generator.
///
/// Deterministic and splittable: two generators seeded with different `u64`s
/// (e.g. `base_seed ^ worker_index`) produce independent, reproducible
/// streams, which is the property the Monte-Carlo driver relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StdRng {
    s: [u64; 4],
}

impl StdRng {
    /// Seeds the generator deterministically from a single `u64` via
    /// splitmix64, matching the seeding scheme used to expand a 64-bit trial
    /// seed into full xoshiro256 state.
    pub fn seed_from_u64(seed: u64) -> Self {
        let mut sm = seed;
        let mut next_sm = || {
            sm = sm.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = sm;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            z ^ (z >> 31)
        };
        let s = [next_sm(), next_sm(), next_sm(), next_sm()];
        StdRng { s }
    }

    /// Seeds from a source of non-deterministic entropy: wall-clock time
    /// mixed with a process-local counter, so concurrent callers never
    /// collide even when invoked in the same nanosecond.
    pub fn from_entropy() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let count = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self::seed_from_u64(nanos ^ count.wrapping_mul(0x2545_F491_4F6C_DD1D))
    }

    pub fn new() -> Self {
        Self::from_entropy()
    }

    fn next(&mut self) -> u64 {
        let result = self.s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }
}

impl Default for StdRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngCore for StdRng {
    fn next_u32(&mut self) -> u32 {
        self.next() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }
}

impl Rng for StdRng {}

/// Convenience constructor for a non-deterministically seeded [`StdRng`].
pub fn rng() -> StdRng {
    StdRng::from_entropy()
}
