/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use causal_bandit_rand::{Distribution, Rng, RngCore, StandardUniform};

struct MockRng {
    values: Vec<u32>,
    index: usize,
}

impl MockRng {
    fn new(values: Vec<u32>) -> Self {
        MockRng { values, index: 0 }
    }
}

impl RngCore for MockRng {
    fn next_u32(&mut self) -> u32 {
        let val = self.values[self.index];
        self.index = (self.index + 1) % self.values.len();
        val
    }
    fn next_u64(&mut self) -> u64 {
        self.next_u32() as u64
    }
}

impl Rng for MockRng {}

#[derive(Clone, Copy)]
struct MockDistribution {
    value: u32,
}

impl Distribution<u32> for MockDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.next_u32() + self.value
    }
}

#[test]
fn test_distribution_sample() {
    let mut rng = MockRng::new(vec![10, 20, 30]);
    let dist = MockDistribution { value: 1 };
    assert_eq!(dist.sample(&mut rng), 11);
    assert_eq!(dist.sample(&mut rng), 21);
}

#[test]
fn test_distribution_sample_iter() {
    let mut rng = MockRng::new(vec![10, 20, 30]);
    let dist = MockDistribution { value: 1 };
    let mut iter = dist.sample_iter(&mut rng);

    assert_eq!(iter.next().unwrap(), 11);
    assert_eq!(iter.next().unwrap(), 21);
    assert_eq!(iter.next().unwrap(), 31);
    assert_eq!(iter.next().unwrap(), 11);
}

#[test]
fn test_distribution_map() {
    let mut rng = MockRng::new(vec![10, 20, 30]);
    let dist = MockDistribution { value: 1 };
    let mapped_dist = dist.map(|x| x * 2);

    assert_eq!(mapped_dist.sample(&mut rng), 22);
    assert_eq!(mapped_dist.sample(&mut rng), 42);
}

#[test]
fn test_distribution_map_with_standard_uniform() {
    let mut rng = MockRng::new(vec![10, 20, 30]);
    let dist = StandardUniform;
    let mapped_dist = dist.map(|x: u32| x as f32 / 100.0);

    assert_eq!(mapped_dist.sample(&mut rng), 0.10);
    assert_eq!(mapped_dist.sample(&mut rng), 0.20);
}
