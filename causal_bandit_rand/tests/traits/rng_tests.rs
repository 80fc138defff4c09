/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use causal_bandit_rand::{Rng, StdRng};

#[test]
fn test_random_range_produces_value_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    let range = 10u64..20u64;
    for _ in 0..100 {
        let val = rng.random_range(range.clone());
        assert!(val >= range.start && val < range.end);
    }
}

#[test]
#[should_panic(expected = "cannot sample empty range")]
fn test_random_range_empty_panics() {
    let mut rng = StdRng::seed_from_u64(7);
    let _ = rng.random_range(10u64..10u64);
}

#[test]
fn test_random_bool_edge_cases() {
    let mut rng = StdRng::seed_from_u64(42);
    assert!(rng.random_bool(1.0));
    assert!(!rng.random_bool(0.0));
}

#[test]
#[should_panic]
fn test_random_bool_rejects_out_of_range_probability() {
    let mut rng = StdRng::seed_from_u64(1);
    let _ = rng.random_bool(1.1);
}

#[test]
fn test_random_bool_distribution_is_roughly_balanced() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut trues = 0;
    const N: usize = 2000;
    for _ in 0..N {
        if rng.random_bool(0.5) {
            trues += 1;
        }
    }
    assert!((trues as f64 - N as f64 / 2.0).abs() < N as f64 * 0.1);
}

#[test]
fn test_random_ratio_edge_cases() {
    let mut rng = StdRng::seed_from_u64(3);
    assert!(rng.random_ratio(1, 1));
    assert!(!rng.random_ratio(0, 1));
}

#[test]
#[should_panic]
fn test_random_ratio_rejects_numerator_over_denominator() {
    let mut rng = StdRng::seed_from_u64(3);
    let _ = rng.random_ratio(2, 1);
}
