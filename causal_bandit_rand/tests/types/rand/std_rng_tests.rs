/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use causal_bandit_rand::{rng, Rng, RngCore, StdRng};

#[test]
fn test_seed_from_u64_is_deterministic() {
    let mut a = StdRng::seed_from_u64(123);
    let mut b = StdRng::seed_from_u64(123);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = StdRng::seed_from_u64(1);
    let mut b = StdRng::seed_from_u64(2);
    assert_ne!(a.next_u64(), b.next_u64());
}

#[test]
fn test_worker_split_via_xor() {
    let base_seed = 0xC0FFEEu64;
    let mut worker_0 = StdRng::seed_from_u64(base_seed ^ 0);
    let mut worker_1 = StdRng::seed_from_u64(base_seed ^ 1);
    assert_ne!(worker_0.next_u64(), worker_1.next_u64());
}

#[test]
fn test_next_u32_produces_non_zero() {
    let mut r = StdRng::seed_from_u64(5);
    assert_ne!(r.next_u32(), 0);
}

#[test]
fn test_next_u64_produces_different_values() {
    let mut r = StdRng::seed_from_u64(5);
    let a = r.next_u64();
    let b = r.next_u64();
    assert_ne!(a, b);
}

#[test]
fn test_random_range_within_bounds() {
    let mut r = StdRng::seed_from_u64(9);
    let range = 10u64..20u64;
    let val = r.random_range(range.clone());
    assert!(val >= range.start && val < range.end);
}

#[test]
#[should_panic(expected = "cannot sample empty range")]
fn test_random_range_invalid_panics() {
    let mut r = StdRng::seed_from_u64(9);
    let _ = r.random_range(10u64..10u64);
}

#[test]
fn test_fill_bytes_not_all_zero() {
    let mut r = StdRng::seed_from_u64(11);
    let mut buffer = [0u8; 16];
    r.fill_bytes(&mut buffer);
    assert!(!buffer.iter().all(|&x| x == 0));
}

#[test]
fn test_rng_free_function_seeds_independently() {
    let mut r1 = rng();
    let mut r2 = rng();
    assert_ne!(r1.next_u64(), r2.next_u64());
}
