/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use causal_bandit_rand::{rng, Beta, BetaDistributionError, Distribution};

#[test]
fn test_new_rejects_non_positive_shapes() {
    assert_eq!(Beta::new(0.0, 1.0).unwrap_err(), BetaDistributionError::NonPositiveShape);
    assert_eq!(Beta::new(1.0, 0.0).unwrap_err(), BetaDistributionError::NonPositiveShape);
    assert_eq!(Beta::new(-1.0, 1.0).unwrap_err(), BetaDistributionError::NonPositiveShape);
    assert_eq!(
        Beta::new(f64::INFINITY, 1.0).unwrap_err(),
        BetaDistributionError::NonPositiveShape
    );
}

#[test]
fn test_getters() {
    let beta = Beta::new(2.0, 3.0).unwrap();
    assert_eq!(beta.alpha(), 2.0);
    assert_eq!(beta.beta(), 3.0);
}

#[test]
fn test_sample_is_within_unit_interval() {
    let beta = Beta::new(2.0, 5.0).unwrap();
    let mut rng = rng();
    for _ in 0..1000 {
        let sample = beta.sample(&mut rng);
        assert!((0.0..=1.0).contains(&sample));
    }
}

#[test]
fn test_sample_mean_converges_to_alpha_over_alpha_plus_beta() {
    let alpha = 2.0;
    let beta_param = 8.0;
    let beta = Beta::new(alpha, beta_param).unwrap();
    let mut rng = rng();
    const N: usize = 20_000;
    let mut sum = 0.0;
    for _ in 0..N {
        sum += beta.sample(&mut rng);
    }
    let mean = sum / N as f64;
    let expected = alpha / (alpha + beta_param);
    assert!((mean - expected).abs() < 0.02);
}
