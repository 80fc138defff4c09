/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use causal_bandit_rand::{BetaDistributionError, RngError};

#[test]
fn test_display() {
    assert_eq!(
        BetaDistributionError::NonPositiveShape.to_string(),
        "alpha and beta must be strictly positive in Beta distribution"
    );
}

#[test]
fn test_into_rng_error() {
    let err: RngError = BetaDistributionError::NonPositiveShape.into();
    assert_eq!(
        err,
        RngError::InvalidRange(
            "alpha and beta must be strictly positive in Beta distribution".to_string()
        )
    );
}
