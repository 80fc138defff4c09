/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use causal_bandit_rand::RngError;

#[test]
fn test_os_random_generator_display() {
    let err = RngError::OsRandomGenerator("seed source exhausted".to_string());
    assert_eq!(err.to_string(), "OS random generator error: seed source exhausted");
}

#[test]
fn test_invalid_range_display() {
    let err = RngError::InvalidRange("low must be less than high".to_string());
    assert_eq!(err.to_string(), "Invalid range: low must be less than high");
}

#[test]
fn test_derived_traits() {
    let a = RngError::InvalidRange("x".to_string());
    let b = a.clone();
    assert_eq!(a, b);
}
