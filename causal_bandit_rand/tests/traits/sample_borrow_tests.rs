/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use causal_bandit_rand::SampleBorrow;

#[derive(Debug, PartialEq)]
struct MockSampleUniform(u32);

#[test]
fn test_sample_borrow_for_direct_type() {
    let value = MockSampleUniform(42);
    let borrowed_ref = value.borrow();
    assert_eq!(borrowed_ref, &value);
    assert_eq!(borrowed_ref.0, 42);
}

#[test]
fn test_sample_borrow_for_reference_type() {
    let value = MockSampleUniform(100);
    let value_ref = &value;
    let borrowed_ref = value_ref.borrow();
    assert_eq!(borrowed_ref, &value);
    assert_eq!(borrowed_ref.0, 100);
}
