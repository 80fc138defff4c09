/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use crate::alias::Count;

/// Hellinger distance between two empirical categorical distributions given
/// as raw counts over the same domain ordering. `None` when either side has
/// no observations at all — the caller treats that as maximal divergence.
pub fn hellinger_distance(p_counts: &[Count], q_counts: &[Count]) -> Option<f64> {
    let p_total: Count = p_counts.iter().sum();
    let q_total: Count = q_counts.iter().sum();
    if p_total == 0 || q_total == 0 {
        return None;
    }
    let sum_sq: f64 = p_counts
        .iter()
        .zip(q_counts.iter())
        .map(|(&p, &q)| {
            let pp = p as f64 / p_total as f64;
            let qq = q as f64 / q_total as f64;
            (pp.sqrt() - qq.sqrt()).powi(2)
        })
        .sum();
    Some((sum_sq / 2.0).sqrt())
}
