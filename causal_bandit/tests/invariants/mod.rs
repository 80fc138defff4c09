/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

mod adjacency_sanity;
mod monotone_regret;
mod total_probability;
