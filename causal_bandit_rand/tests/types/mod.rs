/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

#[path = "rand/mod.rs"]
mod rand;
#[path = "dist/mod.rs"]
mod dist;
