/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::HashMap;

/// Output contract external CSV/XLSX/plotting collaborators consume: one
/// `cpr`/`poa` bucket per level of the swept independent variable, each
/// shaped `trials × horizon` with every agent's trajectory from every
/// Monte-Carlo trial appended as its own row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    cpr: HashMap<String, Vec<Vec<f64>>>,
    poa: HashMap<String, Vec<Vec<u8>>>,
}

impl ResultTable {
    pub fn new() -> Self {
        ResultTable::default()
    }

    pub fn push(&mut self, level: &str, cpr: Vec<f64>, poa: Vec<u8>) {
        self.cpr.entry(level.to_string()).or_default().push(cpr);
        self.poa.entry(level.to_string()).or_default().push(poa);
    }

    pub fn cpr(&self, level: &str) -> &[Vec<f64>] {
        self.cpr.get(level).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn poa(&self, level: &str) -> &[Vec<u8>] {
        self.poa.get(level).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn levels(&self) -> impl Iterator<Item = &str> {
        self.cpr.keys().map(String::as_str)
    }

    /// Merges another table's rows into this one, concatenating per-level
    /// — the pure-merge step each parallel Monte-Carlo worker's partial
    /// results go through.
    pub fn extend(&mut self, other: ResultTable) {
        for (level, rows) in other.cpr {
            self.cpr.entry(level).or_default().extend(rows);
        }
        for (level, rows) in other.poa {
            self.poa.entry(level).or_default().extend(rows);
        }
    }
}
