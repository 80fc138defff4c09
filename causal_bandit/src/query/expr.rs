/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::HashMap;

use crate::alias::{Domain, NodeId};
use crate::query::{Assignment, CptMap, Query};

/// The recursive algebraic expression tree over atomic queries: `Product`
/// (`[]` solves to `1`), `Summation` (`[]` solves to `0`), and `Quotient`,
/// which composes any two solvable sub-expressions rather than being a
/// variant of the additive/multiplicative family.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Atomic(Query),
    Product(Vec<Expr>),
    Summation(Vec<Expr>),
    Quotient(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn all_assigned(&self) -> bool {
        match self {
            Expr::Atomic(q) => q.all_assigned(),
            Expr::Product(terms) | Expr::Summation(terms) => {
                terms.iter().all(Expr::all_assigned)
            }
            Expr::Quotient(n, d) => n.all_assigned() && d.all_assigned(),
        }
    }

    /// Rewrites every leaf `Query`'s matching entry; a no-op where the
    /// variable doesn't appear.
    pub fn assign_one(&mut self, var: &NodeId, value: Assignment) {
        match self {
            Expr::Atomic(q) => q.assign_one(var, value),
            Expr::Product(terms) | Expr::Summation(terms) => {
                for t in terms.iter_mut() {
                    t.assign_one(var, value.clone());
                }
            }
            Expr::Quotient(n, d) => {
                n.assign_one(var, value.clone());
                d.assign_one(var, value);
            }
        }
    }

    fn set_domain_if_unassigned(&mut self, var: &NodeId, domain: &Domain) {
        match self {
            Expr::Atomic(q) => q.set_domain_if_unassigned(var, domain),
            Expr::Product(terms) | Expr::Summation(terms) => {
                for t in terms.iter_mut() {
                    t.set_domain_if_unassigned(var, domain);
                }
            }
            Expr::Quotient(n, d) => {
                n.set_domain_if_unassigned(var, domain);
                d.set_domain_if_unassigned(var, domain);
            }
        }
    }

    fn first_domain_var(&self) -> Option<(NodeId, Domain)> {
        match self {
            Expr::Atomic(q) => q.first_domain_var(),
            Expr::Product(terms) | Expr::Summation(terms) => {
                terms.iter().find_map(Expr::first_domain_var)
            }
            Expr::Quotient(n, d) => n.first_domain_var().or_else(|| d.first_domain_var()),
        }
    }

    /// Attaches `domains` to any currently-`Unassigned` matching variables,
    /// then peels one `Domain`-state variable at a time — replicating the
    /// expression across its domain — until every variable is `Assigned`,
    /// wrapping the accumulated leaves in a `Summation`. Each call builds a
    /// fresh accumulator; unlike the Python this is ported from, there is no
    /// mutable default-argument state carried between calls.
    pub fn over(&self, domains: &HashMap<NodeId, Domain>) -> Expr {
        let mut expr = self.clone();
        for (var, dom) in domains {
            expr.set_domain_if_unassigned(var, dom);
        }
        expr.expand_all_domains()
    }

    fn expand_all_domains(&self) -> Expr {
        match self.first_domain_var() {
            None => self.clone(),
            Some((var, dom)) => {
                let branches: Vec<Expr> = dom
                    .iter()
                    .map(|v| {
                        let mut clone = self.clone();
                        clone.assign_one(&var, Assignment::Assigned(*v));
                        clone
                    })
                    .collect();
                Expr::Summation(branches).expand_all_domains()
            }
        }
    }

    /// Evaluates the expression against `cpts`, expanding unassigned
    /// dimensions via [`Expr::over`] first if necessary. Any `None` factor
    /// collapses a `Product`; any `None` summand collapses a `Summation`;
    /// a zero or undefined denominator collapses a `Quotient`.
    pub fn evaluate(&self, cpts: &CptMap) -> Option<f64> {
        if !self.all_assigned() {
            let expanded = self.over(&domains_from(cpts));
            // `over` only promotes variables already in `Domain` state; a
            // bare `Unassigned` variable with no domain on offer in `cpts`
            // stays unassigned forever, so bail instead of recursing.
            if !expanded.all_assigned() {
                return None;
            }
            return expanded.evaluate(cpts);
        }
        match self {
            Expr::Atomic(q) => q.evaluate(cpts),
            Expr::Product(terms) => terms
                .iter()
                .try_fold(1.0_f64, |acc, t| t.evaluate(cpts).map(|v| acc * v)),
            Expr::Summation(terms) => terms
                .iter()
                .try_fold(0.0_f64, |acc, t| t.evaluate(cpts).map(|v| acc + v)),
            Expr::Quotient(n, d) => {
                let nv = n.evaluate(cpts)?;
                let dv = d.evaluate(cpts)?;
                if dv == 0.0 {
                    None
                } else {
                    Some(nv / dv)
                }
            }
        }
    }
}

/// Unions every CPT's own variable domains (its node plus its parents) into
/// one lookup, the set [`Expr::evaluate`] draws on to expand variables left
/// `Unassigned` by the caller.
fn domains_from(cpts: &CptMap) -> HashMap<NodeId, Domain> {
    let mut domains = HashMap::new();
    for cpt in cpts.values() {
        for (var, dom) in cpt.domains() {
            domains.entry(var.clone()).or_insert_with(|| dom.clone());
        }
    }
    domains
}

impl Query {
    fn first_domain_var(&self) -> Option<(NodeId, Domain)> {
        self.q()
            .iter()
            .chain(self.e().iter())
            .find_map(|(k, a)| match a {
                Assignment::Domain(d) => Some((k.clone(), d.clone())),
                _ => None,
            })
    }

    fn set_domain_if_unassigned(&mut self, var: &NodeId, domain: &Domain) {
        self.set_if_unassigned(var, domain.clone());
    }
}
