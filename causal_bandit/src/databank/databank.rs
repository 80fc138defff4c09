/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::collections::{HashMap, HashSet};

use crate::alias::NodeId;
use crate::databank::hellinger::hellinger_distance;
use crate::query::CptMap;

/// Shared store of per-agent sample sequences and pairwise, per-node
/// Hellinger divergence, mutated only by the orchestrating World within a
/// single Monte-Carlo trial — never shared across trials.
#[derive(Debug, Clone, Default)]
pub struct DataBank {
    agents: Vec<NodeId>,
    cpts: HashMap<NodeId, CptMap>,
    samples: HashMap<NodeId, Vec<HashMap<NodeId, i64>>>,
    /// `(a, b) -> node -> scaled Hellinger distance`, already scaled by the
    /// product of `node`'s parent-domain sizes at computation time.
    divergence: HashMap<(NodeId, NodeId), HashMap<NodeId, f64>>,
    tau: f64,
}

impl DataBank {
    pub fn new(tau: f64) -> Self {
        DataBank {
            tau,
            ..Default::default()
        }
    }

    pub fn tau(&self) -> f64 {
        self.tau
    }

    pub fn agents(&self) -> &[NodeId] {
        &self.agents
    }

    /// Appends an empty sample sequence and CPT view for `agent`. Its
    /// divergence against every existing peer starts undefined (treated as
    /// `+∞`, i.e. maximally divergent, until [`DataBank::update_divergence`]
    /// runs for the first time).
    pub fn add_agent(&mut self, agent: NodeId) {
        self.cpts.entry(agent.clone()).or_default();
        self.samples.entry(agent.clone()).or_default();
        self.agents.push(agent);
    }

    pub fn record_sample(&mut self, agent: &NodeId, sample: HashMap<NodeId, i64>) {
        self.samples
            .get_mut(agent)
            .expect("sample recorded for an agent not registered with add_agent")
            .push(sample);
    }

    /// Refreshes the cached view of `agent`'s own CPTs used when pooling
    /// peer evidence.
    pub fn sync_cpts(&mut self, agent: &NodeId, cpts: CptMap) {
        self.cpts.insert(agent.clone(), cpts);
    }

    pub fn cpts(&self, agent: &NodeId) -> Option<&CptMap> {
        self.cpts.get(agent)
    }

    pub fn samples(&self, agent: &NodeId) -> &[HashMap<NodeId, i64>] {
        self.samples.get(agent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The stored scaled Hellinger distance for `node` between `a` and `b`;
    /// `0` for `a == b`, `+∞` if it has never been computed.
    pub fn divergence(&self, a: &NodeId, b: &NodeId, node: &NodeId) -> f64 {
        if a == b {
            return 0.0;
        }
        self.divergence
            .get(&(a.clone(), b.clone()))
            .and_then(|m| m.get(node))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// Nodes where `a`'s stored divergence against `b` exceeds `tau`. Before
    /// the first [`DataBank::update_divergence`] call this conservatively
    /// returns every node `a` has a CPT for.
    pub fn div_nodes(&self, a: &NodeId, b: &NodeId) -> HashSet<NodeId> {
        if a == b {
            return HashSet::new();
        }
        match self.divergence.get(&(a.clone(), b.clone())) {
            Some(map) => map
                .iter()
                .filter(|(_, d)| **d > self.tau)
                .map(|(n, _)| n.clone())
                .collect(),
            None => self
                .cpts
                .get(a)
                .map(|c| c.keys().cloned().collect())
                .unwrap_or_default(),
        }
    }

    /// Peers whose divergence from `agent` is confined to `feature_vars` —
    /// i.e. every node they diverge on is one the agent conditions its
    /// choice on anyway.
    pub fn sensitive_peers(&self, agent: &NodeId, feature_vars: &HashSet<NodeId>) -> Vec<NodeId> {
        self.agents
            .iter()
            .filter(|peer| *peer != agent)
            .filter(|peer| self.div_nodes(agent, peer).is_subset(feature_vars))
            .cloned()
            .collect()
    }

    /// Recomputes the scaled Hellinger distance for every `(a, b, node)`
    /// triple where both agents have a CPT for `node`. `O(|Agents|² ·
    /// |Nodes| · rows)`.
    pub fn update_divergence(&mut self) {
        let agents = self.agents.clone();
        for a in &agents {
            for b in &agents {
                if a == b {
                    continue;
                }
                let mut per_node = HashMap::new();
                if let (Some(cpts_a), Some(cpts_b)) = (self.cpts.get(a), self.cpts.get(b)) {
                    for (node, cpt_a) in cpts_a {
                        let Some(cpt_b) = cpts_b.get(node) else {
                            continue;
                        };
                        let rows_a = cpt_a.rows();
                        let rows_b = cpt_b.rows();
                        let mut total = 0.0;
                        let mut undefined = false;
                        for (key, counts_a) in &rows_a {
                            match rows_b.get(key) {
                                Some(counts_b) => match hellinger_distance(counts_a, counts_b) {
                                    Some(d) => total += d,
                                    None => {
                                        undefined = true;
                                        break;
                                    }
                                },
                                None => {
                                    undefined = true;
                                    break;
                                }
                            }
                        }
                        per_node.insert(node.clone(), if undefined { f64::INFINITY } else { total });
                    }
                }
                self.divergence.insert((a.clone(), b.clone()), per_node);
            }
        }
    }
}
