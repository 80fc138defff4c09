/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::error::Error;
use std::fmt;

use super::{ConfigError, GraphError, ModelError, QueryError, SimError};

/// Top-level error type returned from the public `causal_bandit` API surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CausalBanditError {
    Config(ConfigError),
    Graph(GraphError),
    Model(ModelError),
    Query(QueryError),
    Sim(SimError),
}

impl Error for CausalBanditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CausalBanditError::Config(e) => Some(e),
            CausalBanditError::Graph(e) => Some(e),
            CausalBanditError::Model(e) => Some(e),
            CausalBanditError::Query(e) => Some(e),
            CausalBanditError::Sim(e) => Some(e),
        }
    }
}

impl fmt::Display for CausalBanditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CausalBanditError::Config(e) => write!(f, "Causal Bandit Config Error: {e}"),
            CausalBanditError::Graph(e) => write!(f, "Causal Bandit Graph Error: {e}"),
            CausalBanditError::Model(e) => write!(f, "Causal Bandit Model Error: {e}"),
            CausalBanditError::Query(e) => write!(f, "Causal Bandit Query Error: {e}"),
            CausalBanditError::Sim(e) => write!(f, "Causal Bandit Sim Error: {e}"),
        }
    }
}

impl From<ConfigError> for CausalBanditError {
    fn from(e: ConfigError) -> Self {
        CausalBanditError::Config(e)
    }
}

impl From<GraphError> for CausalBanditError {
    fn from(e: GraphError) -> Self {
        CausalBanditError::Graph(e)
    }
}

impl From<ModelError> for CausalBanditError {
    fn from(e: ModelError) -> Self {
        CausalBanditError::Model(e)
    }
}

impl From<QueryError> for CausalBanditError {
    fn from(e: QueryError) -> Self {
        CausalBanditError::Query(e)
    }
}

impl From<SimError> for CausalBanditError {
    fn from(e: SimError) -> Self {
        CausalBanditError::Sim(e)
    }
}
