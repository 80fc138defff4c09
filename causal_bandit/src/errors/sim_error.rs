/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::error::Error;
use std::fmt;

use super::{ConfigError, GraphError, ModelError, QueryError};

/// Errors surfaced by the Monte-Carlo experiment driver, wrapping whichever
/// subsystem failed to build or evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    Config(ConfigError),
    Graph(GraphError),
    Model(ModelError),
    Query(QueryError),
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimError::Config(e) => Some(e),
            SimError::Graph(e) => Some(e),
            SimError::Model(e) => Some(e),
            SimError::Query(e) => Some(e),
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Config(e) => write!(f, "SimError: configuration error: {e}"),
            SimError::Graph(e) => write!(f, "SimError: graph error: {e}"),
            SimError::Model(e) => write!(f, "SimError: model error: {e}"),
            SimError::Query(e) => write!(f, "SimError: query error: {e}"),
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        SimError::Config(e)
    }
}

impl From<GraphError> for SimError {
    fn from(e: GraphError) -> Self {
        SimError::Graph(e)
    }
}

impl From<ModelError> for SimError {
    fn from(e: ModelError) -> Self {
        SimError::Model(e)
    }
}

impl From<QueryError> for SimError {
    fn from(e: QueryError) -> Self {
        SimError::Query(e)
    }
}
