/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::error::Error;
use std::fmt;

use crate::alias::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    CycleDetected,
    /// A `Discrete` node's CPT is missing one or more parent-assignment rows.
    IncompleteTable(NodeId),
    /// A `Discrete` node's CPT row does not sum to 1 within tolerance.
    RowNotNormalized(NodeId),
    MultipleActionNodes(NodeId, NodeId),
    UnknownNode(NodeId),
    MultipleIndependentVariables,
    NoIndependentVariable,
}

impl Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::CycleDetected => write!(f, "ConfigError: cycle detected in graph"),
            ConfigError::IncompleteTable(id) => {
                write!(f, "ConfigError: incomplete CPT for node '{id}'")
            }
            ConfigError::RowNotNormalized(id) => write!(
                f,
                "ConfigError: CPT row for node '{id}' does not sum to 1"
            ),
            ConfigError::MultipleActionNodes(a, b) => write!(
                f,
                "ConfigError: multiple action nodes '{a}' and '{b}'"
            ),
            ConfigError::UnknownNode(id) => write!(f, "ConfigError: unknown node '{id}'"),
            ConfigError::MultipleIndependentVariables => {
                write!(f, "ConfigError: multiple independent variables selected")
            }
            ConfigError::NoIndependentVariable => {
                write!(f, "ConfigError: no independent variable selected")
            }
        }
    }
}
