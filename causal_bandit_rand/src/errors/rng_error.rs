/*
 * SPDX-License-Identifier: MIT
 * Copyright (c) "2026" . The Causal Bandit Authors. All Rights Reserved.
 */

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RngError {
    OsRandomGenerator(String),
    InvalidRange(String),
}

impl Error for RngError {}

impl fmt::Display for RngError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RngError::OsRandomGenerator(msg) => write!(f, "OS random generator error: {msg}"),
            RngError::InvalidRange(msg) => write!(f, "Invalid range: {msg}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformDistributionError {
    NonFinite,
    InvalidRange,
    EmptyRange,
}

impl Error for UniformDistributionError {}

impl fmt::Display for UniformDistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniformDistributionError::NonFinite => {
                write!(f, "Non-finite range in uniform distribution")
            }
            UniformDistributionError::InvalidRange => {
                write!(f, "Invalid range: low must be less than high")
            }
            UniformDistributionError::EmptyRange => {
                write!(f, "Empty range in uniform distribution")
            }
        }
    }
}

impl From<UniformDistributionError> for RngError {
    fn from(err: UniformDistributionError) -> Self {
        RngError::InvalidRange(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BernoulliDistributionError {
    InvalidProbability,
}

impl Error for BernoulliDistributionError {}

impl fmt::Display for BernoulliDistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BernoulliDistributionError::InvalidProbability => {
                write!(f, "p is outside [0, 1] in Bernoulli distribution")
            }
        }
    }
}

impl From<BernoulliDistributionError> for RngError {
    fn from(err: BernoulliDistributionError) -> Self {
        RngError::InvalidRange(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetaDistributionError {
    NonPositiveShape,
}

impl Error for BetaDistributionError {}

impl fmt::Display for BetaDistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetaDistributionError::NonPositiveShape => {
                write!(f, "alpha and beta must be strictly positive in Beta distribution")
            }
        }
    }
}

impl From<BetaDistributionError> for RngError {
    fn from(err: BetaDistributionError) -> Self {
        RngError::InvalidRange(err.to_string())
    }
}
