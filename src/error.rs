// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors raised by the encoders, network builders and the periodicity test.
///
/// Degenerate but well-defined outcomes (empty networks, an undefined
/// periodicity score) are not errors and are reported through the return value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptnError {
    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: usize,
        reason: &'static str,
    },

    #[error("time series must have at least {required} data points, got {actual}")]
    InsufficientData { required: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, OptnError>;

impl OptnError {
    pub(crate) fn invalid(name: &'static str, value: usize, reason: &'static str) -> Self {
        OptnError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
