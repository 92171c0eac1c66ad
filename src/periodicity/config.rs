// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::error::{OptnError, Result};
use crate::symbolic::ordinal_utils::MAX_EMBEDDING_DIMENSION;

/// Calibration constants of the embedding parameter selector and the periodicity test.
///
/// The defaults are empirical. Scores of 0 or 1 indicate strict periodicity;
/// larger values indicate quasi-periodicity, chaos and finally noise, with
/// roughly 20 for an uncorrelated random series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodicityConfig {
    /// Shortest series the periodicity test accepts.
    pub min_series_len: usize,
    /// The pattern alphabet `d!` and the embedding span `(d-1)τ` must both stay
    /// below `n / coverage_factor`.
    pub coverage_factor: usize,
    /// A delay qualifies when its in- and out-degree diversity differ by less than this.
    pub max_bin_difference: usize,
    /// Upper bound on the selected embedding dimension.
    pub max_embedding_dimension: usize,
}

impl Default for PeriodicityConfig {
    fn default() -> Self {
        // d >= 4 requires 4! < n / 10, i.e. n >= 241
        Self {
            min_series_len: 241,
            coverage_factor: 10,
            max_bin_difference: 2,
            max_embedding_dimension: MAX_EMBEDDING_DIMENSION,
        }
    }
}

impl PeriodicityConfig {
    /// Reject settings under which the parameter search is unbounded or no delay can qualify.
    pub fn validate(&self) -> Result<()> {
        if self.coverage_factor == 0 {
            return Err(OptnError::invalid("coverage factor", 0, "must be positive"));
        }
        if self.max_bin_difference == 0 {
            return Err(OptnError::invalid("max bin difference", 0, "must be positive"));
        }
        Ok(())
    }
}
