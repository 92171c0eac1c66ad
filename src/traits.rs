// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::error::Result;
use crate::symbolic::Pattern;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

/// Turns a time series into a sequence of symbols.
///
/// Implemented by the ordinal pattern and transcript encoders; the transition
/// network builder is generic over it.
pub trait Symbolizer {
    fn symbolize(&self, series: &Array1<f64>) -> Result<Vec<Pattern>>;
}
