// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Symbolic encoders: ordinal patterns and transcripts.

pub mod ordinal_utils;
pub mod pattern;
pub mod transcript;

use ndarray::Array1;

use crate::error::Result;
use crate::traits::Symbolizer;
pub use ordinal_utils::{ordinal_patterns, validate_embedding};
pub use pattern::Pattern;
pub use transcript::{transcripts, transcripts_from_patterns};

/// Ordinal Pattern Encoder with fixed embedding parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinalEncoder {
    pub dimension: usize,
    pub delay: usize,
}

impl OrdinalEncoder {
    /// Validates `dimension` and `delay` eagerly.
    pub fn new(dimension: usize, delay: usize) -> Result<Self> {
        validate_embedding(dimension, delay)?;
        Ok(Self { dimension, delay })
    }
}

impl Symbolizer for OrdinalEncoder {
    fn symbolize(&self, series: &Array1<f64>) -> Result<Vec<Pattern>> {
        ordinal_patterns(series, self.dimension, self.delay)
    }
}

/// Transcript Encoder with fixed embedding parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptEncoder {
    pub dimension: usize,
    pub delay: usize,
}

impl TranscriptEncoder {
    pub fn new(dimension: usize, delay: usize) -> Result<Self> {
        validate_embedding(dimension, delay)?;
        Ok(Self { dimension, delay })
    }
}

impl Symbolizer for TranscriptEncoder {
    fn symbolize(&self, series: &Array1<f64>) -> Result<Vec<Pattern>> {
        transcripts(series, self.dimension, self.delay)
    }
}
