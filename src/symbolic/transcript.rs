// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::error::Result;
use crate::symbolic::ordinal_utils::ordinal_patterns;
use crate::symbolic::pattern::Pattern;

/// Transcript sequence of `series`: one transcript per adjacent pair of ordinal patterns.
///
/// The transcript of `(s, s')` is `s'` read in the order of the inverse of `s`,
/// `T[k] = s'[s⁻¹[k]]`. The result has `max(m - 1, 0)` elements for `m` patterns.
pub fn transcripts(series: &Array1<f64>, dimension: usize, delay: usize) -> Result<Vec<Pattern>> {
    let patterns = ordinal_patterns(series, dimension, delay)?;
    Ok(transcripts_from_patterns(&patterns))
}

/// Transcripts of an already computed ordinal pattern sequence.
///
/// # Panics
///
/// If the patterns are not permutations of one common length.
pub fn transcripts_from_patterns(patterns: &[Pattern]) -> Vec<Pattern> {
    patterns
        .windows(2)
        .map(|pair| pair[1].reindex(&pair[0].inverse()))
        .collect()
}
