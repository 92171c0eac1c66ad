// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{OptnError, Result};
use crate::symbolic::ordinal_utils::lehmer_code;

/// A permutation of `0..d` used as a symbol: either an ordinal pattern or a transcript.
///
/// Equality and hashing are structural, so a `Pattern` can key the
/// symbol -> vertex map of a transition network directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pattern(Vec<usize>);

impl Pattern {
    /// Wrap `perm` without checking it; see [`Pattern::try_new`].
    pub fn new(perm: Vec<usize>) -> Self {
        Self(perm)
    }

    /// Wrap `perm`, failing unless it is a permutation of `0..perm.len()`.
    pub fn try_new(perm: Vec<usize>) -> Result<Self> {
        let mut seen = vec![false; perm.len()];
        for &v in &perm {
            if v >= perm.len() || seen[v] {
                return Err(OptnError::invalid("pattern entry", v, "not a permutation of 0..d"));
            }
            seen[v] = true;
        }
        Ok(Self(perm))
    }

    /// The identity permutation `(0, 1, ..., d-1)`.
    pub fn identity(d: usize) -> Self {
        Self((0..d).collect())
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Embedding dimension of the pattern.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Inverse permutation, i.e. the stable argsort of `self`.
    ///
    /// # Panics
    ///
    /// If `self` is not a permutation of `0..d`.
    pub fn inverse(&self) -> Pattern {
        let mut inv = vec![0usize; self.0.len()];
        for (pos, &v) in self.0.iter().enumerate() {
            inv[v] = pos;
        }
        Pattern(inv)
    }

    /// Read `self` in the order given by `order`: `out[k] = self[order[k]]`.
    ///
    /// # Panics
    ///
    /// If an entry of `order` is out of range for `self`.
    pub fn reindex(&self, order: &Pattern) -> Pattern {
        Pattern(order.0.iter().map(|&i| self.0[i]).collect())
    }

    /// Factoradic rank of the permutation (lexicographic index among all `d!` patterns).
    ///
    /// # Panics
    ///
    /// If the pattern is longer than 20.
    pub fn lehmer_code(&self) -> u64 {
        lehmer_code(&self.0)
    }
}

impl From<Vec<usize>> for Pattern {
    fn from(perm: Vec<usize>) -> Self {
        Self(perm)
    }
}

impl<const N: usize> From<[usize; N]> for Pattern {
    fn from(perm: [usize; N]) -> Self {
        Self(perm.to_vec())
    }
}

/// Tuple rendering used for vertex labels: `(0, 2, 1)`, and `(0,)` for a single element.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
