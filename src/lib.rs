// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # optn
//!
//! Ordinal pattern transition networks (OPTN) and transcript transition
//! networks (TTN) for scalar time series, plus a periodicity test derived from
//! the degree structure of those networks.
//!
//! ## Quick Start
//!
//! ```rust
//! use optn::network::ordinal_pattern_network;
//! use ndarray::array;
//!
//! let series = array![1.0, 3.0, 2.0, 4.0, 2.0, 3.0, 1.0, 4.0];
//! let net = ordinal_pattern_network(&series, 2, 1).unwrap();
//! assert_eq!(net.vertex_count(), 2);
//! assert_eq!(net.edge_count(), 2);
//! ```
//!
//! ## Pipeline
//!
//! 1. **Embedding parameters**: `find_edim` / `find_maxtau` pick the embedding
//!    dimension and the largest usable delay from the series length.
//! 2. **Symbolization**: ordinal patterns (rank order of `d` samples spaced `τ`
//!    apart, ties broken by position) or transcripts (the permutation taking one
//!    pattern to the next).
//! 3. **Networks**: distinct symbols become vertices, observed transitions become
//!    edges weighted by their relative frequency. Self-transitions are dropped.
//! 4. **Periodicity test**: counts distinct in- and out-degrees of the binary
//!    transition graph for each delay and reduces them to one score. Values near
//!    0-1 mean periodic, around 20 mean noise.
//!
//! ## Feature Flags
//!
//! - `parallel`: evaluate the delays of the periodicity test on the rayon thread pool
//!
//! All operations are batch computations over an immutable series.

pub mod error;
pub mod network;
pub mod periodicity;
pub mod symbolic;
pub mod traits;

pub use error::{OptnError, Result};
pub use traits::{GlobalValue, Symbolizer};

pub use network::{TransitionNetwork, ordinal_pattern_network, transcript_network};
pub use periodicity::{PeriodicityConfig, PeriodicityTest, find_edim, find_maxtau, periodicity_test};
pub use symbolic::{OrdinalEncoder, Pattern, TranscriptEncoder, ordinal_patterns, transcripts};
