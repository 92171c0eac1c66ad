// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Embedding parameter selection and the periodicity test.

pub mod config;
pub mod embedding;
pub mod periodicity;

pub use config::PeriodicityConfig;
pub use embedding::{edim_for_len, find_edim, find_maxtau, maxtau_for_len};
pub use periodicity::{
    DegreeDiversity, Delays, PeriodicityTest, degree_diversity, find_min_bins, periodicity_test,
};
