// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Transition networks built from symbol sequences.

pub mod adjacency;
pub mod transition;

pub use adjacency::Adjacency;
pub use transition::{
    Edge, ExportedEdge, ExportedNetwork, TransitionNetwork, ordinal_pattern_network,
    transcript_network,
};
