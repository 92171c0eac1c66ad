// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::error::Result;
use crate::symbolic::{OrdinalEncoder, Pattern, TranscriptEncoder};
use crate::traits::Symbolizer;

/// A directed edge between two vertex ids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    /// Normalized weight; all edge weights of a network sum to 1.
    pub weight: f64,
}

/// Directed, weighted transition network over symbols.
///
/// Vertices are the distinct symbols in order of first appearance. An edge
/// `a -> b` exists when `b` directly follows `a` somewhere in the symbol
/// sequence with `a != b`; its weight is the number of such transitions divided
/// by the total number of non-self transitions.
#[derive(Debug, Clone, Default)]
pub struct TransitionNetwork {
    symbols: Vec<Pattern>,
    vertex_of: HashMap<Pattern, usize>,
    edges: Vec<Edge>,
    edge_of: HashMap<(usize, usize), usize>,
    transitions: usize,
}

impl TransitionNetwork {
    /// Build the network from an ordered symbol sequence.
    pub fn from_symbols(symbols: &[Pattern]) -> Self {
        let mut net = Self::default();
        if let [only] = symbols {
            net.vertex(only);
        }
        for pair in symbols.windows(2) {
            let from = net.vertex(&pair[0]);
            let to = net.vertex(&pair[1]);
            if from == to {
                continue;
            }
            net.add_transition(from, to);
        }
        net.normalize();
        debug!(
            symbols = symbols.len(),
            vertices = net.vertex_count(),
            edges = net.edge_count(),
            transitions = net.transitions,
            "built transition network"
        );
        net
    }

    /// Symbolize `series` with `symbolizer` and build the network of the result.
    pub fn from_series<S: Symbolizer>(series: &Array1<f64>, symbolizer: &S) -> Result<Self> {
        let symbols = symbolizer.symbolize(series)?;
        Ok(Self::from_symbols(&symbols))
    }

    fn vertex(&mut self, symbol: &Pattern) -> usize {
        if let Some(&id) = self.vertex_of.get(symbol) {
            return id;
        }
        let id = self.symbols.len();
        self.symbols.push(symbol.clone());
        self.vertex_of.insert(symbol.clone(), id);
        id
    }

    fn add_transition(&mut self, source: usize, target: usize) {
        self.transitions += 1;
        match self.edge_of.get(&(source, target)) {
            Some(&e) => self.edges[e].weight += 1.0,
            None => {
                self.edge_of.insert((source, target), self.edges.len());
                self.edges.push(Edge {
                    source,
                    target,
                    weight: 1.0,
                });
            }
        }
    }

    fn normalize(&mut self) {
        let total: f64 = self.edges.iter().map(|e| e.weight).sum();
        if total == 0.0 {
            return;
        }
        for e in self.edges.iter_mut() {
            e.weight /= total;
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of non-self transitions counted before normalization.
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    /// Symbols by vertex id.
    pub fn symbols(&self) -> &[Pattern] {
        &self.symbols
    }

    /// Vertex labels by vertex id, e.g. `"(0, 2, 1)"`.
    pub fn labels(&self) -> Vec<String> {
        self.symbols.iter().map(Pattern::to_string).collect()
    }

    /// Edges in order of first observation.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_id(&self, symbol: &Pattern) -> Option<usize> {
        self.vertex_of.get(symbol).copied()
    }

    /// Normalized weight of the edge `from -> to`, if it exists.
    pub fn weight(&self, from: &Pattern, to: &Pattern) -> Option<f64> {
        let key = (self.vertex_id(from)?, self.vertex_id(to)?);
        self.edge_of.get(&key).map(|&e| self.edges[e].weight)
    }

    /// Number of distinct successors of every vertex.
    pub fn out_degrees(&self) -> Array1<usize> {
        let mut deg = Array1::zeros(self.vertex_count());
        for e in &self.edges {
            deg[e.source] += 1;
        }
        deg
    }

    /// Number of distinct predecessors of every vertex.
    pub fn in_degrees(&self) -> Array1<usize> {
        let mut deg = Array1::zeros(self.vertex_count());
        for e in &self.edges {
            deg[e.target] += 1;
        }
        deg
    }

    /// Label-based view of the network for serialization.
    pub fn export(&self) -> ExportedNetwork {
        let labels = self.labels();
        let edges = self
            .edges
            .iter()
            .map(|e| ExportedEdge {
                source: labels[e.source].clone(),
                target: labels[e.target].clone(),
                weight: e.weight,
            })
            .collect();
        ExportedNetwork {
            vertices: labels,
            edges,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// `{vertices, edges}` form of a [`TransitionNetwork`], keyed by symbol labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedNetwork {
    pub vertices: Vec<String>,
    pub edges: Vec<ExportedEdge>,
}

/// Ordinal pattern transition network (OPTN) of `series`.
pub fn ordinal_pattern_network(
    series: &Array1<f64>,
    dimension: usize,
    delay: usize,
) -> Result<TransitionNetwork> {
    let encoder = OrdinalEncoder::new(dimension, delay)?;
    TransitionNetwork::from_series(series, &encoder)
}

/// Transcript transition network (TTN) of `series`.
pub fn transcript_network(
    series: &Array1<f64>,
    dimension: usize,
    delay: usize,
) -> Result<TransitionNetwork> {
    let encoder = TranscriptEncoder::new(dimension, delay)?;
    TransitionNetwork::from_series(series, &encoder)
}
