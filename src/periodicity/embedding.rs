use ndarray::Array1;
use tracing::warn;

use crate::periodicity::config::PeriodicityConfig;

/// Largest embedding dimension `m` with `(m+1)! < n/10`.
///
/// Keeps the number of possible ordinal patterns under 10% of the data, so a
/// noisy signal is expected to realise every pattern.
pub fn find_edim(series: &Array1<f64>) -> usize {
    edim_for_len(series.len(), &PeriodicityConfig::default())
}

/// Largest embedding delay for which the embedding loses at most 10% of the series.
pub fn find_maxtau(series: &Array1<f64>) -> usize {
    maxtau_for_len(series.len(), &PeriodicityConfig::default())
}

/// `find_edim` for a series of length `n` under `config`.
///
/// Compares in exact integer arithmetic: `(m+1)! * c < n`.
pub fn edim_for_len(n: usize, config: &PeriodicityConfig) -> usize {
    let n = n as u128;
    let c = config.coverage_factor as u128;
    let mut m = 0usize;
    let mut next_fact: u128 = 1; // (m+1)!
    while m < config.max_embedding_dimension && next_fact * c < n {
        m += 1;
        next_fact *= (m + 1) as u128;
    }
    m
}

/// `find_maxtau` for a series of length `n` under `config`.
///
/// Returns the largest `τ` with `(d-1)τ * c < n`, and 1 when even `τ = 2`
/// violates the bound. A dimension of at most 1, or a zero coverage factor,
/// puts no bound on the delay; 1 is returned in that case.
pub fn maxtau_for_len(n: usize, config: &PeriodicityConfig) -> usize {
    let d = edim_for_len(n, config);
    let step = d.saturating_sub(1) * config.coverage_factor;
    if step == 0 {
        warn!(n, dimension = d, "embedding span does not bound the delay");
        return 1;
    }
    // largest τ with step * τ < n
    ((n - 1) / step).max(1)
}
