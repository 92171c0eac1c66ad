use ndarray::Array1;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{OptnError, Result};
use crate::symbolic::pattern::Pattern;

/// Largest embedding dimension whose patterns still have a Lehmer code that fits in u64.
pub const MAX_EMBEDDING_DIMENSION: usize = 20;

/// Stable argsort for f64 values.
///
/// Fills `idx` with the indices that sort `window` ascending. Ties keep their
/// original index order (numpy `argsort(kind="mergesort")`). NaNs sort after
/// every other value.
pub fn argsort(window: &[f64], idx: &mut [usize]) {
    for (i, val) in idx.iter_mut().enumerate() {
        *val = i;
    }
    idx.sort_by(|&i, &j| {
        let a = window[i];
        let b = window[j];
        match a.partial_cmp(&b) {
            Some(Ordering::Equal) => i.cmp(&j),
            Some(ord) => ord,
            None => {
                if a.is_nan() && b.is_nan() {
                    i.cmp(&j)
                } else if a.is_nan() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
        }
    });
}

/// Compute the Lehmer code (factoradic ranking) for a given permutation.
///
/// The input is a permutation of 0..m-1 as produced by `argsort`.
/// Codes are ordered like the lexicographic order of the permutations.
///
/// # Panics
///
/// If m > 20 (u64 overflow risk for factorial weights).
pub fn lehmer_code(perm: &[usize]) -> u64 {
    let n = perm.len();
    if n > MAX_EMBEDDING_DIMENSION {
        panic!("For embedding dimensions larger than 20, the integer will be too large for u64.");
    }
    lehmer_code_with_fact(perm, &factorials(n))
}

fn factorials(n: usize) -> Vec<u128> {
    let mut fact: Vec<u128> = vec![1u128; n.max(1)];
    for i in 1..n {
        fact[i] = fact[i - 1] * (i as u128);
    }
    fact
}

/// Internal version of lehmer_code that avoids recomputing factorials.
fn lehmer_code_with_fact(perm: &[usize], fact: &[u128]) -> u64 {
    let n = perm.len();
    let mut acc: u128 = 0;
    for i in 0..n {
        let mut c = 0u128;
        for j in (i + 1)..n {
            if perm[i] > perm[j] {
                c += 1;
            }
        }
        acc += c * fact[n - 1 - i];
    }
    acc as u64
}

/// Check the embedding parameters shared by every encoder entry point.
pub fn validate_embedding(dimension: usize, delay: usize) -> Result<()> {
    if dimension < 1 {
        return Err(OptnError::invalid(
            "embedding dimension",
            dimension,
            "must be a positive integer",
        ));
    }
    if delay < 1 {
        return Err(OptnError::invalid(
            "embedding delay",
            delay,
            "must be a positive integer",
        ));
    }
    Ok(())
}

/// Lehmer-coded symbolization additionally needs `d!` to fit in u64.
fn validate_lehmer_dimension(dimension: usize) -> Result<()> {
    if dimension > MAX_EMBEDDING_DIMENSION {
        return Err(OptnError::invalid(
            "embedding dimension",
            dimension,
            "must not exceed 20 for Lehmer codes",
        ));
    }
    Ok(())
}

/// Number of complete windows `n - (d-1)τ`, or zero when the series is too short.
pub fn window_count(n: usize, dimension: usize, delay: usize) -> usize {
    let span = (dimension - 1) * delay;
    n.saturating_sub(span)
}

/// Visit every window of `series` in order, handing the argsorted indices to `visit`.
///
/// Buffers are reused across windows; callers copy out what they need.
fn for_each_window(
    series: &Array1<f64>,
    dimension: usize,
    delay: usize,
    mut visit: impl FnMut(&[usize]),
) {
    let n_windows = window_count(series.len(), dimension, delay);
    let mut w: Vec<f64> = vec![0.0; dimension];
    let mut idx: Vec<usize> = (0..dimension).collect();
    for t in 0..n_windows {
        for j in 0..dimension {
            w[j] = series[t + j * delay];
        }
        argsort(&w, &mut idx);
        visit(&idx[..]);
    }
}

/// Ordinal pattern sequence of `series`, one pattern per start index `0..n-(d-1)τ`.
///
/// - dimension (d) ≥ 1
/// - delay (τ) ≥ 1
///
/// A series too short for a single window yields an empty sequence.
pub fn ordinal_patterns(series: &Array1<f64>, dimension: usize, delay: usize) -> Result<Vec<Pattern>> {
    validate_embedding(dimension, delay)?;
    let mut out = Vec::with_capacity(window_count(series.len(), dimension, delay));
    for_each_window(series, dimension, delay, |idx| out.push(Pattern::new(idx.to_vec())));
    Ok(out)
}

/// Return raw Lehmer codes (u64) for the ordinal patterns without allocating a `Pattern` per window.
///
/// Code `c` at position `t` corresponds to `ordinal_patterns(series, d, τ)[t].lehmer_code()`.
/// Unlike `ordinal_patterns`, the dimension is limited to 20.
pub fn symbolize_series_u64(series: &Array1<f64>, dimension: usize, delay: usize) -> Result<Array1<u64>> {
    validate_embedding(dimension, delay)?;
    validate_lehmer_dimension(dimension)?;
    let fact = factorials(dimension);
    let mut out: Vec<u64> = Vec::with_capacity(window_count(series.len(), dimension, delay));
    for_each_window(series, dimension, delay, |idx| {
        out.push(lehmer_code_with_fact(idx, &fact))
    });
    Ok(Array1::from(out))
}

/// Remap u64 codes to dense ids `0..k`.
///
/// Each unique code gets an id in order of first occurrence. Returns the ids and `k`.
pub fn remap_u64_to_compact(codes: &Array1<u64>) -> (Array1<usize>, usize) {
    let mut map: HashMap<u64, usize> = HashMap::with_capacity(codes.len());
    let mut out = Vec::with_capacity(codes.len());
    for &c in codes.iter() {
        let next_id = map.len();
        let id = *map.entry(c).or_insert(next_id);
        out.push(id);
    }
    (Array1::from(out), map.len())
}
