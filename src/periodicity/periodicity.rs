use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{OptnError, Result};
use crate::network::adjacency::{Adjacency, distinct_count};
use crate::periodicity::config::PeriodicityConfig;
use crate::periodicity::embedding::{edim_for_len, maxtau_for_len};
use crate::symbolic::ordinal_utils::{remap_u64_to_compact, symbolize_series_u64};
use crate::traits::GlobalValue;

/// Embedding delays evaluated by the periodicity test.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Delays {
    /// Every delay from 2 up to `find_maxtau` of the series.
    #[default]
    All,
    Single(usize),
    List(Vec<usize>),
}

impl From<usize> for Delays {
    fn from(delay: usize) -> Self {
        Delays::Single(delay)
    }
}

impl From<Vec<usize>> for Delays {
    fn from(delays: Vec<usize>) -> Self {
        Delays::List(delays)
    }
}

impl From<&[usize]> for Delays {
    fn from(delays: &[usize]) -> Self {
        Delays::List(delays.to_vec())
    }
}

impl From<Option<usize>> for Delays {
    fn from(delay: Option<usize>) -> Self {
        delay.map_or(Delays::All, Delays::Single)
    }
}

impl Delays {
    fn resolve(&self, n: usize, config: &PeriodicityConfig) -> Result<Vec<usize>> {
        match self {
            Delays::All => Ok((2..=maxtau_for_len(n, config)).collect()),
            Delays::Single(tau) => {
                check_delay(*tau)?;
                Ok(vec![*tau])
            }
            Delays::List(taus) => {
                for &tau in taus {
                    check_delay(tau)?;
                }
                Ok(taus.clone())
            }
        }
    }
}

fn check_delay(tau: usize) -> Result<()> {
    if tau < 2 {
        return Err(OptnError::invalid(
            "embedding delay",
            tau,
            "must be larger than 1",
        ));
    }
    Ok(())
}

/// In/out-degree diversity of the binary transition graph at one delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeDiversity {
    pub delay: usize,
    /// Number of ordinal patterns in the sequence.
    pub patterns: usize,
    /// Number of distinct ordinal patterns (graph vertices).
    pub distinct_patterns: usize,
    /// Number of distinct values in the in-degree vector.
    pub in_degree_classes: usize,
    /// Number of distinct values in the out-degree vector.
    pub out_degree_classes: usize,
}

/// Periodicity test of a time series.
///
/// For each delay the series is encoded into ordinal patterns of dimension
/// `find_edim(series)`, a binary transition graph is built over the distinct
/// patterns, and the number of distinct in- and out-degrees is recorded. The
/// score is the smallest `min(in, out)` over the delays where the two counts
/// differ by at most one.
///
/// Scores near 0-1 indicate strict periodicity, about 20 a random series.
#[derive(Debug, Clone)]
pub struct PeriodicityTest {
    embedding_dimension: usize,
    diversities: Vec<DegreeDiversity>,
    max_bin_difference: usize,
}

impl PeriodicityTest {
    /// Run the test with the default calibration.
    pub fn new(series: &Array1<f64>, delays: impl Into<Delays>) -> Result<Self> {
        Self::with_config(series, delays, &PeriodicityConfig::default())
    }

    pub fn with_config(
        series: &Array1<f64>,
        delays: impl Into<Delays>,
        config: &PeriodicityConfig,
    ) -> Result<Self> {
        let n = series.len();
        if n < config.min_series_len {
            return Err(OptnError::InsufficientData {
                required: config.min_series_len,
                actual: n,
            });
        }
        config.validate()?;
        let delays = delays.into().resolve(n, config)?;
        let embedding_dimension = edim_for_len(n, config);

        let diversities = evaluate_delays(series, embedding_dimension, &delays)?;

        Ok(Self {
            embedding_dimension,
            diversities,
            max_bin_difference: config.max_bin_difference,
        })
    }

    pub fn embedding_dimension(&self) -> usize {
        self.embedding_dimension
    }

    /// Per-delay results, in the order the delays were given.
    pub fn diversities(&self) -> &[DegreeDiversity] {
        &self.diversities
    }

    /// The periodicity score, or `None` when no delay qualifies.
    pub fn score(&self) -> Option<usize> {
        let (ins, outs): (Vec<usize>, Vec<usize>) = self
            .diversities
            .iter()
            .map(|d| (d.in_degree_classes, d.out_degree_classes))
            .unzip();
        min_bins_within(&ins, &outs, self.max_bin_difference)
    }
}

impl GlobalValue for PeriodicityTest {
    /// The score as `f64`; NaN when undefined.
    fn global_value(&self) -> f64 {
        self.score().map_or(f64::NAN, |s| s as f64)
    }
}

#[cfg(feature = "parallel")]
fn evaluate_delays(
    series: &Array1<f64>,
    dimension: usize,
    delays: &[usize],
) -> Result<Vec<DegreeDiversity>> {
    use rayon::prelude::*;
    delays
        .par_iter()
        .map(|&tau| degree_diversity(series, dimension, tau))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_delays(
    series: &Array1<f64>,
    dimension: usize,
    delays: &[usize],
) -> Result<Vec<DegreeDiversity>> {
    delays
        .iter()
        .map(|&tau| degree_diversity(series, dimension, tau))
        .collect()
}

/// Degree diversity at a single delay.
///
/// A delay leaving a single pattern yields `(1, 1)`, one leaving none yields `(0, 0)`.
pub fn degree_diversity(
    series: &Array1<f64>,
    dimension: usize,
    delay: usize,
) -> Result<DegreeDiversity> {
    let codes = symbolize_series_u64(series, dimension, delay)?;
    if codes.len() < 2 {
        warn!(delay, patterns = codes.len(), "delay leaves fewer than two patterns");
    }
    let (ids, k) = remap_u64_to_compact(&codes);
    let adjacency = Adjacency::from_ids(&ids, k);

    let diversity = DegreeDiversity {
        delay,
        patterns: codes.len(),
        distinct_patterns: k,
        in_degree_classes: distinct_count(&adjacency.in_degrees()),
        out_degree_classes: distinct_count(&adjacency.out_degrees()),
    };
    debug!(
        delay,
        patterns = diversity.patterns,
        distinct = k,
        in_classes = diversity.in_degree_classes,
        out_classes = diversity.out_degree_classes,
        "degree diversity"
    );
    Ok(diversity)
}

/// Smallest `min(in, out)` over the positions where `|in - out| < 2`.
///
/// Pairs are taken position-wise; extra elements of the longer slice are ignored.
/// Returns `None` if no position qualifies.
pub fn find_min_bins(in_counts: &[usize], out_counts: &[usize]) -> Option<usize> {
    min_bins_within(
        in_counts,
        out_counts,
        PeriodicityConfig::default().max_bin_difference,
    )
}

fn min_bins_within(in_counts: &[usize], out_counts: &[usize], max_diff: usize) -> Option<usize> {
    in_counts
        .iter()
        .zip(out_counts)
        .filter(|&(&i, &o)| i.abs_diff(o) < max_diff)
        .map(|(&i, &o)| i.min(o))
        .min()
}

/// Periodicity score of `series` as `f64`, NaN when no delay qualifies.
///
/// # Errors
///
/// `InsufficientData` for fewer than 241 samples, `InvalidParameter` for a delay below 2.
pub fn periodicity_test(series: &Array1<f64>, delays: impl Into<Delays>) -> Result<f64> {
    Ok(PeriodicityTest::new(series, delays)?.global_value())
}
