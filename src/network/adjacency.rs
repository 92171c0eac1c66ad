use ndarray::{Array1, Array2, Axis};
use std::collections::BTreeSet;

/// Binary adjacency matrix over dense symbol ids.
///
/// Unlike [`TransitionNetwork`](super::TransitionNetwork) this ignores how often
/// a transition occurs: an entry is 1 if the transition was seen at least once.
#[derive(Debug, Clone)]
pub struct Adjacency {
    matrix: Array2<u8>,
}

impl Adjacency {
    /// Build from a sequence of dense ids in `0..k`. Self-transitions are skipped.
    pub fn from_ids(ids: &Array1<usize>, k: usize) -> Self {
        let mut matrix = Array2::<u8>::zeros((k, k));
        for t in 1..ids.len() {
            let (from, to) = (ids[t - 1], ids[t]);
            if from != to {
                matrix[[from, to]] = 1;
            }
        }
        Self { matrix }
    }

    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }

    /// Row sums.
    pub fn out_degrees(&self) -> Array1<usize> {
        self.matrix.mapv(usize::from).sum_axis(Axis(1))
    }

    /// Column sums.
    pub fn in_degrees(&self) -> Array1<usize> {
        self.matrix.mapv(usize::from).sum_axis(Axis(0))
    }
}

/// Number of distinct values in a degree vector.
pub fn distinct_count(degrees: &Array1<usize>) -> usize {
    degrees.iter().collect::<BTreeSet<_>>().len()
}
