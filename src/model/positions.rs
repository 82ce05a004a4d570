//! The caller-supplied positions matrix.

use crate::error::{Result, SolveError};

/// Row-major `[n, m]` matrix of bucket indices. `P[x][v]` is the bucket
/// index of element `x` in voter `v`'s ranking, or `-1` if `x` is unranked
/// by `v`.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionsMatrix {
    data: Vec<i64>,
    n: usize,
    m: usize,
}

impl PositionsMatrix {
    /// Builds a positions matrix from a flat row-major buffer of length
    /// `n * m`. Validates that every entry is `>= 0` or exactly `-1`.
    pub fn from_flat(data: Vec<i64>, n: usize, m: usize) -> Result<Self> {
        if n == 0 {
            return Err(SolveError::invalid("n must be >= 1"));
        }
        if m == 0 {
            return Err(SolveError::invalid("m must be >= 1"));
        }
        if data.len() != n * m {
            return Err(SolveError::invalid(format!(
                "positions buffer has length {}, expected n*m = {}",
                data.len(),
                n * m
            )));
        }
        for &p in &data {
            if p < -1 {
                return Err(SolveError::invalid(format!(
                    "positions entry {} is neither >= 0 nor -1",
                    p
                )));
            }
        }
        Ok(PositionsMatrix { data, n, m })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn m(&self) -> usize {
        self.m
    }

    /// Bucket index of element `x` in voter `v`'s ranking, or `None` if
    /// unranked.
    #[inline]
    pub fn get(&self, x: usize, v: usize) -> Option<i64> {
        let p = self.data[x * self.m + v];
        if p < 0 {
            None
        } else {
            Some(p)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_distinguishes_ranked_and_unranked() {
        let p = PositionsMatrix::from_flat(vec![0, -1, 1, 2], 2, 2).unwrap();
        assert_eq!(p.get(0, 0), Some(0));
        assert_eq!(p.get(0, 1), None);
        assert_eq!(p.get(1, 0), Some(1));
        assert_eq!(p.get(1, 1), Some(2));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = PositionsMatrix::from_flat(vec![0, 1, 2], 2, 2).unwrap_err();
        assert!(matches!(err, SolveError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_entries_below_negative_one() {
        let err = PositionsMatrix::from_flat(vec![0, -2], 1, 2).unwrap_err();
        assert!(matches!(err, SolveError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_zero_n_or_m() {
        assert!(PositionsMatrix::from_flat(vec![], 0, 1).is_err());
        assert!(PositionsMatrix::from_flat(vec![], 1, 0).is_err());
    }
}
