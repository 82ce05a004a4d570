//! The dense `[n, n, 3]` pairwise cost tensor.

use crate::error::{Result, SolveError};

/// Relation index into the innermost dimension of [`CostTensor`].
pub const BEFORE: usize = 0;
pub const AFTER: usize = 1;
pub const TIED: usize = 2;

/// Dense `[n, n, 3]` table of pairwise placement penalties, stored as a
/// single row-major allocation of length `n * n * 3`.
///
/// `get(x, y, BEFORE)` is the total penalty, summed over voters, of a
/// target ranking placing `x` strictly before `y`; `AFTER` and `TIED`
/// analogously. The diagonal (`x == y`) is never read by the move engine
/// and is left at zero.
#[derive(Debug, Clone)]
pub struct CostTensor {
    data: Vec<f64>,
    n: usize,
}

impl CostTensor {
    /// Allocates a zeroed tensor for `n` elements, reporting allocation
    /// failure as [`SolveError::Alloc`] rather than aborting the process.
    pub fn zeroed(n: usize) -> Result<Self> {
        let len = n
            .checked_mul(n)
            .and_then(|v| v.checked_mul(3))
            .ok_or_else(|| SolveError::invalid("n is too large: n*n*3 overflows"))?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|e| SolveError::Alloc(format!("cost tensor of {} entries: {}", len, e)))?;
        data.resize(len, 0.0);
        Ok(CostTensor { data, n })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    fn index(&self, x: usize, y: usize, k: usize) -> usize {
        (x * self.n + y) * 3 + k
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, k: usize) -> f64 {
        self.data[self.index(x, y, k)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, k: usize, value: f64) {
        let idx = self.index(x, y, k);
        self.data[idx] = value;
    }
}
