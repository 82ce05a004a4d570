//! Cost-tensor construction from the positions matrix.

use crate::error::Result;
use crate::model::weights::{RelationCounts, ScoringWeights, AFTER, BEFORE as W_BEFORE, NONE, ONLY_X, ONLY_Y, TIED as W_TIED};
use crate::model::PositionsMatrix;

use super::cost_tensor::{CostTensor, AFTER as T_AFTER, BEFORE as T_BEFORE, TIED as T_TIED};

/// Classifies voter `v`'s opinion on the pair `(x, y)` and returns the
/// relation-counts index it falls into.
#[inline]
fn classify(px: Option<i64>, py: Option<i64>) -> usize {
    match (px, py) {
        (Some(a), Some(b)) if a < b => W_BEFORE,
        (Some(a), Some(b)) if a > b => AFTER,
        (Some(_), Some(_)) => W_TIED,
        (Some(_), None) => ONLY_X,
        (None, Some(_)) => ONLY_Y,
        (None, None) => NONE,
    }
}

/// Builds the `[n, n, 3]` cost tensor from the positions matrix and the two
/// scoring weight vectors, as described in the cost-tensor builder
/// component design.
///
/// `O(n^2 * m)` time, `O(n^2)` memory; performs no allocation beyond the
/// tensor itself.
pub fn build_cost_tensor(
    positions: &PositionsMatrix,
    w_before: &ScoringWeights,
    w_tied: &ScoringWeights,
) -> Result<CostTensor> {
    let n = positions.n();
    let m = positions.m();
    let mut tensor = CostTensor::zeroed(n)?;

    for x in 0..n {
        for y in (x + 1)..n {
            let mut counts = RelationCounts::zero();
            for v in 0..m {
                let px = positions.get(x, v);
                let py = positions.get(y, v);
                counts.increment(classify(px, py));
            }

            let before = w_before.dot(&counts);
            let after = w_before.dot(&counts.swapped());
            let tied = w_tied.dot(&counts);

            tensor.set(x, y, T_BEFORE, before);
            tensor.set(x, y, T_AFTER, after);
            tensor.set(x, y, T_TIED, tied);

            tensor.set(y, x, T_BEFORE, after);
            tensor.set(y, x, T_AFTER, before);
            tensor.set(y, x, T_TIED, tied);
        }
    }

    Ok(tensor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PositionsMatrix;

    fn weights() -> (ScoringWeights, ScoringWeights) {
        (
            ScoringWeights::new([0.0, 1.0, 1.0, 0.0, 0.0, 0.0]),
            ScoringWeights::new([1.0, 1.0, 0.0, 0.0, 0.0, 0.0]),
        )
    }

    #[test]
    fn symmetry_before_after_and_tied() {
        let p = PositionsMatrix::from_flat(vec![0, 1, 1, 0], 2, 2).unwrap();
        let (wb, wt) = weights();
        let t = build_cost_tensor(&p, &wb, &wt).unwrap();
        for x in 0..2 {
            for y in 0..2 {
                if x == y {
                    continue;
                }
                assert_eq!(t.get(x, y, T_BEFORE), t.get(y, x, T_AFTER));
                assert_eq!(t.get(x, y, T_TIED), t.get(y, x, T_TIED));
            }
        }
    }

    #[test]
    fn strict_order_costs_one_to_flip() {
        // Single voter: 0 before 1. Flipping costs wBefore[AFTER] = 1.
        let p = PositionsMatrix::from_flat(vec![0, 1], 2, 1).unwrap();
        let (wb, wt) = weights();
        let t = build_cost_tensor(&p, &wb, &wt).unwrap();
        assert_eq!(t.get(0, 1, T_BEFORE), 0.0);
        assert_eq!(t.get(0, 1, T_AFTER), 1.0);
        assert_eq!(t.get(0, 1, T_TIED), 1.0);
    }

    #[test]
    fn linearity_over_weight_addition() {
        let p = PositionsMatrix::from_flat(vec![0, 1, 1, 1], 2, 2).unwrap();
        let wb1 = ScoringWeights::new([0.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
        let wt1 = ScoringWeights::new([1.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
        let wb2 = ScoringWeights::new([2.0, 0.0, 3.0, 1.0, 1.0, 0.0]);
        let wt2 = ScoringWeights::new([0.0, 2.0, 1.0, 0.0, 0.0, 1.0]);

        let t1 = build_cost_tensor(&p, &wb1, &wt1).unwrap();
        let t2 = build_cost_tensor(&p, &wb2, &wt2).unwrap();
        let summed = build_cost_tensor(&p, &(wb1 + wb2), &(wt1 + wt2)).unwrap();

        for x in 0..2 {
            for y in 0..2 {
                for k in 0..3 {
                    assert!((summed.get(x, y, k) - (t1.get(x, y, k) + t2.get(x, y, k))).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn invariant_under_voter_permutation() {
        let p = PositionsMatrix::from_flat(vec![0, 1, 2, 1, 0, 2], 2, 3).unwrap();
        // Same voters, columns reversed: voter order shouldn't matter.
        let p_perm = PositionsMatrix::from_flat(vec![2, 1, 0, 2, 0, 1], 2, 3).unwrap();
        let (wb, wt) = weights();
        let t = build_cost_tensor(&p, &wb, &wt).unwrap();
        let t_perm = build_cost_tensor(&p_perm, &wb, &wt).unwrap();
        for x in 0..2 {
            for y in 0..2 {
                for k in 0..3 {
                    assert_eq!(t.get(x, y, k), t_perm.get(x, y, k));
                }
            }
        }
    }
}
