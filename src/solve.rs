//! The library's single public entry point.

use crate::driver::improve_departures;
use crate::error::{Result, SolveError};
use crate::model::{BucketOrder, PositionsMatrix, ScoringWeights};
use crate::tensor::build_cost_tensor;

/// Computes, for each departure ranking, a locally optimal bucket order
/// reachable by single-element relocations, relative to the voters encoded
/// in `positions` under the scoring weights `w_before`/`w_tied`.
///
/// On success, `departures[k]` is overwritten with the local minimum found
/// from its own starting value, and `delta[k]` is incremented (not
/// overwritten) by the cost improvement achieved.
///
/// Returns [`SolveError::InvalidArgument`] without mutating `departures` or
/// `delta` if `departures.len() != delta.len()` or any departure ranking's
/// length does not match `positions`'s element count. Returns
/// [`SolveError::Alloc`] if the cost tensor or a ranking's scratch buffers
/// cannot be allocated.
pub fn solve(
    positions: &PositionsMatrix,
    departures: &mut [BucketOrder],
    w_before: &ScoringWeights,
    w_tied: &ScoringWeights,
    delta: &mut [f64],
) -> Result<()> {
    if departures.is_empty() {
        return Err(SolveError::invalid("at least one departure ranking is required"));
    }
    if departures.len() != delta.len() {
        return Err(SolveError::invalid(format!(
            "departures has {} rows but delta has {} slots",
            departures.len(),
            delta.len()
        )));
    }
    let n = positions.n();
    for (k, order) in departures.iter().enumerate() {
        if order.len() != n {
            return Err(SolveError::invalid(format!(
                "departure row {} has {} elements, expected {}",
                k,
                order.len(),
                n
            )));
        }
    }

    let tensor = build_cost_tensor(positions, w_before, w_tied)?;
    improve_departures(departures, &tensor, delta)
}
