//! The improver driver: runs the move engine to a fixed point for each
//! departure ranking independently and accumulates cost deltas.

use crate::engine::{run_to_local_minimum, Scratch};
use crate::error::{Result, SolveError};
use crate::model::BucketOrder;
use crate::tensor::CostTensor;

/// For each departure ranking in `departures`, drives the move engine to a
/// local minimum against `tensor` and adds the resulting cost change to
/// the matching slot of `delta`.
///
/// Rows are independent: each touches only its own `BucketOrder` and its
/// own `delta` slot, plus the shared, read-only `tensor`. Performs no I/O.
pub(crate) fn improve_departures(
    departures: &mut [BucketOrder],
    tensor: &CostTensor,
    delta: &mut [f64],
) -> Result<()> {
    if departures.len() != delta.len() {
        return Err(SolveError::invalid(format!(
            "departures has {} rows but delta has {} slots",
            departures.len(),
            delta.len()
        )));
    }

    for (order, slot) in departures.iter_mut().zip(delta.iter_mut()) {
        let mut scratch = Scratch::new(order.len())?;
        let improvement = run_to_local_minimum(order, tensor, &mut scratch);
        *slot += improvement;
    }

    Ok(())
}
