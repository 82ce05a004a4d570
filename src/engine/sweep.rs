//! The sweep loop: drives one [`BucketOrder`] to a local minimum against a
//! fixed [`CostTensor`], using the delta computation and move application
//! in [`super::delta`] and [`super::moves`].

use crate::error::{Result, SolveError};
use crate::model::BucketOrder;
use crate::tensor::CostTensor;

use super::delta::{scan_element, select_add_move, select_change_move};
use super::moves::{apply_add_bucket, apply_change_bucket};

/// Scratch buffers reused across sweeps for a single ranking: `change` has
/// length `n + 2`, `add` has length `n + 3`, per the data model's lifetime
/// contract.
pub(crate) struct Scratch {
    change: Vec<f64>,
    add: Vec<f64>,
}

impl Scratch {
    pub(crate) fn new(n: usize) -> Result<Self> {
        let mut change = Vec::new();
        change
            .try_reserve_exact(n + 2)
            .map_err(|e| SolveError::Alloc(format!("change scratch of {} entries: {}", n + 2, e)))?;
        change.resize(n + 2, 0.0);

        let mut add = Vec::new();
        add.try_reserve_exact(n + 3)
            .map_err(|e| SolveError::Alloc(format!("add scratch of {} entries: {}", n + 3, e)))?;
        add.resize(n + 3, 0.0);

        Ok(Scratch { change, add })
    }
}

/// Runs the move engine on `order` against `tensor` until a sweep applies
/// no improving move, mutating `order` in place and returning the total
/// cost change (negative or zero; the engine never increases cost).
pub(crate) fn run_to_local_minimum(order: &mut BucketOrder, tensor: &CostTensor, scratch: &mut Scratch) -> f64 {
    let n = order.len();
    let mut total = 0.0;

    loop {
        let mut improved_this_sweep = false;

        for e in 0..n {
            let (r, max_bucket) = order.raw_mut();
            let b = r[e];

            let alone = scan_element(e, r, b, *max_bucket, tensor, &mut scratch.change, &mut scratch.add);

            if let Some(change_move) = select_change_move(&mut scratch.change, b, *max_bucket) {
                apply_change_bucket(r, max_bucket, e, b, change_move.target, alone);
                total += change_move.delta;
                improved_this_sweep = true;
                continue;
            }

            if let Some(add_move) = select_add_move(&mut scratch.add, b, *max_bucket) {
                apply_add_bucket(r, max_bucket, e, b, add_move.target, alone);
                total += add_move.delta;
                improved_this_sweep = true;
            }
        }

        if !improved_this_sweep {
            break;
        }
    }

    total
}
