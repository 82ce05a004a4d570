//! Per-element delta computation: the scan over all other elements that
//! fills the `change` and `add` scratch vectors, and the directional
//! cumulative scans that turn them into full move costs.

use crate::tensor::{CostTensor, AFTER, BEFORE, TIED};

/// Scans every other element against the candidate `e`, filling `change`
/// and `add` with the marginal costs described in the move-engine delta
/// computation, and returns whether `e` is alone in its current bucket.
///
/// `change` and `add` must have length at least `max_bucket + 2` and
/// `max_bucket + 3` respectively; the range `0..=max_bucket+1` of `change`
/// and `0..=max_bucket+2` of `add` is cleared before use.
pub(crate) fn scan_element(
    e: usize,
    r: &[usize],
    b: usize,
    max_bucket: usize,
    tensor: &CostTensor,
    change: &mut [f64],
    add: &mut [f64],
) -> bool {
    for slot in change.iter_mut().take(max_bucket + 2) {
        *slot = 0.0;
    }
    for slot in add.iter_mut().take(max_bucket + 3) {
        *slot = 0.0;
    }

    let mut tied_before = 0.0;
    let mut tied_after = 0.0;
    let mut tied_tied = 0.0;
    let mut alone = true;

    for (e2, &be2) in r.iter().enumerate() {
        if e2 == e {
            continue;
        }
        let before = tensor.get(e, e2, BEFORE);
        let after = tensor.get(e, e2, AFTER);
        let tied = tensor.get(e, e2, TIED);

        if be2 > b {
            change[be2] += tied - before;
            change[be2 + 1] += after - tied;
            add[be2 + 1] += after - before;
        } else if be2 < b {
            change[be2] += tied - after;
            if be2 > 0 {
                change[be2 - 1] += before - tied;
            }
            add[be2] += before - after;
        } else {
            alone = false;
            tied_before += before;
            tied_after += after;
            tied_tied += tied;
        }
    }

    if b > 0 {
        change[b - 1] += tied_before - tied_tied;
    }
    change[b + 1] += tied_after - tied_tied;
    add[b] += tied_before - tied_tied;
    add[b + 1] += tied_after - tied_tied;

    alone
}

/// Result of a directional scan: the winning target bucket and the exact
/// cost delta of moving there.
pub(crate) struct ScanResult {
    pub target: usize,
    pub delta: f64,
}

/// Runs the upward/downward cumulative scans over `change[0..=max_bucket+1]`
/// and returns the first-improvement, upward-biased change-bucket move, if
/// any improves on the status quo.
pub(crate) fn select_change_move(change: &mut [f64], b: usize, max_bucket: usize) -> Option<ScanResult> {
    for i in (b + 1)..=max_bucket {
        change[i] += change[i - 1];
    }
    if b >= 2 {
        for i in (0..=(b - 2)).rev() {
            change[i] += change[i + 1];
        }
    }

    for i in (b + 1)..=max_bucket {
        if change[i] < 0.0 {
            return Some(ScanResult { target: i, delta: change[i] });
        }
    }
    if b > 0 {
        for i in (0..=(b - 1)).rev() {
            if change[i] < 0.0 {
                return Some(ScanResult { target: i, delta: change[i] });
            }
        }
    }
    None
}

/// Runs the upward/downward cumulative scans over `add[0..=max_bucket+1]`
/// (pivot shifted relative to `change`: the upward run starts at `b+1`,
/// the downward run starts at `b`) and returns the first-improvement,
/// upward-biased add-bucket move, if any improves on the status quo.
pub(crate) fn select_add_move(add: &mut [f64], b: usize, max_bucket: usize) -> Option<ScanResult> {
    for i in (b + 2)..=(max_bucket + 1) {
        add[i] += add[i - 1];
    }
    if b >= 1 {
        for i in (0..b).rev() {
            add[i] += add[i + 1];
        }
    }

    for i in (b + 1)..=(max_bucket + 1) {
        if add[i] < 0.0 {
            return Some(ScanResult { target: i, delta: add[i] });
        }
    }
    for i in (0..=b).rev() {
        if add[i] < 0.0 {
            return Some(ScanResult { target: i, delta: add[i] });
        }
    }
    None
}
