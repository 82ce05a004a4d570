//! Applying a selected change-bucket or add-bucket move to the working
//! ranking, maintaining the contiguous-bucket-indices invariant and
//! `max_bucket` incrementally.

/// Relocates `e` from its current bucket `b` into existing bucket `target`.
/// If `alone`, compacts bucket indices above `b` down by one and decrements
/// `max_bucket`.
pub(crate) fn apply_change_bucket(
    r: &mut [usize],
    max_bucket: &mut usize,
    e: usize,
    b: usize,
    target: usize,
    alone: bool,
) {
    r[e] = target;
    if alone {
        for slot in r.iter_mut() {
            if *slot > b {
                *slot -= 1;
            }
        }
        *max_bucket -= 1;
    }
}

/// Relocates `e` into a newly inserted singleton bucket that will occupy
/// index `target` after insertion.
pub(crate) fn apply_add_bucket(
    r: &mut [usize],
    max_bucket: &mut usize,
    e: usize,
    b: usize,
    target: usize,
    alone: bool,
) {
    if alone {
        if b < target {
            for slot in r.iter_mut() {
                if *slot > b && *slot < target {
                    *slot -= 1;
                }
            }
            r[e] = target - 1;
        } else if b > target {
            for slot in r.iter_mut() {
                if *slot >= target && *slot < b {
                    *slot += 1;
                }
            }
            r[e] = target;
        }
        // target == b: e is the sole occupant of b and the new singleton
        // would occupy the same slot it already holds. The selection scans
        // never choose this: add[b] is exactly 0 whenever `alone`, since
        // there is no tied contribution to fold into it.
    } else {
        for slot in r.iter_mut() {
            if *slot >= target {
                *slot += 1;
            }
        }
        r[e] = target;
        *max_bucket += 1;
    }
}
