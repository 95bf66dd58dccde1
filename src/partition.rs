//! Hoare partition about a pivot value.
//!
//! The pivot is passed by reference to a value the caller owns, not by position. The borrow checker
//! rules out pointing it into `v`, so the partition is free to move the element the pivot was
//! copied from.

/// Partitions `v` about `pivot` and returns the split index `m`.
///
/// Afterwards every element in `v[..=m]` is `<= pivot` and every element in `v[m + 1..]` is
/// `>= pivot`. Elements equal to the pivot may end up on either side. For an empty slice `0` is
/// returned and nothing is touched.
///
/// `pivot` must be equal to some element of `v`, that element stops the scans on the first pass.
/// Otherwise a scan can run off the slice, which panics.
pub fn partition<T: Ord>(v: &mut [T], pivot: &T) -> usize {
    partition_by(v, pivot, &T::lt)
}

/// Like [`partition`], with `is_less` as the strict less-than of the element order.
pub fn partition_by<T, F>(v: &mut [T], pivot: &T, is_less: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    if v.is_empty() {
        return 0;
    }

    let mut l = 0;
    let mut r = v.len();
    loop {
        // Find the first element not less than the pivot.
        while is_less(&v[l], pivot) {
            l += 1;
        }

        // Find the last element not greater than the pivot.
        r -= 1;
        while is_less(pivot, &v[r]) {
            r -= 1;
        }

        if l >= r {
            return r;
        }

        v.swap(l, r);
        l += 1;
    }
}

/// Partitions `v` about a copy of its middle element and returns the split index.
///
/// The lower middle `(len - 1) / 2` is used. With it the split is always `< len - 1` for
/// `len >= 2`, so both `v[..=m]` and `v[m + 1..]` are strictly shorter than `v`.
pub(crate) fn partition_at_midpoint<T, F>(v: &mut [T], is_less: &F) -> usize
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    debug_assert!(v.len() >= 2);

    let pivot = v[(v.len() - 1) / 2].clone();
    let mid = partition_by(v, &pivot, is_less);

    // Only reachable if is_less is not a strict weak order. Recursing would not make progress.
    if mid + 1 >= v.len() {
        panic!("user-provided comparison function does not correctly implement a total order");
    }

    mid
}
