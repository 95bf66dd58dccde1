use std::cmp::Ordering;
use std::mem;

use crate::partition;

sort_impl!("pqsort_serial_unstable");

/// Sorts `v` in place on the calling thread.
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    quicksort(v, &T::lt);
}

pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    quicksort(v, &|a: &T, b: &T| compare(a, b) == Ordering::Less);
}

/// Midpoint pivot quicksort. Recurses into the shorter side of each split and loops on the longer
/// one, which keeps the stack depth logarithmic whatever the split quality.
pub(crate) fn quicksort<T, F>(mut v: &mut [T], is_less: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    while v.len() > 1 {
        let mid = partition::partition_at_midpoint(v, is_less);
        let (left, right) = mem::take(&mut v).split_at_mut(mid + 1);

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}
