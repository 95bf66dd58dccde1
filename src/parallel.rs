use std::cmp::Ordering;
use std::num::NonZeroUsize;

use crate::{governor, partition, serial, Sort};

/// Slices of at most this many elements are sorted serially.
pub const DEFAULT_GRANULARITY: usize = 256;

/// Parallel sort with the granularity fixed at compile time. A granularity of 0 is treated as 1.
pub struct SortImpl<const GRANULARITY: usize = DEFAULT_GRANULARITY>;

impl<const GRANULARITY: usize> Sort for SortImpl<GRANULARITY> {
    fn name() -> String {
        format!("pqsort_parallel_unstable_g{GRANULARITY}")
    }

    #[inline]
    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone + Send,
    {
        par_sort(arr, &T::lt, GRANULARITY.max(1));
    }

    #[inline]
    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone + Send,
        F: Fn(&T, &T) -> Ordering + Sync,
    {
        par_sort(
            arr,
            &|a: &T, b: &T| compare(a, b) == Ordering::Less,
            GRANULARITY.max(1),
        );
    }
}

/// Sorts `v` in place, forking both sides of every split longer than [`DEFAULT_GRANULARITY`].
///
/// Runs inside the pool of the installed [`Governor`](crate::Governor), or on rayon's global pool
/// if there is none. The output is identical to [`serial::sort`].
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone + Send,
{
    par_sort(v, &T::lt, DEFAULT_GRANULARITY);
}

pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Clone + Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    par_sort(
        v,
        &|a: &T, b: &T| compare(a, b) == Ordering::Less,
        DEFAULT_GRANULARITY,
    );
}

pub fn sort_with_granularity<T>(v: &mut [T], granularity: NonZeroUsize)
where
    T: Ord + Clone + Send,
{
    par_sort(v, &T::lt, granularity.get());
}

pub fn sort_by_with_granularity<T, F>(v: &mut [T], compare: F, granularity: NonZeroUsize)
where
    T: Clone + Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    par_sort(
        v,
        &|a: &T, b: &T| compare(a, b) == Ordering::Less,
        granularity.get(),
    );
}

fn par_sort<T, F>(v: &mut [T], is_less: &F, granularity: usize)
where
    T: Clone + Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    governor::run_capped(|| quicksort(v, is_less, granularity));
}

fn quicksort<T, F>(v: &mut [T], is_less: &F, granularity: usize)
where
    T: Clone + Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    // Also covers len <= 1, granularity is at least 1.
    if v.len() <= granularity {
        serial::quicksort(v, is_less);
        return;
    }

    let mid = partition::partition_at_midpoint(v, is_less);

    // The two sides are disjoint, each task owns its own.
    let (left, right) = v.split_at_mut(mid + 1);
    rayon::join(
        || quicksort(left, is_less, granularity),
        || quicksort(right, is_less, granularity),
    );
}
