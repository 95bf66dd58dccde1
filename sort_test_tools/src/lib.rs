use std::cmp::Ordering;

/// Uniform interface over the sort implementations under test.
///
/// The bounds are those of the parallel sorter: the pivot is captured by value, and both the
/// elements and the comparison have to cross thread boundaries.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone + Send;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone + Send,
        F: Fn(&T, &T) -> Ordering + Sync;
}

pub mod patterns;
