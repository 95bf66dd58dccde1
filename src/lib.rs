//! In-place quicksort with a serial and a fork-join parallel driver, plus the harness used to
//! verify and time them.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone + Send,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone + Send,
                F: Fn(&T, &T) -> Ordering + Sync,
            {
                sort_by(arr, compare);
            }
        }
    };
}

mod error;

pub mod governor;
pub mod harness;
pub mod parallel;
pub mod partition;
pub mod serial;

pub use error::Error;
pub use governor::Governor;
pub use sort_test_tools::Sort;
