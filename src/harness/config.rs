use std::num::NonZeroUsize;

use clap::Parser;

/// Verify the serial and parallel quicksort against a reference sort and time them.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pqsort", version)]
pub struct Config {
    /// Number of generated elements.
    #[arg(long, default_value_t = 100_000_000)]
    pub len: usize,

    /// Timed runs per sort.
    #[arg(long, default_value = "5")]
    pub runs: NonZeroUsize,

    /// Maximum number of worker threads used by the parallel sort.
    #[arg(long, default_value = "4")]
    pub max_parallelism: NonZeroUsize,

    /// Slices of at most this many elements are sorted serially by the parallel sort.
    #[arg(long, default_value = "256")]
    pub granularity: NonZeroUsize,

    /// Seed of the input generator.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Skip the comparison against the reference sort.
    #[arg(long)]
    pub skip_verify: bool,
}
