//! Correctness check and timing loop around the serial and parallel sorts.

use std::io::Write;

use log::info;
use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};

use crate::{governor, parallel, serial, Error};

mod config;
mod measure;
mod minstd;

pub use config::Config;
pub use measure::{time_runs, Stats, Timer};
pub use minstd::MinStdRand;

/// `len` integers uniform over the whole `i32` range, deterministic for a given `seed`.
pub fn generate(len: usize, seed: u64) -> Vec<i32> {
    MinStdRand::seed_from_u64(seed)
        .sample_iter(Uniform::new_inclusive(i32::MIN, i32::MAX))
        .take(len)
        .collect()
}

/// Sorts a copy of `data` with `sort_fn` and compares it element-wise to `reference`.
pub fn verify<T>(data: &[T], reference: &[T], sort_fn: impl FnOnce(&mut [T])) -> bool
where
    T: Clone + PartialEq,
{
    let mut sorted = data.to_vec();
    sort_fn(&mut sorted);
    sorted == reference
}

/// Generates the input, checks both sorts against `sort_unstable` and times them, writing the
/// report to `out`.
///
/// The parallel sort runs in the pool of the installed governor, if the caller installed one.
/// Fails with [`Error::VerificationFailed`] after the report if either sort was wrong.
pub fn run(config: &Config, out: &mut impl Write) -> Result<(), Error> {
    info!(
        "Generating {} elements with seed {}",
        config.len, config.seed
    );
    let data = generate(config.len, config.seed);
    writeln!(out, "Data generated.")?;

    let serial_sort = |v: &mut [i32]| serial::sort(v);
    let parallel_sort = |v: &mut [i32]| parallel::sort_with_granularity(v, config.granularity);

    match governor::installed_parallelism() {
        Some(max_parallelism) => info!(
            "Parallel sort: granularity {}, max parallelism {max_parallelism}",
            config.granularity
        ),
        None => info!(
            "Parallel sort: granularity {}, no governor installed",
            config.granularity
        ),
    }

    let mut failed = Vec::new();
    if !config.skip_verify {
        writeln!(out, "Verifying correctness:")?;
        let mut reference = data.clone();
        reference.sort_unstable();
        writeln!(out, "Reference sort finished.")?;

        let serial_correct = verify(&data, &reference, serial_sort);
        writeln!(out, "Serial implementation correct: {serial_correct}")?;
        if !serial_correct {
            failed.push("serial");
        }

        let parallel_correct = verify(&data, &reference, parallel_sort);
        writeln!(out, "Parallel implementation correct: {parallel_correct}")?;
        if !parallel_correct {
            failed.push("parallel");
        }
    }

    writeln!(out, "Running serial version:")?;
    let serial_stats = time_runs(config.runs.get(), &data, serial_sort);
    writeln!(out, "Serial: {serial_stats}")?;

    writeln!(out, "Running parallel version:")?;
    let parallel_stats = time_runs(config.runs.get(), &data, parallel_sort);
    writeln!(out, "Parallel: {parallel_stats}")?;

    info!(
        "Parallel speedup over serial: {:.2}x",
        serial_stats.value / parallel_stats.value
    );

    match failed.first() {
        Some(sorter) => Err(Error::VerificationFailed {
            sorter: sorter.to_string(),
        }),
        None => Ok(()),
    }
}
