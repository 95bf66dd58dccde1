//! Input patterns for testing and benchmarking the sorts. Currently limited to i32 values.
//!
//! Patterns that are adversarial for a fixed midpoint pivot, such as pipe organ, are left out on
//! purpose, they turn the sorts quadratic and would dominate the test runtime.

use std::cmp::Reverse;
use std::env;
use std::ops::Range;
use std::str::FromStr;
use std::sync::Mutex;

use rand::distributions::Uniform;
use rand::prelude::*;

use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    let dist: Uniform<i32> = range.into();
    new_rng().sample_iter(dist).take(len).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    // Only defined for len > 0.

    let dist = ZipfDistribution::new(len, exponent).unwrap();
    let mut rng = new_rng();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saw(len, saw_count, |_| SawDirection::Ascending)
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saw(len, saw_count, |_| SawDirection::Descending)
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let directions = random_uniform(len / saw_chunk_len(len, saw_count) + 1, 0..=1);
    saw(len, saw_count, |i| SawDirection::from_bit(directions[i]))
}

pub fn saw_mixed_range(len: usize, range: Range<usize>) -> Vec<i32> {
    //     :.
    // :.  :::.    .::.      .:
    // :::.:::::..::::::..:.:::

    // Ascending and descending randomly picked, with length in `range`.

    let mut vals = random(len);

    let max_chunks = len / range.start + 1;
    let directions = random_uniform(max_chunks, 0..=1);
    let chunk_lens = random_uniform(max_chunks, (range.start as i32)..(range.end as i32));

    let mut start = 0;
    for (&chunk_len, &direction) in chunk_lens.iter().zip(directions.iter()) {
        if start >= len {
            break;
        }

        let end = (start + chunk_len as usize).min(len);
        SawDirection::from_bit(direction).apply(&mut vals[start..end]);
        start = end;
    }

    vals
}

/// Overwrites the default behavior so that each call to a random derived pattern yields new random
/// values.
///
/// By default `patterns::random(4)` will yield the same values per process invocation.
/// For benchmarks it's advised to call this function.
pub fn use_random_seed_each_time() {
    let (seed_type, _) = get_or_init_seed_type_and_value();
    if seed_type == SeedType::ExternalOverride {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    *SEED_TYPE_AND_VALUE.lock().unwrap() = Some((SeedType::RandomEachTime, 0));
}

pub fn random_init_seed() -> u64 {
    get_or_init_seed_type_and_value().1
}

// --- Private ---

#[derive(Copy, Clone)]
enum SawDirection {
    Ascending,
    Descending,
}

impl SawDirection {
    fn from_bit(bit: i32) -> Self {
        match bit {
            0 => Self::Ascending,
            1 => Self::Descending,
            _ => unreachable!(),
        }
    }

    fn apply(self, chunk: &mut [i32]) {
        match self {
            Self::Ascending => chunk.sort(),
            Self::Descending => chunk.sort_by_key(|&e| Reverse(e)),
        }
    }
}

fn saw(len: usize, saw_count: usize, direction_of: impl Fn(usize) -> SawDirection) -> Vec<i32> {
    let mut vals = random(len);
    if len == 0 {
        return vals;
    }

    for (i, chunk) in vals.chunks_mut(saw_chunk_len(len, saw_count)).enumerate() {
        direction_of(i).apply(chunk);
    }

    vals
}

fn saw_chunk_len(len: usize, saw_count: usize) -> usize {
    (len / saw_count.max(1)).max(1)
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedType {
    RandomEachTime,
    RandomOncePerProcess,
    ExternalOverride,
}

static SEED_TYPE_AND_VALUE: Mutex<Option<(SeedType, u64)>> = Mutex::new(None);

fn get_or_init_seed_type_and_value() -> (SeedType, u64) {
    let (seed_type, seed_val) = *SEED_TYPE_AND_VALUE.lock().unwrap().get_or_insert_with(|| {
        if let Some(override_seed) = env::var("OVERRIDE_SEED")
            .ok()
            .map(|seed| u64::from_str(&seed).unwrap())
        {
            (SeedType::ExternalOverride, override_seed)
        } else {
            (SeedType::RandomOncePerProcess, thread_rng().gen())
        }
    });

    if seed_type == SeedType::RandomEachTime {
        (SeedType::RandomEachTime, thread_rng().gen())
    } else {
        (seed_type, seed_val)
    }
}

fn new_rng() -> StdRng {
    // Random seed, but the test tools print it for repeatability.
    StdRng::seed_from_u64(random_init_seed())
}
