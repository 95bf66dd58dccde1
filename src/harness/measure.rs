//! Wall clock timing of whole sorts and summary statistics over repeated runs.

use std::fmt;
use std::time::{Duration, Instant};

/// Wall clock stopwatch, started on creation.
#[derive(Copy, Clone, Debug)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Mean and sample standard deviation of a set of measurements.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stats {
    pub value: f64,
    pub variation: f64,
}

impl Stats {
    /// The deviation is 0 for fewer than two samples, the mean is 0 for none.
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self {
                value: 0.0,
                variation: 0.0,
            };
        }

        let len = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / len;

        let variation = if samples.len() < 2 {
            0.0
        } else {
            let sq_sum = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>();
            (sq_sum / (len - 1.0)).sqrt()
        };

        Self {
            value: mean,
            variation,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} +- {}", self.value, self.variation)
    }
}

/// Times `runs` sorts of fresh copies of `data` and returns the statistics in seconds.
///
/// Copying the input is not part of the measurement.
pub fn time_runs<T: Clone>(runs: usize, data: &[T], mut sort_fn: impl FnMut(&mut [T])) -> Stats {
    let samples = (0..runs)
        .map(|_| {
            let mut copy = data.to_vec();
            let timer = Timer::new();
            sort_fn(&mut copy);
            timer.elapsed_secs()
        })
        .collect::<Vec<_>>();

    Stats::from_samples(&samples)
}
