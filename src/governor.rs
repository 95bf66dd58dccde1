//! Process-wide cap on the number of worker threads used by the parallel sort.
//!
//! A [`Governor`] owns a dedicated rayon pool with exactly `max_parallelism` workers and registers
//! it for the lifetime of the value. Every parallel sort started while it is alive runs inside that
//! pool, nested `rayon::join` calls included, so at most `max_parallelism` tasks execute at once.
//! Only one governor can be installed at a time. Dropping it releases the registration; the
//! workers exit once the last sort that still uses the pool has returned.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::Error;

struct Installed {
    pool: Arc<ThreadPool>,
    max_parallelism: NonZeroUsize,
}

static INSTALLED: Mutex<Option<Installed>> = Mutex::new(None);

/// Scoped registration of the process-wide worker pool. See the module docs.
#[derive(Debug)]
#[must_use = "the governor is released as soon as it is dropped"]
pub struct Governor {
    max_parallelism: NonZeroUsize,
}

impl Governor {
    /// Builds the worker pool and installs it process-wide.
    ///
    /// Fails with [`Error::GovernorAlreadyInstalled`] while another governor is alive.
    pub fn install(max_parallelism: NonZeroUsize) -> Result<Self, Error> {
        let mut installed = lock_installed();
        if let Some(current) = installed.as_ref() {
            return Err(Error::GovernorAlreadyInstalled {
                max_parallelism: current.max_parallelism,
            });
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(max_parallelism.get())
            .thread_name(|i| format!("pqsort-worker-{i}"))
            .build()?;

        *installed = Some(Installed {
            pool: Arc::new(pool),
            max_parallelism,
        });

        info!("Installed parallelism governor, max parallelism {max_parallelism}");

        Ok(Self { max_parallelism })
    }

    pub fn max_parallelism(&self) -> NonZeroUsize {
        self.max_parallelism
    }
}

impl Drop for Governor {
    fn drop(&mut self) {
        lock_installed().take();
        info!(
            "Released parallelism governor, max parallelism {}",
            self.max_parallelism
        );
    }
}

/// The cap of the currently installed governor, if any.
pub fn installed_parallelism() -> Option<NonZeroUsize> {
    lock_installed()
        .as_ref()
        .map(|installed| installed.max_parallelism)
}

/// Runs `op` inside the installed pool, or on rayon's global pool if no governor is installed.
pub(crate) fn run_capped<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    // Clone the handle so the lock is not held for the duration of the sort.
    let pool = lock_installed()
        .as_ref()
        .map(|installed| Arc::clone(&installed.pool));

    match pool {
        Some(pool) => pool.install(op),
        None => {
            debug!("No parallelism governor installed, using the global rayon pool");
            op()
        }
    }
}

fn lock_installed() -> MutexGuard<'static, Option<Installed>> {
    // The guarded state is a plain Option that is never left half-written.
    INSTALLED.lock().unwrap_or_else(PoisonError::into_inner)
}
