use std::io;
use std::num::NonZeroUsize;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("a parallelism governor is already installed (max parallelism {max_parallelism})")]
    GovernorAlreadyInstalled { max_parallelism: NonZeroUsize },

    #[error("failed to build the worker pool: {0}")]
    ThreadPoolBuild(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to write the report: {0}")]
    Io(#[from] io::Error),

    #[error("{sorter} output does not match the reference sort")]
    VerificationFailed { sorter: String },
}
