use std::io;

use clap::Parser;
use log::LevelFilter;

use pqsort::harness::{self, Config};
use pqsort::{Error, Governor};

fn main() -> Result<(), Error> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Config::parse();

    // Held until the end of main, every parallel sort runs inside its pool.
    let _governor = Governor::install(config.max_parallelism)?;

    harness::run(&config, &mut io::stdout().lock())
}
