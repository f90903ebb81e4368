use clap::Parser;
use log::{info, warn};

use maze_pathfinding::config::Config;
use maze_pathfinding::harness::Harness;
use std::io;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Config::parse();
    info!(
        "Starting maze pathfinding: algorithm {:?}, seed {:?}",
        config.algorithm, config.seed
    );

    let mut harness = Harness::from_config(&config);

    // A closed stdout (e.g. piped into `head`) is not a failed run.
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = harness.report(&mut out) {
        warn!("{:#}", e);
    }
}
