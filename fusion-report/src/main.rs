//! fusion-report: one report out of many fusion callers
//! Alejandro Gonzales-Irribarren, 2025
//!
//! Reads the outputs of EricScript, STAR-Fusion, FusionCatcher, Pizzly
//! and SQUID for one sample, merges the calls by gene pair, splits them
//! into known and unknown fusions against a reference table and writes
//! the report bundle under `<output>/Report-<sample>/`.

use clap::Parser;
use config::ArgCheck;
use log::{error, info, Level};
use simple_logger::init_with_level;

use fusion_report::{cli::Args, generate_report};

fn main() {
    let start = std::time::Instant::now();
    if let Err(e) = init_with_level(Level::Info) {
        eprintln!("ERROR: cannot initialize logger: {}", e);
    }

    let args: Args = Args::parse();
    args.check().unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads.max(config::MIN_THREADS))
        .build_global()
    {
        log::warn!("Could not resize thread pool: {}", e);
    }

    generate_report(args).unwrap_or_else(|e| {
        error!("{:#}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:?}", elapsed);
}
