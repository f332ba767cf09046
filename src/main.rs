// MD5 Chess - Free and Open Source Software Statement
//
// File: src/main.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Command-line driver: parses arguments, sets up logging, runs both parts.

use clap::Parser;
use md5chess::{core::Part, solve, utils::format::FormatUtils, Args, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    init_tracing(args.debug);

    debug!("door id: {}", args.door);
    debug!("length: {}", args.length);

    for part in Part::ALL {
        let solution = solve(&args.door, args.length, part);
        debug!(
            "part {} timer: {}",
            part.number(),
            FormatUtils::format_elapsed(solution.stats.elapsed())
        );
        debug!("part {} search: {}", part.number(), solution.stats.summary());
        println!("{}: {}", part, solution.password);
    }

    Ok(())
}

/// Progress goes to stderr at debug level with --debug, otherwise only
/// warnings pass (RUST_LOG can widen that).
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
