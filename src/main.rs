//! boolsearch CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use boolsearch::cli::args::*;
use boolsearch::cli::commands::*;

fn main() {
    // Parse command line arguments using clap
    let args = BoolSearchArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    // Report the error kind and abort without printing a result list
    if let Err(e) = execute_command(args) {
        eprintln!("Error ({}): {e}", e.kind());
        process::exit(1);
    }
}
