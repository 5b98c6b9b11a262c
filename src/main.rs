// src/main.rs
use std::process::exit;
use clap::Parser;
use tracing::{error, Level};

use linescan::cli::{App, Args};

fn main() {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries the scan result
    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let app = match App::initialize(args.config.as_deref()) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            exit(1);
        }
    };

    if let Err(e) = app.run(args.command) {
        error!("Command execution failed: {:#}", e);
        exit(1);
    }
}
