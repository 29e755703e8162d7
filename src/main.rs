use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

use idba_gfa::convert::convert;

mod cli;

/// Log to stderr; RUST_LOG overrides the level picked with -v.
fn init_logging(default_level: &str) {
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(filter_layer);

    Registry::default().with(stderr_log).init();
}

fn run(args: &cli::CliArgs) -> Result<()> {
    let conversion = convert(&args.convert_config())?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(
            || format!("Failed to create {}", path.display()),
        )?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    conversion.write(&mut out).context("Failed to write GFA")?;
    Ok(())
}

fn main() {
    let args = cli::CliArgs::parse();
    init_logging(args.log_level());

    if let Err(err) = run(&args) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
