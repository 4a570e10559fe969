#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use roses_timeline::{EventType, render_cmd};

/// Reads a JSON event dataset and writes a standalone HTML timeline.
#[derive(Parser, Debug)]
#[command(name = "roses-timeline")]
#[command(about = "Render Wars of the Roses events to an HTML timeline", long_about = None)]
struct Cli {
    /// Filter by event type (repeatable); all events are shown when omitted
    #[arg(short = 't', long = "type", value_enum, value_name = "TYPE")]
    types: Vec<EventType>,

    /// Read the dataset from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Write the HTML to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable verbose logging (or set ROSES_TIMELINE_LOG)
    #[arg(long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("ROSES_TIMELINE_LOG").unwrap_or_else(|_| {
        if verbose { "roses_timeline=debug".to_string() } else { "roses_timeline=warn".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = render_cmd::run(cli.input, cli.output, cli.types) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
