//! Epistemic Product CLI
//!
//! Reads a world graph, an event graph and a compatibility relation, and
//! prints their synchronous product as DOT on stdout.

use anyhow::Context;
use clap::Parser;
use epistemic_product::{product, CompatibilityIndex, Graph};
use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `debug` or `epistemic_product::product=trace`
const LOG_ENV: &str = "EPISTEMIC_PRODUCT_LOG";

#[derive(Parser)]
#[command(
    name = "epistemic-product",
    version,
    about = "Synchronous product of a world graph and an event graph"
)]
struct Cli {
    /// World (state) graph in DOT form
    #[arg(value_name = "STATES", value_parser = read_input)]
    states: String,

    /// Event graph in DOT form
    #[arg(value_name = "EVENTS", value_parser = read_input)]
    events: String,

    /// Compatibility relation, one `worlds events` record per line
    #[arg(value_name = "COMPAT", value_parser = read_input)]
    compat: String,
}

/// Read a positional file while clap is still parsing, so an unreadable
/// path is reported as a usage error
fn read_input(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("cannot read '{}': {}", path, e))
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let worlds = Graph::from_dot(&cli.states).context("invalid STATES graph")?;
    let events = Graph::from_dot(&cli.events).context("invalid EVENTS graph")?;
    let compat = CompatibilityIndex::parse(&cli.compat).context("invalid COMPAT relation")?;

    let result = product(&worlds, &events, &compat);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in result.to_dot_lines()? {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}
