//! Shortest step count on a tile map.
//!
//! Run: cargo run -- map.txt --algorithm both --stats

use clap::Parser;
use gridpath_cli::{Cli, load_map, solve};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let raw = load_map(cli.map.as_deref())?;
    let outcome = solve(cli, &raw)?;
    print!("{}", outcome.render(cli.stats));
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
