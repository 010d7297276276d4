//! Heesch number search over polyiamonds.
//!
//! Searches all free polyiamonds of a given size for interesting Heesch
//! numbers. Machine-readable matches go to standard output; progress and
//! the final distribution go to standard error. Exits 0 when at least one
//! shape passed the filter.

use clap::{Parser, Subcommand};

use heesch::heesch::HeeschOutcome;
use heesch::search::{search, SearchConfig};
use heesch::SatBackend;

#[derive(Parser)]
#[command(name = "heesch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the Heesch number of every free n-iamond.
    Search {
        /// Polyiamond size: the number of triangles per shape.
        n: usize,
        /// Maximum number of coronas to certify per shape.
        #[arg(long, default_value_t = 5)]
        cap: usize,
        /// Report only shapes with exactly this Heesch number.
        #[arg(long, conflicts_with = "min_hc")]
        target_hc: Option<usize>,
        /// Report only shapes with at least this Heesch number.
        #[arg(long)]
        min_hc: Option<usize>,
        /// SAT back end for corona solving.
        #[arg(long, value_enum, default_value_t = SatBackend::Varisat)]
        sat_backend: SatBackend,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Search {
            n,
            cap,
            target_hc,
            min_hc,
            sat_backend,
        } => {
            let config = SearchConfig {
                cap,
                target_hc,
                min_hc,
                backend: sat_backend,
                verbose: true,
            };
            if !run_search(n, &config) {
                std::process::exit(1);
            }
        }
    }
}

/// Runs the search and prints matches; returns whether any shape matched.
fn run_search(n: usize, config: &SearchConfig) -> bool {
    let report = search(n, config);

    let mut found = false;
    for hit in report.matches(config) {
        found = true;
        let result = &hit.result;
        let marker = match &result.outcome {
            HeeschOutcome::Exact => "",
            HeeschOutcome::CapReached => " (cap reached)",
            HeeschOutcome::BackendFailed(_) => " (lower bound: back end failed)",
        };
        let cells: Vec<(i32, i32)> = hit.shape.cells().iter().map(|c| (c.x, c.y)).collect();

        println!("{n}-iamond hc={}{marker}", result.heesch_number);
        println!("cells: {cells:?}");
        println!("corona sizes: {:?}", result.corona_sizes());
        println!("{}", hit.shape);
        println!();

        if let HeeschOutcome::BackendFailed(message) = &result.outcome {
            eprintln!("warning: {message}");
        }
    }

    eprintln!("heesch number distribution over {} shapes:", report.results.len());
    for (heesch_number, count) in &report.distribution {
        eprintln!("  hc={heesch_number}: {count}");
    }

    found
}
