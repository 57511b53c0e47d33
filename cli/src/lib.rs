//! tx-graph: command-line front end for tx-graph-core.
//!
//! Loads a transaction CSV, reports its size and runs whichever demos were
//! requested, writing their results into the output directory.

use std::io::{BufRead, Write};
use std::time::Instant;

pub mod config;
pub mod demos;
pub mod error;
pub mod status;

pub use config::{Cli, LogLevel};
pub use error::{CliError, Result};

/// Run the CLI against the given console streams.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, out: &mut W) -> Result<()> {
    if !cli.output_directory.is_dir() {
        return Err(CliError::MissingOutputDirectory(cli.output_directory.clone()));
    }

    let console_err = |source| CliError::Write {
        path: "<stdout>".into(),
        source,
    };

    writeln!(out, "Loading {}", cli.input_filepath.display()).map_err(console_err)?;
    let start = Instant::now();
    let (graph, summary) =
        tx_graph_core::load_path_with_summary(&cli.input_filepath, &cli.load_options())?;
    let load_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    writeln!(
        out,
        "Loaded {} Addresses and {} Transactions\n",
        graph.node_count(),
        graph.edge_count()
    )
    .map_err(console_err)?;
    if summary.duplicates > 0 {
        log::info!(
            "{} transactions repeated an existing sender/recipient pair and were ignored",
            summary.duplicates
        );
    }

    if cli.status {
        let status = status::status_json(&cli.input_filepath, &graph, &summary, load_time_ms);
        writeln!(out, "{}", status).map_err(console_err)?;
    }

    if cli.bfs {
        demos::bfs_demo(&graph, &cli.output_directory, out)?;
    }
    if cli.most_likely_path {
        demos::path_demo(
            &graph,
            &cli.output_directory,
            cli.sender.as_deref(),
            cli.recipient.as_deref(),
            input,
            out,
        )?;
    }
    if cli.betweenness_centrality {
        demos::centrality_demo(
            &graph,
            &cli.output_directory,
            cli.sample_size,
            cli.seed,
            input,
            out,
        )?;
    }

    Ok(())
}
