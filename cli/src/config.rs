use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Log level options
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// Analyze a transaction CSV as a directed address graph.
#[derive(Parser, Debug, Clone)]
#[command(name = "tx-graph")]
#[command(version)]
pub struct Cli {
    /// Transaction CSV: sender,amount,recipient per line
    #[arg(long = "input-filepath", default_value = "data/transactions.csv")]
    pub input_filepath: PathBuf,

    /// Directory that receives the demo output files (must exist)
    #[arg(long = "output-directory", default_value = "data")]
    pub output_directory: PathBuf,

    /// Write every address in BFS order
    #[arg(long = "BFS", visible_alias = "bfs")]
    pub bfs: bool,

    /// Find the most likely path between two addresses
    #[arg(long = "most-likely-path")]
    pub most_likely_path: bool,

    /// Rank addresses by sampled betweenness centrality
    #[arg(long = "betweenness-centrality")]
    pub betweenness_centrality: bool,

    /// Path sender (prompted for if omitted)
    #[arg(long)]
    pub sender: Option<String>,

    /// Path recipient (prompted for if omitted)
    #[arg(long)]
    pub recipient: Option<String>,

    /// Centrality sample size, 0 for every address (prompted for if omitted)
    #[arg(long = "sample-size")]
    pub sample_size: Option<usize>,

    /// Seed for centrality sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Field delimiter of the input file
    #[arg(long, default_value_t = tx_graph_core::ingest::DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// Print a JSON status line after loading
    #[arg(long)]
    pub status: bool,

    /// Set log level (error, warn, info, debug, trace, off)
    #[arg(short = 'l', long = "log-level", value_enum)]
    pub log_level: Option<LogLevel>,

    /// Verbose mode (equivalent to --log-level debug)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Explicit flags win; otherwise `RUST_LOG`, falling back to warn so
    /// dropped duplicate transactions stay visible.
    pub fn init_logging(&self) {
        let mut builder = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("warn"),
        );
        if let Some(level) = self.log_level {
            builder.filter_level(level.to_level_filter());
        } else if self.verbose {
            builder.filter_level(log::LevelFilter::Debug);
        }
        let _ = builder.try_init();
    }

    pub fn load_options(&self) -> tx_graph_core::LoadOptions {
        tx_graph_core::LoadOptions {
            delimiter: self.delimiter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tx-graph"]);
        assert_eq!(cli.input_filepath, PathBuf::from("data/transactions.csv"));
        assert_eq!(cli.output_directory, PathBuf::from("data"));
        assert_eq!(cli.delimiter, ',');
        assert!(!cli.bfs && !cli.most_likely_path && !cli.betweenness_centrality);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "tx-graph",
            "--input-filepath",
            "tx.csv",
            "--output-directory",
            "out",
            "--BFS",
            "--most-likely-path",
            "--betweenness-centrality",
            "--sample-size",
            "10",
            "--seed",
            "3",
        ]);
        assert_eq!(cli.input_filepath, PathBuf::from("tx.csv"));
        assert!(cli.bfs && cli.most_likely_path && cli.betweenness_centrality);
        assert_eq!(cli.sample_size, Some(10));
        assert_eq!(cli.seed, Some(3));
    }

    #[test]
    fn test_lowercase_bfs_alias() {
        let cli = Cli::parse_from(["tx-graph", "--bfs"]);
        assert!(cli.bfs);
    }
}
