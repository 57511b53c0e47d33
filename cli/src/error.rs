use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Directory \"{}\" does not exist!", .0.display())]
    MissingOutputDirectory(PathBuf),

    #[error(transparent)]
    Load(#[from] tx_graph_core::GraphError),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {what}: {reason}")]
    Prompt { what: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
