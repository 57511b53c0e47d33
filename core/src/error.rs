use thiserror::Error;

/// Failures while building a graph. Queries never fail; they degrade to
/// empty or zero results instead.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("failed to read transactions from \"{source_name}\": {source}")]
    Io {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error loading transactions from \"{source_name}\" (line {line}): {reason}")]
    MalformedRecord {
        source_name: String,
        line: usize,
        reason: String,
    },

    #[error("error loading transactions from \"{source_name}\" (line {line}): amount '{value}' is not an integer")]
    InvalidAmount {
        source_name: String,
        line: usize,
        value: String,
    },

    #[error("error loading transactions from \"{source_name}\" (line {line}): amount must be positive, got {amount}")]
    NonPositiveAmount {
        source_name: String,
        line: usize,
        amount: i64,
    },
}

impl GraphError {
    /// Re-label an error raised by a direct insert with the record's origin.
    pub(crate) fn at(self, source_name: &str, line: usize) -> Self {
        match self {
            GraphError::NonPositiveAmount { amount, .. } => GraphError::NonPositiveAmount {
                source_name: source_name.to_string(),
                line,
                amount,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
