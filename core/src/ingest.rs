//! Batch loading of `sender,amount,recipient` records.
//!
//! Loading is all-or-nothing: the first unreadable line or malformed record
//! aborts the batch and no graph is returned.
//!
//! Blank and whitespace-only lines are the one exception. They carry no
//! fields at all and are skipped, so a trailing newline or a spacer line in
//! an export does not fail the load. A line with one or two fields is still
//! malformed.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Insertion, TransactionRecord};

/// Delimiter used by the transaction export.
pub const DEFAULT_DELIMITER: char = ',';

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub delimiter: char,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// Counters collected while loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub records: usize,
    pub duplicates: usize,
}

/// Load a graph from a file.
pub fn load_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Graph> {
    load_path_with_summary(path, options).map(|(graph, _)| graph)
}

/// Like [`load_path`], also returning record and duplicate counts.
pub fn load_path_with_summary(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<(Graph, LoadSummary)> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let file = File::open(path).map_err(|source| GraphError::Io {
        source_name: source_name.clone(),
        source,
    })?;
    load_reader_with_summary(BufReader::new(file), &source_name, options)
}

/// Load a graph from in-memory text. Errors name the source as `<input>`.
pub fn load_str(text: &str, options: &LoadOptions) -> Result<Graph> {
    load_reader(text.as_bytes(), "<input>", options)
}

/// Load a graph from any buffered reader.
pub fn load_reader<R: BufRead>(reader: R, source_name: &str, options: &LoadOptions) -> Result<Graph> {
    load_reader_with_summary(reader, source_name, options).map(|(graph, _)| graph)
}

/// Like [`load_reader`], also returning record and duplicate counts.
pub fn load_reader_with_summary<R: BufRead>(
    reader: R,
    source_name: &str,
    options: &LoadOptions,
) -> Result<(Graph, LoadSummary)> {
    let mut graph = Graph::new();
    let mut summary = LoadSummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| GraphError::Io {
            source_name: source_name.to_string(),
            source,
        })?;

        let Some(record) = parse_record(&line, options.delimiter, source_name, line_no)? else {
            continue;
        };

        let inserted = graph
            .add_transaction(&record.sender, record.amount, &record.recipient)
            .map_err(|e| e.at(source_name, line_no))?;
        summary.records += 1;
        if let Insertion::Duplicate(_) = inserted {
            summary.duplicates += 1;
        }
    }

    log::debug!(
        "loaded {} records from {}: {} addresses, {} transactions, {} duplicates dropped",
        summary.records,
        source_name,
        graph.node_count(),
        graph.edge_count(),
        summary.duplicates
    );

    Ok((graph, summary))
}

/// Parse one line into a record. Blank lines yield `None`.
///
/// Each field is reduced to its first whitespace-separated token, which
/// strips padding and stray carriage returns. Fields past the third are
/// ignored. The amount's sign is not checked here; [`Graph::add_transaction`]
/// rejects non-positive amounts and the loader tags that error with the line.
pub fn parse_record(
    line: &str,
    delimiter: char,
    source_name: &str,
    line_no: usize,
) -> Result<Option<TransactionRecord>> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(delimiter).map(clean_field).collect();
    if fields.len() < 3 {
        return Err(GraphError::MalformedRecord {
            source_name: source_name.to_string(),
            line: line_no,
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    }

    let (sender, amount_str, recipient) = (fields[0], fields[1], fields[2]);
    if sender.is_empty() || recipient.is_empty() {
        return Err(GraphError::MalformedRecord {
            source_name: source_name.to_string(),
            line: line_no,
            reason: "empty address field".to_string(),
        });
    }

    let amount: i64 = amount_str.parse().map_err(|_| GraphError::InvalidAmount {
        source_name: source_name.to_string(),
        line: line_no,
        value: amount_str.to_string(),
    })?;

    Ok(Some(TransactionRecord::new(sender, amount, recipient)))
}

fn clean_field(field: &str) -> &str {
    field.split_whitespace().next().unwrap_or("")
}
