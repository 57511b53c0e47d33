//! The three demos: BFS listing, most likely path, centrality ranking.
//!
//! Each demo writes its full result to a text file in the output directory
//! and a short report to `out`. Missing parameters are prompted for on `input`.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use tx_graph_core::{satoshi_to_btc, Graph};

use crate::error::{CliError, Result};

/// Write one item per line.
pub fn write_lines<I, S>(path: &Path, items: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let write_err = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = BufWriter::new(File::create(path).map_err(write_err)?);
    for item in items {
        writeln!(file, "{}", item.as_ref()).map_err(write_err)?;
    }
    file.flush().map_err(write_err)
}

fn console_err(source: std::io::Error) -> CliError {
    CliError::Write {
        path: PathBuf::from("<stdout>"),
        source,
    }
}

/// Show `prompt`, then read one trimmed line.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    what: &'static str,
) -> Result<String> {
    write!(out, "{}", prompt).map_err(console_err)?;
    out.flush().map_err(console_err)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| CliError::Prompt {
        what,
        reason: e.to_string(),
    })?;
    if read == 0 {
        return Err(CliError::Prompt {
            what,
            reason: "end of input".to_string(),
        });
    }
    Ok(line.trim().to_string())
}

pub fn bfs_demo<W: Write>(graph: &Graph, output_dir: &Path, out: &mut W) -> Result<PathBuf> {
    let filename = output_dir.join("BFSDemo.txt");
    writeln!(out, "BFS Demo\n").map_err(console_err)?;
    writeln!(out, "Traversing graph in BFS order...").map_err(console_err)?;

    write_lines(&filename, tx_graph_core::bfs_order(graph))?;

    writeln!(out, "Traversal outputted to {}\n", filename.display()).map_err(console_err)?;
    Ok(filename)
}

pub fn path_demo<R: BufRead, W: Write>(
    graph: &Graph,
    output_dir: &Path,
    sender: Option<&str>,
    recipient: Option<&str>,
    input: &mut R,
    out: &mut W,
) -> Result<PathBuf> {
    let filename = output_dir.join("pathDemo.txt");
    writeln!(out, "Shortest Path Demo\n").map_err(console_err)?;

    let sender = match sender {
        Some(s) => s.to_string(),
        None => prompt_line(input, out, "Sender Bitcoin Address: ", "sender address")?,
    };
    let recipient = match recipient {
        Some(r) => r.to_string(),
        None => prompt_line(input, out, "Recipient Bitcoin Address: ", "recipient address")?,
    };

    for address in [&sender, &recipient] {
        if !graph.address_exists(address) {
            log::info!("address {} is not in the graph", address);
        }
    }

    writeln!(out, "Getting shortest path with most bitcoin transacted...").map_err(console_err)?;
    let path = tx_graph_core::most_likely_path(graph, &sender, &recipient);
    write_lines(&filename, path.iter().map(|s| s.address.as_str()))?;
    writeln!(out, "Path outputted to {}\n", filename.display()).map_err(console_err)?;

    let total = tx_graph_core::path_total(&path);
    writeln!(
        out,
        "The path contains {} addresses with a total of {} BTC transacted in the path from {} to {}\n",
        path.len(),
        satoshi_to_btc(total),
        sender,
        recipient
    )
    .map_err(console_err)?;

    Ok(filename)
}

pub fn centrality_demo<R: BufRead, W: Write>(
    graph: &Graph,
    output_dir: &Path,
    sample_size: Option<usize>,
    seed: Option<u64>,
    input: &mut R,
    out: &mut W,
) -> Result<PathBuf> {
    writeln!(out, "Centrality Demo\n").map_err(console_err)?;

    let sample_size = match sample_size {
        Some(n) => n,
        None => {
            let raw = prompt_line(
                input,
                out,
                "Enter sampling size for calculating centrality (enter 0 for no sampling): ",
                "sample size",
            )?;
            raw.parse().map_err(|_| CliError::Prompt {
                what: "sample size",
                reason: format!("'{}' is not a non-negative integer", raw),
            })?
        }
    };

    let filename = output_dir.join(format!("{}sampleCentrality.txt", sample_size));
    writeln!(
        out,
        "Getting addresses by centrality with sample size {}...",
        sample_size
    )
    .map_err(console_err)?;

    let ranked = tx_graph_core::addresses_by_centrality_seeded(graph, sample_size, seed);
    write_lines(&filename, ranked.iter().map(|r| r.address.as_str()))?;
    writeln!(
        out,
        "Addresses listed by centrality outputted to {}\n",
        filename.display()
    )
    .map_err(console_err)?;

    writeln!(
        out,
        "Top 10 addresses with their balance and centrality score in graph:\n"
    )
    .map_err(console_err)?;
    for (i, r) in ranked.iter().take(10).enumerate() {
        writeln!(
            out,
            "{}. {} ({} BTC) ({})",
            i + 1,
            r.address,
            satoshi_to_btc(graph.address_balance(&r.address)),
            r.score
        )
        .map_err(console_err)?;
    }

    Ok(filename)
}
