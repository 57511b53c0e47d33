use std::fs;

use clap::Parser;
use tx_graph_cli::{run, Cli, CliError};

const TRANSACTIONS: &str = "\
A,1000000000,B
B,500000000,C
A,300000000,C
A,700000000,B
D,100,E
";

fn setup() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("transactions.csv");
    fs::write(&input, TRANSACTIONS).unwrap();
    (dir, input)
}

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("tx-graph").chain(args.iter().copied()))
}

#[test]
fn loads_and_reports_counts() {
    let (dir, input) = setup();
    let cli = cli(&[
        "--input-filepath",
        input.to_str().unwrap(),
        "--output-directory",
        dir.path().to_str().unwrap(),
    ]);
    let mut out = Vec::new();
    run(&cli, &mut "".as_bytes(), &mut out).unwrap();
    let report = String::from_utf8(out).unwrap();
    assert!(report.contains("Loaded 5 Addresses and 4 Transactions"));
}

#[test]
fn all_demos_write_their_files() {
    let (dir, input) = setup();
    let cli = cli(&[
        "--input-filepath",
        input.to_str().unwrap(),
        "--output-directory",
        dir.path().to_str().unwrap(),
        "--BFS",
        "--most-likely-path",
        "--betweenness-centrality",
        "--sender",
        "A",
        "--recipient",
        "C",
        "--sample-size",
        "0",
        "--seed",
        "7",
    ]);
    let mut out = Vec::new();
    run(&cli, &mut "".as_bytes(), &mut out).unwrap();

    let bfs = fs::read_to_string(dir.path().join("BFSDemo.txt")).unwrap();
    assert_eq!(bfs, "A\nB\nC\nD\nE\n");

    let path = fs::read_to_string(dir.path().join("pathDemo.txt")).unwrap();
    assert_eq!(path, "A\nB\nC\n");

    let ranked = fs::read_to_string(dir.path().join("0sampleCentrality.txt")).unwrap();
    assert_eq!(ranked.lines().count(), 5);
    assert_eq!(ranked.lines().next(), Some("B"));
}

#[test]
fn interactive_prompts_are_read_in_order() {
    let (dir, input) = setup();
    let cli = cli(&[
        "--input-filepath",
        input.to_str().unwrap(),
        "--output-directory",
        dir.path().to_str().unwrap(),
        "--most-likely-path",
        "--betweenness-centrality",
    ]);
    let mut out = Vec::new();
    run(&cli, &mut "D\nE\n2\n".as_bytes(), &mut out).unwrap();

    let path = fs::read_to_string(dir.path().join("pathDemo.txt")).unwrap();
    assert_eq!(path, "D\nE\n");
    // Two drawn sources, plus B when it was credited from A without being drawn.
    let ranked = fs::read_to_string(dir.path().join("2sampleCentrality.txt")).unwrap();
    assert!((2..=3).contains(&ranked.lines().count()));
}

#[test]
fn status_line_is_json() {
    let (dir, input) = setup();
    let cli = cli(&[
        "--input-filepath",
        input.to_str().unwrap(),
        "--output-directory",
        dir.path().to_str().unwrap(),
        "--status",
    ]);
    let mut out = Vec::new();
    run(&cli, &mut "".as_bytes(), &mut out).unwrap();
    let report = String::from_utf8(out).unwrap();
    let line = report.lines().find(|l| l.starts_with('{')).unwrap();
    let status: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(status["duplicates_dropped"], 1);
    assert_eq!(status["transaction_count"], 4);
}

#[test]
fn missing_output_directory_fails_before_loading() {
    let (dir, input) = setup();
    let missing = dir.path().join("nope");
    let cli = cli(&[
        "--input-filepath",
        input.to_str().unwrap(),
        "--output-directory",
        missing.to_str().unwrap(),
    ]);
    let err = run(&cli, &mut "".as_bytes(), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::MissingOutputDirectory(_)));
    assert!(err.to_string().ends_with("does not exist!"));
}

#[test]
fn malformed_input_fails_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.csv");
    fs::write(&input, "A,1,B\nB,notanumber,C\n").unwrap();
    let cli = cli(&[
        "--input-filepath",
        input.to_str().unwrap(),
        "--output-directory",
        dir.path().to_str().unwrap(),
        "--BFS",
    ]);
    let err = run(&cli, &mut "".as_bytes(), &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::Load(_)));
    assert!(err.to_string().contains("bad.csv"));
    assert!(!dir.path().join("BFSDemo.txt").exists());
}
