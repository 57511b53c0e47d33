use std::io;
use std::process::ExitCode;

use clap::Parser;
use tx_graph_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.init_logging();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    match tx_graph_cli::run(&cli, &mut input, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("tx-graph failed: {:?}", e);
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
