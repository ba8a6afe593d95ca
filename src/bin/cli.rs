//! Binary entry point for the remesa transfer-statistics CLI.
#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use remesa::cli::{load_edges, CliError};
use remesa::procedure::{process, TransferStatsResponse};
use remesa::query::transfer_stats;

#[derive(Parser, Debug)]
#[command(
    name = "remesa",
    version,
    about = "Windowed transfer statistics over a CSV edge list",
    disable_help_subcommand = true
)]
struct Cli {
    /// CSV edge list with src, dst, timestamp and amount columns.
    #[arg(long, value_name = "FILE", env = "REMESA_EDGES")]
    edges: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one query with typed arguments.
    Query {
        /// Account id to aggregate around.
        #[arg(long)]
        id: i64,
        /// Window start timestamp; transfers stamped exactly here are
        /// excluded.
        #[arg(long)]
        start: i64,
        /// Window end timestamp, exclusive.
        #[arg(long)]
        end: i64,
    },
    /// Feed a raw JSON request through the procedure boundary.
    Request {
        /// Request body, e.g. '{"id":1,"startTime":0,"endTime":10}'.
        body: String,
    },
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let graph = load_edges(&cli.edges)?;
    match cli.command {
        Command::Query { id, start, end } => {
            let stats = transfer_stats(&graph, id, start, end)?;
            let response = TransferStatsResponse::from(stats);
            println!("{}", serde_json::to_string(&response)?);
        }
        Command::Request { body } => {
            let reply = process(&graph, &body)?;
            println!("{}", reply.body);
            if !reply.ok {
                std::process::exit(2);
            }
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
