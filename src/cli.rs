//! CSV ingestion for the bundled command-line tool.
//!
//! Loads a transfer edge list into a [`MemGraph`]. Accounts are created
//! the first time their id appears on either side of an edge; edges land
//! under the transfer label with their amount attached.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use crate::error::RemesaError;
use crate::graph::MemGraph;
use crate::model::{Value, VertexId};
use crate::query::{ACCOUNT_ID_FIELD, ACCOUNT_LABEL, AMOUNT_FIELD, TRANSFER_LABEL};

/// Errors produced by the command-line layer.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encode failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure from the graph or query layer.
    #[error(transparent)]
    Graph(#[from] RemesaError),

    /// A row or header the loader cannot use.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Column headers required in the edge list, in documentation order.
/// Actual column order in the file is free.
const EDGE_HEADERS: [&str; 4] = ["src", "dst", "timestamp", "amount"];

/// Reads `src,dst,timestamp,amount` rows into a fresh graph.
pub fn load_edges(path: &Path) -> Result<MemGraph, CliError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let mut columns = [0usize; 4];
    for (slot, name) in columns.iter_mut().zip(EDGE_HEADERS) {
        *slot = headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| CliError::InvalidData(format!("missing column: {name}")))?;
    }
    let [src_col, dst_col, ts_col, amount_col] = columns;

    let mut graph = MemGraph::new();
    let mut accounts: HashMap<i64, VertexId> = HashMap::new();
    let mut rows = 0u64;
    for record in reader.records() {
        let record = record?;
        let src = parse_field::<i64>(&record, src_col, "src")?;
        let dst = parse_field::<i64>(&record, dst_col, "dst")?;
        let timestamp = parse_field::<i64>(&record, ts_col, "timestamp")?;
        let amount = parse_field::<f64>(&record, amount_col, "amount")?;

        let src = resolve_account(&mut graph, &mut accounts, src)?;
        let dst = resolve_account(&mut graph, &mut accounts, dst)?;
        graph.add_edge(
            src,
            dst,
            TRANSFER_LABEL,
            timestamp,
            &[(AMOUNT_FIELD, Value::Float(amount))],
        )?;
        rows += 1;
    }
    info!(rows, accounts = accounts.len(), "cli.edges_loaded");
    Ok(graph)
}

fn parse_field<T: FromStr>(
    record: &csv::StringRecord,
    col: usize,
    name: &str,
) -> Result<T, CliError> {
    let raw = record
        .get(col)
        .ok_or_else(|| CliError::InvalidData(format!("row is missing the {name} column")))?;
    raw.parse()
        .map_err(|_| CliError::InvalidData(format!("bad {name} value: {raw:?}")))
}

fn resolve_account(
    graph: &mut MemGraph,
    accounts: &mut HashMap<i64, VertexId>,
    id: i64,
) -> Result<VertexId, CliError> {
    if let Some(vertex) = accounts.get(&id) {
        return Ok(*vertex);
    }
    let vertex = graph.add_vertex(ACCOUNT_LABEL, ACCOUNT_ID_FIELD, Value::Int(id))?;
    accounts.insert(id, vertex);
    Ok(vertex)
}
