//! Windowed transfer statistics over a property-graph snapshot.
//!
//! remesa answers one fixed analytical question: given an account and a
//! half-open time window, what are the sum, maximum and count of the
//! transfer amounts leaving and entering that account inside the window?
//! The graph itself lives in an external storage engine consumed through
//! the [`graph::GraphSnapshot`] boundary; [`graph::MemGraph`] is the
//! bundled in-memory implementation used by the tests and the CLI.
//!
//! ```
//! use remesa::graph::MemGraph;
//! use remesa::model::Value;
//! use remesa::query::{self, transfer_stats};
//!
//! # fn main() -> remesa::Result<()> {
//! let mut graph = MemGraph::new();
//! let a = graph.add_vertex(query::ACCOUNT_LABEL, query::ACCOUNT_ID_FIELD, Value::Int(1))?;
//! let b = graph.add_vertex(query::ACCOUNT_LABEL, query::ACCOUNT_ID_FIELD, Value::Int(2))?;
//! graph.add_edge(a, b, query::TRANSFER_LABEL, 150, &[(query::AMOUNT_FIELD, Value::Float(10.0))])?;
//!
//! let stats = transfer_stats(&graph, 1, 100, 200)?;
//! assert_eq!(stats.outgoing.count, 1);
//! assert_eq!(stats.outgoing.sum, 10.0);
//! assert_eq!(stats.incoming.count, 0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod cli;
pub mod error;
pub mod graph;
pub mod model;
pub mod procedure;
pub mod query;

pub use error::{RemesaError, Result};
pub use graph::{EdgeCursor, GraphSnapshot, MemGraph};
pub use model::{Direction, EdgeId, LabelId, Timestamp, Value, VertexId};
pub use procedure::{process, ProcedureReply, TransferStatsRequest, TransferStatsResponse};
pub use query::{transfer_stats, FlowAggregate, TransferStats};
