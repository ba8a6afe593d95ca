//! Transport-agnostic request/response boundary.
//!
//! Shaped like a stored-procedure entry point: a JSON request names the
//! account and window, [`process`] answers with a serialized body plus a
//! success flag. Malformed input never becomes an `Err`; it turns into a
//! failure reply carrying a diagnostic body, so a host can always answer
//! its client. Graph-side failures (unknown account, engine faults)
//! propagate as errors for the host to handle.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RemesaError, Result};
use crate::graph::GraphSnapshot;
use crate::query::{transfer_stats, TransferStats};

/// Wire shape of a transfer-statistics request.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferStatsRequest {
    /// Unique id of the account.
    pub id: i64,
    /// Window start. Edges stamped exactly here are excluded.
    #[serde(rename = "startTime")]
    pub start_time: i64,
    /// Window end, exclusive.
    #[serde(rename = "endTime")]
    pub end_time: i64,
}

/// Wire shape of the response record. The `Edge1` fields aggregate
/// outgoing transfers, the `Edge2` fields incoming ones.
#[derive(Debug, Clone, Serialize)]
pub struct TransferStatsResponse {
    /// Sum of outgoing amounts.
    #[serde(rename = "sumEdge1Amount")]
    pub sum_edge1_amount: f64,
    /// Largest outgoing amount, or the no-data sentinel.
    #[serde(rename = "maxEdge1Amount")]
    pub max_edge1_amount: f64,
    /// Number of outgoing transfers.
    #[serde(rename = "numEdge1")]
    pub num_edge1: i64,
    /// Sum of incoming amounts.
    #[serde(rename = "sumEdge2Amount")]
    pub sum_edge2_amount: f64,
    /// Largest incoming amount, or the no-data sentinel.
    #[serde(rename = "maxEdge2Amount")]
    pub max_edge2_amount: f64,
    /// Number of incoming transfers.
    #[serde(rename = "numEdge2")]
    pub num_edge2: i64,
}

impl From<TransferStats> for TransferStatsResponse {
    fn from(stats: TransferStats) -> Self {
        Self {
            sum_edge1_amount: stats.outgoing.sum,
            max_edge1_amount: stats.outgoing.max,
            num_edge1: stats.outgoing.count,
            sum_edge2_amount: stats.incoming.sum,
            max_edge2_amount: stats.incoming.max,
            num_edge2: stats.incoming.count,
        }
    }
}

#[derive(Serialize)]
struct FailureBody<'a> {
    msg: &'a str,
}

/// Outcome of [`process`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureReply {
    /// False when the request body could not be parsed.
    pub ok: bool,
    /// JSON body: the response record on success, `{"msg": ...}` on a
    /// parse failure.
    pub body: String,
}

/// Parses a JSON request, runs the query, and serializes the response.
pub fn process<S>(snapshot: &S, request: &str) -> Result<ProcedureReply>
where
    S: GraphSnapshot + ?Sized,
{
    let parsed: TransferStatsRequest = match serde_json::from_str(request) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(error = %err, "transfer_stats.request_rejected");
            let msg = format!("json parse error: {err}");
            let body = encode(&FailureBody { msg: &msg })?;
            return Ok(ProcedureReply { ok: false, body });
        }
    };
    let stats = transfer_stats(snapshot, parsed.id, parsed.start_time, parsed.end_time)?;
    let body = encode(&TransferStatsResponse::from(stats))?;
    Ok(ProcedureReply { ok: true, body })
}

fn encode<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|err| RemesaError::Serialization(err.to_string()))
}
