//! Per-direction window folds and the combined statistics entry point.

use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::GraphSnapshot;
use crate::model::{Direction, LabelId, Timestamp, Value, VertexId};

use super::cursor::LabeledEdgeCursor;
use super::{
    round_amount, ACCOUNT_ID_FIELD, ACCOUNT_LABEL, AMOUNT_FIELD, NO_DATA_SENTINEL,
    TIMESTAMP_FIELD, TRANSFER_LABEL,
};

/// Sum, maximum and count of the amounts folded for one direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlowAggregate {
    /// Sum of folded amounts, rounded to three decimals.
    pub sum: f64,
    /// Largest folded amount, rounded to three decimals.
    /// [`NO_DATA_SENTINEL`] when `count` is zero.
    pub max: f64,
    /// Number of folded edges.
    pub count: i64,
}

impl FlowAggregate {
    fn fold(&mut self, amount: f64) {
        self.count += 1;
        self.sum += amount;
        if amount > self.max {
            self.max = amount;
        }
    }

    fn finalize(mut self) -> Self {
        self.sum = round_amount(self.sum);
        self.max = round_amount(self.max);
        if self.count == 0 {
            self.max = NO_DATA_SENTINEL;
        }
        self
    }
}

/// Aggregates over the outgoing and incoming transfers of one account.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferStats {
    /// Transfers leaving the account.
    pub outgoing: FlowAggregate,
    /// Transfers entering the account.
    pub incoming: FlowAggregate,
}

/// Folds the transfer amounts of `vertex` in one direction over the
/// window `(start, end)`.
///
/// The cursor is seeked to `start` and the label run is walked in
/// timestamp order from there: edges stamped exactly `start` are skipped
/// one by one, the first edge stamped at or past `end` ends the scan, and
/// everything in between is folded. An inverted or empty window folds
/// nothing.
pub fn aggregate_direction<S>(
    snapshot: &S,
    vertex: VertexId,
    label: LabelId,
    dir: Direction,
    start: Timestamp,
    end: Timestamp,
) -> Result<FlowAggregate>
where
    S: GraphSnapshot + ?Sized,
{
    let mut cursor = LabeledEdgeCursor::open(snapshot, vertex, dir, label, start)?;
    let mut agg = FlowAggregate::default();
    while cursor.is_valid() {
        let timestamp = cursor.field(TIMESTAMP_FIELD)?.as_int()?;
        let amount = cursor.field(AMOUNT_FIELD)?.as_float()?;
        if timestamp == start {
            cursor.advance()?;
            continue;
        }
        if timestamp >= end {
            break;
        }
        agg.fold(amount);
        cursor.advance()?;
    }
    trace!(
        vertex = %vertex,
        direction = dir.as_str(),
        folded = agg.count,
        "transfer_stats.direction_scanned"
    );
    Ok(agg.finalize())
}

/// Computes windowed transfer statistics for the account whose unique id
/// is `account_id`.
///
/// Resolves the account vertex and the transfer label, then runs one
/// windowed fold per direction. The window is half-open at the top and
/// additionally excludes edges stamped exactly at `start`. Unknown
/// accounts and missing schema surface as
/// [`RemesaError::NotFound`](crate::RemesaError::NotFound).
pub fn transfer_stats<S>(
    snapshot: &S,
    account_id: i64,
    start: Timestamp,
    end: Timestamp,
) -> Result<TransferStats>
where
    S: GraphSnapshot + ?Sized,
{
    let vertex =
        snapshot.vertex_by_unique_key(ACCOUNT_LABEL, ACCOUNT_ID_FIELD, &Value::Int(account_id))?;
    let label = snapshot.edge_label_id(TRANSFER_LABEL)?;
    debug!(account = account_id, vertex = %vertex, start, end, "transfer_stats.resolved");

    let outgoing = aggregate_direction(snapshot, vertex, label, Direction::Outward, start, end)?;
    let incoming = aggregate_direction(snapshot, vertex, label, Direction::Inward, start, end)?;
    Ok(TransferStats { outgoing, incoming })
}
