//! Windowed transfer-statistics query.
//!
//! Two layers: [`LabeledEdgeCursor`] narrows a raw adjacency cursor to a
//! single edge label, and [`transfer_stats`] folds the amounts of a
//! vertex's transfer edges inside a half-open time window, once per
//! direction. The schema names and reporting policy live here as
//! constants so callers and tests share one definition.

mod cursor;
mod window;

pub use cursor::LabeledEdgeCursor;
pub use window::{aggregate_direction, transfer_stats, FlowAggregate, TransferStats};

/// Vertex label of account vertices.
pub const ACCOUNT_LABEL: &str = "Account";

/// Unique key field of account vertices.
pub const ACCOUNT_ID_FIELD: &str = "id";

/// Edge label of transfer edges.
pub const TRANSFER_LABEL: &str = "transfer";

/// Edge field holding the ordering timestamp.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Edge field holding the transferred amount.
pub const AMOUNT_FIELD: &str = "amount";

/// Reported in a max-amount slot when no edge was folded. Keeps "no
/// transfers" distinguishable from a largest transfer of zero.
pub const NO_DATA_SENTINEL: f64 = -1.0;

/// Decimal digits kept in reported sums and maxima.
pub const AMOUNT_PRECISION: i32 = 3;

/// Rounds an amount to [`AMOUNT_PRECISION`] decimals, halves away from
/// zero.
pub fn round_amount(amount: f64) -> f64 {
    let scale = 10f64.powi(AMOUNT_PRECISION);
    (amount * scale).round() / scale
}
