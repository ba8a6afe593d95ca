//! Boundary with the graph storage engine.
//!
//! The query core never owns a graph. It consumes an already-open,
//! read-only snapshot through [`GraphSnapshot`], which resolves vertices
//! and edge labels and hands out positioned [`EdgeCursor`]s over one
//! vertex's adjacency. Any engine that keeps per-vertex adjacency sorted
//! by (label, timestamp, other endpoint, edge id) can sit behind these
//! traits; [`MemGraph`] is the bundled in-memory implementation.

pub mod mem;

pub use mem::MemGraph;

use crate::error::Result;
use crate::model::{Direction, LabelId, Timestamp, Value, VertexId};

/// Raw adjacency cursor supplied by the storage engine.
///
/// A cursor walks the edges incident to one vertex in one direction, in
/// the per-vertex order (label id, timestamp, other endpoint, edge id).
/// It is label-agnostic: advancing crosses label boundaries and only
/// stops when the vertex's adjacency list is exhausted.
pub trait EdgeCursor {
    /// True while the cursor is positioned on an edge.
    fn is_valid(&self) -> bool;

    /// Label id of the edge under the cursor. Errors when invalid.
    fn label(&self) -> Result<LabelId>;

    /// Moves one step forward in adjacency order and returns the validity
    /// after the move. Advancing an exhausted cursor stays invalid and
    /// returns false.
    fn advance(&mut self) -> Result<bool>;

    /// Repositions at the first edge of `vertex` with label `label` and
    /// ordering key at or after `order_key`, taking zero for the
    /// remaining order components. The anchor vertex is the edge source
    /// for outward cursors and the edge target for inward ones. Landing
    /// past the last matching edge leaves the cursor on whatever sorts
    /// next, possibly invalid.
    fn seek(&mut self, vertex: VertexId, label: LabelId, order_key: Timestamp) -> Result<()>;

    /// Reads a named property of the edge under the cursor.
    fn field(&self, name: &str) -> Result<Value>;
}

/// Read-only snapshot of a property graph.
///
/// Implementations must be stable for the lifetime of the borrow: cursors
/// opened from a snapshot never observe concurrent writes.
pub trait GraphSnapshot {
    /// Resolves a vertex through a unique `(label, field)` index.
    ///
    /// Returns [`RemesaError::NotFound`](crate::RemesaError::NotFound)
    /// when no vertex carries `value` in that slot.
    fn vertex_by_unique_key(&self, label: &str, field: &str, value: &Value) -> Result<VertexId>;

    /// Resolves an edge label name to its interned id.
    fn edge_label_id(&self, name: &str) -> Result<LabelId>;

    /// Opens an adjacency cursor for `vertex` in `dir`, already seeked to
    /// `(label, order_key, 0, 0)` as described on [`EdgeCursor::seek`].
    fn adjacency_cursor(
        &self,
        vertex: VertexId,
        dir: Direction,
        label: LabelId,
        order_key: Timestamp,
    ) -> Result<Box<dyn EdgeCursor + '_>>;
}
