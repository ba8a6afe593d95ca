//! In-memory reference implementation of the storage boundary.
//!
//! [`MemGraph`] keeps one `BTreeSet` per direction, keyed by
//! `(anchor vertex, label, timestamp, other endpoint, edge id)`. That is
//! the same composite order a disk engine would encode into its adjacency
//! keys, so range scans over the set behave exactly like positioned
//! cursors over an adjacency tree. A built graph is queried through
//! `&self`; the shared reference is the snapshot.

use std::collections::btree_set::Range;
use std::collections::BTreeSet;
use std::ops::Bound;

use rustc_hash::FxHashMap;

use crate::error::{RemesaError, Result};
use crate::model::{Direction, EdgeId, LabelId, Timestamp, Value, VertexId};

use super::{EdgeCursor, GraphSnapshot};

/// Field name under which an edge's ordering key is always readable.
pub const ORDER_KEY_FIELD: &str = "timestamp";

/// Adjacency entry. Sort order is the whole point: tuples compare
/// lexicographically, which gives the per-vertex, per-label, per-timestamp
/// grouping the cursors rely on.
type AdjEntry = (VertexId, LabelId, Timestamp, VertexId, EdgeId);

/// Hashable projection of a [`Value`] usable as a unique index key.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
enum IndexKey {
    Int(i64),
    Str(String),
}

impl IndexKey {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(IndexKey::Int(*v)),
            Value::Str(v) => Some(IndexKey::Str(v.clone())),
            _ => None,
        }
    }
}

/// In-memory property graph with sorted adjacency.
///
/// Vertices are created through [`add_vertex`](Self::add_vertex) and found
/// again through the unique `(label, field, key)` index. Edges carry an
/// ordering timestamp plus arbitrary named fields.
#[derive(Debug, Default)]
pub struct MemGraph {
    edge_label_names: Vec<String>,
    edge_label_ids: FxHashMap<String, LabelId>,
    unique_index: FxHashMap<(String, String, IndexKey), VertexId>,
    adj_out: BTreeSet<AdjEntry>,
    adj_in: BTreeSet<AdjEntry>,
    edge_fields: FxHashMap<EdgeId, Vec<(String, Value)>>,
    next_vertex: u64,
    next_edge: u64,
}

impl MemGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> u64 {
        self.next_vertex
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> u64 {
        self.next_edge
    }

    /// Registers a vertex reachable through the unique `(label, field)`
    /// index under `key`. Keys must be integers or strings and may not
    /// repeat within an index slot.
    pub fn add_vertex(&mut self, label: &str, field: &str, key: Value) -> Result<VertexId> {
        let Some(index_key) = IndexKey::from_value(&key) else {
            return Err(RemesaError::InvalidArgument(format!(
                "unique keys must be integers or strings, got {key:?}"
            )));
        };
        let slot = (label.to_string(), field.to_string(), index_key);
        if self.unique_index.contains_key(&slot) {
            return Err(RemesaError::InvalidArgument(format!(
                "duplicate key {key:?} for unique index {label}.{field}"
            )));
        }
        let id = VertexId(self.next_vertex);
        self.next_vertex += 1;
        self.unique_index.insert(slot, id);
        Ok(id)
    }

    /// Inserts a directed edge from `src` to `dst`.
    ///
    /// `timestamp` becomes the edge's position in both endpoints'
    /// adjacency and is readable back as the [`ORDER_KEY_FIELD`] field;
    /// `fields` follow it in the edge record. Parallel edges are allowed
    /// and keep insertion order within equal timestamps.
    pub fn add_edge(
        &mut self,
        src: VertexId,
        dst: VertexId,
        label: &str,
        timestamp: Timestamp,
        fields: &[(&str, Value)],
    ) -> Result<EdgeId> {
        if src.0 >= self.next_vertex || dst.0 >= self.next_vertex {
            return Err(RemesaError::NotFound("vertex"));
        }
        let label = self.intern_edge_label(label)?;
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.adj_out.insert((src, label, timestamp, dst, id));
        self.adj_in.insert((dst, label, timestamp, src, id));

        let mut record = Vec::with_capacity(fields.len() + 1);
        record.push((ORDER_KEY_FIELD.to_string(), Value::Int(timestamp)));
        for (name, value) in fields {
            record.push(((*name).to_string(), value.clone()));
        }
        self.edge_fields.insert(id, record);
        Ok(id)
    }

    fn intern_edge_label(&mut self, name: &str) -> Result<LabelId> {
        if let Some(id) = self.edge_label_ids.get(name) {
            return Ok(*id);
        }
        if self.edge_label_names.len() >= u16::MAX as usize {
            return Err(RemesaError::InvalidArgument(
                "edge label catalog is full".into(),
            ));
        }
        let id = LabelId(self.edge_label_names.len() as u16);
        self.edge_label_names.push(name.to_string());
        self.edge_label_ids.insert(name.to_string(), id);
        Ok(id)
    }
}

impl GraphSnapshot for MemGraph {
    fn vertex_by_unique_key(&self, label: &str, field: &str, value: &Value) -> Result<VertexId> {
        let Some(index_key) = IndexKey::from_value(value) else {
            return Err(RemesaError::InvalidArgument(format!(
                "unique keys must be integers or strings, got {value:?}"
            )));
        };
        let slot = (label.to_string(), field.to_string(), index_key);
        self.unique_index
            .get(&slot)
            .copied()
            .ok_or(RemesaError::NotFound("vertex"))
    }

    fn edge_label_id(&self, name: &str) -> Result<LabelId> {
        self.edge_label_ids
            .get(name)
            .copied()
            .ok_or(RemesaError::NotFound("edge label"))
    }

    fn adjacency_cursor(
        &self,
        vertex: VertexId,
        dir: Direction,
        label: LabelId,
        order_key: Timestamp,
    ) -> Result<Box<dyn EdgeCursor + '_>> {
        Ok(Box::new(MemCursor::open(self, vertex, dir, label, order_key)))
    }
}

/// Range scan over one direction's adjacency set, bounded to one vertex.
struct MemCursor<'g> {
    graph: &'g MemGraph,
    dir: Direction,
    range: Range<'g, AdjEntry>,
    current: Option<AdjEntry>,
}

impl<'g> MemCursor<'g> {
    fn open(
        graph: &'g MemGraph,
        vertex: VertexId,
        dir: Direction,
        label: LabelId,
        order_key: Timestamp,
    ) -> Self {
        let (range, current) = Self::position(graph, vertex, dir, label, order_key);
        Self { graph, dir, range, current }
    }

    /// Builds the range `[(vertex, label, order_key, 0, 0) ..= (vertex,
    /// MAX, MAX, MAX, MAX)]` and pulls its first entry. The upper bound
    /// stays inside `vertex`; walking the range never leaks into the next
    /// vertex's adjacency.
    fn position(
        graph: &'g MemGraph,
        vertex: VertexId,
        dir: Direction,
        label: LabelId,
        order_key: Timestamp,
    ) -> (Range<'g, AdjEntry>, Option<AdjEntry>) {
        let set = match dir {
            Direction::Outward => &graph.adj_out,
            Direction::Inward => &graph.adj_in,
        };
        let lo = (vertex, label, order_key, VertexId(0), EdgeId(0));
        let hi = (
            vertex,
            LabelId(u16::MAX),
            Timestamp::MAX,
            VertexId(u64::MAX),
            EdgeId(u64::MAX),
        );
        let mut range = set.range((Bound::Included(lo), Bound::Included(hi)));
        let current = range.next().copied();
        (range, current)
    }

    fn entry(&self) -> Result<AdjEntry> {
        self.current.ok_or_else(|| {
            RemesaError::InvalidArgument("cursor is not positioned on an edge".into())
        })
    }
}

impl EdgeCursor for MemCursor<'_> {
    fn is_valid(&self) -> bool {
        self.current.is_some()
    }

    fn label(&self) -> Result<LabelId> {
        Ok(self.entry()?.1)
    }

    fn advance(&mut self) -> Result<bool> {
        self.current = self.range.next().copied();
        Ok(self.current.is_some())
    }

    fn seek(&mut self, vertex: VertexId, label: LabelId, order_key: Timestamp) -> Result<()> {
        let (range, current) = Self::position(self.graph, vertex, self.dir, label, order_key);
        self.range = range;
        self.current = current;
        Ok(())
    }

    fn field(&self, name: &str) -> Result<Value> {
        let (_, _, _, _, edge) = self.entry()?;
        let record = self
            .graph
            .edge_fields
            .get(&edge)
            .ok_or_else(|| RemesaError::Storage(format!("edge {edge} has no field record")))?;
        record
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| RemesaError::InvalidArgument(format!("unknown edge field: {name}")))
    }
}
