//! Label-filtered view over a raw adjacency cursor.

use crate::error::{RemesaError, Result};
use crate::graph::{EdgeCursor, GraphSnapshot};
use crate::model::{Direction, LabelId, Timestamp, Value, VertexId};

/// Cursor over the edges of one label incident to one vertex.
///
/// Wraps a raw [`EdgeCursor`] and hides everything outside the target
/// label: the wrapper reports valid only while the raw cursor sits on an
/// edge carrying that label. Because the underlying order groups a
/// label's edges into one contiguous run, stepping onto a different label
/// means the run is over; the wrapper goes invalid and stays invalid
/// until the next [`seek_to`](Self::seek_to), even if the raw cursor
/// still has edges left.
pub struct LabeledEdgeCursor<'g> {
    raw: Box<dyn EdgeCursor + 'g>,
    label: LabelId,
    valid: bool,
}

impl<'g> LabeledEdgeCursor<'g> {
    /// Wraps an already-positioned raw cursor. The wrapper starts valid
    /// only if the raw cursor currently sits on an edge of `label`.
    pub fn new(raw: Box<dyn EdgeCursor + 'g>, label: LabelId) -> Result<Self> {
        let mut cursor = Self { raw, label, valid: false };
        cursor.refresh()?;
        Ok(cursor)
    }

    /// Opens a cursor over `vertex`'s edges in `dir`, positioned at the
    /// first edge of `label` with ordering key at or after `order_key`.
    pub fn open<S>(
        snapshot: &'g S,
        vertex: VertexId,
        dir: Direction,
        label: LabelId,
        order_key: Timestamp,
    ) -> Result<Self>
    where
        S: GraphSnapshot + ?Sized,
    {
        let raw = snapshot.adjacency_cursor(vertex, dir, label, order_key)?;
        Self::new(raw, label)
    }

    /// True while the cursor is on an edge of the target label. O(1): the
    /// flag is updated on every move, never recomputed here.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Steps to the next edge and returns the new validity. Advancing an
    /// invalid cursor is a no-op that returns false.
    pub fn advance(&mut self) -> Result<bool> {
        if !self.valid {
            return Ok(false);
        }
        self.valid = self.raw.advance()? && self.raw.label()? == self.label;
        Ok(self.valid)
    }

    /// Repositions at the first edge of `label` for `vertex` with
    /// ordering key at or after `order_key`. The target vertex, label and
    /// key may all differ from the current position; a seek can revive an
    /// invalid cursor.
    pub fn seek_to(
        &mut self,
        vertex: VertexId,
        label: LabelId,
        order_key: Timestamp,
    ) -> Result<()> {
        self.label = label;
        self.raw.seek(vertex, label, order_key)?;
        self.refresh()
    }

    /// Reads a named field of the edge under the cursor.
    pub fn field(&self, name: &str) -> Result<Value> {
        if !self.valid {
            return Err(RemesaError::InvalidArgument(
                "cursor is not positioned on an edge".into(),
            ));
        }
        self.raw.field(name)
    }

    fn refresh(&mut self) -> Result<()> {
        self.valid = self.raw.is_valid() && self.raw.label()? == self.label;
        Ok(())
    }
}
