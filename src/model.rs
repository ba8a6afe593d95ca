//! Core identifier and value types.

use std::fmt;

use crate::error::{RemesaError, Result};

/// Handle to a vertex, assigned and owned by the storage engine.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct VertexId(pub u64);

/// Handle distinguishing parallel edges between the same endpoints.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct EdgeId(pub u64);

/// Interned identifier of an edge label.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct LabelId(pub u16);

/// Ordering key carried by every edge. Any monotone integer clock works;
/// transfer data uses epoch milliseconds.
pub type Timestamp = i64;

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Traversal direction relative to the anchor vertex.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    /// Edges whose source is the anchor vertex.
    Outward,
    /// Edges whose target is the anchor vertex.
    Inward,
}

impl Direction {
    /// Short name used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Outward => "out",
            Direction::Inward => "in",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property value read from or stored into the graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent field.
    Null,
    /// Boolean field.
    Bool(bool),
    /// 64-bit signed integer field.
    Int(i64),
    /// 64-bit floating point field.
    Float(f64),
    /// UTF-8 string field.
    Str(String),
}

impl Value {
    /// Returns the integer payload. No coercion: any other variant is an
    /// error, including floats with integral values.
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(v) => Ok(*v),
            other => Err(RemesaError::InvalidArgument(format!(
                "expected integer value, got {other:?}"
            ))),
        }
    }

    /// Returns the float payload. No coercion from integers.
    pub fn as_float(&self) -> Result<f64> {
        match self {
            Value::Float(v) => Ok(*v),
            other => Err(RemesaError::InvalidArgument(format!(
                "expected float value, got {other:?}"
            ))),
        }
    }

    /// Returns the string payload.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::Str(v) => Ok(v),
            other => Err(RemesaError::InvalidArgument(format!(
                "expected string value, got {other:?}"
            ))),
        }
    }
}
