//! Object graph model
//!
//! A `Value` is the in-memory form of a saved object graph: ordinary
//! scalars, strings, lists, and string-keyed maps, plus numeric array
//! leaves. When a graph is saved, every `Array` leaf is replaced by an
//! `ArrayRef` marker naming the archive entry that holds the array's
//! bytes; restoring reverses the substitution.

mod array;

pub use array::{ArrayData, Dtype};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Marker recorded in the serialized structure in place of an array
///
/// Carries enough metadata (entry name, dtype, shape) to locate and
/// validate the companion archive entry on restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayRef {
    /// Archive entry name holding the array bytes
    pub entry: String,

    /// Element type of the stored array
    pub dtype: Dtype,

    /// Dimensions of the stored array
    pub shape: Vec<usize>,
}

/// A node in a saved object graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Array(ArrayData),
    ArrayRef(ArrayRef),
}

impl Value {
    /// Build a map value from key/value pairs
    pub fn map(pairs: impl IntoIterator<Item = (String, Value)>) -> Self {
        Value::Map(pairs.into_iter().collect())
    }

    /// Get a map entry by key, if this value is a map
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(m) => m.get(key),
            _ => None,
        }
    }

    /// Get a mutable map entry by key, if this value is a map
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Value::Map(m) => m.get_mut(key),
            _ => None,
        }
    }

    /// Borrow the array data, if this value is an array leaf
    pub fn as_array(&self) -> Option<&ArrayData> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Count array leaves in this graph, transitively
    pub fn array_count(&self) -> usize {
        match self {
            Value::Array(_) => 1,
            Value::List(items) => items.iter().map(Value::array_count).sum(),
            Value::Map(entries) => entries.values().map(Value::array_count).sum(),
            _ => 0,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<ArrayData> for Value {
    fn from(v: ArrayData) -> Self {
        Value::Array(v)
    }
}
