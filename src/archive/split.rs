//! Array splitting and restoration passes
//!
//! Splitting walks an object graph and pulls every array leaf out into a
//! named side-channel, leaving a marker behind; restoration walks the
//! marker-bearing graph and substitutes the arrays back in. Both passes
//! are single traversals with no state beyond the entry counter.

use crate::value::{ArrayData, ArrayRef, Value};
use crate::{Error, Result};
use std::collections::BTreeMap;

/// Split array leaves out of an object graph
///
/// Each array leaf is assigned a sequential entry name (`arr_<n>.npy`) and
/// replaced by an `ArrayRef` marker carrying the entry name, dtype, and
/// shape. Returns the marker-bearing graph and the extracted arrays in
/// entry order.
///
/// A pre-existing `ArrayRef` in the input is rejected: it would reference
/// an entry the archive being written does not contain.
pub fn split_arrays(root: Value) -> Result<(Value, Vec<(String, ArrayData)>)> {
    let mut arrays = Vec::new();
    let stripped = strip(root, &mut arrays)?;
    Ok((stripped, arrays))
}

fn strip(value: Value, arrays: &mut Vec<(String, ArrayData)>) -> Result<Value> {
    match value {
        Value::Array(array) => {
            let entry = format!("arr_{}.npy", arrays.len());
            let marker = ArrayRef {
                entry: entry.clone(),
                dtype: array.dtype(),
                shape: array.shape().to_vec(),
            };
            arrays.push((entry, array));
            Ok(Value::ArrayRef(marker))
        }
        Value::ArrayRef(marker) => Err(Error::InvalidDocument(format!(
            "dangling array reference to entry {}",
            marker.entry
        ))),
        Value::List(items) => {
            let items = items
                .into_iter()
                .map(|item| strip(item, arrays))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::List(items))
        }
        Value::Map(entries) => {
            let entries = entries
                .into_iter()
                .map(|(key, item)| strip(item, arrays).map(|item| (key, item)))
                .collect::<Result<BTreeMap<_, _>>>()?;
            Ok(Value::Map(entries))
        }
        other => Ok(other),
    }
}

/// Substitute arrays back into a marker-bearing graph
///
/// `resolve` is called once per marker and must produce the array stored
/// under the marker's entry name. The resolved array is checked against
/// the marker's dtype and shape before substitution, so a disagreeing
/// archive fails loudly instead of producing a corrupted graph.
pub fn restore_arrays<F>(value: Value, resolve: &mut F) -> Result<Value>
where
    F: FnMut(&ArrayRef) -> Result<ArrayData>,
{
    match value {
        Value::ArrayRef(marker) => {
            let array = resolve(&marker)?;
            if array.dtype() != marker.dtype {
                return Err(Error::DtypeMismatch {
                    entry: marker.entry,
                    expected: marker.dtype.to_string(),
                    got: array.dtype().to_string(),
                });
            }
            if array.shape() != marker.shape.as_slice() {
                return Err(Error::ShapeMismatch {
                    expected: marker.shape,
                    got: array.shape().to_vec(),
                });
            }
            Ok(Value::Array(array))
        }
        Value::List(items) => {
            let items = items
                .into_iter()
                .map(|item| restore_arrays(item, resolve))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::List(items))
        }
        Value::Map(entries) => {
            let entries = entries
                .into_iter()
                .map(|(key, item)| restore_arrays(item, resolve).map(|item| (key, item)))
                .collect::<Result<BTreeMap<_, _>>>()?;
            Ok(Value::Map(entries))
        }
        other => Ok(other),
    }
}
