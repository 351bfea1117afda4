//! Numeric array values and their element-type tags

use crate::{Error, Result};
use ndarray::ArrayD;
use ndarray_npy::{ReadNpyExt, WriteNpyExt};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};

/// Element type of a stored array
///
/// The string form ("f32", "i64", ...) is what gets recorded in array
/// markers, so the names are part of the archive format and must stay
/// stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dtype {
    F32,
    F64,
    I32,
    I64,
    U8,
}

impl Dtype {
    /// Stable string name for this dtype
    pub fn as_str(&self) -> &'static str {
        match self {
            Dtype::F32 => "f32",
            Dtype::F64 => "f64",
            Dtype::I32 => "i32",
            Dtype::I64 => "i64",
            Dtype::U8 => "u8",
        }
    }

    /// Parse a dtype from its string name
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "f32" => Ok(Dtype::F32),
            "f64" => Ok(Dtype::F64),
            "i32" => Ok(Dtype::I32),
            "i64" => Ok(Dtype::I64),
            "u8" => Ok(Dtype::U8),
            other => Err(Error::UnsupportedDtype(other.to_string())),
        }
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed-dtype multi-dimensional numeric array
///
/// Backed by `ndarray::ArrayD`. This is the value type that gets diverted
/// out of the serialized structure and into its own archive entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArrayData {
    F32(ArrayD<f32>),
    F64(ArrayD<f64>),
    I32(ArrayD<i32>),
    I64(ArrayD<i64>),
    U8(ArrayD<u8>),
}

impl ArrayData {
    /// Element type of this array
    pub fn dtype(&self) -> Dtype {
        match self {
            ArrayData::F32(_) => Dtype::F32,
            ArrayData::F64(_) => Dtype::F64,
            ArrayData::I32(_) => Dtype::I32,
            ArrayData::I64(_) => Dtype::I64,
            ArrayData::U8(_) => Dtype::U8,
        }
    }

    /// Dimensions of this array
    pub fn shape(&self) -> &[usize] {
        match self {
            ArrayData::F32(a) => a.shape(),
            ArrayData::F64(a) => a.shape(),
            ArrayData::I32(a) => a.shape(),
            ArrayData::I64(a) => a.shape(),
            ArrayData::U8(a) => a.shape(),
        }
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.shape().iter().product()
    }

    /// Whether the array holds no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write this array in npy format
    ///
    /// The npy header carries dtype and shape, so the entry is
    /// self-describing on disk.
    pub fn write_npy<W: Write>(&self, writer: W) -> Result<()> {
        let result = match self {
            ArrayData::F32(a) => a.write_npy(writer),
            ArrayData::F64(a) => a.write_npy(writer),
            ArrayData::I32(a) => a.write_npy(writer),
            ArrayData::I64(a) => a.write_npy(writer),
            ArrayData::U8(a) => a.write_npy(writer),
        };
        result.map_err(|e| Error::Serialization(format!("npy write failed: {e}")))
    }

    /// Read an array in npy format, typed by `dtype`
    pub fn read_npy<R: Read>(dtype: Dtype, reader: R) -> Result<Self> {
        let array = match dtype {
            Dtype::F32 => ArrayD::<f32>::read_npy(reader).map(ArrayData::F32),
            Dtype::F64 => ArrayD::<f64>::read_npy(reader).map(ArrayData::F64),
            Dtype::I32 => ArrayD::<i32>::read_npy(reader).map(ArrayData::I32),
            Dtype::I64 => ArrayD::<i64>::read_npy(reader).map(ArrayData::I64),
            Dtype::U8 => ArrayD::<u8>::read_npy(reader).map(ArrayData::U8),
        };
        array.map_err(|e| Error::Serialization(format!("npy read failed: {e}")))
    }

    /// Build a 1-d f32 array from a vector
    pub fn from_f32_vec(data: Vec<f32>) -> Self {
        ArrayData::F32(ArrayD::from_shape_vec(vec![data.len()], data).unwrap())
    }

    /// Build a 1-d f64 array from a vector
    pub fn from_f64_vec(data: Vec<f64>) -> Self {
        ArrayData::F64(ArrayD::from_shape_vec(vec![data.len()], data).unwrap())
    }

    /// Build a 1-d i64 array from a vector
    pub fn from_i64_vec(data: Vec<i64>) -> Self {
        ArrayData::I64(ArrayD::from_shape_vec(vec![data.len()], data).unwrap())
    }
}

impl From<ArrayD<f32>> for ArrayData {
    fn from(a: ArrayD<f32>) -> Self {
        ArrayData::F32(a)
    }
}

impl From<ArrayD<f64>> for ArrayData {
    fn from(a: ArrayD<f64>) -> Self {
        ArrayData::F64(a)
    }
}

impl From<ArrayD<i32>> for ArrayData {
    fn from(a: ArrayD<i32>) -> Self {
        ArrayData::I32(a)
    }
}

impl From<ArrayD<i64>> for ArrayData {
    fn from(a: ArrayD<i64>) -> Self {
        ArrayData::I64(a)
    }
}

impl From<ArrayD<u8>> for ArrayData {
    fn from(a: ArrayD<u8>) -> Self {
        ArrayData::U8(a)
    }
}
