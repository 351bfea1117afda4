//! Error types for Guardar

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Missing archive entry: {0}")]
    MissingEntry(String),

    #[error("Unsupported dtype: {0}")]
    UnsupportedDtype(String),

    #[error("Dtype mismatch for entry {entry}: expected {expected}, got {got}")]
    DtypeMismatch {
        entry: String,
        expected: String,
        got: String,
    },

    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_display() {
        let err = Error::MissingEntry("arr_3.npy".to_string());
        assert!(err.to_string().contains("arr_3.npy"));
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = Error::ShapeMismatch {
            expected: vec![2, 3],
            got: vec![6],
        };
        let msg = err.to_string();
        assert!(msg.contains("[2, 3]"));
        assert!(msg.contains("[6]"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
