//! # Guardar: Array-Splitting Document Persistence
//!
//! Guardar saves heterogeneous object graphs that mix ordinary structured
//! data with numeric arrays. Instead of inlining array bytes into a generic
//! serialization stream, saving diverts each array into its own named npy
//! entry inside a single archive file; the remaining structure is stored as
//! one JSON or YAML entry in the same archive. Loading reverses the
//! mapping and fails loudly when an entry referenced by the structure is
//! missing or disagrees with its recorded dtype/shape.
//!
//! ## Architecture
//!
//! - **value**: Object graph model (scalars, lists, maps, array leaves)
//! - **archive**: Splitting serializer, restoring deserializer, formats
//! - **error**: Error taxonomy
//!
//! ## Example
//!
//! ```no_run
//! use guardar::{save_document, load_document, Document, DocumentMetadata, SaveConfig, Value};
//! use guardar::value::ArrayData;
//!
//! let root = Value::map([
//!     ("weight".to_string(), Value::Array(ArrayData::from_f32_vec(vec![1.0, 2.0]))),
//!     ("epochs".to_string(), Value::Int(10)),
//! ]);
//! let doc = Document::new(DocumentMetadata::new("my-model"), root);
//!
//! save_document(&doc, "model.zip", &SaveConfig::default()).unwrap();
//! let loaded = load_document("model.zip").unwrap();
//! assert_eq!(loaded.root, doc.root);
//! ```

pub mod archive;
pub mod error;
pub mod value;

// Re-export commonly used types
pub use archive::{
    load_document, load_structure, save_document, Document, DocumentMetadata, SaveConfig,
    StructFormat,
};
pub use error::{Error, Result};
pub use value::Value;
