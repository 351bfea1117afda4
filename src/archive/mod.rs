//! Archive save/load
//!
//! Persists a document as a single archive file: one text entry for the
//! object structure (arrays replaced by named markers) and one npy entry
//! per array. Loading reads the structure first, then resolves markers
//! against their array entries.

mod document;
mod format;
mod load;
mod save;
mod split;


#[cfg(test)]
mod property_tests;

pub use document::{Document, DocumentMetadata};
pub use format::{SaveConfig, StructFormat};
pub use load::{load_document, load_structure};
pub use save::save_document;
pub use split::{restore_arrays, split_arrays};
