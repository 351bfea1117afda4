//! Document saving functionality

use super::document::Document;
use super::format::{SaveConfig, StructFormat};
use super::split::split_arrays;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Save a document to an archive file
///
/// Array leaves in the document's graph are written as individual npy
/// entries; the remaining structure (with markers in their place) is
/// serialized to the configured text format and stored as one additional
/// entry. The resulting archive holds exactly one structure entry plus
/// one entry per array.
///
/// # Example
///
/// ```no_run
/// use guardar::{save_document, Document, DocumentMetadata, SaveConfig, Value};
/// use guardar::value::ArrayData;
///
/// let root = Value::map([
///     ("weight".to_string(), Value::Array(ArrayData::from_f32_vec(vec![1.0, 2.0]))),
///     ("epochs".to_string(), Value::Int(10)),
/// ]);
/// let doc = Document::new(DocumentMetadata::new("my-model"), root);
///
/// save_document(&doc, "model.zip", &SaveConfig::default()).unwrap();
/// ```
pub fn save_document(doc: &Document, path: impl AsRef<Path>, config: &SaveConfig) -> Result<()> {
    let path = path.as_ref();

    // Split pass: arrays out, markers in
    let (root, arrays) = split_arrays(doc.root.clone())?;
    let stored = Document::new(doc.metadata.clone(), root);

    // Serialize the marker-bearing structure
    let text = match config.format {
        StructFormat::Json => {
            if config.pretty {
                serde_json::to_string_pretty(&stored)
                    .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?
            } else {
                serde_json::to_string(&stored)
                    .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?
            }
        }
        StructFormat::Yaml => serde_yaml::to_string(&stored)
            .map_err(|e| Error::Serialization(format!("YAML serialization failed: {e}")))?,
    };

    let method = if config.compress {
        CompressionMethod::Deflated
    } else {
        CompressionMethod::Stored
    };
    let options = SimpleFileOptions::default().compression_method(method);

    // All entries are written before the archive is closed
    let file = File::create(path)?;
    let mut archive = ZipWriter::new(BufWriter::new(file));

    archive.start_file(config.format.entry_name(), options)?;
    archive.write_all(text.as_bytes())?;

    for (entry, array) in &arrays {
        archive.start_file(entry.as_str(), options)?;
        array.write_npy(&mut archive)?;
    }

    let mut inner = archive.finish()?;
    inner.flush()?;
    Ok(())
}
