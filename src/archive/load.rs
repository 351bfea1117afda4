//! Document loading functionality

use super::document::Document;
use super::format::StructFormat;
use super::split::restore_arrays;
use crate::value::ArrayData;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

/// Load a document from an archive file, restoring all arrays
///
/// Reads the structure entry, then resolves every array marker against its
/// named archive entry. Fails if the archive is unreadable, the structure
/// entry is absent, a referenced array entry is missing, or a stored
/// array disagrees with its marker's dtype or shape.
///
/// # Example
///
/// ```no_run
/// use guardar::load_document;
///
/// let doc = load_document("model.zip").unwrap();
/// println!("Loaded document: {}", doc.metadata.name);
/// ```
pub fn load_document(path: impl AsRef<Path>) -> Result<Document> {
    let mut archive = open_archive(path.as_ref())?;
    let stored = read_structure(&mut archive)?;

    let root = restore_arrays(stored.root, &mut |marker| {
        let entry = archive.by_name(&marker.entry).map_err(|e| match e {
            ZipError::FileNotFound => Error::MissingEntry(marker.entry.clone()),
            other => Error::Archive(other),
        })?;
        ArrayData::read_npy(marker.dtype, entry)
    })?;

    Ok(Document::new(stored.metadata, root))
}

/// Load only the structure of an archived document
///
/// Array markers are left in place, so no array data is read. Useful for
/// inspecting what an archive contains without paying for its arrays.
pub fn load_structure(path: impl AsRef<Path>) -> Result<Document> {
    let mut archive = open_archive(path.as_ref())?;
    read_structure(&mut archive)
}

fn open_archive(path: &Path) -> Result<ZipArchive<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(ZipArchive::new(BufReader::new(file))?)
}

fn read_structure(archive: &mut ZipArchive<BufReader<File>>) -> Result<Document> {
    let format = [StructFormat::Json, StructFormat::Yaml]
        .into_iter()
        .find(|f| archive.index_for_name(f.entry_name()).is_some())
        .ok_or_else(|| Error::MissingEntry("document".to_string()))?;

    let mut text = String::new();
    archive
        .by_name(format.entry_name())?
        .read_to_string(&mut text)?;

    match format {
        StructFormat::Json => serde_json::from_str(&text)
            .map_err(|e| Error::Serialization(format!("JSON deserialization failed: {e}"))),
        StructFormat::Yaml => serde_yaml::from_str(&text)
            .map_err(|e| Error::Serialization(format!("YAML deserialization failed: {e}"))),
    }
}
