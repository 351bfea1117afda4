//! Document structure for serialization

use crate::value::Value;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Document metadata recorded alongside the object graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document name/identifier
    pub name: String,

    /// Document version
    pub version: String,

    /// When the document was created
    pub created_at: DateTime<Utc>,

    /// Custom metadata fields
    pub custom: HashMap<String, serde_json::Value>,
}

impl DocumentMetadata {
    /// Create new metadata with the current timestamp
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: "0.1.0".to_string(),
            created_at: Utc::now(),
            custom: HashMap::new(),
        }
    }

    /// Set document version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Add custom metadata field
    pub fn with_custom(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.custom.insert(key.into(), value);
        self
    }
}

/// A saved unit: metadata plus the root of the object graph
///
/// On disk the root holds `ArrayRef` markers in place of arrays; in memory
/// after a full load it holds the arrays themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata
    pub metadata: DocumentMetadata,

    /// Root of the object graph
    pub root: Value,
}

impl Document {
    /// Create a new document
    pub fn new(metadata: DocumentMetadata, root: Value) -> Self {
        Self { metadata, root }
    }

    /// Get a top-level attribute by name, if the root is a map
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Get a mutable top-level attribute by name, if the root is a map
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.root.get_mut(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ArrayData;

    #[test]
    fn test_metadata_creation() {
        let meta = DocumentMetadata::new("classifier");
        assert_eq!(meta.name, "classifier");
        assert_eq!(meta.version, "0.1.0");
        assert!(meta.custom.is_empty());
    }

    #[test]
    fn test_metadata_builders() {
        let meta = DocumentMetadata::new("net")
            .with_version("2.0.0")
            .with_custom("layers", serde_json::json!(12))
            .with_custom("hidden_size", serde_json::json!(768));

        assert_eq!(meta.version, "2.0.0");
        assert_eq!(meta.custom.len(), 2);
        assert_eq!(meta.custom.get("layers").unwrap(), &serde_json::json!(12));
    }

    #[test]
    fn test_document_attribute_access() {
        let root = Value::map([
            (
                "weight".to_string(),
                Value::Array(ArrayData::from_f32_vec(vec![1.0, 2.0])),
            ),
            ("trained".to_string(), Value::Bool(true)),
        ]);

        let mut doc = Document::new(DocumentMetadata::new("test"), root);

        assert!(doc.get("weight").is_some());
        assert_eq!(doc.get("trained"), Some(&Value::Bool(true)));
        assert!(doc.get("missing").is_none());

        *doc.get_mut("trained").unwrap() = Value::Bool(false);
        assert_eq!(doc.get("trained"), Some(&Value::Bool(false)));
    }
}
