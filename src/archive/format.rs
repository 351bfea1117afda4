//! Structure-entry format definitions

use serde::{Deserialize, Serialize};

/// Format of the structure entry inside an archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructFormat {
    /// JSON (default, supports pretty-printing)
    Json,

    /// YAML (human-readable)
    Yaml,
}

impl StructFormat {
    /// Archive entry name for the structure in this format
    pub fn entry_name(&self) -> &'static str {
        match self {
            StructFormat::Json => "document.json",
            StructFormat::Yaml => "document.yaml",
        }
    }

    /// Detect format from a structure entry name
    pub fn from_entry_name(name: &str) -> Option<Self> {
        match name {
            "document.json" => Some(StructFormat::Json),
            "document.yaml" => Some(StructFormat::Yaml),
            _ => None,
        }
    }
}

/// Configuration for saving documents
#[derive(Debug, Clone)]
pub struct SaveConfig {
    /// Structure entry format
    pub format: StructFormat,

    /// Whether to pretty-print (JSON only)
    pub pretty: bool,

    /// Whether to deflate archive entries
    pub compress: bool,
}

impl SaveConfig {
    /// Create new save config with format
    pub fn new(format: StructFormat) -> Self {
        Self {
            format,
            pretty: true,
            compress: false,
        }
    }

    /// Enable/disable pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Enable/disable entry compression
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self::new(StructFormat::Json)
    }
}
