//! YAML adjacency documents
//!
//! ```yaml
//! graph_00:
//!   S:
//!     A: 100
//!     B: 14
//!   A:
//!     S: 15
//!     T: 44
//! ```
//!
//! Only the first YAML document in a stream is read; any documents after the
//! first `---` separator are ignored.

use super::document::GraphDocument;
use super::GraphStore;
use crate::error::{GraphError, Result};
use serde::Deserialize;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

impl GraphStore {
    /// Decode a YAML stream and build the graph named `label`
    ///
    /// # Errors
    ///
    /// - [`GraphError::Io`] if the reader fails
    /// - [`GraphError::Decode`] if the stream is not valid UTF-8 or not a
    ///   valid adjacency document
    /// - [`GraphError::GraphNotFound`] if `label` is absent
    pub fn from_yaml_reader<R: Read>(mut reader: R, label: &str) -> Result<Self> {
        let mut yaml = Vec::new();
        reader.read_to_end(&mut yaml)?;
        Self::from_yaml_slice(&yaml, label)
    }

    /// [`from_yaml_reader`](Self::from_yaml_reader) over a string
    ///
    /// # Errors
    ///
    /// See [`from_yaml_reader`](Self::from_yaml_reader)
    pub fn from_yaml_str(yaml: &str, label: &str) -> Result<Self> {
        Self::from_yaml_slice(yaml.as_bytes(), label)
    }

    /// [`from_yaml_reader`](Self::from_yaml_reader) over raw bytes
    ///
    /// # Errors
    ///
    /// See [`from_yaml_reader`](Self::from_yaml_reader)
    pub fn from_yaml_slice(yaml: &[u8], label: &str) -> Result<Self> {
        let document = decode_yaml(yaml)?;
        Self::from_document(&document, label)
    }

    /// Read a YAML document from disk and build the graph named `label`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Io`] if the file cannot be read, otherwise as
    /// [`from_yaml_reader`](Self::from_yaml_reader)
    pub async fn read_yaml_file<P: AsRef<Path>>(path: P, label: &str) -> Result<Self> {
        let bytes = tokio::fs::read(path.as_ref()).await?;
        Self::from_yaml_slice(&bytes, label)
    }

    /// Serialize as a single-graph YAML document
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Encode`] if serialization fails
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(&self.to_document()).map_err(encode_error)
    }

    /// Serialize as a single-graph YAML document into `writer`
    ///
    /// # Errors
    ///
    /// - [`GraphError::Encode`] if serialization fails
    /// - [`GraphError::Io`] if the writer fails
    pub fn to_yaml_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        let yaml = self.to_yaml_string()?;
        writer.write_all(yaml.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write a single-graph YAML document to disk
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Encode`] or [`GraphError::Io`]
    pub async fn write_yaml_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml_string()?;
        tokio::fs::write(path.as_ref(), yaml).await?;
        debug!(graph = self.id(), path = %path.as_ref().display(), "wrote YAML document");
        Ok(())
    }
}

fn decode_yaml(yaml: &[u8]) -> Result<GraphDocument> {
    // A blank stream is a document with no graphs
    if yaml.iter().all(u8::is_ascii_whitespace) {
        return Ok(GraphDocument::new());
    }
    match serde_yaml::Deserializer::from_slice(yaml).next() {
        Some(first) => Ok(GraphDocument::deserialize(first)?),
        None => Ok(GraphDocument::new()),
    }
}

fn encode_error(err: serde_yaml::Error) -> GraphError {
    GraphError::Encode(err.to_string())
}
