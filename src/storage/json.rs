//! JSON adjacency documents
//!
//! ```json
//! {
//!     "graph_00": {
//!         "S": {"A": 100, "B": 14, "C": 200},
//!         "A": {"S": 15, "B": 5, "D": 20, "T": 44}
//!     }
//! }
//! ```
//!
//! A stream may hold several concatenated documents; they are merged in
//! order, later graph labels replacing earlier ones.

use super::document::GraphDocument;
use super::GraphStore;
use crate::error::{GraphError, Result};
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

impl GraphStore {
    /// Decode a JSON stream and build the graph named `label`
    ///
    /// # Errors
    ///
    /// - [`GraphError::Io`] if the reader fails
    /// - [`GraphError::Decode`] if the stream is not a valid adjacency document
    /// - [`GraphError::GraphNotFound`] if `label` is absent
    pub fn from_json_reader<R: Read>(reader: R, label: &str) -> Result<Self> {
        let document = decode_json_stream(reader)?;
        Self::from_document(&document, label)
    }

    /// [`from_json_reader`](Self::from_json_reader) over a string
    ///
    /// # Errors
    ///
    /// See [`from_json_reader`](Self::from_json_reader)
    pub fn from_json_str(json: &str, label: &str) -> Result<Self> {
        Self::from_json_slice(json.as_bytes(), label)
    }

    /// [`from_json_reader`](Self::from_json_reader) over raw bytes
    ///
    /// # Errors
    ///
    /// See [`from_json_reader`](Self::from_json_reader)
    pub fn from_json_slice(json: &[u8], label: &str) -> Result<Self> {
        Self::from_json_reader(json, label)
    }

    /// Read a JSON document from disk and build the graph named `label`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Io`] if the file cannot be read, otherwise as
    /// [`from_json_reader`](Self::from_json_reader)
    pub async fn read_json_file<P: AsRef<Path>>(path: P, label: &str) -> Result<Self> {
        let bytes = tokio::fs::read(path.as_ref()).await?;
        Self::from_json_slice(&bytes, label)
    }

    /// Serialize as a pretty-printed single-graph JSON document
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Encode`] if serialization fails (e.g. NaN weights)
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_document()).map_err(encode_error)
    }

    /// Serialize as a single-graph JSON document into `writer`
    ///
    /// # Errors
    ///
    /// - [`GraphError::Encode`] if serialization fails
    /// - [`GraphError::Io`] if the writer fails
    pub fn to_json_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, &self.to_document()).map_err(encode_error)
    }

    /// Write a single-graph JSON document to disk
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Encode`] or [`GraphError::Io`]
    pub async fn write_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json_string()?;
        tokio::fs::write(path.as_ref(), json).await?;
        debug!(graph = self.id(), path = %path.as_ref().display(), "wrote JSON document");
        Ok(())
    }
}

fn decode_json_stream<R: Read>(reader: R) -> Result<GraphDocument> {
    let mut document = GraphDocument::new();
    for next in serde_json::Deserializer::from_reader(reader).into_iter::<GraphDocument>() {
        document.extend(next.map_err(decode_error)?);
    }
    Ok(document)
}

fn decode_error(err: serde_json::Error) -> GraphError {
    if err.is_io() {
        GraphError::Io(err.into())
    } else {
        GraphError::from(err)
    }
}

fn encode_error(err: serde_json::Error) -> GraphError {
    if err.is_io() {
        GraphError::Io(err.into())
    } else {
        GraphError::Encode(err.to_string())
    }
}
