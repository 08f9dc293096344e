//! Error types for graph store operations

use crate::storage::NodeId;
use thiserror::Error;

/// Graph store errors
#[derive(Debug, Error)]
pub enum GraphError {
    /// Node identifier is not present in the store
    #[error("{0} does not exist in the graph")]
    NotFound(NodeId),

    /// Both endpoints exist but no edge connects them
    #[error("there is no edge from {from} to {to}")]
    EdgeNotFound {
        /// Edge source
        from: NodeId,
        /// Edge target
        to: NodeId,
    },

    /// Requested graph label is absent from a decoded document
    #[error("graph {0} does not exist in the document")]
    GraphNotFound(String),

    /// Malformed adjacency document
    #[error("failed to decode adjacency document: {0}")]
    Decode(String),

    /// Adjacency document could not be serialized
    #[error("failed to encode adjacency document: {0}")]
    Encode(String),

    /// File I/O failure in the document helpers
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// True for every "something is absent" variant (node, edge, graph label)
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::EdgeNotFound { .. } | Self::GraphNotFound(_)
        )
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for GraphError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GraphError>;
