//! Adjacency documents shared by the format adapters
//!
//! # Format
//!
//! A document names one or more graphs; each graph body maps a source label
//! to its targets and edge weights:
//!
//! ```text
//! graph_00:
//!   S: {A: 100, B: 14, C: 200}
//!   A: {S: 15, B: 5, D: 20, T: 44}
//! ```
//!
//! Ingestion creates every label it meets as a node with no properties and
//! sets each edge with [`GraphStore::replace_edge`], so a repeated
//! (source, target) pair keeps the last weight. The resulting store does not
//! depend on the order in which labels are visited.

use super::{GraphStore, Node, NodeId};
use crate::error::{GraphError, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// One graph: source label → (target label → weight)
pub type GraphBody = BTreeMap<String, BTreeMap<String, f64>>;

/// Named collection of graphs: graph label → body
pub type GraphDocument = BTreeMap<String, GraphBody>;

impl GraphStore {
    /// Build a store labelled `id` from one graph body
    ///
    /// # Errors
    ///
    /// Propagates store errors; none occur for well-formed bodies since every
    /// endpoint is created before its edge.
    pub fn from_body(id: impl Into<String>, body: &GraphBody) -> Result<Self> {
        let graph = Self::new(id);

        for (source, targets) in body {
            let src = graph.ensure_node(source);
            for (target, &weight) in targets {
                let tgt = graph.ensure_node(target);
                graph.replace_edge(&src, &tgt, weight)?;
            }
        }

        debug!(
            graph = graph.id(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "loaded adjacency body"
        );
        Ok(graph)
    }

    /// Build a store from the graph named `label` inside `document`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::GraphNotFound`] if `label` is not in the document
    pub fn from_document(document: &GraphDocument, label: &str) -> Result<Self> {
        let body = document
            .get(label)
            .ok_or_else(|| GraphError::GraphNotFound(label.to_string()))?;
        Self::from_body(label, body)
    }

    /// Export the store as a graph body
    ///
    /// Nodes without outgoing edges appear as sources with no targets, so a
    /// body read back with [`from_body`](Self::from_body) has the same nodes
    /// and weights.
    #[must_use]
    pub fn to_body(&self) -> GraphBody {
        self.adjacency()
            .into_iter()
            .map(|(src, row)| {
                let targets = row
                    .into_iter()
                    .map(|(tgt, weight)| (tgt.into_string(), weight))
                    .collect();
                (src.into_string(), targets)
            })
            .collect()
    }

    /// Export the store as a single-graph document keyed by [`id`](Self::id)
    #[must_use]
    pub fn to_document(&self) -> GraphDocument {
        let mut document = GraphDocument::new();
        document.insert(self.id().to_string(), self.to_body());
        document
    }

    /// Create `label` with no properties unless it already exists
    fn ensure_node(&self, label: &str) -> NodeId {
        let id = NodeId::from(label);
        self.add_node(Node::new(id.clone()));
        id
    }
}
