//! arbor-graph: concurrency-safe directed weighted graph store
//!
//! # Overview
//!
//! arbor-graph keeps string-identified nodes and weighted directed edges in
//! memory behind a single reader/writer lock. Every edge is indexed in both
//! directions, so parents and children of a node are one lookup away.
//!
//! # Quick Start
//!
//! ```
//! use arbor_graph::{GraphStore, NodeId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let json = r#"{"graph_00": {"S": {"A": 100, "B": 14}, "A": {"T": 44}}}"#;
//! let graph = GraphStore::from_json_str(json, "graph_00")?;
//!
//! let s = NodeId::from("S");
//! assert_eq!(graph.edge_weight(&s, &NodeId::from("A"))?, 100.0);
//! assert_eq!(graph.child_nodes(&s)?.len(), 2);
//!
//! // Export back to the same format
//! let exported = graph.to_json_string()?;
//! let reloaded = GraphStore::from_json_str(&exported, "graph_00")?;
//! assert_eq!(reloaded.node_count(), graph.node_count());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Architecture
//!
//! - **Store**: node table plus mirrored `children`/`parents` adjacency maps
//! - **Locking**: one `parking_lot::RwLock`; queries share, mutations exclude
//! - **Documents**: JSON and YAML `graph → source → target → weight` maps
//!   (features `json`, `yaml`)
//! - **Snapshots**: queries return owned copies, never references into the store

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod storage;

// Re-export core types
pub use error::{GraphError, Result};
pub use storage::{
    Adjacency, Edge, GraphBody, GraphDocument, GraphStore, Node, NodeId, Properties,
    DEFAULT_WEIGHT,
};
