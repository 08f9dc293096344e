//! Graph storage layer
//!
//! Provides the lock-guarded adjacency store and the JSON/YAML adjacency
//! document adapters.

pub mod document;
pub mod edge;
pub mod id;
pub mod node;
pub mod store;

#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use document::{GraphBody, GraphDocument};
pub use edge::{Edge, DEFAULT_WEIGHT};
pub use id::NodeId;
pub use node::{Node, Properties};
pub use store::{Adjacency, GraphStore};
