//! Graph vertices

use super::NodeId;
use std::collections::HashMap;
use std::fmt;

/// Opaque string properties attached to a node
pub type Properties = HashMap<String, String>;

/// A vertex: immutable identifier plus a property map
///
/// The store hands out owned clones, so editing a `Node` returned by a query
/// never touches the stored copy. Use
/// [`GraphStore::set_node_property`](crate::GraphStore::set_node_property) to
/// change properties of a stored node.
///
/// # Example
///
/// ```
/// use arbor_graph::Node;
///
/// let node = Node::new("main").with_property("file", "src/main.rs");
/// assert_eq!(node.id().as_str(), "main");
/// assert_eq!(node.property("file"), Some("src/main.rs"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    properties: Properties,
}

impl Node {
    /// Create node with an empty property map
    #[must_use]
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            properties: Properties::new(),
        }
    }

    /// Create node with the given properties
    #[must_use]
    pub fn with_properties(id: impl Into<NodeId>, properties: Properties) -> Self {
        Self {
            id: id.into(),
            properties,
        }
    }

    /// Builder-style property insertion
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Node identifier
    #[must_use]
    pub const fn id(&self) -> &NodeId {
        &self.id
    }

    /// All properties
    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Single property lookup
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Set a property, returning the previous value
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.properties.insert(key.into(), value.into())
    }

    /// Remove a property, returning its value
    pub fn remove_property(&mut self, key: &str) -> Option<String> {
        self.properties.remove(key)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}
