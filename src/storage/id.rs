//! Node identifiers

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Node identifier (string label, unique within one store)
///
/// Two identifiers are equal iff their labels are equal. `NodeId` borrows as
/// `str`, so maps keyed by `NodeId` can be queried with plain string slices.
///
/// # Example
///
/// ```
/// use arbor_graph::NodeId;
///
/// let id = NodeId::from("main");
/// assert_eq!(id.as_str(), "main");
/// assert_eq!(id, NodeId::new("main".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create identifier from an owned label
    #[must_use]
    pub const fn new(label: String) -> Self {
        Self(label)
    }

    /// Borrow the underlying label
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning its label
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for NodeId {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl From<&String> for NodeId {
    fn from(label: &String) -> Self {
        Self(label.clone())
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
