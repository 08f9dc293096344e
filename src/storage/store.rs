//! Concurrency-safe directed weighted graph store
//!
//! # Layout
//!
//! ```text
//! Graph: S → A (100), S → B (14), A → B (5)
//!
//! nodes:    {S, A, B}
//! children: S: {A: 100, B: 14}   A: {B: 5}
//! parents:  A: {S: 100}          B: {S: 14, A: 5}
//! ```
//!
//! `children` and `parents` are mirrors of each other: `children[a][b] == w`
//! iff `parents[b][a] == w`. Both are updated under the same write guard, so
//! a reader never sees one without the other.
//!
//! # Locking
//!
//! One `RwLock` guards all three indices as a unit. Queries hold the read
//! guard, mutations hold the write guard, and neither is held across I/O.

use super::{Edge, Node, NodeId, DEFAULT_WEIGHT};
use crate::error::{GraphError, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

/// Weighted adjacency row: neighbor → weight
pub type Adjacency = HashMap<NodeId, f64>;

#[derive(Debug, Default)]
struct Indices {
    nodes: HashMap<NodeId, Node>,

    /// Outgoing edges: source → (target → weight)
    children: HashMap<NodeId, Adjacency>,

    /// Incoming edges: target → (source → weight)
    parents: HashMap<NodeId, Adjacency>,
}

impl Indices {
    fn require(&self, id: &NodeId) -> Result<()> {
        if self.nodes.contains_key(id) {
            Ok(())
        } else {
            Err(GraphError::NotFound(id.clone()))
        }
    }

    fn require_pair(&self, src: &NodeId, tgt: &NodeId) -> Result<()> {
        self.require(src)?;
        self.require(tgt)
    }

    fn weight(&self, src: &NodeId, tgt: &NodeId) -> Option<f64> {
        self.children.get(src).and_then(|row| row.get(tgt)).copied()
    }

    /// Write `weight` into both tables. Callers have validated both endpoints.
    fn set_weight(&mut self, src: &NodeId, tgt: &NodeId, weight: f64) {
        self.children
            .entry(src.clone())
            .or_default()
            .insert(tgt.clone(), weight);
        self.parents
            .entry(tgt.clone())
            .or_default()
            .insert(src.clone(), weight);
    }

    fn unlink(&mut self, src: &NodeId, tgt: &NodeId) -> bool {
        let removed = remove_entry(&mut self.children, src, tgt);
        remove_entry(&mut self.parents, tgt, src);
        removed
    }

    fn neighbors(&self, row: Option<&Adjacency>) -> HashMap<NodeId, Node> {
        row.into_iter()
            .flat_map(|row| row.keys())
            .filter_map(|id| self.nodes.get(id).map(|node| (id.clone(), node.clone())))
            .collect()
    }
}

/// Remove `table[key][inner]`, dropping the row once it is empty
fn remove_entry(table: &mut HashMap<NodeId, Adjacency>, key: &NodeId, inner: &NodeId) -> bool {
    let Some(row) = table.get_mut(key) else {
        return false;
    };
    let removed = row.remove(inner).is_some();
    if row.is_empty() {
        table.remove(key);
    }
    removed
}

/// Directed weighted graph store, safe to share between threads
///
/// Nodes are keyed by [`NodeId`]; edges are one weighted entry per ordered
/// (source, target) pair, indexed in both directions for O(1) parent and
/// child lookup. Wrap in `Arc` to share.
///
/// All queries return owned snapshots. A snapshot does not follow later
/// mutations.
///
/// # Example
///
/// ```
/// use arbor_graph::{GraphStore, Node, NodeId};
///
/// let graph = GraphStore::new("calls");
/// graph.add_node(Node::new("main"));
/// graph.add_node(Node::new("parse_args"));
///
/// let main = NodeId::from("main");
/// let parse = NodeId::from("parse_args");
/// graph.add_edge(&main, &parse, 1.0).unwrap();
/// graph.add_edge(&main, &parse, 2.0).unwrap(); // accumulates
///
/// assert_eq!(graph.edge_weight(&main, &parse).unwrap(), 3.0);
/// assert!(graph.parent_nodes(&parse).unwrap().contains_key("main"));
/// ```
#[derive(Debug, Default)]
pub struct GraphStore {
    /// Store label (provenance only, not node identity)
    id: String,

    inner: RwLock<Indices>,
}

impl GraphStore {
    /// Create an empty store
    ///
    /// Construction is the only initialization step; every `GraphStore`
    /// value is ready to use.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner: RwLock::new(Indices::default()),
        }
    }

    /// Store label
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.inner.read().nodes.len()
    }

    /// Number of (source, target) edge entries
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.inner.read().children.values().map(HashMap::len).sum()
    }

    /// Whether `id` is a stored node
    #[must_use]
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.inner.read().nodes.contains_key(id)
    }

    /// Look up a node
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if `id` is not stored
    pub fn node(&self, id: &NodeId) -> Result<Node> {
        self.inner
            .read()
            .nodes
            .get(id)
            .cloned()
            .ok_or_else(|| GraphError::NotFound(id.clone()))
    }

    /// Snapshot of every node
    #[must_use]
    pub fn nodes(&self) -> HashMap<NodeId, Node> {
        self.inner.read().nodes.clone()
    }

    /// Insert a node
    ///
    /// Returns `false` without touching the store if a node with the same
    /// identifier already exists.
    pub fn add_node(&self, node: Node) -> bool {
        let mut inner = self.inner.write();
        if inner.nodes.contains_key(node.id()) {
            return false;
        }
        inner.nodes.insert(node.id().clone(), node);
        true
    }

    /// Remove a node together with every edge that touches it
    ///
    /// Returns `false` if the node was not stored.
    pub fn delete_node(&self, id: &NodeId) -> bool {
        let mut inner = self.inner.write();
        if inner.nodes.remove(id).is_none() {
            return false;
        }

        let outgoing = inner.children.remove(id).unwrap_or_default();
        for child in outgoing.keys() {
            remove_entry(&mut inner.parents, child, id);
        }

        let incoming = inner.parents.remove(id).unwrap_or_default();
        for parent in incoming.keys() {
            remove_entry(&mut inner.children, parent, id);
        }

        trace!(
            node = %id,
            outgoing = outgoing.len(),
            incoming = incoming.len(),
            "deleted node"
        );
        true
    }

    /// Set a property on a stored node, returning the previous value
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if `id` is not stored
    pub fn set_node_property(
        &self,
        id: &NodeId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>> {
        let mut inner = self.inner.write();
        let node = inner
            .nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::NotFound(id.clone()))?;
        Ok(node.set_property(key, value))
    }

    /// Add `weight` to the edge `src → tgt`, creating it if absent
    ///
    /// Repeated calls accumulate: `add_edge(a, b, 1.0)` twice leaves weight 2.0.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if either endpoint is not stored
    pub fn add_edge(&self, src: &NodeId, tgt: &NodeId, weight: f64) -> Result<()> {
        let mut inner = self.inner.write();
        inner.require_pair(src, tgt)?;

        let total = inner.weight(src, tgt).map_or(weight, |w| w + weight);
        inner.set_weight(src, tgt, total);
        Ok(())
    }

    /// [`add_edge`](Self::add_edge) with [`DEFAULT_WEIGHT`]
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if either endpoint is not stored
    pub fn add_unweighted_edge(&self, src: &NodeId, tgt: &NodeId) -> Result<()> {
        self.add_edge(src, tgt, DEFAULT_WEIGHT)
    }

    /// Set the weight of `src → tgt`, overwriting any previous value
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if either endpoint is not stored
    pub fn replace_edge(&self, src: &NodeId, tgt: &NodeId, weight: f64) -> Result<()> {
        let mut inner = self.inner.write();
        inner.require_pair(src, tgt)?;
        inner.set_weight(src, tgt, weight);
        Ok(())
    }

    /// Remove the edge `src → tgt`; a missing edge is not an error
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if either endpoint is not stored
    pub fn delete_edge(&self, src: &NodeId, tgt: &NodeId) -> Result<()> {
        let mut inner = self.inner.write();
        inner.require_pair(src, tgt)?;
        inner.unlink(src, tgt);
        Ok(())
    }

    /// Weight of `src → tgt`
    ///
    /// # Errors
    ///
    /// - [`GraphError::NotFound`] if either endpoint is not stored
    /// - [`GraphError::EdgeNotFound`] if both exist but are not connected
    pub fn edge_weight(&self, src: &NodeId, tgt: &NodeId) -> Result<f64> {
        let inner = self.inner.read();
        inner.require_pair(src, tgt)?;
        inner
            .weight(src, tgt)
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: src.clone(),
                to: tgt.clone(),
            })
    }

    /// Nodes with an edge pointing into `id`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if `id` is not stored
    pub fn parent_nodes(&self, id: &NodeId) -> Result<HashMap<NodeId, Node>> {
        let inner = self.inner.read();
        inner.require(id)?;
        Ok(inner.neighbors(inner.parents.get(id)))
    }

    /// Nodes reached by an edge out of `id`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if `id` is not stored
    pub fn child_nodes(&self, id: &NodeId) -> Result<HashMap<NodeId, Node>> {
        let inner = self.inner.read();
        inner.require(id)?;
        Ok(inner.neighbors(inner.children.get(id)))
    }

    /// Incoming edge weights of `id`, keyed by source
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if `id` is not stored
    pub fn parent_weights(&self, id: &NodeId) -> Result<Adjacency> {
        let inner = self.inner.read();
        inner.require(id)?;
        Ok(inner.parents.get(id).cloned().unwrap_or_default())
    }

    /// Outgoing edge weights of `id`, keyed by target
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if `id` is not stored
    pub fn child_weights(&self, id: &NodeId) -> Result<Adjacency> {
        let inner = self.inner.read();
        inner.require(id)?;
        Ok(inner.children.get(id).cloned().unwrap_or_default())
    }

    /// Snapshot of every edge, ordered by source then target
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = {
            let inner = self.inner.read();
            inner
                .children
                .iter()
                .flat_map(|(src, row)| {
                    row.iter().map(move |(tgt, &weight)| Edge {
                        source: src.clone(),
                        target: tgt.clone(),
                        weight,
                    })
                })
                .collect()
        };
        edges.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));
        edges
    }

    /// Snapshot of the outgoing adjacency table (source → target → weight)
    ///
    /// Nodes without outgoing edges map to an empty row, so isolated nodes
    /// are kept.
    #[must_use]
    pub fn adjacency(&self) -> HashMap<NodeId, Adjacency> {
        let inner = self.inner.read();
        inner
            .nodes
            .keys()
            .map(|id| (id.clone(), inner.children.get(id).cloned().unwrap_or_default()))
            .collect()
    }

    /// Human-readable edge listing, one `"src -- w -→ tgt"` line per edge
    ///
    /// Diagnostic output only; not a stable format.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GraphStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in self.edges() {
            writeln!(f, "{edge}")?;
        }
        Ok(())
    }
}
