//! Edge snapshots
//!
//! Edges are not stored as objects; the store keeps one adjacency entry per
//! ordered (source, target) pair. `Edge` is the value type used when a caller
//! asks for those entries as a list.

use super::NodeId;
use std::cmp::Ordering;
use std::fmt;

/// Weight used by the unweighted constructors
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Directed, weighted edge `source → target`
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Edge origin
    pub source: NodeId,
    /// Edge destination
    pub target: NodeId,
    /// Edge weight
    pub weight: f64,
}

impl Edge {
    /// Create a weighted edge
    #[must_use]
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// Create an edge with [`DEFAULT_WEIGHT`]
    #[must_use]
    pub fn unweighted(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self::new(source, target, DEFAULT_WEIGHT)
    }

    /// Total order on weight (NaN sorts last), for `slice::sort_by`
    ///
    /// ```
    /// use arbor_graph::Edge;
    ///
    /// let mut edges = vec![Edge::new("a", "b", 3.0), Edge::new("a", "c", 1.0)];
    /// edges.sort_by(Edge::cmp_by_weight);
    /// assert_eq!(edges[0].target.as_str(), "c");
    /// ```
    #[must_use]
    pub fn cmp_by_weight(a: &Self, b: &Self) -> Ordering {
        a.weight.total_cmp(&b.weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {:.3} -→ {}", self.source, self.weight, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unweighted_default() {
        let edge = Edge::unweighted("a", "b");
        assert!((edge.weight - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_format() {
        let edge = Edge::new("S", "A", 100.0);
        assert_eq!(edge.to_string(), "S -- 100.000 -→ A");
    }

    #[test]
    fn test_sort_by_weight() {
        let mut edges = vec![
            Edge::new("a", "b", 5.0),
            Edge::new("a", "c", -1.0),
            Edge::new("b", "c", 2.5),
        ];
        edges.sort_by(Edge::cmp_by_weight);

        let weights: Vec<f64> = edges.iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![-1.0, 2.5, 5.0]);
    }
}
