//! Edge records consumed by the spanning tree engines.

use std::cmp::Ordering;

/// Identifier of a graph node.
///
/// Identifiers are arbitrary and need not form a dense `0..n` range.
pub type NodeId = i64;

/// Identifier of an edge, unique within one computation.
pub type EdgeId = u64;

/// A weighted undirected edge.
///
/// The engines treat `source` and `target` symmetrically but never reorder
/// them, so results display edges exactly as the caller supplied them.
///
/// # Examples
/// ```
/// use mstrace_core::Edge;
///
/// let edge = Edge::new(7, -3, 12, 2.5);
/// assert_eq!(edge.id(), 7);
/// assert_eq!(edge.source(), -3);
/// assert_eq!(edge.target(), 12);
/// assert_eq!(edge.weight(), 2.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    weight: f64,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub const fn new(id: EdgeId, source: NodeId, target: NodeId, weight: f64) -> Self {
        Self {
            id,
            source,
            target,
            weight,
        }
    }

    /// Returns the edge identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> EdgeId { self.id }

    /// Returns the endpoint listed first by the caller.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> NodeId { self.source }

    /// Returns the endpoint listed second by the caller.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> NodeId { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns `true` when both endpoints are the same node.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Canonical processing order: ascending weight, then ascending edge id.
pub(crate) fn processing_order(left: &Edge, right: &Edge) -> Ordering {
    left.weight
        .total_cmp(&right.weight)
        .then_with(|| left.id.cmp(&right.id))
}
