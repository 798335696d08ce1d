//! Result types returned by the engines and the reconciler.

use std::{fmt, time::Duration};

use crate::{edge::Edge, mst::Algorithm, trace::DecisionTrace};

/// Signals that the input did not span a single component.
///
/// Carried as data inside [`MstResult`]; the engines still return the maximal
/// forest they found, its weight, and the full trace.
///
/// # Examples
/// ```
/// use mstrace_core::{Edge, run_kruskal};
///
/// let result = run_kruskal(&[Edge::new(0, 0, 1, 1.0), Edge::new(1, 2, 3, 2.0)])?;
/// let gap = result.disconnected().expect("two components");
/// assert_eq!(gap.node_count(), 4);
/// assert_eq!(gap.accepted_edges(), 2);
/// assert_eq!(gap.missing_edges(), 1);
/// # Ok::<(), mstrace_core::MstError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DisconnectedGraph {
    node_count: usize,
    accepted_edges: usize,
}

impl DisconnectedGraph {
    /// Returns `Some` when `accepted_edges` falls short of spanning
    /// `node_count` nodes.
    pub(crate) fn detect(node_count: usize, accepted_edges: usize) -> Option<Self> {
        (accepted_edges < node_count.saturating_sub(1)).then_some(Self {
            node_count,
            accepted_edges,
        })
    }

    /// Number of distinct nodes referenced by the input.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Number of edges the engine accepted before the candidates ran out.
    #[must_use]
    #[rustfmt::skip]
    pub fn accepted_edges(&self) -> usize { self.accepted_edges }

    /// Number of edges a spanning tree over [`Self::node_count`] nodes needs.
    #[must_use]
    pub fn required_edges(&self) -> usize {
        self.node_count.saturating_sub(1)
    }

    /// Number of edges missing from a complete spanning tree.
    #[must_use]
    pub fn missing_edges(&self) -> usize {
        self.required_edges().saturating_sub(self.accepted_edges)
    }
}

impl fmt::Display for DisconnectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "graph is disconnected: accepted {} of {} edges needed to span {} nodes",
            self.accepted_edges,
            self.required_edges(),
            self.node_count,
        )
    }
}

/// Counters describing one traced engine run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub(crate) edges_examined: usize,
    pub(crate) accepted: usize,
    pub(crate) rejected: usize,
    pub(crate) elapsed: Duration,
}

impl RunStats {
    /// Edges that received a `checking` step.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges_examined(&self) -> usize { self.edges_examined }

    /// Edges accepted into the tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn accepted(&self) -> usize { self.accepted }

    /// Edges rejected after examination.
    #[must_use]
    #[rustfmt::skip]
    pub fn rejected(&self) -> usize { self.rejected }

    /// Wall-clock time spent inside the engine.
    #[must_use]
    #[rustfmt::skip]
    pub fn elapsed(&self) -> Duration { self.elapsed }
}

/// Counters describing the untraced reconciliation phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub(crate) edges_considered: usize,
    pub(crate) edges_added: usize,
    pub(crate) hidden_edges: usize,
    pub(crate) elapsed: Duration,
}

impl ReconcileStats {
    /// Edges handed to the reconciler beyond the visualised prefix.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges_considered(&self) -> usize { self.edges_considered }

    /// Full-graph tree edges absent from the prefix tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges_added(&self) -> usize { self.edges_added }

    /// Full-graph tree edges withheld from the displayed edge list.
    #[must_use]
    #[rustfmt::skip]
    pub fn hidden_edges(&self) -> usize { self.hidden_edges }

    /// Wall-clock time spent reconciling.
    #[must_use]
    #[rustfmt::skip]
    pub fn elapsed(&self) -> Duration { self.elapsed }
}

/// Output of a traced run, optionally reconciled over a larger edge set.
///
/// `total_weight` always describes the tree over every edge the result has
/// seen. After reconciliation `mst_edges` lists only the tree edges whose ids
/// fall inside the visualised range, and the trace is the one produced over
/// the prefix.
#[derive(Clone, Debug)]
pub struct MstResult {
    algorithm: Algorithm,
    mst_edges: Vec<Edge>,
    total_weight: f64,
    trace: DecisionTrace,
    node_count: usize,
    disconnected: Option<DisconnectedGraph>,
    stats: RunStats,
    reconciliation: Option<ReconcileStats>,
}

impl MstResult {
    pub(crate) fn traced(
        algorithm: Algorithm,
        mst_edges: Vec<Edge>,
        total_weight: f64,
        trace: DecisionTrace,
        node_count: usize,
        stats: RunStats,
    ) -> Self {
        let disconnected = DisconnectedGraph::detect(node_count, mst_edges.len());
        Self {
            algorithm,
            mst_edges,
            total_weight,
            trace,
            node_count,
            disconnected,
            stats,
            reconciliation: None,
        }
    }

    /// Replaces the tree and weight while carrying the trace over untouched.
    pub(crate) fn reconciled(
        self,
        mst_edges: Vec<Edge>,
        total_weight: f64,
        node_count: usize,
        disconnected: Option<DisconnectedGraph>,
        reconciliation: ReconcileStats,
    ) -> Self {
        Self {
            mst_edges,
            total_weight,
            node_count,
            disconnected,
            reconciliation: Some(reconciliation),
            ..self
        }
    }

    /// Engine that produced the trace.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Tree edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn mst_edges(&self) -> &[Edge] { &self.mst_edges }

    /// Weight of the minimum spanning tree or forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Decision trace recorded over the traced edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn trace(&self) -> &DecisionTrace { &self.trace }

    /// Number of distinct node identifiers the result spans or should span.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Disconnection signal, present when the input had several components.
    #[must_use]
    pub fn disconnected(&self) -> Option<&DisconnectedGraph> {
        self.disconnected.as_ref()
    }

    /// Returns `true` when the result spans every referenced node.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.disconnected.is_none()
    }

    /// Counters for the traced run.
    #[must_use]
    #[rustfmt::skip]
    pub fn stats(&self) -> &RunStats { &self.stats }

    /// Counters for the reconciliation phase, if one ran.
    #[must_use]
    pub fn reconciliation(&self) -> Option<&ReconcileStats> {
        self.reconciliation.as_ref()
    }

    /// Tree edges withheld from [`Self::mst_edges`] by the id-range filter.
    #[must_use]
    pub fn hidden_edges(&self) -> usize {
        self.reconciliation.map_or(0, |stats| stats.hidden_edges)
    }
}
