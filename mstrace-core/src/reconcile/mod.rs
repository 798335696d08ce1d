//! Completes a traced prefix result over edges that were never traced.
//!
//! The traced run over a visualised prefix is extended to the whole input by
//! a [`ReconcileStrategy`]. [`ResumeKruskal`] rebuilds the partitions by
//! replaying the prefix tree merged with the sorted remainder, so a lighter
//! remaining edge can still displace a prefix tree edge.
//! Prim's frontier cannot be resumed, so [`RestartPrim`] reruns the traversal
//! over the prefix tree plus the remainder. Discarding prefix edges outside
//! a spanning prefix tree is safe because each of them is the heaviest edge
//! on some cycle. Prefix components a Prim traversal never reached cannot be
//! recovered from the tree alone, so they keep the result disconnected.
//!
//! Both strategies keep the trace untouched, report the full-graph weight,
//! and restrict the displayed edge list to ids below the visualised bound.

use std::{collections::HashSet, time::Instant};

use tracing::{Span, debug, field, instrument};

use crate::{
    edge::{Edge, EdgeId, NodeId},
    error::Result,
    mst::{
        Algorithm, distinct_node_count, ensure_unique_ids,
        kruskal::{self, KruskalForest},
        prim::grow_tree,
    },
    result::{DisconnectedGraph, MstResult, ReconcileStats},
    trace::Untraced,
};

/// Extends a traced prefix result over the remaining edges.
pub trait ReconcileStrategy {
    /// Produces a result whose weight spans `partial.mst_edges()` together
    /// with `remaining`, whose displayed edges have ids below
    /// `visualized_id_upper_bound`, and whose trace is `partial`'s trace.
    ///
    /// # Errors
    /// Returns [`crate::MstError::DuplicateEdgeId`] when an id occurs twice
    /// across the prefix tree and `remaining`.
    fn reconcile(
        &self,
        partial: MstResult,
        remaining: &[Edge],
        visualized_id_upper_bound: EdgeId,
    ) -> Result<MstResult>;
}

/// Replays the prefix tree and the remainder through a fresh Kruskal forest
/// in processing order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResumeKruskal;

impl ReconcileStrategy for ResumeKruskal {
    fn reconcile(
        &self,
        partial: MstResult,
        remaining: &[Edge],
        visualized_id_upper_bound: EdgeId,
    ) -> Result<MstResult> {
        resume_kruskal(partial, &[], remaining, visualized_id_upper_bound)
    }
}

/// Restarts an untraced Prim traversal over the prefix tree plus the
/// remainder, beginning at a node of the prefix tree.
///
/// A disconnected prefix result only carries the component its traversal
/// reached. The prefix nodes it never reached are still counted, so the
/// reconciled result stays marked as disconnected instead of claiming a
/// spanning tree it cannot have found.
#[derive(Clone, Copy, Debug, Default)]
pub struct RestartPrim;

impl ReconcileStrategy for RestartPrim {
    fn reconcile(
        &self,
        partial: MstResult,
        remaining: &[Edge],
        visualized_id_upper_bound: EdgeId,
    ) -> Result<MstResult> {
        restart_prim(partial, &[], remaining, visualized_id_upper_bound)
    }
}

/// Reconciles `partial` over `remaining` with the strategy matching
/// `algorithm`.
///
/// An empty `remaining` returns `partial` unchanged.
///
/// # Errors
/// Returns [`crate::MstError::DuplicateEdgeId`] when an id occurs twice
/// across `partial.mst_edges()` and `remaining`.
///
/// # Examples
/// ```
/// use mstrace_core::{Algorithm, Edge, reconcile_beyond_cap, run_kruskal};
///
/// let prefix = [Edge::new(0, 0, 1, 1.0), Edge::new(1, 1, 2, 5.0)];
/// let partial = run_kruskal(&prefix)?;
/// let trace = partial.trace().clone();
///
/// let remaining = [Edge::new(2, 2, 3, 2.0)];
/// let full = reconcile_beyond_cap(partial, &remaining, Algorithm::Kruskal, 2)?;
/// assert_eq!(full.total_weight(), 8.0);
/// assert_eq!(full.mst_edges().len(), 2);
/// assert_eq!(full.hidden_edges(), 1);
/// assert_eq!(full.trace(), &trace);
/// # Ok::<(), mstrace_core::MstError>(())
/// ```
pub fn reconcile_beyond_cap(
    partial: MstResult,
    remaining: &[Edge],
    algorithm: Algorithm,
    visualized_id_upper_bound: EdgeId,
) -> Result<MstResult> {
    reconcile_with_prefix(partial, &[], remaining, algorithm, visualized_id_upper_bound)
}

/// Reconciles like [`reconcile_beyond_cap`], also replaying `carried`
/// prefix edges that lie outside `partial`'s tree.
///
/// `carried` lets the planner hand back prefix components a Prim traversal
/// never reached. Those edges are not counted in
/// [`ReconcileStats::edges_considered`].
#[instrument(
    name = "mst.reconcile",
    err,
    skip(partial, carried, remaining),
    fields(
        remaining = remaining.len(),
        carried = carried.len(),
        edges_added = field::Empty,
        total_weight = field::Empty,
    ),
)]
pub(crate) fn reconcile_with_prefix(
    partial: MstResult,
    carried: &[Edge],
    remaining: &[Edge],
    algorithm: Algorithm,
    bound: EdgeId,
) -> Result<MstResult> {
    if remaining.is_empty() && carried.is_empty() {
        return Ok(partial);
    }
    let result = match algorithm {
        Algorithm::Kruskal => resume_kruskal(partial, carried, remaining, bound),
        Algorithm::Prim => restart_prim(partial, carried, remaining, bound),
    }?;

    let span = Span::current();
    if let Some(stats) = result.reconciliation() {
        span.record("edges_added", stats.edges_added());
    }
    span.record("total_weight", result.total_weight());
    Ok(result)
}

fn resume_kruskal(
    partial: MstResult,
    carried: &[Edge],
    remaining: &[Edge],
    bound: EdgeId,
) -> Result<MstResult> {
    let started = Instant::now();
    let known: Vec<Edge> = partial.mst_edges().iter().chain(carried).copied().collect();
    ensure_unique_ids(known.iter().chain(remaining))?;

    let node_count = distinct_node_count(known.iter().chain(remaining));
    let mut forest = KruskalForest::new(node_count);
    // Prefix tree edges replay in processing order, interleaved with the
    // remainder, so a lighter remaining edge can displace one of them.
    let replay = kruskal::sorted(&known);
    let remainder = kruskal::sorted(remaining);
    for edge in kruskal::merged(&replay, &remainder) {
        if forest.is_complete() {
            break;
        }
        forest.consider(edge, &mut Untraced);
    }

    let (edges, total_weight) = forest.into_parts();
    Ok(finish(
        partial,
        FullTree {
            edges,
            total_weight,
            node_count,
        },
        remaining.len(),
        bound,
        started,
    ))
}

fn restart_prim(
    partial: MstResult,
    carried: &[Edge],
    remaining: &[Edge],
    bound: EdgeId,
) -> Result<MstResult> {
    let started = Instant::now();
    let known: Vec<Edge> = partial.mst_edges().iter().chain(carried).copied().collect();
    ensure_unique_ids(known.iter().chain(remaining))?;

    let unreached = if partial.disconnected().is_some() {
        partial.node_count().saturating_sub(distinct_node_count(&known))
    } else {
        0
    };
    let combined: Vec<Edge> = known.into_iter().chain(remaining.iter().copied()).collect();
    let reachable = distinct_node_count(&combined);
    let mut full = match combined.first().map(Edge::source) {
        Some(start) => restart_from(&combined, start, reachable),
        None => FullTree {
            edges: Vec::new(),
            total_weight: 0.0,
            node_count: reachable,
        },
    };
    full.node_count += unreached;

    Ok(finish(partial, full, remaining.len(), bound, started))
}

fn restart_from(edges: &[Edge], start: NodeId, node_count: usize) -> FullTree {
    let tree = grow_tree(edges, start, node_count, &mut Untraced);
    FullTree {
        edges: tree.edges,
        total_weight: tree.total_weight,
        node_count,
    }
}

struct FullTree {
    edges: Vec<Edge>,
    total_weight: f64,
    node_count: usize,
}

fn finish(
    partial: MstResult,
    full: FullTree,
    edges_considered: usize,
    bound: EdgeId,
    started: Instant,
) -> MstResult {
    let prefix_ids: HashSet<EdgeId> = partial.mst_edges().iter().map(Edge::id).collect();
    let edges_added = full
        .edges
        .iter()
        .filter(|edge| !prefix_ids.contains(&edge.id()))
        .count();
    let disconnected = DisconnectedGraph::detect(full.node_count, full.edges.len());
    let (shown, hidden): (Vec<Edge>, Vec<Edge>) =
        full.edges.into_iter().partition(|edge| edge.id() < bound);

    let stats = ReconcileStats {
        edges_considered,
        edges_added,
        hidden_edges: hidden.len(),
        elapsed: started.elapsed(),
    };
    debug!(
        algorithm = %partial.algorithm(),
        edges_considered,
        edges_added,
        hidden_edges = stats.hidden_edges,
        total_weight = full.total_weight,
        "reconciled beyond visualisation cap"
    );
    partial.reconciled(
        shown,
        full.total_weight,
        full.node_count,
        disconnected,
        stats,
    )
}
