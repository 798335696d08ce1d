//! Traced minimum spanning tree engines.
//!
//! [`run_kruskal`] sorts the whole edge list and merges partitions through an
//! [`crate::IdentitySet`]; [`run_prim`] expands a frontier from the source of
//! the first input edge. Both record a [`crate::DecisionTrace`] and break
//! weight ties by ascending edge id.

pub(crate) mod kruskal;
pub(crate) mod prim;

use std::{collections::HashSet, fmt};

use tracing::{Span, debug, field, instrument};

use crate::{
    edge::{Edge, EdgeId},
    error::{MstError, Result},
    result::MstResult,
};

/// Selects the engine used for a traced run and its reconciliation.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Edge-centric union-find engine.
    #[default]
    Kruskal,
    /// Vertex-centric frontier engine.
    Prim,
}

impl Algorithm {
    /// Returns the lowercase name used in logs, metrics, and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }

    /// Runs the selected engine over `edges`.
    ///
    /// # Errors
    /// Returns [`MstError::DuplicateEdgeId`] when two edges share an id.
    pub fn run(self, edges: &[Edge]) -> Result<MstResult> {
        match self {
            Self::Kruskal => run_kruskal(edges),
            Self::Prim => run_prim(edges),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes a minimum spanning tree with Kruskal's algorithm, tracing every
/// examined edge.
///
/// Edges are processed by ascending weight, then ascending id. A disconnected
/// input yields the minimum spanning forest with
/// [`MstResult::disconnected`] set.
///
/// Every input edge is examined, even after the tree is complete, so the
/// trace holds exactly one `Checking` step per edge followed by its verdict.
/// [`run_prim`] stops earlier and its trace can be shorter.
///
/// # Errors
/// Returns [`MstError::DuplicateEdgeId`] when two edges share an id.
///
/// # Examples
/// ```
/// use mstrace_core::{Edge, StepStatus, run_kruskal};
///
/// let edges = [
///     Edge::new(0, 0, 1, 1.0),
///     Edge::new(1, 1, 2, 2.0),
///     Edge::new(2, 2, 0, 3.0),
/// ];
/// let result = run_kruskal(&edges)?;
/// assert_eq!(result.total_weight(), 3.0);
/// assert_eq!(result.trace().count(StepStatus::Rejected), 1);
/// # Ok::<(), mstrace_core::MstError>(())
/// ```
#[instrument(
    name = "mst.kruskal",
    err,
    skip(edges),
    fields(
        edges = edges.len(),
        edges_examined = field::Empty,
        accepted = field::Empty,
        total_weight = field::Empty,
    ),
)]
pub fn run_kruskal(edges: &[Edge]) -> Result<MstResult> {
    ensure_unique_ids(edges)?;
    let result = kruskal::run(edges);
    record_run(&result);
    Ok(result)
}

/// Computes a minimum spanning tree with Prim's algorithm, tracing every
/// frontier pop.
///
/// The traversal starts at the source of the first edge. When the input is
/// disconnected only that node's component is spanned and
/// [`MstResult::disconnected`] is set.
///
/// The traversal stops as soon as the tree spans every node, so frontier
/// edges still queued at that point never appear in the trace. Unlike
/// [`run_kruskal`], the trace does not cover every input edge.
///
/// # Errors
/// Returns [`MstError::DuplicateEdgeId`] when two edges share an id.
///
/// # Examples
/// ```
/// use mstrace_core::{Edge, StepStatus, run_kruskal, run_prim};
///
/// let edges = [
///     Edge::new(0, 0, 1, 1.0),
///     Edge::new(1, 1, 2, 2.0),
///     Edge::new(2, 2, 0, 3.0),
/// ];
/// let prim = run_prim(&edges)?;
/// let kruskal = run_kruskal(&edges)?;
/// assert_eq!(prim.total_weight(), kruskal.total_weight());
/// assert_eq!(prim.trace().count(StepStatus::Checking), 2);
/// assert_eq!(kruskal.trace().count(StepStatus::Checking), 3);
/// # Ok::<(), mstrace_core::MstError>(())
/// ```
#[instrument(
    name = "mst.prim",
    err,
    skip(edges),
    fields(
        edges = edges.len(),
        edges_examined = field::Empty,
        accepted = field::Empty,
        total_weight = field::Empty,
    ),
)]
pub fn run_prim(edges: &[Edge]) -> Result<MstResult> {
    ensure_unique_ids(edges)?;
    let result = prim::run(edges);
    record_run(&result);
    Ok(result)
}

/// Rejects edge sets in which an id appears more than once.
pub(crate) fn ensure_unique_ids<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Result<()> {
    let mut seen: HashSet<EdgeId> = HashSet::new();
    for edge in edges {
        if !seen.insert(edge.id()) {
            return Err(MstError::DuplicateEdgeId { id: edge.id() });
        }
    }
    Ok(())
}

/// Counts the distinct node identifiers referenced by `edges`.
pub(crate) fn distinct_node_count<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> usize {
    let mut nodes = HashSet::new();
    for edge in edges {
        nodes.insert(edge.source());
        nodes.insert(edge.target());
    }
    nodes.len()
}

fn record_run(result: &MstResult) {
    let stats = result.stats();
    let span = Span::current();
    span.record("edges_examined", stats.edges_examined());
    span.record("accepted", stats.accepted());
    span.record("total_weight", result.total_weight());
    debug!(
        algorithm = %result.algorithm(),
        nodes = result.node_count(),
        steps = result.trace().len(),
        disconnected = result.disconnected().is_some(),
        elapsed_us = stats.elapsed().as_micros() as u64,
        "traced run completed"
    );
    record_metrics(result);
}

#[cfg(feature = "metrics")]
fn record_metrics(result: &MstResult) {
    let algorithm = result.algorithm().as_str();
    let stats = result.stats();
    metrics::counter!("mst_edges_examined_total", "algorithm" => algorithm)
        .increment(stats.edges_examined() as u64);
    metrics::counter!("mst_edges_accepted_total", "algorithm" => algorithm)
        .increment(stats.accepted() as u64);
    metrics::histogram!("mst_run_duration_seconds", "algorithm" => algorithm)
        .record(stats.elapsed().as_secs_f64());
}

#[cfg(not(feature = "metrics"))]
fn record_metrics(_result: &MstResult) {}

#[cfg(test)]
mod property;
