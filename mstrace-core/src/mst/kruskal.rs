//! Kruskal's algorithm over a sorted edge list.

use std::time::Instant;

use crate::{
    edge::{Edge, NodeId, processing_order},
    identity_set::IdentitySet,
    result::{MstResult, RunStats},
    trace::{DecisionTrace, StepSink},
};

use super::{Algorithm, distinct_node_count};

/// Growing forest shared by the traced engine and the reconciler.
///
/// Once the forest holds `node_count - 1` edges every later candidate is
/// rejected without touching the partitions, so the trace still records two
/// steps per examined edge.
#[derive(Debug)]
pub(crate) struct KruskalForest {
    partitions: IdentitySet<NodeId>,
    edges: Vec<Edge>,
    total_weight: f64,
    required: usize,
}

impl KruskalForest {
    pub(crate) fn new(node_count: usize) -> Self {
        let required = node_count.saturating_sub(1);
        Self {
            partitions: IdentitySet::with_capacity(node_count),
            edges: Vec::with_capacity(required),
            total_weight: 0.0,
            required,
        }
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.edges.len() >= self.required
    }

    /// Examines one candidate, reporting both steps to `sink`.
    pub(crate) fn consider<S: StepSink>(&mut self, edge: &Edge, sink: &mut S) -> bool {
        sink.checking(edge, self.total_weight);
        let merged = !self.is_complete() && self.partitions.union(edge.source(), edge.target());
        if merged {
            self.total_weight += edge.weight();
            self.edges.push(*edge);
            sink.accepted(edge, self.total_weight);
        } else {
            sink.rejected(edge, self.total_weight);
        }
        merged
    }

    pub(crate) fn into_parts(self) -> (Vec<Edge>, f64) {
        (self.edges, self.total_weight)
    }
}

/// Returns `edges` in canonical processing order.
pub(crate) fn sorted(edges: &[Edge]) -> Vec<Edge> {
    let mut ordered = edges.to_vec();
    ordered.sort_by(processing_order);
    ordered
}

/// Interleaves two lists already in processing order.
pub(crate) fn merged<'a>(left: &'a [Edge], right: &'a [Edge]) -> impl Iterator<Item = &'a Edge> {
    let mut left = left.iter().peekable();
    let mut right = right.iter().peekable();
    std::iter::from_fn(move || {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => processing_order(l, r).is_gt(),
            (Some(_), None) => false,
            (None, _) => true,
        };
        if take_right { right.next() } else { left.next() }
    })
}

pub(super) fn run(edges: &[Edge]) -> MstResult {
    let started = Instant::now();
    let node_count = distinct_node_count(edges);
    let mut forest = KruskalForest::new(node_count);
    let mut trace = DecisionTrace::with_capacity(edges.len());
    let mut accepted = 0;

    for edge in &sorted(edges) {
        if forest.consider(edge, &mut trace) {
            accepted += 1;
        }
    }

    let stats = RunStats {
        edges_examined: edges.len(),
        accepted,
        rejected: edges.len() - accepted,
        elapsed: started.elapsed(),
    };
    let (mst_edges, total_weight) = forest.into_parts();
    MstResult::traced(
        Algorithm::Kruskal,
        mst_edges,
        total_weight,
        trace,
        node_count,
        stats,
    )
}
