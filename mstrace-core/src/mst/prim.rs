//! Prim's algorithm with a lazily pruned frontier.

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap, HashSet},
    time::Instant,
};

use crate::{
    edge::{Edge, NodeId, processing_order},
    result::{MstResult, RunStats},
    trace::{DecisionTrace, StepSink},
};

use super::{Algorithm, distinct_node_count};

/// Frontier candidate: an edge leaving the visited set and the node it reaches.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    edge: Edge,
    far: NodeId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    // `BinaryHeap` is a max-heap; reversing yields the lightest edge first.
    fn cmp(&self, other: &Self) -> Ordering {
        processing_order(&other.edge, &self.edge)
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Node to incident edges, built once per traversal.
#[derive(Debug, Default)]
struct Adjacency<'a> {
    incident: HashMap<NodeId, Vec<&'a Edge>>,
}

impl<'a> Adjacency<'a> {
    fn build(edges: &'a [Edge]) -> Self {
        let mut incident: HashMap<NodeId, Vec<&'a Edge>> = HashMap::new();
        for edge in edges {
            incident.entry(edge.source()).or_default().push(edge);
            if !edge.is_self_loop() {
                incident.entry(edge.target()).or_default().push(edge);
            }
        }
        Self { incident }
    }

    fn around(&self, node: NodeId) -> impl Iterator<Item = Candidate> + '_ {
        self.incident
            .get(&node)
            .into_iter()
            .flatten()
            .map(move |edge| Candidate {
                edge: **edge,
                far: if edge.source() == node {
                    edge.target()
                } else {
                    edge.source()
                },
            })
    }
}

/// Tree grown from a single start node.
#[derive(Debug)]
pub(crate) struct PrimTree {
    pub(crate) edges: Vec<Edge>,
    pub(crate) total_weight: f64,
    pub(crate) examined: usize,
}

/// Grows a minimum spanning tree from `start`, reporting each popped
/// candidate to `sink`.
///
/// Stale candidates whose far node was visited after they were pushed stay
/// in the heap until popped and rejected. This costs up to O(E) extra heap
/// entries and pops in exchange for not needing decrease-key.
pub(crate) fn grow_tree<S: StepSink>(
    edges: &[Edge],
    start: NodeId,
    node_count: usize,
    sink: &mut S,
) -> PrimTree {
    let required = node_count.saturating_sub(1);
    let adjacency = Adjacency::build(edges);
    let mut visited = HashSet::with_capacity(node_count);
    let mut frontier = BinaryHeap::new();
    let mut tree = PrimTree {
        edges: Vec::with_capacity(required),
        total_weight: 0.0,
        examined: 0,
    };

    visited.insert(start);
    frontier.extend(adjacency.around(start).filter(|c| c.far != start));

    while tree.edges.len() < required {
        let Some(candidate) = frontier.pop() else {
            break;
        };
        tree.examined += 1;
        sink.checking(&candidate.edge, tree.total_weight);

        if !visited.insert(candidate.far) {
            sink.rejected(&candidate.edge, tree.total_weight);
            continue;
        }

        tree.total_weight += candidate.edge.weight();
        tree.edges.push(candidate.edge);
        sink.accepted(&candidate.edge, tree.total_weight);

        frontier.extend(
            adjacency
                .around(candidate.far)
                .filter(|next| !visited.contains(&next.far)),
        );
    }

    tree
}

pub(super) fn run(edges: &[Edge]) -> MstResult {
    let started = Instant::now();
    let node_count = distinct_node_count(edges);
    let mut trace = DecisionTrace::with_capacity(edges.len());
    let tree = match edges.first() {
        Some(first) => grow_tree(edges, first.source(), node_count, &mut trace),
        None => PrimTree {
            edges: Vec::new(),
            total_weight: 0.0,
            examined: 0,
        },
    };

    let accepted = tree.edges.len();
    let stats = RunStats {
        edges_examined: tree.examined,
        accepted,
        rejected: tree.examined - accepted,
        elapsed: started.elapsed(),
    };
    MstResult::traced(
        Algorithm::Prim,
        tree.edges,
        tree.total_weight,
        trace,
        node_count,
        stats,
    )
}
