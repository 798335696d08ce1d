//! Synthetic connected graphs for demos, tests, and benchmarks.
//!
//! A generated graph has nodes `1..=n`, a spanning path `1 - 2 - ... - n`
//! that guarantees connectivity, and a handful of random extra edges that
//! close cycles so the engines have something to reject.

mod errors;

use std::collections::HashSet;

use mstrace_core::{Edge, EdgeId, NodeId};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::debug;

pub use errors::{SyntheticError, SyntheticErrorCode};

/// Default lower bound on the generated node count.
pub const DEFAULT_MIN_NODES: usize = 8;
/// Default upper bound on the generated node count.
pub const DEFAULT_MAX_NODES: usize = 20;

const MIN_WEIGHT: f64 = 1.0;
const MAX_WEIGHT: f64 = 50.0;

/// Parameters for [`SyntheticGraph::generate`].
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Smallest node count that may be drawn.
    pub min_nodes: usize,
    /// Largest node count that may be drawn (inclusive).
    pub max_nodes: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl SyntheticConfig {
    /// Default node range with the given seed.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            min_nodes: DEFAULT_MIN_NODES,
            max_nodes: DEFAULT_MAX_NODES,
            seed,
        }
    }
}

/// A randomly generated connected graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    node_count: usize,
    edges: Vec<Edge>,
}

impl SyntheticGraph {
    /// Generates a connected graph whose size is drawn from the configured
    /// range.
    ///
    /// Edge ids run from zero: the path edges first, then the extra edges.
    /// Extra edges never form self-loops or repeat an unordered node pair.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the node range is empty, starts below
    /// two, or exceeds the node id range.
    ///
    /// # Examples
    /// ```
    /// use mstrace_providers_synthetic::{SyntheticConfig, SyntheticGraph};
    ///
    /// let graph = SyntheticGraph::generate(&SyntheticConfig::with_seed(7))?;
    /// assert!((8..=20).contains(&graph.node_count()));
    /// assert!(graph.edges().len() >= graph.node_count());
    /// # Ok::<(), mstrace_providers_synthetic::SyntheticError>(())
    /// ```
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        validate(config)?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let node_count = rng.gen_range(config.min_nodes..=config.max_nodes);
        let last = NodeId::try_from(node_count).map_err(|_| SyntheticError::TooManyNodes {
            max_nodes: config.max_nodes,
        })?;

        let mut builder = GraphBuilder::with_capacity(node_count);
        for source in 1..last {
            builder.push(source, source + 1, random_weight(&mut rng));
        }

        let extra = extra_edge_count(node_count, &mut rng).min(free_pairs(node_count));
        let mut added = 0;
        while added < extra {
            let source = rng.gen_range(1..=last);
            let target = rng.gen_range(1..=last);
            if source == target || builder.contains(source, target) {
                continue;
            }
            builder.push(source, target, random_weight(&mut rng));
            added += 1;
        }

        debug!(
            seed = config.seed,
            nodes = node_count,
            edges = builder.edges.len(),
            "synthetic graph generated"
        );
        Ok(Self {
            node_count,
            edges: builder.edges,
        })
    }

    /// Number of nodes, with ids `1..=node_count`.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Generated edges in id order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Consumes the graph, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

fn validate(config: &SyntheticConfig) -> Result<(), SyntheticError> {
    if config.min_nodes < 2 {
        return Err(SyntheticError::InvalidMinNodes {
            min_nodes: config.min_nodes,
        });
    }
    if config.min_nodes > config.max_nodes {
        return Err(SyntheticError::InvertedRange {
            min_nodes: config.min_nodes,
            max_nodes: config.max_nodes,
        });
    }
    if NodeId::try_from(config.max_nodes).is_err() {
        return Err(SyntheticError::TooManyNodes {
            max_nodes: config.max_nodes,
        });
    }
    Ok(())
}

/// Draws from `max(1, n/4) ..= n/2 + max(1, n/4)`.
fn extra_edge_count(node_count: usize, rng: &mut SmallRng) -> usize {
    let low = (node_count / 4).max(1);
    rng.gen_range(low..=node_count / 2 + low)
}

/// Unordered pairs left once the spanning path is in place.
const fn free_pairs(node_count: usize) -> usize {
    let all = node_count.saturating_mul(node_count - 1) / 2;
    all - (node_count - 1)
}

fn random_weight(rng: &mut SmallRng) -> f64 {
    (rng.gen_range(MIN_WEIGHT..MAX_WEIGHT) * 100.0).round() / 100.0
}

struct GraphBuilder {
    edges: Vec<Edge>,
    pairs: HashSet<(NodeId, NodeId)>,
}

impl GraphBuilder {
    fn with_capacity(node_count: usize) -> Self {
        Self {
            edges: Vec::with_capacity(node_count.saturating_mul(2)),
            pairs: HashSet::with_capacity(node_count.saturating_mul(2)),
        }
    }

    fn contains(&self, source: NodeId, target: NodeId) -> bool {
        self.pairs.contains(&unordered(source, target))
    }

    fn push(&mut self, source: NodeId, target: NodeId, weight: f64) {
        let id = self.edges.len() as EdgeId;
        self.pairs.insert(unordered(source, target));
        self.edges.push(Edge::new(id, source, target, weight));
    }
}

fn unordered(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}
