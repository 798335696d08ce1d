//! Strategy builders for MST property-based tests.
//!
//! Each generator builds a list of [`Edge`]s without self-loops or repeated
//! node pairs, shuffles it so the Prim start node varies, and numbers edge
//! ids sequentially in the final order.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{Edge, EdgeId, NodeId, mst::distinct_node_count};

use super::types::{GraphDistribution, GraphFixture};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 4;
/// Maximum node count for most generated graphs.
const MAX_NODES: usize = 48;
/// Maximum node count for dense graphs.
const DENSE_MAX_NODES: usize = 24;

/// Generates fixtures covering all graph distributions.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<GraphDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific distribution.
pub(super) fn generate_fixture(distribution: GraphDistribution, rng: &mut SmallRng) -> GraphFixture {
    let builder = match distribution {
        GraphDistribution::Unique => generate_unique(rng),
        GraphDistribution::ManyIdentical => generate_identical(rng),
        GraphDistribution::Sparse => generate_sparse(rng, dense_ids),
        GraphDistribution::Dense => generate_dense(rng),
        GraphDistribution::Disconnected => generate_disconnected(rng),
        GraphDistribution::SparseIds => generate_sparse(rng, scattered_ids),
    };
    builder.finish(distribution, rng)
}

fn continuous(rng: &mut SmallRng) -> f64 {
    rng.gen_range(0.1..100.0)
}

// ── Generators ──────────────────────────────────────────────────────────

fn generate_unique(rng: &mut SmallRng) -> GraphBuilder {
    let nodes = dense_ids(rng.gen_range(MIN_NODES..=MAX_NODES), rng);
    let mut builder = GraphBuilder::default();
    builder.spanning_tree(&nodes, rng, continuous);
    let probability = rng.gen_range(0.1..=0.4);
    builder.random_pairs(&nodes, probability, rng, continuous);
    builder
}

fn generate_identical(rng: &mut SmallRng) -> GraphBuilder {
    let pool: Vec<f64> = (0..rng.gen_range(1..=3))
        .map(|_| f64::from(rng.gen_range(1_u8..=10)))
        .collect();
    let mut pick = move |r: &mut SmallRng| pool[r.gen_range(0..pool.len())];

    let nodes = dense_ids(rng.gen_range(MIN_NODES..=MAX_NODES), rng);
    let mut builder = GraphBuilder::default();
    builder.spanning_tree(&nodes, rng, &mut pick);
    let probability = rng.gen_range(0.3..=0.7);
    builder.random_pairs(&nodes, probability, rng, &mut pick);
    builder
}

fn generate_sparse(
    rng: &mut SmallRng,
    ids: fn(usize, &mut SmallRng) -> Vec<NodeId>,
) -> GraphBuilder {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let nodes = ids(node_count, rng);
    let mut builder = GraphBuilder::default();
    builder.spanning_tree(&nodes, rng, continuous);
    for _ in 0..rng.gen_range(node_count / 2..=node_count) {
        let source = nodes[rng.gen_range(0..node_count)];
        let target = nodes[rng.gen_range(0..node_count)];
        let weight = continuous(rng);
        builder.push(source, target, weight);
    }
    builder
}

fn generate_dense(rng: &mut SmallRng) -> GraphBuilder {
    let nodes = dense_ids(rng.gen_range(MIN_NODES..=DENSE_MAX_NODES), rng);
    let mut builder = GraphBuilder::default();
    builder.spanning_tree(&nodes, rng, continuous);
    let probability = rng.gen_range(0.7..=0.95);
    builder.random_pairs(&nodes, probability, rng, continuous);
    builder
}

fn generate_disconnected(rng: &mut SmallRng) -> GraphBuilder {
    let mut builder = GraphBuilder::default();
    let mut offset: NodeId = 0;
    for _ in 0..rng.gen_range(2..=5) {
        let size = rng.gen_range(2..=12);
        let nodes: Vec<NodeId> = (offset..offset + size).collect();
        builder.spanning_tree(&nodes, rng, continuous);
        let probability = rng.gen_range(0.2..=0.6);
        builder.random_pairs(&nodes, probability, rng, continuous);
        offset += size;
    }
    builder
}

// ── Node ids ────────────────────────────────────────────────────────────

fn dense_ids(count: usize, _rng: &mut SmallRng) -> Vec<NodeId> {
    (0..count as NodeId).collect()
}

fn scattered_ids(count: usize, rng: &mut SmallRng) -> Vec<NodeId> {
    let mut seen = HashSet::with_capacity(count);
    let mut ids = Vec::with_capacity(count);
    while ids.len() < count {
        let id = rng.r#gen::<NodeId>();
        if seen.insert(id) {
            ids.push(id);
        }
    }
    ids
}

// ── Builder ─────────────────────────────────────────────────────────────

/// Accumulates edges, refusing self-loops and repeated node pairs.
#[derive(Default)]
struct GraphBuilder {
    edges: Vec<Edge>,
    pairs: HashSet<(NodeId, NodeId)>,
}

impl GraphBuilder {
    fn push(&mut self, source: NodeId, target: NodeId, weight: f64) -> bool {
        if source == target || !self.pairs.insert((source.min(target), source.max(target))) {
            return false;
        }
        self.edges
            .push(Edge::new(self.edges.len() as EdgeId, source, target, weight));
        true
    }

    /// Connects `nodes` with a random tree: each node after the first is
    /// attached to a uniformly chosen earlier node of a shuffled order.
    fn spanning_tree(
        &mut self,
        nodes: &[NodeId],
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> f64,
    ) {
        let mut order = nodes.to_vec();
        order.shuffle(rng);
        for index in 1..order.len() {
            let parent = order[rng.gen_range(0..index)];
            let w = weight(rng);
            self.push(parent, order[index], w);
        }
    }

    /// Adds each remaining pair of `nodes` with the given probability.
    fn random_pairs(
        &mut self,
        nodes: &[NodeId],
        probability: f64,
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> f64,
    ) {
        for (i, &source) in nodes.iter().enumerate() {
            for &target in &nodes[i + 1..] {
                if rng.gen_bool(probability) {
                    let w = weight(rng);
                    self.push(source, target, w);
                }
            }
        }
    }

    /// Shuffles the edge order and renumbers ids to match it.
    fn finish(mut self, distribution: GraphDistribution, rng: &mut SmallRng) -> GraphFixture {
        self.edges.shuffle(rng);
        let edges: Vec<Edge> = self
            .edges
            .iter()
            .enumerate()
            .map(|(index, edge)| {
                Edge::new(index as EdgeId, edge.source(), edge.target(), edge.weight())
            })
            .collect();
        GraphFixture {
            node_count: distinct_node_count(&edges),
            edges,
            distribution,
        }
    }
}

// Manual `Arbitrary` so the tie-heavy distribution is drawn more often.
impl proptest::arbitrary::Arbitrary for GraphDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
            2 => Just(Self::SparseIds),
        ]
    }
}
