//! Random connected graphs sized for benchmarking.

use mstrace_core::{Edge, EdgeId, NodeId};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::{error::BenchSetupError, params::EngineBenchParams};

/// Builds a connected graph of `node_count` nodes: a spanning path plus
/// `node_count * extra_degree` random chords, shuffled and numbered in
/// shuffled order so neither engine sees pre-sorted input.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `node_count` is zero.
pub fn random_graph(params: &EngineBenchParams, seed: u64) -> Result<Vec<Edge>, BenchSetupError> {
    if params.node_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "node_count",
        });
    }
    let last = NodeId::try_from(params.node_count - 1).map_err(|_| BenchSetupError::ZeroValue {
        context: "node_count within the node id range",
    })?;
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut pairs: Vec<(NodeId, NodeId, f64)> = (0..last)
        .map(|node| (node, node + 1, rng.gen_range(0.0..100.0)))
        .collect();

    let chords = params.node_count.saturating_mul(params.extra_degree);
    if last > 0 {
        while pairs.len() < (params.node_count - 1) + chords {
            let source = rng.gen_range(0..=last);
            let target = rng.gen_range(0..=last);
            if source != target {
                pairs.push((source, target, rng.gen_range(0.0..100.0)));
            }
        }
    }

    pairs.shuffle(&mut rng);
    Ok(pairs
        .into_iter()
        .enumerate()
        .map(|(index, (source, target, weight))| {
            Edge::new(index as EdgeId, source, target, weight)
        })
        .collect())
}
