//! Sequential Kruskal oracle for MST property verification.
//!
//! A deliberately plain implementation: node ids are remapped to a dense
//! range up front and merged with an array-backed union-find, so it shares
//! no code with [`crate::IdentitySet`] or the traced engines.

use std::collections::BTreeMap;

use crate::Edge;

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: f64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components over the referenced nodes.
    pub component_count: usize,
}

/// Computes a minimum spanning forest, ordering edges by weight then id.
pub(super) fn sequential_kruskal(edges: &[Edge]) -> OracleResult {
    let index = dense_index(edges);
    let mut parent: Vec<usize> = (0..index.len()).collect();
    let mut order: Vec<&Edge> = edges.iter().collect();
    order.sort_by(|a, b| a.weight().total_cmp(&b.weight()).then(a.id().cmp(&b.id())));

    let mut total_weight = 0.0;
    let mut edge_count = 0;
    let mut components = index.len();
    for edge in order {
        let a = find_root(&mut parent, index[&edge.source()]);
        let b = find_root(&mut parent, index[&edge.target()]);
        if a != b {
            parent[b] = a;
            total_weight += edge.weight();
            edge_count += 1;
            components -= 1;
        }
    }

    OracleResult {
        total_weight,
        edge_count,
        component_count: components,
    }
}

/// Maps every referenced node id to a dense index.
pub(super) fn dense_index(edges: &[Edge]) -> BTreeMap<i64, usize> {
    let mut index = BTreeMap::new();
    for edge in edges {
        for node in [edge.source(), edge.target()] {
            let next = index.len();
            index.entry(node).or_insert(next);
        }
    }
    index
}
