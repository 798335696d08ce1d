//! Equivalence properties: Kruskal against the sequential oracle, and
//! Prim against Kruskal on connected inputs.

use proptest::test_runner::TestCaseResult;

use crate::Algorithm;

use super::helpers::{ensure, run_engine, weights_match};
use super::oracle::sequential_kruskal;
use super::types::GraphFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let kruskal = run_engine(Algorithm::Kruskal, fixture)?;
    let oracle = sequential_kruskal(&fixture.edges);

    ensure(weights_match(kruskal.total_weight(), oracle.total_weight), fixture, || {
        format!(
            "total weight mismatch: kruskal={}, oracle={}",
            kruskal.total_weight(),
            oracle.total_weight,
        )
    })?;
    ensure(kruskal.mst_edges().len() == oracle.edge_count, fixture, || {
        format!(
            "edge count mismatch: kruskal={}, oracle={}",
            kruskal.mst_edges().len(),
            oracle.edge_count,
        )
    })?;
    ensure(
        kruskal.disconnected().is_some() == (oracle.component_count > 1),
        fixture,
        || {
            format!(
                "disconnection flag {:?} disagrees with {} oracle components",
                kruskal.disconnected(),
                oracle.component_count,
            )
        },
    )?;
    ensure(
        fixture.distribution.is_connected() == (oracle.component_count == 1),
        fixture,
        || format!("generator produced {} components", oracle.component_count),
    )
}

/// Runs the Kruskal/Prim equivalence property for the given fixture.
///
/// Weights must agree on connected inputs even when weight ties let the two
/// engines pick different edges.
pub(super) fn run_engine_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let kruskal = run_engine(Algorithm::Kruskal, fixture)?;
    let prim = run_engine(Algorithm::Prim, fixture)?;

    if !fixture.distribution.is_connected() {
        return ensure(prim.disconnected().is_some(), fixture, || {
            "prim did not flag a disconnected input".to_owned()
        });
    }

    ensure(weights_match(kruskal.total_weight(), prim.total_weight()), fixture, || {
        format!(
            "total weight mismatch: kruskal={}, prim={}",
            kruskal.total_weight(),
            prim.total_weight(),
        )
    })?;
    let expected = fixture.node_count - 1;
    ensure(
        kruskal.mst_edges().len() == expected && prim.mst_edges().len() == expected,
        fixture,
        || {
            format!(
                "expected {expected} tree edges, kruskal={}, prim={}",
                kruskal.mst_edges().len(),
                prim.mst_edges().len(),
            )
        },
    )
}
