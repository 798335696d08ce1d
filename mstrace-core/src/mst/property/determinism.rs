//! Determinism property: reruns on identical input reproduce the trace and
//! the tree edge sequence exactly.

use proptest::test_runner::TestCaseResult;

use crate::Algorithm;

use super::helpers::{ensure, run_engine};
use super::types::{DeterminismConfig, GraphFixture};

/// Runs the determinism property for both engines.
pub(super) fn run_determinism_property(fixture: &GraphFixture) -> TestCaseResult {
    let config = DeterminismConfig::load();
    for algorithm in [Algorithm::Kruskal, Algorithm::Prim] {
        let baseline = run_engine(algorithm, fixture)?;
        for repetition in 0..config.repetitions {
            let rerun = run_engine(algorithm, fixture)?;
            ensure(rerun.trace() == baseline.trace(), fixture, || {
                format!("{algorithm}: trace diverged on repetition {repetition}")
            })?;
            ensure(rerun.mst_edges() == baseline.mst_edges(), fixture, || {
                format!("{algorithm}: tree edges diverged on repetition {repetition}")
            })?;
        }
    }
    Ok(())
}
