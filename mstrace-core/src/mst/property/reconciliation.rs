//! Reconciliation properties.
//!
//! Tracing a prefix and reconciling the rest must reproduce the full-graph
//! weight and connectivity verdict while leaving the prefix trace intact.
//! Reconciling with nothing left over must return the partial result as is.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Algorithm, Edge, MstPlanBuilder, MstResult, reconcile_beyond_cap};

use super::helpers::{ensure, run_engine, weights_match};
use super::types::GraphFixture;

/// Cap used for a fixture: roughly the first third of its edges.
fn cap_for(fixture: &GraphFixture) -> usize {
    (fixture.edges.len() / 3).max(1)
}

/// Runs the prefix-plus-reconcile equivalence property for both engines.
pub(super) fn run_reconciliation_property(fixture: &GraphFixture) -> TestCaseResult {
    let cap = cap_for(fixture);
    for algorithm in [Algorithm::Kruskal, Algorithm::Prim] {
        let full = run_engine(algorithm, fixture)?;
        let plan = MstPlanBuilder::new()
            .with_algorithm(algorithm)
            .with_visualization_cap(cap)
            .build()
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let bounded = plan
            .run(&fixture.edges)
            .map_err(|err| TestCaseError::fail(format!("{algorithm} plan failed: {err}")))?;
        let prefix = run_engine_over(algorithm, &fixture.edges[..cap])?;

        ensure(bounded.trace() == prefix.trace(), fixture, || {
            format!("{algorithm}: reconciliation altered the prefix trace")
        })?;
        ensure(weights_match(bounded.total_weight(), full.total_weight()), fixture, || {
            format!(
                "{algorithm}: reconciled weight {} differs from full weight {}",
                bounded.total_weight(),
                full.total_weight(),
            )
        })?;
        ensure(bounded.is_spanning_tree() == full.is_spanning_tree(), fixture, || {
            format!("{algorithm}: reconciled connectivity verdict differs")
        })?;

        // Fixture ids follow input order, so the prefix covers ids `0..cap`.
        let bound = cap as u64;
        ensure(bounded.mst_edges().iter().all(|e| e.id() < bound), fixture, || {
            format!("{algorithm}: displayed edge beyond the visualised range")
        })?;
        let shown_and_hidden = bounded.mst_edges().len() + bounded.hidden_edges();
        ensure(shown_and_hidden == full.mst_edges().len(), fixture, || {
            format!(
                "{algorithm}: {shown_and_hidden} reconciled tree edges, full run has {}",
                full.mst_edges().len(),
            )
        })?;
    }
    Ok(())
}

/// Runs the idempotence property: an empty remainder is a no-op.
pub(super) fn run_reconcile_idempotence_property(fixture: &GraphFixture) -> TestCaseResult {
    for algorithm in [Algorithm::Kruskal, Algorithm::Prim] {
        let partial = run_engine(algorithm, fixture)?;
        let expected = partial.clone();
        let bound = fixture.edges.len() as u64;
        let reconciled = reconcile_beyond_cap(partial, &[], algorithm, bound)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        ensure(
            reconciled.trace() == expected.trace()
                && reconciled.mst_edges() == expected.mst_edges()
                && reconciled.total_weight() == expected.total_weight()
                && reconciled.disconnected() == expected.disconnected()
                && reconciled.reconciliation().is_none(),
            fixture,
            || format!("{algorithm}: empty reconciliation changed the result"),
        )?;
    }
    Ok(())
}

fn run_engine_over(algorithm: Algorithm, edges: &[Edge]) -> Result<MstResult, TestCaseError> {
    algorithm
        .run(edges)
        .map_err(|err| TestCaseError::fail(format!("{algorithm} prefix run failed: {err}")))
}
