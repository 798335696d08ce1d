//! Trace and forest invariants checked on both engines.
//!
//! - Every examined edge yields a `checking` step immediately followed by
//!   one terminal step for the same edge.
//! - A `checking` step carries the total of the step before it; a rejected
//!   step leaves it unchanged and an accepted step adds the edge weight.
//! - Running totals never decrease (generated weights are positive) and the
//!   last one equals `total_weight`.
//! - Accepted steps list the tree edges in order.
//! - The tree is acyclic and spans `node_count - 1` edges iff connected.

use std::collections::HashMap;

use proptest::test_runner::TestCaseResult;

use crate::{Algorithm, Edge, EdgeId, MstResult, StepStatus};

use super::helpers::{ensure, find_root, run_engine};
use super::oracle::dense_index;
use super::types::GraphFixture;

/// Runs the trace invariant property for both engines.
pub(super) fn run_trace_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    for algorithm in [Algorithm::Kruskal, Algorithm::Prim] {
        let result = run_engine(algorithm, fixture)?;
        validate_step_pairs(fixture, &result)?;
        validate_running_totals(fixture, &result)?;
        validate_accepted_steps(fixture, &result)?;
        validate_forest(fixture, &result)?;
    }
    Ok(())
}

fn validate_step_pairs(fixture: &GraphFixture, result: &MstResult) -> TestCaseResult {
    let steps = result.trace().steps();
    ensure(steps.len() == 2 * result.stats().edges_examined(), fixture, || {
        format!(
            "{}: {} steps for {} examined edges",
            result.algorithm(),
            steps.len(),
            result.stats().edges_examined(),
        )
    })?;
    let weights: HashMap<EdgeId, f64> = fixture.edges.iter().map(|e| (e.id(), e.weight())).collect();
    for (index, pair) in steps.chunks_exact(2).enumerate() {
        let [check, verdict] = pair else {
            unreachable!("chunks_exact yields pairs");
        };
        ensure(
            check.status() == StepStatus::Checking
                && verdict.status().is_terminal()
                && check.edge_id() == verdict.edge_id(),
            fixture,
            || format!("{}: malformed step pair {index}: {check:?} {verdict:?}", result.algorithm()),
        )?;
        ensure(
            weights.get(&check.edge_id()) == Some(&check.weight()),
            fixture,
            || format!("{}: step {index} names an unknown edge", result.algorithm()),
        )?;
    }
    Ok(())
}

fn validate_running_totals(fixture: &GraphFixture, result: &MstResult) -> TestCaseResult {
    let mut previous = 0.0;
    for (index, step) in result.trace().iter().enumerate() {
        let expected = match step.status() {
            StepStatus::Checking | StepStatus::Rejected => previous,
            StepStatus::Accepted => previous + step.weight(),
        };
        ensure(step.total_weight() == expected, fixture, || {
            format!(
                "{}: step {index} total {} expected {expected}",
                result.algorithm(),
                step.total_weight(),
            )
        })?;
        ensure(step.total_weight() >= previous, fixture, || {
            format!("{}: running total decreased at step {index}", result.algorithm())
        })?;
        previous = step.total_weight();
    }
    ensure(result.trace().final_total() == result.total_weight(), fixture, || {
        format!(
            "{}: final running total {} differs from total weight {}",
            result.algorithm(),
            result.trace().final_total(),
            result.total_weight(),
        )
    })
}

fn validate_accepted_steps(fixture: &GraphFixture, result: &MstResult) -> TestCaseResult {
    let accepted: Vec<EdgeId> = result
        .trace()
        .iter()
        .filter(|step| step.status() == StepStatus::Accepted)
        .map(|step| step.edge_id())
        .collect();
    let tree: Vec<EdgeId> = result.mst_edges().iter().map(Edge::id).collect();
    ensure(accepted == tree, fixture, || {
        format!(
            "{}: accepted steps {accepted:?} differ from tree edges {tree:?}",
            result.algorithm(),
        )
    })
}

fn validate_forest(fixture: &GraphFixture, result: &MstResult) -> TestCaseResult {
    let index = dense_index(&fixture.edges);
    let mut parent: Vec<usize> = (0..index.len()).collect();
    for edge in result.mst_edges() {
        let a = find_root(&mut parent, index[&edge.source()]);
        let b = find_root(&mut parent, index[&edge.target()]);
        ensure(a != b, fixture, || {
            format!("{}: edge {} closes a cycle", result.algorithm(), edge.id())
        })?;
        parent[b] = a;
    }

    let spans = result.mst_edges().len() == fixture.node_count - 1;
    ensure(spans == fixture.distribution.is_connected(), fixture, || {
        format!(
            "{}: {} tree edges over {} nodes",
            result.algorithm(),
            result.mst_edges().len(),
            fixture.node_count,
        )
    })?;
    ensure(result.is_spanning_tree() == spans, fixture, || {
        format!("{}: disconnection flag disagrees with edge count", result.algorithm())
    })
}
