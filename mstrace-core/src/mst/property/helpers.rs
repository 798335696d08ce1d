//! Shared helper functions for MST property-based tests.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Algorithm, MstResult};

use super::types::GraphFixture;

/// Path-compressing find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Compares weights accumulated in different orders.
pub(super) fn weights_match(left: f64, right: f64) -> bool {
    (left - right).abs() <= 1e-9 * left.abs().max(right.abs()).max(1.0)
}

/// Runs `algorithm` over the fixture, converting errors into test failures.
pub(super) fn run_engine(algorithm: Algorithm, fixture: &GraphFixture) -> Result<MstResult, TestCaseError> {
    algorithm.run(&fixture.edges).map_err(|err| {
        TestCaseError::fail(format!("{algorithm} failed: {err} ({})", fixture.describe()))
    })
}

/// Fails with `message` and the fixture context unless `condition` holds.
pub(super) fn ensure(condition: bool, fixture: &GraphFixture, message: impl FnOnce() -> String) -> TestCaseResult {
    if condition {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!("{} ({})", message(), fixture.describe())))
    }
}
