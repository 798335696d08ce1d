//! Replayable log of per-edge decisions.
//!
//! Every examined edge contributes exactly two [`Step`]s: a
//! [`StepStatus::Checking`] step appended before the edge is tested, then one
//! terminal [`StepStatus::Accepted`] or [`StepStatus::Rejected`] step. The
//! trace is append-only; engines own it for the duration of a run and hand it
//! to the caller inside [`crate::MstResult`].

use std::fmt;

use crate::edge::{Edge, EdgeId};

/// Disposition of an edge at one point of the trace.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StepStatus {
    /// The edge is about to be tested.
    Checking,
    /// The edge joined the spanning tree.
    Accepted,
    /// The edge would have closed a cycle or reached an already visited node.
    Rejected,
}

impl StepStatus {
    /// Returns the lowercase label used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Returns `true` for [`Self::Accepted`] and [`Self::Rejected`].
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Checking)
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One decision point of a traced run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    edge_id: EdgeId,
    weight: f64,
    status: StepStatus,
    total_weight: f64,
}

impl Step {
    /// Identifier of the edge under consideration.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_id(&self) -> EdgeId { self.edge_id }

    /// Weight of the edge under consideration.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f64 { self.weight }

    /// Disposition recorded by this step.
    #[must_use]
    #[rustfmt::skip]
    pub fn status(&self) -> StepStatus { self.status }

    /// Running spanning tree weight after this step was applied.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }
}

/// Append-only sequence of [`Step`]s.
///
/// # Examples
/// ```
/// use mstrace_core::{Edge, StepStatus, run_prim};
///
/// let result = run_prim(&[Edge::new(0, 1, 2, 4.0)])?;
/// let statuses: Vec<_> = result.trace().iter().map(|step| step.status()).collect();
/// assert_eq!(statuses, [StepStatus::Checking, StepStatus::Accepted]);
/// assert_eq!(result.trace().final_total(), 4.0);
/// # Ok::<(), mstrace_core::MstError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecisionTrace {
    steps: Vec<Step>,
}

impl DecisionTrace {
    pub(crate) fn with_capacity(edges: usize) -> Self {
        Self {
            steps: Vec::with_capacity(edges.saturating_mul(2)),
        }
    }

    /// Returns the recorded steps in emission order.
    #[must_use]
    #[rustfmt::skip]
    pub fn steps(&self) -> &[Step] { &self.steps }

    /// Iterates over the recorded steps in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Counts the steps carrying `status`.
    #[must_use]
    pub fn count(&self, status: StepStatus) -> usize {
        self.steps.iter().filter(|step| step.status == status).count()
    }

    /// Returns the running total recorded by the last step, or `0.0` for an
    /// empty trace.
    #[must_use]
    pub fn final_total(&self) -> f64 {
        self.steps.last().map_or(0.0, |step| step.total_weight)
    }

    fn push(&mut self, edge: &Edge, status: StepStatus, total_weight: f64) {
        self.steps.push(Step {
            edge_id: edge.id(),
            weight: edge.weight(),
            status,
            total_weight,
        });
    }
}

impl<'a> IntoIterator for &'a DecisionTrace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Receiver for engine decisions.
///
/// Engines report through this seam so the reconciler can rerun the same
/// loops without producing steps.
pub(crate) trait StepSink {
    fn checking(&mut self, edge: &Edge, total_weight: f64);
    fn accepted(&mut self, edge: &Edge, total_weight: f64);
    fn rejected(&mut self, edge: &Edge, total_weight: f64);
}

impl StepSink for DecisionTrace {
    fn checking(&mut self, edge: &Edge, total_weight: f64) {
        self.push(edge, StepStatus::Checking, total_weight);
    }

    fn accepted(&mut self, edge: &Edge, total_weight: f64) {
        self.push(edge, StepStatus::Accepted, total_weight);
    }

    fn rejected(&mut self, edge: &Edge, total_weight: f64) {
        self.push(edge, StepStatus::Rejected, total_weight);
    }
}

/// Sink that discards every decision.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Untraced;

impl StepSink for Untraced {
    fn checking(&mut self, _edge: &Edge, _total_weight: f64) {}

    fn accepted(&mut self, _edge: &Edge, _total_weight: f64) {}

    fn rejected(&mut self, _edge: &Edge, _total_weight: f64) {}
}
