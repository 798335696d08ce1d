//! Bounded run configuration.
//!
//! An [`MstPlan`] traces at most `visualization_cap` edges and reconciles the
//! rest, so large inputs still produce a full-graph weight with a trace short
//! enough to replay.

use std::{collections::HashSet, num::NonZeroUsize};

use tracing::{Span, field, instrument};

use crate::{
    edge::{Edge, EdgeId},
    error::{MstError, Result},
    mst::{Algorithm, ensure_unique_ids},
    reconcile::reconcile_with_prefix,
    result::MstResult,
};

/// Number of edges traced when no cap is configured.
pub const DEFAULT_VISUALIZATION_CAP: usize = 10_000;

/// Immutable, validated configuration for bounded traced runs.
///
/// # Examples
/// ```
/// use mstrace_core::{Algorithm, Edge, MstPlanBuilder};
///
/// let plan = MstPlanBuilder::new()
///     .with_algorithm(Algorithm::Prim)
///     .with_visualization_cap(2)
///     .build()?;
/// let edges = [
///     Edge::new(0, 0, 1, 1.0),
///     Edge::new(1, 1, 2, 2.0),
///     Edge::new(2, 2, 3, 3.0),
/// ];
/// let result = plan.run(&edges)?;
/// assert_eq!(result.total_weight(), 6.0);
/// assert_eq!(result.trace().len(), 4);
/// assert_eq!(result.hidden_edges(), 1);
/// # Ok::<(), mstrace_core::MstError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MstPlan {
    algorithm: Algorithm,
    visualization_cap: NonZeroUsize,
}

impl MstPlan {
    /// Engine used for the traced prefix and its reconciliation.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Maximum number of edges traced.
    #[must_use]
    #[rustfmt::skip]
    pub fn visualization_cap(&self) -> NonZeroUsize { self.visualization_cap }

    /// Traces the first `visualization_cap` edges and reconciles the rest.
    ///
    /// The visualised id range ends just past the largest prefix id. When a
    /// Prim prefix is disconnected, prefix edges outside the traced tree are
    /// handed to the reconciler along with the remainder so no prefix
    /// component is lost.
    ///
    /// # Errors
    /// Returns [`MstError::DuplicateEdgeId`] when two edges share an id.
    #[instrument(
        name = "mst.plan",
        err,
        skip(self, edges),
        fields(
            edges = edges.len(),
            algorithm = %self.algorithm,
            cap = self.visualization_cap.get(),
            reconciled = field::Empty,
        ),
    )]
    pub fn run(&self, edges: &[Edge]) -> Result<MstResult> {
        ensure_unique_ids(edges)?;
        let (prefix, remaining) = edges.split_at(self.visualization_cap.get().min(edges.len()));
        let partial = self.algorithm.run(prefix)?;
        Span::current().record("reconciled", !remaining.is_empty());
        if remaining.is_empty() {
            return Ok(partial);
        }

        let bound = prefix
            .iter()
            .map(Edge::id)
            .max()
            .map_or(0, |id| id.saturating_add(1));
        let carried = self.unreached_prefix_edges(&partial, prefix);
        reconcile_with_prefix(partial, &carried, remaining, self.algorithm, bound)
    }

    fn unreached_prefix_edges(&self, partial: &MstResult, prefix: &[Edge]) -> Vec<Edge> {
        if self.algorithm != Algorithm::Prim || partial.disconnected().is_none() {
            return Vec::new();
        }
        let in_tree: HashSet<EdgeId> = partial.mst_edges().iter().map(Edge::id).collect();
        prefix
            .iter()
            .filter(|edge| !in_tree.contains(&edge.id()))
            .copied()
            .collect()
    }
}

/// Configures and constructs [`MstPlan`] instances.
#[derive(Clone, Debug)]
pub struct MstPlanBuilder {
    algorithm: Algorithm,
    visualization_cap: usize,
}

impl Default for MstPlanBuilder {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Kruskal,
            visualization_cap: DEFAULT_VISUALIZATION_CAP,
        }
    }
}

impl MstPlanBuilder {
    /// Creates a builder with Kruskal and [`DEFAULT_VISUALIZATION_CAP`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the engine.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Returns the configured engine.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Overrides the number of edges traced before reconciliation takes over.
    #[must_use]
    pub fn with_visualization_cap(mut self, cap: usize) -> Self {
        self.visualization_cap = cap;
        self
    }

    /// Returns the configured cap.
    #[must_use]
    #[rustfmt::skip]
    pub fn visualization_cap(&self) -> usize { self.visualization_cap }

    /// Validates the configuration and constructs an [`MstPlan`].
    ///
    /// # Errors
    /// Returns [`MstError::InvalidVisualizationCap`] when the cap is zero.
    pub fn build(self) -> Result<MstPlan> {
        let visualization_cap = NonZeroUsize::new(self.visualization_cap).ok_or(
            MstError::InvalidVisualizationCap {
                got: self.visualization_cap,
            },
        )?;
        Ok(MstPlan {
            algorithm: self.algorithm,
            visualization_cap,
        })
    }
}
