//! Step-tracked minimum spanning tree engines.
//!
//! The crate computes minimum spanning trees with Kruskal's and Prim's
//! algorithms and records every decision as a replayable [`DecisionTrace`].
//! Inputs larger than a visualisation cap are traced over a bounded prefix
//! and then reconciled over the full edge set without further tracing.
//!
//! # Tie-breaking
//!
//! Both engines order candidate edges by ascending weight and break equal
//! weights by ascending edge id. Repeated runs over the same input therefore
//! yield identical traces and identical MST edge sequences.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled each engine run emits:
//!
//! - `mst_edges_examined_total` (counter, labelled by `algorithm`)
//! - `mst_edges_accepted_total` (counter, labelled by `algorithm`)
//! - `mst_run_duration_seconds` (histogram, labelled by `algorithm`)
//!
//! # Examples
//! ```
//! use mstrace_core::{Edge, run_kruskal};
//!
//! let edges = [
//!     Edge::new(0, 10, 20, 1.0),
//!     Edge::new(1, 20, 30, 2.0),
//!     Edge::new(2, 10, 30, 5.0),
//! ];
//! let result = run_kruskal(&edges)?;
//! assert_eq!(result.total_weight(), 3.0);
//! assert_eq!(result.mst_edges().len(), 2);
//! assert!(result.disconnected().is_none());
//! # Ok::<(), mstrace_core::MstError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod edge;
mod error;
mod identity_set;
mod mst;
mod plan;
mod reconcile;
mod result;
mod trace;


pub use crate::{
    edge::{Edge, EdgeId, NodeId},
    error::{MstError, MstErrorCode, Result},
    identity_set::IdentitySet,
    mst::{Algorithm, run_kruskal, run_prim},
    plan::{DEFAULT_VISUALIZATION_CAP, MstPlan, MstPlanBuilder},
    reconcile::{ReconcileStrategy, RestartPrim, ResumeKruskal, reconcile_beyond_cap},
    result::{DisconnectedGraph, MstResult, ReconcileStats, RunStats},
    trace::{DecisionTrace, Step, StepStatus},
};
