//! JSON wire representation of a traced run.

use mstrace_core::{DisconnectedGraph, Edge, EdgeId, MstResult, NodeId, Step};
use serde::Serialize;

/// Serialisable view of an [`MstResult`].
///
/// `mst_edges` holds only the edges inside the visualised id range;
/// `hidden_edges` counts the tree edges that fell outside it.
#[derive(Debug, Serialize)]
pub struct WireResult {
    mst_edges: Vec<WireEdge>,
    total_weight: f64,
    steps: Vec<WireStep>,
    disconnected: Option<WireDisconnected>,
    hidden_edges: usize,
}

#[derive(Debug, Serialize)]
struct WireEdge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    weight: f64,
}

#[derive(Debug, Serialize)]
struct WireStep {
    edge_id: EdgeId,
    weight: f64,
    status: &'static str,
    total_weight: f64,
}

#[derive(Debug, Serialize)]
struct WireDisconnected {
    node_count: usize,
    accepted_edges: usize,
    required_edges: usize,
}

impl From<&MstResult> for WireResult {
    fn from(result: &MstResult) -> Self {
        Self {
            mst_edges: result.mst_edges().iter().map(WireEdge::from).collect(),
            total_weight: result.total_weight(),
            steps: result.trace().iter().map(WireStep::from).collect(),
            disconnected: result.disconnected().map(WireDisconnected::from),
            hidden_edges: result.hidden_edges(),
        }
    }
}

impl From<&Edge> for WireEdge {
    fn from(edge: &Edge) -> Self {
        Self {
            id: edge.id(),
            source: edge.source(),
            target: edge.target(),
            weight: edge.weight(),
        }
    }
}

impl From<&Step> for WireStep {
    fn from(step: &Step) -> Self {
        Self {
            edge_id: step.edge_id(),
            weight: step.weight(),
            status: step.status().as_str(),
            total_weight: step.total_weight(),
        }
    }
}

impl From<&DisconnectedGraph> for WireDisconnected {
    fn from(gap: &DisconnectedGraph) -> Self {
        Self {
            node_count: gap.node_count(),
            accepted_edges: gap.accepted_edges(),
            required_edges: gap.required_edges(),
        }
    }
}
