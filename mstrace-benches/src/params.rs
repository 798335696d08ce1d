//! Benchmark parameter types.

use std::fmt;

/// Parameters for an engine benchmark run.
#[derive(Clone, Debug)]
pub struct EngineBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Random edges added per node on top of the spanning path.
    pub extra_degree: usize,
}

impl fmt::Display for EngineBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.node_count, self.extra_degree)
    }
}

/// Parameters for a bounded plan benchmark run.
#[derive(Clone, Debug)]
pub struct PlanBenchParams {
    /// Number of edges in the graph.
    pub edge_count: usize,
    /// Number of edges traced before reconciliation.
    pub cap: usize,
}

impl fmt::Display for PlanBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m={},cap={}", self.edge_count, self.cap)
    }
}
