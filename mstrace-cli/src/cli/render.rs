//! Writers for the `run` command output.

use std::io::{self, Write};

use super::commands::{ExecutionSummary, OutputFormat};
use super::wire::WireResult;

/// Writes `summary` to `writer` in the requested format.
///
/// # Errors
/// Returns [`io::Error`] if serialisation or writing fails.
pub fn render_output(
    summary: &ExecutionSummary,
    format: OutputFormat,
    writer: impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => render_json(summary, writer),
        OutputFormat::Summary => render_summary(summary, writer),
    }
}

/// Writes the full result, trace included, as one JSON document.
///
/// # Errors
/// Returns [`io::Error`] if serialisation or writing fails.
pub fn render_json(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    serde_json::to_writer(&mut writer, &WireResult::from(&summary.result))?;
    writeln!(writer)
}

/// Writes a short human-readable summary.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use mstrace_cli::cli::{ExecutionSummary, render_summary};
/// # use mstrace_core::{Edge, run_kruskal};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let edges = [Edge::new(0, 1, 2, 1.5), Edge::new(1, 2, 3, 2.0)];
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     node_count: 3,
///     edge_count: edges.len(),
///     result: run_kruskal(&edges)?,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.contains("total weight: 3.50"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let result = &summary.result;
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "algorithm: {}", result.algorithm())?;
    writeln!(writer, "nodes: {}", summary.node_count)?;
    writeln!(writer, "edges: {}", summary.edge_count)?;
    writeln!(writer, "mst edges: {}", result.mst_edges().len())?;
    writeln!(writer, "total weight: {:.2}", result.total_weight())?;
    writeln!(writer, "trace steps: {}", result.trace().len())?;
    if result.hidden_edges() > 0 {
        writeln!(writer, "hidden mst edges: {}", result.hidden_edges())?;
    }
    if let Some(gap) = result.disconnected() {
        writeln!(writer, "warning: {gap}")?;
    }
    Ok(())
}
