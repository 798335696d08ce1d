//! Command-line interface for step-tracked MST runs.
//!
//! The `run` command loads an edge-list file or generates a random connected
//! graph, traces the selected engine over at most `--cap` edges, reconciles
//! the rest, and writes the result as JSON or a short summary.

mod commands;
mod render;
mod wire;

pub use commands::{
    AlgorithmArg, Cli, CliError, Command, ExecutionSummary, FileArgs, GenerateArgs, OutputFormat,
    RunCommand, RunSource, run_cli,
};
pub use render::{render_json, render_output, render_summary};
pub use wire::WireResult;

#[cfg(test)]
mod test_helpers;
