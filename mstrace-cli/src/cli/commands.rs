//! Argument parsing and command execution for the mstrace CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use mstrace_core::{Algorithm, DEFAULT_VISUALIZATION_CAP, MstError, MstPlanBuilder, MstResult};
use mstrace_providers_edgelist::{EdgeList, EdgeListError};
use mstrace_providers_synthetic::{
    DEFAULT_MAX_NODES, DEFAULT_MIN_NODES, SyntheticConfig, SyntheticError, SyntheticGraph,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "mstrace",
    about = "Compute minimum spanning trees with a replayable decision trace."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Output format requested by the command.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        match &self.command {
            Command::Run(run) => run.format,
        }
    }
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Trace an MST run over an edge list or a generated graph.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Engine used for the traced run.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Kruskal)]
    pub algorithm: AlgorithmArg,

    /// Maximum number of edges traced before reconciliation takes over.
    #[arg(long, default_value_t = DEFAULT_VISUALIZATION_CAP)]
    pub cap: usize,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Graph source.
    #[command(subcommand)]
    pub source: RunSource,
}

/// Graph sources accepted by `run`.
#[derive(Debug, Subcommand, Clone)]
pub enum RunSource {
    /// Read whitespace-separated `source target weight` lines from a file.
    File(FileArgs),
    /// Generate a small connected random graph.
    Generate(GenerateArgs),
}

/// Edge-list file arguments.
#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Path to the edge-list file.
    pub path: PathBuf,

    /// Override name for the dataset (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Synthetic graph arguments.
#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// RNG seed; a random seed is drawn and logged when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Smallest node count that may be drawn.
    #[arg(long, default_value_t = DEFAULT_MIN_NODES)]
    pub min_nodes: usize,

    /// Largest node count that may be drawn.
    #[arg(long, default_value_t = DEFAULT_MAX_NODES)]
    pub max_nodes: usize,
}

/// Engine names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Kruskal's edge-centric engine.
    Kruskal,
    /// Prim's vertex-centric engine.
    Prim,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Kruskal => Self::Kruskal,
            AlgorithmArg::Prim => Self::Prim,
        }
    }
}

/// Formats the result can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The full result, including the trace, as JSON.
    Json,
    /// A few human-readable lines.
    Summary,
}

/// Errors surfaced while executing CLI commands.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CliError {
    /// The edge-list file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge-list file could not be parsed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// The synthetic generator rejected its configuration.
    #[error(transparent)]
    Synthetic(#[from] SyntheticError),
    /// The engines rejected the plan or the input.
    #[error(transparent)]
    Core(#[from] MstError),
}

impl CliError {
    /// Stable machine-readable code for logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::EdgeList(err) => err.code().as_str(),
            Self::Synthetic(err) => err.code().as_str(),
            Self::Core(err) => err.code().as_str(),
        }
    }
}

/// Outcome of a `run` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the dataset or generated graph.
    pub data_source: String,
    /// Distinct nodes in the input graph.
    pub node_count: usize,
    /// Edges in the input graph.
    pub edge_count: usize,
    /// Result of the bounded run.
    pub result: MstResult,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the graph or running the plan fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use mstrace_cli::cli::{
/// #     AlgorithmArg, Cli, Command, GenerateArgs, OutputFormat, RunCommand, RunSource, run_cli,
/// # };
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         algorithm: AlgorithmArg::Prim,
///         cap: 10_000,
///         format: OutputFormat::Json,
///         source: RunSource::Generate(GenerateArgs {
///             seed: Some(7),
///             min_nodes: 8,
///             max_nodes: 8,
///         }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.node_count, 8);
/// assert_eq!(summary.result.mst_edges().len(), 7);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(algorithm = field::Empty, cap = command.cap, source = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let algorithm = Algorithm::from(command.algorithm);
    let plan = MstPlanBuilder::new()
        .with_algorithm(algorithm)
        .with_visualization_cap(command.cap)
        .build()?;

    let span = Span::current();
    span.record("algorithm", field::display(algorithm));

    let (data_source, node_count, edges) = match command.source {
        RunSource::File(args) => {
            span.record("source", field::display("file"));
            let list = load_file(args)?;
            let name = list.name().to_owned();
            let nodes = list.node_count();
            (name, nodes, list.into_edges())
        }
        RunSource::Generate(args) => {
            span.record("source", field::display("generate"));
            let (name, graph) = generate_graph(&args)?;
            let nodes = graph.node_count();
            (name, nodes, graph.into_edges())
        }
    };

    let result = plan.run(&edges)?;
    if let Some(gap) = result.disconnected() {
        warn!(
            data_source = data_source.as_str(),
            missing_edges = gap.missing_edges(),
            "{gap}"
        );
    }
    info!(
        data_source = data_source.as_str(),
        edges = edges.len(),
        total_weight = result.total_weight(),
        hidden_edges = result.hidden_edges(),
        "command completed"
    );
    Ok(ExecutionSummary {
        data_source,
        node_count,
        edge_count: edges.len(),
        result,
    })
}

#[instrument(
    name = "cli.load_file",
    err,
    skip(args),
    fields(path = field::Empty, override_name = field::Empty),
)]
pub(super) fn load_file(args: FileArgs) -> Result<EdgeList, CliError> {
    let FileArgs { path, name } = args;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );
    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_edge_list_reader(&path)?;
    Ok(EdgeList::try_from_reader(chosen_name, reader)?)
}

#[instrument(name = "cli.open_edge_list_reader", err, fields(path = field::Empty))]
pub(super) fn open_edge_list_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

#[instrument(name = "cli.generate", err, skip(args), fields(seed = field::Empty))]
pub(super) fn generate_graph(args: &GenerateArgs) -> Result<(String, SyntheticGraph), CliError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    Span::current().record("seed", seed);
    let graph = SyntheticGraph::generate(&SyntheticConfig {
        min_nodes: args.min_nodes,
        max_nodes: args.max_nodes,
        seed,
    })?;
    info!(
        seed,
        nodes = graph.node_count(),
        edges = graph.edges().len(),
        "generated synthetic graph"
    );
    Ok((format!("synthetic-{seed}"), graph))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "edge_list".to_owned(), ToOwned::to_owned)
}

