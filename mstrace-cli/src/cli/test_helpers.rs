//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_command;
use super::{
    AlgorithmArg, CliError, ExecutionSummary, FileArgs, GenerateArgs, OutputFormat, RunCommand,
    RunSource,
};

/// Four-node cycle with a chord; the MST weighs 6.
pub(super) const CYCLE: &str = "1 2 1\n2 3 2\n3 4 3\n4 1 4\n1 3 5\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_edge_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn file_command(path: PathBuf, algorithm: AlgorithmArg, cap: usize) -> RunCommand {
    RunCommand {
        algorithm,
        cap,
        format: OutputFormat::Json,
        source: RunSource::File(FileArgs { path, name: None }),
    }
}

pub(super) fn generate_command(seed: u64, min_nodes: usize, max_nodes: usize) -> RunCommand {
    RunCommand {
        algorithm: AlgorithmArg::Kruskal,
        cap: 10_000,
        format: OutputFormat::Json,
        source: RunSource::Generate(GenerateArgs {
            seed: Some(seed),
            min_nodes,
            max_nodes,
        }),
    }
}

pub(super) fn run_ok(command: RunCommand) -> ExecutionSummary {
    match run_command(command) {
        Ok(summary) => summary,
        Err(err) => panic!("command must succeed: {err}"),
    }
}

pub(super) fn run_expecting_error(command: RunCommand, panic_msg: &str) -> CliError {
    match run_command(command) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
