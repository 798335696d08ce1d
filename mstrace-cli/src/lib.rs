//! Support library for the mstrace CLI binary.
//!
//! Exposes the command pipeline and logging setup so integration tests can
//! drive a run end to end without spawning a subprocess.

pub mod cli;
pub mod logging;
