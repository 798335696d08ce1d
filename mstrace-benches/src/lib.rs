//! Benchmark support crate for mstrace.
//!
//! Provides graph generators and parameter types used by the Criterion
//! benchmarks for both engines and the bounded reconciler.

pub mod error;
pub mod graph;
pub mod params;
