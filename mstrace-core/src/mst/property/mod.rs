//! Property-based tests for the traced MST engines.
//!
//! Checks Kruskal against a sequential oracle, Prim against Kruskal, the
//! decision trace invariants, rerun determinism, and bounded reconciliation
//! across graph shapes with varied weight distributions and node id domains.

mod determinism;
mod equivalence;
mod helpers;
mod oracle;
mod reconciliation;
mod strategies;
mod structural;
