//! Error types for synthetic graph generation.

use std::fmt;

/// Errors raised when a [`crate::SyntheticConfig`] cannot produce a graph.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SyntheticError {
    /// A connected graph with cycles needs at least two nodes.
    #[error("minimum node count must be at least 2 (got {min_nodes})")]
    InvalidMinNodes {
        /// Configured minimum node count.
        min_nodes: usize,
    },
    /// The node count range was empty.
    #[error("invalid node count range: min={min_nodes}, max={max_nodes}")]
    InvertedRange {
        /// Configured minimum node count.
        min_nodes: usize,
        /// Configured maximum node count.
        max_nodes: usize,
    },
    /// Node ids `1..=max_nodes` would not fit the node id type.
    #[error("maximum node count {max_nodes} exceeds the node id range")]
    TooManyNodes {
        /// Configured maximum node count.
        max_nodes: usize,
    },
}

/// Stable codes describing [`SyntheticError`] variants.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SyntheticErrorCode {
    /// A connected graph with cycles needs at least two nodes.
    InvalidMinNodes,
    /// The node count range was empty.
    InvertedRange,
    /// Node ids would not fit the node id type.
    TooManyNodes,
}

impl SyntheticErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidMinNodes => "SYNTHETIC_INVALID_MIN_NODES",
            Self::InvertedRange => "SYNTHETIC_INVERTED_RANGE",
            Self::TooManyNodes => "SYNTHETIC_TOO_MANY_NODES",
        }
    }
}

impl fmt::Display for SyntheticErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SyntheticError {
    /// Retrieve the stable [`SyntheticErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> SyntheticErrorCode {
        match self {
            Self::InvalidMinNodes { .. } => SyntheticErrorCode::InvalidMinNodes,
            Self::InvertedRange { .. } => SyntheticErrorCode::InvertedRange,
            Self::TooManyNodes { .. } => SyntheticErrorCode::TooManyNodes,
        }
    }
}
