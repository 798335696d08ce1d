//! Edge-list provider reading whitespace-separated `source target weight`
//! lines into [`Edge`] values.
//!
//! Edge identifiers are assigned sequentially from zero in file order, so the
//! visualised prefix of a dataset is always the id range `0..cap`.

use std::collections::HashSet;
use std::fmt;
use std::io::{self, BufRead};

use mstrace_core::{Edge, EdgeId, NodeId};
use thiserror::Error;
use tracing::debug;

/// 2^63, the first value past the range of [`NodeId`].
const NODE_ID_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Why a single line could not be turned into an edge.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LineFault {
    /// Fewer than three whitespace-separated columns were present.
    MissingColumns {
        /// Number of columns found on the line.
        found: usize,
    },
    /// An endpoint was neither an integer nor an integral float.
    InvalidNodeId {
        /// The offending token.
        token: String,
    },
    /// The weight did not parse as a finite number.
    InvalidWeight {
        /// The offending token.
        token: String,
    },
}

impl fmt::Display for LineFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumns { found } => {
                write!(f, "expected `source target weight`, found {found} column(s)")
            }
            Self::InvalidNodeId { token } => write!(f, "`{token}` is not an integral node id"),
            Self::InvalidWeight { token } => write!(f, "`{token}` is not a finite weight"),
        }
    }
}

/// Errors raised while reading an edge list.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// A non-blank line could not be parsed.
    #[error("line {line}: {reason}")]
    MalformedLine {
        /// One-based line number within the input.
        line: usize,
        /// What was wrong with the line.
        reason: LineFault,
    },
    /// Reading from the underlying source failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Stable codes describing [`EdgeListError`] variants.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EdgeListErrorCode {
    /// A non-blank line could not be parsed.
    MalformedLine,
    /// Reading from the underlying source failed.
    Io,
}

impl EdgeListErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MalformedLine => "EDGELIST_MALFORMED_LINE",
            Self::Io => "EDGELIST_IO",
        }
    }
}

impl fmt::Display for EdgeListErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EdgeListError {
    /// Retrieve the stable [`EdgeListErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> EdgeListErrorCode {
        match self {
            Self::MalformedLine { .. } => EdgeListErrorCode::MalformedLine,
            Self::Io(_) => EdgeListErrorCode::Io,
        }
    }
}

/// An in-memory weighted edge list.
#[derive(Clone, Debug)]
pub struct EdgeList {
    name: String,
    edges: Vec<Edge>,
    node_count: usize,
}

impl EdgeList {
    /// Wraps already-built edges.
    ///
    /// # Examples
    /// ```
    /// use mstrace_core::Edge;
    /// use mstrace_providers_edgelist::EdgeList;
    ///
    /// let list = EdgeList::new("demo", vec![Edge::new(0, 1, 2, 1.0)]);
    /// assert_eq!(list.node_count(), 2);
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, edges: Vec<Edge>) -> Self {
        let node_count = edges
            .iter()
            .flat_map(|edge| [edge.source(), edge.target()])
            .collect::<HashSet<_>>()
            .len();
        Self {
            name: name.into(),
            edges,
            node_count,
        }
    }

    /// Parses an edge list from a buffered reader.
    ///
    /// Blank lines are skipped and columns past the third are ignored.
    ///
    /// # Errors
    /// Returns [`EdgeListError::MalformedLine`] for the first line that cannot
    /// be parsed and [`EdgeListError::Io`] if reading fails.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use mstrace_providers_edgelist::EdgeList;
    ///
    /// let list = EdgeList::try_from_reader("demo", Cursor::new("1 2 0.5\n\n2.0 3 1 extra\n"))?;
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.edges()[1].source(), 2);
    /// # Ok::<(), mstrace_providers_edgelist::EdgeListError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, EdgeListError> {
        let mut edges = Vec::new();
        let mut next_id: EdgeId = 0;
        let mut lines = 0_usize;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            lines = index + 1;
            let Some(parsed) = parse_line(&line, next_id)
                .map_err(|reason| EdgeListError::MalformedLine { line: lines, reason })?
            else {
                continue;
            };
            edges.push(parsed);
            next_id += 1;
        }
        let list = Self::new(name, edges);
        debug!(
            name = list.name.as_str(),
            lines,
            edges = list.len(),
            nodes = list.node_count,
            "edge list parsed"
        );
        Ok(list)
    }

    /// Name of the dataset.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }

    /// Edges in file order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Whether the list holds no edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Number of distinct node ids across all endpoints.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Splits the list into the first `cap` edges and the remainder.
    ///
    /// A cap past the end yields an empty remainder.
    #[must_use]
    pub fn split_at(&self, cap: usize) -> (&[Edge], &[Edge]) {
        self.edges.split_at(cap.min(self.edges.len()))
    }

    /// Consumes the list, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

fn parse_line(line: &str, id: EdgeId) -> Result<Option<Edge>, LineFault> {
    let mut columns = line.split_whitespace();
    let (Some(source), Some(target), Some(weight)) =
        (columns.next(), columns.next(), columns.next())
    else {
        let found = line.split_whitespace().count();
        return if found == 0 {
            Ok(None)
        } else {
            Err(LineFault::MissingColumns { found })
        };
    };
    let source = parse_node_id(source)?;
    let target = parse_node_id(target)?;
    let weight = weight
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| LineFault::InvalidWeight {
            token: weight.to_owned(),
        })?;
    Ok(Some(Edge::new(id, source, target, weight)))
}

fn parse_node_id(token: &str) -> Result<NodeId, LineFault> {
    if let Ok(id) = token.parse::<NodeId>() {
        return Ok(id);
    }
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.fract() == 0.0 && (-NODE_ID_BOUND..NODE_ID_BOUND).contains(value))
        .map(|value| value as NodeId)
        .ok_or_else(|| LineFault::InvalidNodeId {
            token: token.to_owned(),
        })
}
