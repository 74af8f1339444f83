//! Error types for loading graphs and for bounds-checked graph operations.
//!
//! The bulk loader never surfaces [`GraphError::NodeOutOfRange`] for individual records; such
//! records are dropped. Only the inability to obtain input, or a header that cannot describe a
//! graph at all, aborts a load.

use std::io;

use thiserror::Error;

use crate::{edge::NumEdges, node::Node};

/// Errors of operations that explicitly request bounds checking on a [`Graph`](crate::repr::Graph).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node id outside `0..node_count` was passed
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange { node: Node, node_count: Node },

    /// The requested number of nodes cannot be represented (`Node::MAX` is reserved)
    #[error("cannot allocate a graph with {0} nodes")]
    TooManyNodes(u64),
}

/// Errors returned while loading a graph from its text encoding.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input buffer could not be obtained or contains no data
    #[error("graph input is empty or unreadable")]
    EmptyOrUnreadable {
        #[source]
        source: Option<io::Error>,
    },

    /// The header cannot describe a graph (for instance a negative node count)
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// Only reported when strict edge counting was requested
    #[error("header declares {declared} edges but {parsed} edge records were parsed")]
    EdgeCountMismatch { declared: NumEdges, parsed: NumEdges },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl LoadError {
    /// Shorthand for an empty input without underlying io-error
    pub(crate) fn empty() -> Self {
        LoadError::EmptyOrUnreadable { source: None }
    }
}

impl From<io::Error> for LoadError {
    fn from(source: io::Error) -> Self {
        LoadError::EmptyOrUnreadable {
            source: Some(source),
        }
    }
}
