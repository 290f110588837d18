//! Menu graph construction errors.

use super::error_code::{self, IvrErrorCode};

/// Contract violations detected while constructing a `MenuGraph`.
/// Construction fails as a whole; no partial graph is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("invalid graph: expected exactly one start node, found {count}")]
    StartNodeCount { count: usize },

    #[error("invalid graph: node {node} has edge to {target}, but only {node_count} nodes exist")]
    EdgeOutOfRange {
        node: usize,
        target: usize,
        node_count: usize,
    },
}

impl IvrErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_GRAPH
    }
}
