//! Menu description loading errors.

use super::error_code::{self, IvrErrorCode};
use super::GraphError;

/// Errors that can occur while turning a JSON menu description into a graph.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read menu file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed menu description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate menu id '{id}' at positions {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    #[error("menu '{from}' references unknown menu id '{id}'")]
    UnknownReference { from: String, id: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl IvrErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            _ => error_code::LOAD_ERROR,
        }
    }
}
