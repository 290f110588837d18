//! Menu graph: ordered menu nodes, directed option edges, a unique start.

pub mod diagnostics;
pub mod menu_graph;

pub use diagnostics::{diagnose, GraphDiagnostics};
pub use menu_graph::{MenuGraph, MenuNode, NodeId};
