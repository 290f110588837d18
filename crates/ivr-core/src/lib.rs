//! # ivr-core
//!
//! Foundation crate for the IVR menu simulator.
//! Defines the menu graph model, the JSON loader, errors, config, tracing,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod graph;
pub mod loader;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::IvrConfig;
pub use errors::{ConfigError, GraphError, IvrErrorCode, LoadError, SimulationError};
pub use graph::{GraphDiagnostics, MenuGraph, MenuNode, NodeId};
