//! Error handling for the simulator.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod load_error;
pub mod simulation_error;

pub use config_error::ConfigError;
pub use error_code::IvrErrorCode;
pub use graph_error::GraphError;
pub use load_error::LoadError;
pub use simulation_error::SimulationError;
