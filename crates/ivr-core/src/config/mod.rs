//! Configuration system for the simulator.
//! TOML-based, layered resolution: CLI > env > config file > defaults.

pub mod ivr_config;
pub mod layout_config;
pub mod report_config;
pub mod simulation_config;

pub use ivr_config::{CliOverrides, IvrConfig};
pub use layout_config::LayoutConfig;
pub use report_config::ReportConfig;
pub use simulation_config::SimulationConfig;
