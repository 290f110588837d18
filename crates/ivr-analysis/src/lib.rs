//! # ivr-analysis
//!
//! Frustration estimation for IVR menu graphs: a Monte Carlo random-walk
//! simulator with a breadth-sensitive dropout model, the hierarchical layout
//! used to place menus for display, and the report handed to renderers.

pub mod layout;
pub mod pipeline;
pub mod report;
pub mod simulation;

pub use layout::{HierarchicalLayout, Layout, LayoutParams, Position};
pub use pipeline::analyze;
pub use report::{NodeReport, NodeRole, Report};
pub use simulation::{
    DropoutModel, FrustrationStats, SimRng, SimulationEngine, SimulationParams, TrialRng,
};
