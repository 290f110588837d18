//! Monte Carlo frustration estimation.
//!
//! Each trial walks the menu graph from the start menu, picking options
//! uniformly and dropping out with a per-step probability, until it reaches
//! an end menu (success), a menu without options, or drops out (frustrated).

pub mod dropout;
pub mod monte_carlo;
pub mod rng;
pub mod types;

pub use dropout::DropoutModel;
pub use monte_carlo::SimulationEngine;
pub use rng::{SimRng, TrialRng};
pub use types::{FrustrationStats, SimulationParams, TrialCounts};
