//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the Monte Carlo simulation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of simulated users. Default: 100000.
    pub num_iterations: Option<u64>,
    /// Per-step dropout probability. Default: 0.04.
    pub base_dropout_rate: Option<f64>,
    /// Scale dropout with the ordinal of the chosen option. Default: false.
    pub breadth_sensitive: Option<bool>,
    /// RNG seed. Unset means entropy-seeded.
    pub seed: Option<u64>,
    /// Worker threads for the trial loop. Default: 1.
    pub threads: Option<usize>,
}

impl SimulationConfig {
    /// Returns the effective iteration count, defaulting to 100000.
    pub fn effective_num_iterations(&self) -> u64 {
        self.num_iterations
            .unwrap_or(constants::DEFAULT_NUM_ITERATIONS)
    }

    /// Returns the effective base dropout rate, defaulting to 0.04.
    pub fn effective_base_dropout_rate(&self) -> f64 {
        self.base_dropout_rate
            .unwrap_or(constants::DEFAULT_BASE_DROPOUT_RATE)
    }

    pub fn effective_breadth_sensitive(&self) -> bool {
        self.breadth_sensitive.unwrap_or(false)
    }

    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(1)
    }
}
