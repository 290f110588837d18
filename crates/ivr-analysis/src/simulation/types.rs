//! Parameters, raw counters and results of a simulation run.

use ivr_core::config::SimulationConfig;
use ivr_core::constants;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

/// Parameters of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Number of simulated users.
    pub num_iterations: u64,
    /// Per-step dropout probability before the breadth adjustment.
    pub base_dropout_rate: f64,
    /// Scale dropout with the position of the chosen option.
    pub breadth_sensitive: bool,
    /// RNG seed. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
    /// Number of independent trial chunks run on the rayon pool.
    pub threads: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_iterations: constants::DEFAULT_NUM_ITERATIONS,
            base_dropout_rate: constants::DEFAULT_BASE_DROPOUT_RATE,
            breadth_sensitive: false,
            seed: None,
            threads: 1,
        }
    }
}

impl From<&SimulationConfig> for SimulationParams {
    fn from(config: &SimulationConfig) -> Self {
        Self {
            num_iterations: config.effective_num_iterations(),
            base_dropout_rate: config.effective_base_dropout_rate(),
            breadth_sensitive: config.effective_breadth_sensitive(),
            seed: config.seed,
            threads: config.effective_threads(),
        }
    }
}

/// Raw frustration counters, mergeable across workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialCounts {
    pub trials: u64,
    pub frustrated: u64,
    pub per_node: Vec<u64>,
}

impl TrialCounts {
    pub fn new(node_count: usize) -> Self {
        Self {
            trials: 0,
            frustrated: 0,
            per_node: vec![0; node_count],
        }
    }

    /// Record one trial. `frustrated_at` is the menu the user gave up on.
    pub fn record(&mut self, frustrated_at: Option<usize>) {
        self.trials += 1;
        if let Some(node) = frustrated_at {
            self.frustrated += 1;
            self.per_node[node] += 1;
        }
    }

    /// Sum two sets of counters over the same graph.
    pub fn merge(mut self, other: Self) -> Self {
        self.trials += other.trials;
        self.frustrated += other.frustrated;
        for (mine, theirs) in self.per_node.iter_mut().zip(other.per_node) {
            *mine += theirs;
        }
        self
    }
}

/// Result of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrustrationStats {
    /// Fraction of trials that ended frustrated.
    pub average_frustration: f64,
    /// Fraction of all trials that ended frustrated at each menu, indexed
    /// like the graph's nodes. Sums to `average_frustration`.
    pub per_node_frustration: Vec<f64>,
    pub num_iterations: u64,
    pub frustrated_count: u64,
    pub per_node_counts: Vec<u64>,
    /// Seed the run actually used.
    pub seed: u64,
}

impl FrustrationStats {
    pub fn from_counts(counts: TrialCounts, seed: u64) -> Self {
        let n = counts.trials.max(1) as f64;
        Self {
            average_frustration: counts.frustrated as f64 / n,
            per_node_frustration: counts.per_node.iter().map(|&c| c as f64 / n).collect(),
            num_iterations: counts.trials,
            frustrated_count: counts.frustrated,
            per_node_counts: counts.per_node,
            seed,
        }
    }

    /// Fraction of trials that reached an end menu.
    pub fn success_rate(&self) -> f64 {
        1.0 - self.average_frustration
    }

    /// Binomial standard error of `average_frustration`.
    pub fn standard_error(&self) -> f64 {
        let p = self.average_frustration;
        (p * (1.0 - p) / self.num_iterations.max(1) as f64).sqrt()
    }

    /// Normal-approximation confidence interval for the average, clipped to
    /// `[0, 1]`. `None` unless `0 < level < 1`.
    pub fn confidence_interval(&self, level: f64) -> Option<(f64, f64)> {
        if !(level > 0.0 && level < 1.0) {
            return None;
        }
        let z = Normal::new(0.0, 1.0).ok()?.inverse_cdf(0.5 + level / 2.0);
        let half_width = z * self.standard_error();
        let p = self.average_frustration;
        Some(((p - half_width).max(0.0), (p + half_width).min(1.0)))
    }
}
