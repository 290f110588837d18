//! Monte Carlo random walks over a menu graph.
//!
//! Trials are independent. With `threads > 1` the trial budget is split into
//! chunks, each with its own RNG forked from the run seed, and the counters
//! are summed. Results are reproducible for a fixed `(seed, threads)`.

use ivr_core::errors::SimulationError;
use ivr_core::graph::{MenuGraph, NodeId};
use rayon::prelude::*;

use super::dropout::DropoutModel;
use super::rng::{SimRng, TrialRng};
use super::types::{FrustrationStats, SimulationParams, TrialCounts};

/// Monte Carlo frustration estimator bound to one graph.
#[derive(Debug, Clone)]
pub struct SimulationEngine<'g> {
    graph: &'g MenuGraph,
    params: SimulationParams,
    dropout: DropoutModel,
}

impl<'g> SimulationEngine<'g> {
    /// Validate `params` against `graph` and build the engine.
    ///
    /// Rejects a zero iteration count, zero threads, and any dropout rate
    /// that could produce a per-step probability outside `[0, 1]`. In
    /// breadth-sensitive mode the bound is checked against the widest menu
    /// a walk can choose from; end menus and unreachable menus don't count.
    pub fn new(graph: &'g MenuGraph, params: SimulationParams) -> Result<Self, SimulationError> {
        if params.num_iterations == 0 {
            return Err(SimulationError::invalid(
                "num_iterations",
                "must be greater than 0",
            ));
        }
        if params.threads == 0 {
            return Err(SimulationError::invalid("threads", "must be greater than 0"));
        }
        let base = params.base_dropout_rate;
        if !base.is_finite() || !(0.0..=1.0).contains(&base) {
            return Err(SimulationError::invalid(
                "base_dropout_rate",
                format!("{base} is not a probability"),
            ));
        }

        let dropout = DropoutModel::new(base, params.breadth_sensitive);
        let widest = graph.max_walk_out_degree();
        let worst = dropout.max_probability(widest);
        if worst > 1.0 {
            return Err(SimulationError::invalid(
                "base_dropout_rate",
                format!(
                    "{base} gives dropout probability {worst:.4} on a menu with {widest} options"
                ),
            ));
        }

        Ok(Self {
            graph,
            params,
            dropout,
        })
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn dropout(&self) -> DropoutModel {
        self.dropout
    }

    /// Run a full simulation with an RNG seeded from the configured seed
    /// (or a fresh one), sequentially or across `threads` chunks.
    pub fn run(&self) -> FrustrationStats {
        let seed = self.params.seed.unwrap_or_else(rand::random);
        let _span = tracing::info_span!(
            "simulation",
            iterations = self.params.num_iterations,
            breadth = self.params.breadth_sensitive,
            threads = self.params.threads,
            seed
        )
        .entered();

        let mut rng = SimRng::new(seed);
        let counts = if self.params.threads > 1 {
            self.run_chunks(&mut rng)
        } else {
            self.run_trials(self.params.num_iterations, &mut rng)
        };

        let stats = FrustrationStats::from_counts(counts, seed);
        tracing::info!(
            average_frustration = stats.average_frustration,
            frustrated = stats.frustrated_count,
            "simulation complete"
        );
        stats
    }

    /// Run all trials sequentially with a caller-supplied RNG.
    /// The reported seed is 0 since the RNG's origin is unknown.
    pub fn run_with_rng<R: TrialRng>(&self, rng: &mut R) -> FrustrationStats {
        let counts = self.run_trials(self.params.num_iterations, rng);
        FrustrationStats::from_counts(counts, 0)
    }

    /// Walk one simulated user from the start menu.
    /// Returns the menu they gave up on, or `None` if they reached an end.
    ///
    /// A cycle with zero dropout and no way out never terminates.
    pub fn simulate_trial<R: TrialRng>(&self, rng: &mut R) -> Option<NodeId> {
        let nodes = self.graph.nodes();
        let mut current = self.graph.start_index();
        loop {
            let menu = &nodes[current];
            if menu.is_end {
                return None;
            }
            if menu.next.is_empty() {
                return Some(current);
            }
            let k = rng.choose_index(menu.next.len());
            if rng.bernoulli(self.dropout.probability(k)) {
                return Some(current);
            }
            current = menu.next[k];
        }
    }

    fn run_trials<R: TrialRng>(&self, trials: u64, rng: &mut R) -> TrialCounts {
        let mut counts = TrialCounts::new(self.graph.node_count());
        for _ in 0..trials {
            counts.record(self.simulate_trial(rng));
        }
        counts
    }

    fn run_chunks(&self, rng: &mut SimRng) -> TrialCounts {
        let chunks = self.params.threads as u64;
        let per_chunk = self.params.num_iterations / chunks;
        let remainder = self.params.num_iterations % chunks;

        let work: Vec<(u64, SimRng)> = (0..chunks)
            .map(|i| (per_chunk + u64::from(i < remainder), rng.fork()))
            .collect();

        work.into_par_iter()
            .enumerate()
            .map(|(chunk, (trials, mut chunk_rng))| {
                tracing::debug!(chunk, trials, "running trial chunk");
                self.run_trials(trials, &mut chunk_rng)
            })
            .reduce(|| TrialCounts::new(self.graph.node_count()), TrialCounts::merge)
    }
}
