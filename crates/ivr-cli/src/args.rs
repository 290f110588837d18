use std::path::PathBuf;

use clap::Parser;
use ivr_core::config::CliOverrides;

/// Estimate where callers give up in an IVR menu tree.
#[derive(Debug, Parser)]
#[command(name = "ivr-sim", version, about)]
pub struct Cli {
    /// The input JSON file that contains the menus.
    #[arg(long = "inputfile", value_name = "FILE")]
    pub input_file: PathBuf,

    /// Account for breadth: later options carry a higher dropout rate.
    #[arg(long)]
    pub breadth: bool,

    /// Show menu labels instead of frustration (skips the simulation).
    #[arg(long)]
    pub labels: bool,

    /// Number of simulated users.
    #[arg(long = "iter", value_name = "N")]
    pub iterations: Option<u64>,

    /// Per-step dropout rate.
    #[arg(long, value_name = "RATE")]
    pub dropout: Option<f64>,

    /// RNG seed for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Split the trials across this many worker chunks.
    #[arg(long)]
    pub threads: Option<usize>,

    /// Config file. Defaults to ./ivr.toml when present.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the full report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Flags that override file and environment configuration.
    /// Boolean switches only override when set.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            num_iterations: self.iterations,
            base_dropout_rate: self.dropout,
            breadth_sensitive: self.breadth.then_some(true),
            seed: self.seed,
            threads: self.threads,
            show_labels: self.labels.then_some(true),
        }
    }
}
