//! Top-level simulator configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{LayoutConfig, ReportConfig, SimulationConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`IVR_*`)
/// 3. Config file (explicit path, or `ivr.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct IvrConfig {
    pub simulation: SimulationConfig,
    pub layout: LayoutConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub num_iterations: Option<u64>,
    pub base_dropout_rate: Option<f64>,
    pub breadth_sensitive: Option<bool>,
    pub seed: Option<u64>,
    pub threads: Option<usize>,
    pub show_labels: Option<bool>,
}

impl IvrConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `config_path` must exist. Without one, `ivr.toml` in
    /// `root` is merged when present.
    pub fn load(
        root: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match config_path {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(constants::CONFIG_FILE_NAME);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    ///
    /// Graph-dependent checks (breadth-sensitive dropout staying below 1)
    /// happen when the simulation engine is built.
    pub fn validate(config: &IvrConfig) -> Result<(), ConfigError> {
        if config.simulation.num_iterations == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "simulation.num_iterations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(rate) = config.simulation.base_dropout_rate {
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::ValidationFailed {
                    field: "simulation.base_dropout_rate".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if config.simulation.threads == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "simulation.threads".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(width) = config.layout.width {
            if !width.is_finite() || width <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "layout.width".to_string(),
                    message: "must be a positive number".to_string(),
                });
            }
        }
        for (field, value) in [
            ("layout.vertical_gap", config.layout.vertical_gap),
            ("layout.root_vertical", config.layout.root_vertical),
            ("layout.root_horizontal", config.layout.root_horizontal),
            ("layout.sibling_y_offset", config.layout.sibling_y_offset),
        ] {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be a finite number".to_string(),
                });
            }
        }
        if let Some(level) = config.report.confidence_level {
            if !(level > 0.0 && level < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "report.confidence_level".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut IvrConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: IvrConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut IvrConfig, other: &IvrConfig) {
        // Simulation
        let (b, o) = (&mut base.simulation, &other.simulation);
        if o.num_iterations.is_some() {
            b.num_iterations = o.num_iterations;
        }
        if o.base_dropout_rate.is_some() {
            b.base_dropout_rate = o.base_dropout_rate;
        }
        if o.breadth_sensitive.is_some() {
            b.breadth_sensitive = o.breadth_sensitive;
        }
        if o.seed.is_some() {
            b.seed = o.seed;
        }
        if o.threads.is_some() {
            b.threads = o.threads;
        }

        // Layout
        let (b, o) = (&mut base.layout, &other.layout);
        if o.width.is_some() {
            b.width = o.width;
        }
        if o.vertical_gap.is_some() {
            b.vertical_gap = o.vertical_gap;
        }
        if o.root_vertical.is_some() {
            b.root_vertical = o.root_vertical;
        }
        if o.root_horizontal.is_some() {
            b.root_horizontal = o.root_horizontal;
        }
        if o.sibling_y_offset.is_some() {
            b.sibling_y_offset = o.sibling_y_offset;
        }

        // Report
        if other.report.show_labels.is_some() {
            base.report.show_labels = other.report.show_labels;
        }
        if other.report.confidence_level.is_some() {
            base.report.confidence_level = other.report.confidence_level;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `IVR_NUM_ITERATIONS`, `IVR_BASE_DROPOUT_RATE`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut IvrConfig) {
        if let Some(v) = env_parse::<u64>("IVR_NUM_ITERATIONS") {
            config.simulation.num_iterations = Some(v);
        }
        if let Some(v) = env_parse::<f64>("IVR_BASE_DROPOUT_RATE") {
            config.simulation.base_dropout_rate = Some(v);
        }
        if let Some(v) = env_parse::<bool>("IVR_BREADTH_SENSITIVE") {
            config.simulation.breadth_sensitive = Some(v);
        }
        if let Some(v) = env_parse::<u64>("IVR_SEED") {
            config.simulation.seed = Some(v);
        }
        if let Some(v) = env_parse::<usize>("IVR_THREADS") {
            config.simulation.threads = Some(v);
        }
        if let Some(v) = env_parse::<bool>("IVR_SHOW_LABELS") {
            config.report.show_labels = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut IvrConfig, cli: &CliOverrides) {
        if let Some(v) = cli.num_iterations {
            config.simulation.num_iterations = Some(v);
        }
        if let Some(v) = cli.base_dropout_rate {
            config.simulation.base_dropout_rate = Some(v);
        }
        if let Some(v) = cli.breadth_sensitive {
            config.simulation.breadth_sensitive = Some(v);
        }
        if let Some(v) = cli.seed {
            config.simulation.seed = Some(v);
        }
        if let Some(v) = cli.threads {
            config.simulation.threads = Some(v);
        }
        if let Some(v) = cli.show_labels {
            config.report.show_labels = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|val| val.parse().ok())
}
