/// Simulator version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of simulated users.
pub const DEFAULT_NUM_ITERATIONS: u64 = 100_000;

/// Default per-step dropout probability.
pub const DEFAULT_BASE_DROPOUT_RATE: f64 = 0.04;

/// Breadth-sensitive dropout: weight of `ln(k + 1)`.
pub const BREADTH_LOG_WEIGHT: f64 = 1.5;

/// Breadth-sensitive dropout: floor applied at every step.
pub const BREADTH_FLOOR_WEIGHT: f64 = 0.25;

/// Default horizontal space allotted to the root's subtree.
pub const DEFAULT_LAYOUT_WIDTH: f64 = 2.5;

/// Default gap between hierarchy levels.
pub const DEFAULT_VERTICAL_GAP: f64 = 0.3;

/// Default vertical coordinate of the root.
pub const DEFAULT_ROOT_VERTICAL: f64 = 0.0;

/// Default horizontal coordinate of the root.
pub const DEFAULT_ROOT_HORIZONTAL: f64 = 0.5;

/// Sibling stagger used when labels are shown, so long labels don't overlap.
pub const LABEL_SIBLING_Y_OFFSET: f64 = 0.04;

/// Default confidence level for the frustration interval.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Name of the project-level config file.
pub const CONFIG_FILE_NAME: &str = "ivr.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "IVR_LOG";
