//! Report configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// What the report hands to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Annotate nodes with labels instead of frustration. Default: false.
    pub show_labels: Option<bool>,
    /// Confidence level of the average-frustration interval. Default: 0.95.
    pub confidence_level: Option<f64>,
}

impl ReportConfig {
    pub fn effective_show_labels(&self) -> bool {
        self.show_labels.unwrap_or(false)
    }

    pub fn effective_confidence_level(&self) -> f64 {
        self.confidence_level
            .unwrap_or(constants::DEFAULT_CONFIDENCE_LEVEL)
    }
}
