//! Layout configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Parameters of the hierarchical layout.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal space allotted to the root's subtree. Default: 2.5.
    pub width: Option<f64>,
    /// Gap between hierarchy levels. Default: 0.3.
    pub vertical_gap: Option<f64>,
    /// Vertical coordinate of the root. Default: 0.0.
    pub root_vertical: Option<f64>,
    /// Horizontal coordinate of the root. Default: 0.5.
    pub root_horizontal: Option<f64>,
    /// Extra vertical stagger per sibling rank. Default: 0.0, or 0.04 when
    /// labels are shown.
    pub sibling_y_offset: Option<f64>,
}

impl LayoutConfig {
    pub fn effective_width(&self) -> f64 {
        self.width.unwrap_or(constants::DEFAULT_LAYOUT_WIDTH)
    }

    pub fn effective_vertical_gap(&self) -> f64 {
        self.vertical_gap.unwrap_or(constants::DEFAULT_VERTICAL_GAP)
    }

    pub fn effective_root_vertical(&self) -> f64 {
        self.root_vertical.unwrap_or(constants::DEFAULT_ROOT_VERTICAL)
    }

    pub fn effective_root_horizontal(&self) -> f64 {
        self.root_horizontal
            .unwrap_or(constants::DEFAULT_ROOT_HORIZONTAL)
    }

    /// Sibling stagger, falling back to the label-mode spacing when labels
    /// are shown and no explicit value is set.
    pub fn effective_sibling_y_offset(&self, show_labels: bool) -> f64 {
        match self.sibling_y_offset {
            Some(offset) => offset,
            None if show_labels => constants::LABEL_SIBLING_Y_OFFSET,
            None => 0.0,
        }
    }
}
