//! Per-step dropout probability.

use ivr_core::constants::{BREADTH_FLOOR_WEIGHT, BREADTH_LOG_WEIGHT};

/// How likely a user is to hang up at a menu, given the option they chose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropoutModel {
    /// Same probability at every step, whichever option is chosen.
    Constant { base: f64 },
    /// Later options cost more: the user listened through more of the menu.
    /// `p = 1.5 * base * ln(k + 1) + 0.25 * base` for option index `k`.
    BreadthSensitive { base: f64 },
}

impl DropoutModel {
    pub fn new(base: f64, breadth_sensitive: bool) -> Self {
        if breadth_sensitive {
            Self::BreadthSensitive { base }
        } else {
            Self::Constant { base }
        }
    }

    pub fn base(&self) -> f64 {
        match *self {
            Self::Constant { base } | Self::BreadthSensitive { base } => base,
        }
    }

    /// Dropout probability after choosing option `k` (zero-based).
    /// Not clamped; callers validate the range up front.
    pub fn probability(&self, k: usize) -> f64 {
        match *self {
            Self::Constant { base } => base,
            Self::BreadthSensitive { base } => {
                BREADTH_LOG_WEIGHT * base * ((k + 1) as f64).ln() + BREADTH_FLOOR_WEIGHT * base
            }
        }
    }

    /// Largest probability any step can see on a menu with `max_out_degree`
    /// options. Zero when no menu has options.
    pub fn max_probability(&self, max_out_degree: usize) -> f64 {
        match max_out_degree {
            0 => 0.0,
            n => self.probability(n - 1),
        }
    }
}
