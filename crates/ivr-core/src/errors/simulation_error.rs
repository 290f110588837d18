//! Simulation engine errors.

use super::error_code::{self, IvrErrorCode};

/// Errors raised when a simulation is set up with unusable parameters.
/// The engine fails fast instead of producing degenerate statistics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid configuration for {field}: {message}")]
    InvalidConfiguration { field: String, message: String },
}

impl SimulationError {
    /// Shorthand for an `InvalidConfiguration` on `field`.
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl IvrErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_CONFIGURATION
    }
}
