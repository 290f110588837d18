//! IvrErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to provide a structured error code
/// string for CLI and JSON consumers.
pub trait IvrErrorCode {
    /// Returns the error code string (e.g., "INVALID_GRAPH").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_GRAPH: &str = "INVALID_GRAPH";
pub const LOAD_ERROR: &str = "LOAD_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_CONFIGURATION: &str = "INVALID_CONFIGURATION";
