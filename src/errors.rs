//! Core error types for the metrics engine.
//!
//! Degenerate data (zero income, empty record lists, unknown tax country,
//! unknown frequency) never surfaces as an error: those cases fall back to
//! explicit zero-valued structures or permissive defaults so a UI can keep
//! rendering partial state. The only fatal condition is a configuration
//! mistake in custom-metric registration.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the metrics engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Metrics configuration error: {0}")]
    Metrics(#[from] MetricsError),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors raised while registering or computing custom metrics.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// The dependency graph of registered metrics contains a cycle.
    /// This is a programming mistake, not bad data, so it is fatal at
    /// registration time.
    #[error("Circular dependency detected while registering metric '{0}'")]
    CircularDependency(String),

    /// A metric with the same id is already registered.
    #[error("Metric '{0}' is already registered")]
    DuplicateMetric(String),

    /// A custom metric's compute function failed. Callers of
    /// `compute_all` never see this: the failure is logged and the
    /// metric omitted from the result.
    #[error("Metric computation failed: {0}")]
    Computation(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Metrics(MetricsError::Computation(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
