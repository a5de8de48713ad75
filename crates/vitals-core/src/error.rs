//! Shared error type across vitals crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, VitalsError>;

/// Unified error type used by core, server, and agent.
#[derive(Debug, Error)]
pub enum VitalsError {
    /// Metric kind outside {gauge, counter}.
    #[error("unknown metric type")]
    UnknownMetricType,
    /// Value fails the kind-specific numeric parse, or a previously stored
    /// counter value is corrupt.
    #[error("invalid metric value: {0}")]
    InvalidValue(String),
    /// Query for an absent metric name.
    #[error("metric not found")]
    NotFound,
    /// Anything unexpected (transport failures, bad responses).
    #[error("internal: {0}")]
    Internal(String),
}
