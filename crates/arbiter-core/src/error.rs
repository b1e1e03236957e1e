//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Errors are produced synchronously at the point of detection; the core
/// never returns partial or best-effort results.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A continuous numeric parameter was NaN or infinite.
    #[error("invalid parameter `{name}`: {value} is not finite")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The non-finite value that was supplied.
        value: f64,
    },

    /// A simulation was requested with zero iterations.
    #[error("iterations must be at least 1")]
    InvalidIterations,
}
