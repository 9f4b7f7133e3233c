//! Error types shared by the resource search crates.

use thiserror::Error;

/// Errors raised while loading settings or validating adapter declarations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Settings could not be loaded from file or environment
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings loaded but hold out-of-range values
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// A kind's searchable/boosted field declaration is malformed
    #[error("Invalid field declaration: {0}")]
    InvalidDeclaration(String),
}
