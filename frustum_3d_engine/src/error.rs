//! Error types for the Frustum3D engine
//!
//! The camera and frustum math never fail. Errors only come from the
//! surrounding plumbing: configuration validation and model lookups.

use std::fmt;

/// Result type for Frustum3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Frustum3D engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Graphics configuration rejected by validation
    InvalidConfig(String),

    /// Unknown or stale model key, or other invalid scene resource
    InvalidResource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
