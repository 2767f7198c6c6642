//! Error types for the frustum math library
//!
//! Only the checked (`try_*`) builders produce errors; the unchecked
//! builders preserve the fixed-function contract of propagating inf/NaN
//! silently on degenerate input.

use std::fmt;

/// Result type for frustum math operations
pub type Result<T> = std::result::Result<T, Error>;

/// Frustum math errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Degenerate frustum planes (r = l, t = b, or f = n would divide by zero)
    DegenerateFrustum(String),

    /// Field-of-view parameters outside their valid range
    InvalidFieldOfView(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateFrustum(msg) => write!(f, "Degenerate frustum: {}", msg),
            Error::InvalidFieldOfView(msg) => write!(f, "Invalid field of view: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
