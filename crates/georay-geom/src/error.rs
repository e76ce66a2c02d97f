//! Error types for validated constructors.

use thiserror::Error;

/// Errors returned by the `try_*` constructors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// Sphere radius is zero, negative or not finite.
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// An ellipsoid radius is zero, negative or not finite.
    #[error("ellipsoid radii must be positive and finite, got ({0}, {1}, {2})")]
    InvalidRadii(f64, f64, f64),

    /// Plane normal is zero or not finite.
    #[error("plane normal must be finite and non-zero")]
    DegenerateNormal,

    /// A coordinate is NaN or infinite.
    #[error("{0} has a non-finite coordinate")]
    NonFinite(&'static str),

    /// Box minimum exceeds its maximum.
    #[error("box min exceeds max on the {0} axis")]
    InvertedBounds(char),
}

/// Result type for validated constructors.
pub type Result<T> = std::result::Result<T, GeomError>;
