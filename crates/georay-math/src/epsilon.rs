//! Tolerance constants used by the solvers and intersection tests.
//!
//! Each constant is `1e-N`. Which one guards which comparison is part of
//! the documented contract of the operation that uses it.

/// 1e-1. Centre tolerance (squared) for projecting points onto an ellipsoid.
pub const EPSILON1: f64 = 1e-1;

/// 1e-6. Triangle determinant, segment/plane parallelism, tangent rays.
pub const EPSILON6: f64 = 1e-6;

/// 1e-12. Newton convergence and quartic candidate classification.
pub const EPSILON12: f64 = 1e-12;

/// 1e-14. Quadratic cancellation and near-zero resolvent roots.
pub const EPSILON14: f64 = 1e-14;

/// 1e-15. Ray/plane parallelism and negligible leading coefficients.
pub const EPSILON15: f64 = 1e-15;
