#![warn(missing_docs)]

//! Real root finders for low-degree polynomials.
//!
//! Each degree has a module with a `discriminant` and a `real_roots` function.
//! The solvers pick between algebraically equivalent formulas so that they
//! never subtract nearly equal quantities, and snap near-cancelling sums to
//! exactly zero (see [`georay_math::stable_sum`]).
//!
//! - [`quadratic`] - stable quadratic formula with degenerate-coefficient cases
//! - [`cubic`] - closed form for one real root, trigonometric form for three
//! - [`quartic`] - Ferrari or Neumark factorization chosen by coefficient signs
//!
//! Roots are returned in a stack allocated [`Roots`] list, ascending.
//!
//! # Example
//!
//! ```
//! use georay_poly::quadratic;
//!
//! let roots = quadratic::real_roots(1.0, 0.0, -4.0);
//! assert_eq!(roots.as_slice(), &[-2.0, 2.0]);
//! ```

use arrayvec::ArrayVec;

pub mod cubic;
pub mod quadratic;
pub mod quartic;

pub use quartic::{QuarticBranch, SignPattern};

/// Real roots of a polynomial of degree at most four, in ascending order.
pub type Roots = ArrayVec<f64, 4>;

/// Collect a fixed list of roots.
#[inline]
pub(crate) fn roots<const N: usize>(values: [f64; N]) -> Roots {
    values.into_iter().collect()
}

/// Real cube root that keeps the sign of `x`.
#[inline]
pub(crate) fn signed_cbrt(x: f64) -> f64 {
    if x < 0.0 {
        -(-x).powf(1.0 / 3.0)
    } else {
        x.powf(1.0 / 3.0)
    }
}
