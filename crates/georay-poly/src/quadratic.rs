//! Quadratic polynomials `a*x^2 + b*x + c`.

use georay_math::epsilon::EPSILON14;
use georay_math::{sign, stable_sum};

use crate::{roots, Roots};

/// Discriminant `b^2 - 4ac`.
#[inline]
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Real roots of `a*x^2 + b*x + c = 0`, ascending.
///
/// A zero `a` degrades to the linear equation (one root, or none when `b` is
/// also zero). A repeated root is reported twice. When the discriminant is
/// within rounding noise of zero it is treated as exactly zero.
///
/// Coefficients must be finite.
pub fn real_roots(a: f64, b: f64, c: f64) -> Roots {
    debug_assert!(a.is_finite() && b.is_finite() && c.is_finite());

    if a == 0.0 {
        if b == 0.0 {
            return Roots::new();
        }
        return roots([-c / b]);
    }

    if b == 0.0 {
        // a*x^2 + c = 0
        if c == 0.0 {
            return roots([0.0, 0.0]);
        }

        let c_magnitude = c.abs();
        let a_magnitude = a.abs();

        if c_magnitude < a_magnitude && c_magnitude / a_magnitude < EPSILON14 {
            // c is negligible next to a: double root at zero
            return roots([0.0, 0.0]);
        } else if c_magnitude > a_magnitude && a_magnitude / c_magnitude < EPSILON14 {
            // a is negligible next to c: roots run off to infinity
            return Roots::new();
        }

        let ratio = -c / a;
        if ratio < 0.0 {
            return Roots::new();
        }

        let root = ratio.sqrt();
        return roots([-root, root]);
    }

    if c == 0.0 {
        // x * (a*x + b) = 0
        let ratio = -b / a;
        if ratio < 0.0 {
            return roots([ratio, 0.0]);
        }
        return roots([0.0, ratio]);
    }

    let radicand = stable_sum(b * b, -(4.0 * a * c), EPSILON14);
    if radicand < 0.0 {
        return Roots::new();
    }

    // Add sqrt(radicand) with the sign of b so the two never cancel, then
    // recover the other root from the product of roots c/a.
    let q = -0.5 * stable_sum(b, sign(b) * radicand.sqrt(), EPSILON14);
    let (r0, r1) = if b > 0.0 { (q / a, c / q) } else { (c / q, q / a) };

    // The pair above is ascending for a > 0; a negative `a` flips it.
    if r0 <= r1 {
        roots([r0, r1])
    } else {
        roots([r1, r0])
    }
}
