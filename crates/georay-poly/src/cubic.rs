//! Cubic polynomials `a*x^3 + b*x^2 + c*x + d`.
//!
//! The general case follows Blinn's formulation ("How to Solve a Cubic
//! Equation", 2006-2007): both the one-root and the three-root branches are
//! evaluated twice, once normalized on `a` and once on `d`, and each root is
//! taken from whichever form is free of cancellation.

use crate::{quadratic, roots, signed_cbrt, Roots};

/// Discriminant `18abcd + b^2c^2 - 27a^2d^2 - 4(ac^3 + b^3d)`.
///
/// Positive: three distinct real roots. Zero: a repeated root. Negative: one
/// real root.
pub fn discriminant(a: f64, b: f64, c: f64, d: f64) -> f64 {
    let a2 = a * a;
    let b2 = b * b;
    let c2 = c * c;
    let d2 = d * d;

    18.0 * a * b * c * d + b2 * c2 - 27.0 * a2 * d2 - 4.0 * (a * c2 * c + b2 * b * d)
}

/// Real roots of `a*x^3 + b*x^2 + c*x + d = 0`, ascending.
///
/// A zero `a` delegates to [`quadratic::real_roots`], so the result can then
/// hold zero to two roots. Otherwise at least one root is returned, and
/// repeated roots are reported with their multiplicity.
///
/// Coefficients must be finite.
pub fn real_roots(a: f64, b: f64, c: f64, d: f64) -> Roots {
    debug_assert!(a.is_finite() && b.is_finite() && c.is_finite() && d.is_finite());

    if a == 0.0 {
        return quadratic::real_roots(b, c, d);
    }

    if b == 0.0 {
        if c == 0.0 {
            if d == 0.0 {
                return roots([0.0, 0.0, 0.0]);
            }

            // a*x^3 + d = 0
            let root = signed_cbrt(-d / a);
            return roots([root, root, root]);
        } else if d == 0.0 {
            // x * (a*x^2 + c) = 0
            let quad = quadratic::real_roots(a, 0.0, c);
            if quad.is_empty() {
                return roots([0.0]);
            }
            return roots([quad[0], 0.0, quad[1]]);
        }

        return general_roots(a, 0.0, c, d);
    }

    if c == 0.0 {
        if d == 0.0 {
            // x^2 * (a*x + b) = 0
            let ratio = -b / a;
            if ratio < 0.0 {
                return roots([ratio, 0.0, 0.0]);
            }
            return roots([0.0, 0.0, ratio]);
        }

        return general_roots(a, b, 0.0, d);
    }

    if d == 0.0 {
        // x * (a*x^2 + b*x + c) = 0
        let quad = quadratic::real_roots(a, b, c);
        return match quad.as_slice() {
            [] => roots([0.0]),
            [r0, r1] if *r1 <= 0.0 => roots([*r0, *r1, 0.0]),
            [r0, r1] if *r0 >= 0.0 => roots([0.0, *r0, *r1]),
            [r0, r1] => roots([*r0, 0.0, *r1]),
            // a != 0 here, so the quadratic never degrades to one root
            _ => roots([0.0]),
        };
    }

    general_roots(a, b, c, d)
}

/// Blinn's solver for a cubic with non-zero leading coefficient.
fn general_roots(a: f64, b: f64, c: f64, d: f64) -> Roots {
    let a_ = a;
    let b_ = b / 3.0;
    let c_ = c / 3.0;
    let d_ = d;

    let ac = a_ * c_;
    let bd = b_ * d_;
    let b2 = b_ * b_;
    let c2 = c_ * c_;

    // Hessian coefficients of the depressed forms
    let delta1 = a_ * c_ - b2;
    let delta2 = a_ * d_ - b_ * c_;
    let delta3 = b_ * d_ - c2;

    let m = 4.0 * delta1 * delta3 - delta2 * delta2;

    if m < 0.0 {
        return roots([single_root(a_, b_, c_, d_, ac, bd, b2, c2, delta1, delta2, delta3, m)]);
    }

    three_roots(a_, b_, c_, d_, delta1, delta2, delta3, m)
}

/// The one real root when the scaled discriminant `m` is negative.
#[allow(clippy::too_many_arguments)]
fn single_root(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    ac: f64,
    bd: f64,
    b2: f64,
    c2: f64,
    delta1: f64,
    delta2: f64,
    delta3: f64,
    m: f64,
) -> f64 {
    // Normalize on whichever end coefficient dominates
    let use_a = b2 * bd >= ac * c2;
    let (a_bar, c_bar, d_bar) = if use_a {
        (a, delta1, -2.0 * b * delta1 + a * delta2)
    } else {
        (d, delta3, -d * delta2 + 2.0 * c * delta3)
    };

    // Sign with zero mapped to +1 so t0 always has the sign that adds
    let s = if d_bar < 0.0 { -1.0 } else { 1.0 };
    let t0 = -s * a_bar.abs() * (-m).sqrt();
    let t1 = -d_bar + t0;

    let p = signed_cbrt(t1 / 2.0);
    let q = if t1 == t0 { -p } else { -c_bar / p };

    let x = if c_bar <= 0.0 {
        p + q
    } else {
        -d_bar / (p * p + q * q + c_bar)
    };

    if use_a {
        (x - b) / a
    } else {
        -d / (x + c)
    }
}

/// The three real roots when the scaled discriminant `m` is non-negative.
#[allow(clippy::too_many_arguments)]
fn three_roots(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    delta1: f64,
    delta2: f64,
    delta3: f64,
    m: f64,
) -> Roots {
    let c_bar_a = delta1;
    let d_bar_a = -2.0 * b * delta1 + a * delta2;
    let c_bar_d = delta3;
    let d_bar_d = -d * delta2 + 2.0 * c * delta3;

    let sqrt_m = m.sqrt();
    let half_sqrt_3 = 3.0_f64.sqrt() / 2.0;

    // Largest root, normalized on a
    let theta = ((a * sqrt_m).atan2(-d_bar_a) / 3.0).abs();
    let scale = 2.0 * (-c_bar_a).max(0.0).sqrt();
    let (sin, cos) = theta.sin_cos();
    let t1 = scale * cos;
    let t3 = scale * (-cos / 2.0 - half_sqrt_3 * sin);

    let numerator_large = if t1 + t3 > 2.0 * b { t1 - b } else { t3 - b };
    let denominator_large = a;
    let root1 = numerator_large / denominator_large;

    // Smallest root, normalized on d
    let theta = ((d * sqrt_m).atan2(-d_bar_d) / 3.0).abs();
    let scale = 2.0 * (-c_bar_d).max(0.0).sqrt();
    let (sin, cos) = theta.sin_cos();
    let t1 = scale * cos;
    let t3 = scale * (-cos / 2.0 - half_sqrt_3 * sin);

    let numerator_small = -d;
    let denominator_small = if t1 + t3 < 2.0 * c { t1 + c } else { t3 + c };
    let root3 = numerator_small / denominator_small;

    // Middle root from the quadratic factor the other two leave behind
    let e = denominator_large * denominator_small;
    let f = -numerator_large * denominator_small - denominator_large * numerator_small;
    let g = numerator_large * numerator_small;
    let root2 = (c * f - b * g) / (-b * f + c * e);

    let mut sorted = [root1, root2, root3];
    sort3(&mut sorted);
    roots(sorted)
}

/// Sort three values ascending with a fixed comparison network.
#[inline]
fn sort3(v: &mut [f64; 3]) {
    if v[0] > v[1] {
        v.swap(0, 1);
    }
    if v[1] > v[2] {
        v.swap(1, 2);
    }
    if v[0] > v[1] {
        v.swap(0, 1);
    }
}
