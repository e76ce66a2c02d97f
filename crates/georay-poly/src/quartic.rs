//! Quartic polynomials `a*x^4 + b*x^3 + c*x^2 + d*x + e`.
//!
//! After normalizing on `a`, the signs of the four remaining coefficients
//! select one of two factorizations into quadratics. Both are exact in real
//! arithmetic; the choice only decides which one loses less precision for
//! that sign pattern (Herbison-Evans, "Solving Quartics and Cubics for
//! Graphics", 1994).

use georay_math::epsilon::{EPSILON14, EPSILON15};
use georay_math::sign;
use log::trace;

use crate::{cubic, quadratic, roots, Roots};

/// Discriminant of `a*x^4 + b*x^3 + c*x^2 + d*x + e`.
///
/// Positive: four distinct real roots or none. Negative: exactly two
/// distinct real roots. Zero: a repeated root.
pub fn discriminant(a: f64, b: f64, c: f64, d: f64, e: f64) -> f64 {
    let a2 = a * a;
    let a3 = a2 * a;
    let b2 = b * b;
    let b3 = b2 * b;
    let c2 = c * c;
    let c3 = c2 * c;
    let d2 = d * d;
    let d3 = d2 * d;
    let e2 = e * e;
    let e3 = e2 * e;

    (b2 * c2 * d2 - 4.0 * b3 * d3 - 4.0 * a * c3 * d2 + 18.0 * a * b * c * d3
        - 27.0 * a2 * d2 * d2
        + 256.0 * a3 * e3)
        + e * (18.0 * b3 * c * d - 4.0 * b2 * c3 + 16.0 * a * c2 * c2
            - 80.0 * a * b * c2 * d
            - 6.0 * a * b2 * d2
            + 144.0 * a2 * c * d2)
        + e2 * (144.0 * a * b2 * c - 27.0 * b2 * b2 - 128.0 * a2 * c2 - 192.0 * a2 * b * d)
}

/// Sign of a single normalized coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Zero or positive.
    NonNegative,
    /// Strictly negative.
    Negative,
}

impl Sign {
    /// Classify `x`; zero counts as non-negative.
    #[inline]
    pub fn of(x: f64) -> Self {
        if x < 0.0 {
            Sign::Negative
        } else {
            Sign::NonNegative
        }
    }
}

/// The factorization used for a given [`SignPattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuarticBranch {
    /// Depress to `y^4 + p*y^2 + q*y + r` and factor through the auxiliary
    /// cubic in `h^2`, falling back to a biquadratic when `h` vanishes.
    Ferrari,
    /// Factor the undepressed quartic through Neumark's resolvent cubic.
    Neumark,
}

/// Signs of the normalized coefficients of `x^4 + a3*x^3 + a2*x^2 + a1*x + a0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignPattern {
    /// Sign of the cubic coefficient.
    pub a3: Sign,
    /// Sign of the quadratic coefficient.
    pub a2: Sign,
    /// Sign of the linear coefficient.
    pub a1: Sign,
    /// Sign of the constant term.
    pub a0: Sign,
}

impl SignPattern {
    /// Classify the normalized coefficients.
    pub fn classify(a3: f64, a2: f64, a1: f64, a0: f64) -> Self {
        Self {
            a3: Sign::of(a3),
            a2: Sign::of(a2),
            a1: Sign::of(a1),
            a0: Sign::of(a0),
        }
    }

    /// Pattern from a 4-bit index (bit 3 is `a3`, bit 0 is `a0`, set = negative).
    ///
    /// Returns `None` for indices of 16 and above.
    pub fn from_index(index: u8) -> Option<Self> {
        if index >= 16 {
            return None;
        }
        let bit = |n: u8| {
            if index & (1 << n) != 0 {
                Sign::Negative
            } else {
                Sign::NonNegative
            }
        };
        Some(Self {
            a3: bit(3),
            a2: bit(2),
            a1: bit(1),
            a0: bit(0),
        })
    }

    /// The 4-bit index of this pattern, inverse of [`SignPattern::from_index`].
    pub fn index(self) -> u8 {
        let bit = |s: Sign, n: u8| match s {
            Sign::Negative => 1 << n,
            Sign::NonNegative => 0,
        };
        bit(self.a3, 3) | bit(self.a2, 2) | bit(self.a1, 1) | bit(self.a0, 0)
    }

    /// The factorization that is better conditioned for this pattern.
    pub fn branch(self) -> QuarticBranch {
        use Sign::{Negative as N, NonNegative as P};

        match (self.a3, self.a2, self.a1, self.a0) {
            (P, P, P, N) | (P, P, N, P) | (P, N, P, N) | (N, P, P, P) | (N, P, N, N) => {
                QuarticBranch::Neumark
            }
            _ => QuarticBranch::Ferrari,
        }
    }
}

/// Real roots of `a*x^4 + b*x^3 + c*x^2 + d*x + e = 0`, ascending.
///
/// When `|a| < 1e-15` the leading term is dropped and the cubic
/// `b*x^3 + c*x^2 + d*x + e` is solved instead. Otherwise the result holds
/// zero, two or four roots; repeated roots are reported with multiplicity.
///
/// Coefficients must be finite.
pub fn real_roots(a: f64, b: f64, c: f64, d: f64, e: f64) -> Roots {
    debug_assert!(
        a.is_finite() && b.is_finite() && c.is_finite() && d.is_finite() && e.is_finite()
    );

    if a.abs() < EPSILON15 {
        return cubic::real_roots(b, c, d, e);
    }

    let a3 = b / a;
    let a2 = c / a;
    let a1 = d / a;
    let a0 = e / a;

    let pattern = SignPattern::classify(a3, a2, a1, a0);
    let branch = pattern.branch();
    trace!("quartic sign pattern {} -> {:?}", pattern.index(), branch);

    match branch {
        QuarticBranch::Ferrari => ferrari(a3, a2, a1, a0),
        QuarticBranch::Neumark => neumark(a3, a2, a1, a0),
    }
}

/// Ferrari-style solve of the monic quartic through its depressed form.
fn ferrari(a3: f64, a2: f64, a1: f64, a0: f64) -> Roots {
    let a3_squared = a3 * a3;

    // x = y - a3/4 gives y^4 + p*y^2 + q*y + r = 0
    let p = a2 - 3.0 * a3_squared / 8.0;
    let q = a1 - a2 * a3 / 2.0 + a3_squared * a3 / 8.0;
    let r = a0 - a1 * a3 / 4.0 + a2 * a3_squared / 16.0
        - 3.0 * a3_squared * a3_squared / 256.0;

    // h^6 + 2p*h^4 + (p^2 - 4r)*h^2 - q^2 = 0, as a cubic in h^2
    let cubic_roots = cubic::real_roots(1.0, 2.0 * p, p * p - 4.0 * r, -q * q);
    let Some(&h_squared) = cubic_roots.last() else {
        return Roots::new();
    };

    let shift = -a3 / 4.0;

    if h_squared.abs() < EPSILON14 {
        // q vanished: y^4 + p*y^2 + r = 0 is a quadratic in y^2
        let y_squared = quadratic::real_roots(1.0, p, r);
        return match y_squared.as_slice() {
            &[r0, r1] if r0 >= 0.0 => {
                let y0 = r0.sqrt();
                let y1 = r1.sqrt();
                roots([shift - y1, shift - y0, shift + y0, shift + y1])
            }
            &[_, r1] if r1 >= 0.0 => {
                let y = r1.sqrt();
                roots([shift - y, shift + y])
            }
            _ => Roots::new(),
        };
    }

    if h_squared > 0.0 {
        let h = h_squared.sqrt();
        let m = (p + h_squared - q / h) / 2.0;
        let n = (p + h_squared + q / h) / 2.0;

        // (y^2 + h*y + m)(y^2 - h*y + n)
        let roots1 = shifted(quadratic::real_roots(1.0, h, m), shift);
        let roots2 = shifted(quadratic::real_roots(1.0, -h, n), shift);
        return merge(roots1, roots2);
    }

    Roots::new()
}

/// Neumark's solve of the monic quartic.
fn neumark(a3: f64, a2: f64, a1: f64, a0: f64) -> Roots {
    let a1_squared = a1 * a1;
    let a2_squared = a2 * a2;
    let a3_squared = a3 * a3;

    let p = -2.0 * a2;
    let q = a1 * a3 + a2_squared - 4.0 * a0;
    let r = a3_squared * a0 - a1 * a2 * a3 + a1_squared;

    let cubic_roots = cubic::real_roots(1.0, p, q, r);
    let Some(&y) = cubic_roots.first() else {
        return Roots::new();
    };

    let temp = a2 - y;
    let temp_squared = temp * temp;

    let g1 = a3 / 2.0;
    let h1 = temp / 2.0;

    let m = temp_squared - 4.0 * a0;
    let m_error = temp_squared + 4.0 * a0.abs();

    let n = a3_squared - 4.0 * y;
    let n_error = a3_squared + 4.0 * y.abs();

    // Take the square root of whichever of m, n carries less relative error.
    // m = 0 leaves g2 undetermined, so n must be used.
    let (g2, h2) = if y < 0.0 || m == 0.0 || m * n_error < n * m_error {
        let sqrt_n = n.sqrt();
        let h2 = if sqrt_n == 0.0 { 0.0 } else { (a3 * h1 - a1) / sqrt_n };
        (sqrt_n / 2.0, h2)
    } else {
        let sqrt_m = m.sqrt();
        let g2 = if sqrt_m == 0.0 { 0.0 } else { (a3 * h1 - a1) / sqrt_m };
        (g2, sqrt_m / 2.0)
    };

    // Add like signs, and recover the other factor from the product
    let (big_g, small_g) = if g1 == 0.0 && g2 == 0.0 {
        (0.0, 0.0)
    } else if sign(g1) == sign(g2) {
        let big_g = g1 + g2;
        (big_g, y / big_g)
    } else {
        let small_g = g1 - g2;
        (y / small_g, small_g)
    };

    let (big_h, small_h) = if h1 == 0.0 && h2 == 0.0 {
        (0.0, 0.0)
    } else if sign(h1) == sign(h2) {
        let big_h = h1 + h2;
        (big_h, a0 / big_h)
    } else {
        let small_h = h1 - h2;
        (a0 / small_h, small_h)
    };

    // (x^2 + G*x + H)(x^2 + g*x + h)
    let roots1 = quadratic::real_roots(1.0, big_g, big_h);
    let roots2 = quadratic::real_roots(1.0, small_g, small_h);
    merge(roots1, roots2)
}

fn shifted(mut values: Roots, shift: f64) -> Roots {
    for v in values.iter_mut() {
        *v += shift;
    }
    values
}

/// Merge two ascending root lists into one ascending list.
///
/// For two pairs the relative placement of the intervals `[r0, r1]` decides
/// the interleaving: one precedes the other, one nests inside the other, or
/// they overlap.
fn merge(roots1: Roots, roots2: Roots) -> Roots {
    if roots2.is_empty() {
        return roots1;
    }
    if roots1.is_empty() {
        return roots2;
    }

    match (roots1.as_slice(), roots2.as_slice()) {
        (&[a0, a1], &[b0, b1]) => {
            if a1 <= b0 {
                roots([a0, a1, b0, b1])
            } else if b1 <= a0 {
                roots([b0, b1, a0, a1])
            } else if a0 >= b0 && a1 <= b1 {
                roots([b0, a0, a1, b1])
            } else if b0 >= a0 && b1 <= a1 {
                roots([a0, b0, b1, a1])
            } else if a0 > b0 && a0 < b1 {
                roots([b0, a0, b1, a1])
            } else {
                roots([a0, b0, a1, b1])
            }
        }
        (first, second) => {
            // Monic quadratics always yield pairs; keep the contract anyway
            let mut all: Roots = first.iter().chain(second).copied().take(4).collect();
            all.sort_by(|x, y| x.total_cmp(y));
            all
        }
    }
}
