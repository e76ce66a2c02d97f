//! Root finders checked against polynomials built from known roots.

use approx::assert_relative_eq;
use georay_poly::{cubic, quadratic, quartic};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn eval(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &k| acc * x + k)
}

#[test]
fn test_quadratic_symmetric_roots() {
    let roots = quadratic::real_roots(1.0, 0.0, -4.0);
    assert_eq!(roots.as_slice(), &[-2.0, 2.0]);
}

#[test]
fn test_roots_are_sorted_and_satisfy_polynomial() {
    let mut rng = ChaCha20Rng::from_seed([3; 32]);

    for _ in 0..5_000 {
        let k: [f64; 5] = std::array::from_fn(|_| rng.gen_range(-10.0..10.0));
        // A tiny leading coefficient makes the residual meaningless
        if k[0].abs() < 0.5 {
            continue;
        }

        let checks: [(&[f64], georay_poly::Roots); 3] = [
            (&k[..3], quadratic::real_roots(k[0], k[1], k[2])),
            (&k[..4], cubic::real_roots(k[0], k[1], k[2], k[3])),
            (&k[..], quartic::real_roots(k[0], k[1], k[2], k[3], k[4])),
        ];

        for (coefficients, roots) in checks {
            assert!(roots.windows(2).all(|w| w[0] <= w[1]), "{coefficients:?}");

            // Residual relative to the magnitude of the terms at x
            for &x in &roots {
                assert!(x.is_finite(), "{coefficients:?}");
                let scale: f64 = coefficients
                    .iter()
                    .rev()
                    .enumerate()
                    .map(|(i, k)| (k * x.powi(i as i32)).abs())
                    .sum();
                assert!(
                    eval(coefficients, x).abs() <= 1e-6 * scale.max(1.0),
                    "{coefficients:?} at {x}"
                );
            }
        }
    }
}

#[test]
fn test_quartic_recovers_distinct_roots() {
    let mut rng = ChaCha20Rng::from_seed([5; 32]);

    for _ in 0..2_000 {
        let mut expected: [f64; 4] = std::array::from_fn(|_| rng.gen_range(-5.0..5.0));
        expected.sort_by(f64::total_cmp);
        if expected.windows(2).any(|w| w[1] - w[0] < 0.1) {
            continue;
        }

        let [r0, r1, r2, r3] = expected;
        let a3 = -(r0 + r1 + r2 + r3);
        let a2 = r0 * r1 + r0 * r2 + r0 * r3 + r1 * r2 + r1 * r3 + r2 * r3;
        let a1 = -(r0 * r1 * r2 + r0 * r1 * r3 + r0 * r2 * r3 + r1 * r2 * r3);
        let a0 = r0 * r1 * r2 * r3;

        let roots = quartic::real_roots(1.0, a3, a2, a1, a0);
        assert_eq!(roots.len(), 4, "{expected:?}");
        for (found, wanted) in roots.iter().zip(expected) {
            assert_relative_eq!(*found, wanted, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_quartic_integer_coefficient_grid() {
    let values = [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0];

    for &a in values.iter().filter(|&&a| a != 0.0) {
        for &b in &values {
            for &c in &values {
                for &d in &values {
                    for &e in &values {
                        let k = [a, b, c, d, e];
                        for x in quartic::real_roots(a, b, c, d, e) {
                            let scale: f64 = k
                                .iter()
                                .rev()
                                .enumerate()
                                .map(|(i, k)| (k * x.powi(i as i32)).abs())
                                .sum();
                            assert!(
                                eval(&k, x).abs() <= 1e-6 * scale.max(1.0),
                                "{k:?} at {x}"
                            );
                        }
                    }
                }
            }
        }
    }
}
