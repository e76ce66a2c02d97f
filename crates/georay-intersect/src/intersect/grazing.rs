//! Closest approach of a ray to an ellipsoid surface.
//!
//! The ray's line and the ellipsoid are expressed in an orthonormal frame
//! built around the ray direction in scaled space. Points where the surface
//! normal is perpendicular to the ray direction satisfy a quadric in that
//! frame; parameterizing it by the cosine of the frame angle reduces it to a
//! polynomial of degree at most four.

use arrayvec::ArrayVec;
use georay_geom::{Ellipsoid, Ray};
use georay_math::epsilon::{EPSILON12, EPSILON15};
use georay_math::{sign, stable_sum, Matrix, Vector};
use georay_poly::{quadratic, quartic};
use log::trace;

use super::ray_ellipsoid;

/// Candidate points in the ray frame; each cosine yields at most two.
type Candidates<V> = ArrayVec<V, 8>;

/// Location on the ray that comes closest to the ellipsoid surface.
///
/// If the ray already climbs away from the surface at its origin, the origin
/// is returned. Otherwise the returned position sits above the surface point
/// of closest approach at the grazing altitude along the geodetic normal,
/// with the altitude negated when the ray actually pierces the ellipsoid.
///
/// `None` when no candidate point exists. `ray.direction` must be unit length.
pub fn grazing_altitude_location<V: Vector>(ray: &Ray<V>, ellipsoid: &Ellipsoid<V>) -> Option<V> {
    let position = ray.origin;
    let direction = ray.direction;

    if !position.is_zero() {
        if let Some(normal) = ellipsoid.geodetic_surface_normal(&position) {
            if direction.dot(&normal) >= 0.0 {
                trace!("grazing altitude: ray climbs away from the surface, keeping origin");
                return Some(position);
            }
        }
    }

    let intersects = ray_ellipsoid(ray, ellipsoid).is_some();

    // Basis around the unit scaled direction
    let first_axis = ellipsoid
        .transform_position_to_scaled_space(&direction)
        .normalize();
    let reference = first_axis.most_orthogonal_axis();
    let second_axis = reference.cross(&first_axis).normalize();
    let third_axis = first_axis.cross(&second_axis).normalize();

    let b = <V::Matrix as Matrix<V>>::from_columns(first_axis, second_axis, third_axis);
    let b_t = b.transpose();

    let d_i = <V::Matrix as Matrix<V>>::from_scale(ellipsoid.radii());
    let d = <V::Matrix as Matrix<V>>::from_scale(ellipsoid.one_over_radii());

    // Cross product matrix: c * v = v × direction
    let c = <V::Matrix as Matrix<V>>::from_columns(
        V::new(0.0, -direction.z(), direction.y()),
        V::new(direction.z(), 0.0, -direction.x()),
        V::new(-direction.y(), direction.x(), 0.0),
    );

    let temp = b_t * d * c;
    let a = temp * d_i * b;
    let b_vec = temp.mul_vector(&position);

    let solutions = quadratic_vector_expression(&a, &(-b_vec), 0.0, 0.0, 1.0);
    if solutions.is_empty() {
        trace!("grazing altitude: no candidate points");
        return None;
    }
    trace!("grazing altitude: {} candidate points", solutions.len());

    let mut closest = V::zero();
    let mut maximum_value = f64::NEG_INFINITY;

    for solution in &solutions {
        let s = d_i.mul_vector(&b.mul_vector(solution));
        let v = (s - position).normalize();
        let dot = v.dot(&direction);

        if dot > maximum_value {
            maximum_value = dot;
            closest = s;
        }
    }

    let mut surface_point = ellipsoid.cartesian_to_cartographic(&closest)?;
    let maximum_value = maximum_value.clamp(0.0, 1.0);
    let altitude = (closest - position).magnitude() * (1.0 - maximum_value * maximum_value).sqrt();
    surface_point.height = if intersects { -altitude } else { altitude };

    Some(ellipsoid.cartographic_to_cartesian(&surface_point))
}

/// Solve `vᵀ A v + bᵀ v + c = 0` for `v = (x, w cos θ, w sin θ)`.
///
/// Expanding in `cos θ` and `sin θ` gives `left(cos) = -right(cos) * sin`;
/// squaring eliminates the sine and leaves a quartic in the cosine (a
/// quadratic when the right side vanishes). The sign of `left * right` then
/// picks the sine branch for each root.
fn quadratic_vector_expression<V: Vector>(
    a: &V::Matrix,
    b: &V,
    c: f64,
    x: f64,
    w: f64,
) -> Candidates<V> {
    let x_squared = x * x;
    let w_squared = w * w;

    let l2 = (a.get(1, 1) - a.get(2, 2)) * w_squared;
    let l1 = w * (x * stable_sum(a.get(0, 1), a.get(1, 0), EPSILON15) + b.y());
    let l0 = a.get(0, 0) * x_squared + a.get(2, 2) * w_squared + x * b.x() + c;

    let r1 = w_squared * stable_sum(a.get(1, 2), a.get(2, 1), EPSILON15);
    let r0 = w * (x * (a.get(0, 2) + a.get(2, 0)) + b.z());

    let mut solutions = Candidates::new();

    if r0 == 0.0 && r1 == 0.0 {
        for cosine in quadratic::real_roots(l2, l1, l0) {
            let sine = (1.0 - cosine * cosine).max(0.0).sqrt();
            solutions.push(V::new(x, w * cosine, w * -sine));
            solutions.push(V::new(x, w * cosine, w * sine));
        }
        return solutions;
    }

    let r0_squared = r0 * r0;
    let r1_squared = r1 * r1;
    let l2_squared = l2 * l2;
    let r0r1 = r0 * r1;

    let a4 = l2_squared + r1_squared;
    let a3 = 2.0 * (l1 * l2 + r0r1);
    let a2 = 2.0 * l0 * l2 + l1 * l1 - r1_squared + r0_squared;
    let a1 = 2.0 * (l0 * l1 - r0r1);
    let a0 = l0 * l0 - r0_squared;

    if a4 == 0.0 && a3 == 0.0 && a2 == 0.0 && a1 == 0.0 {
        return solutions;
    }

    for cosine in quartic::real_roots(a4, a3, a2, a1, a0) {
        let cosine_squared = cosine * cosine;
        let sine = (1.0 - cosine_squared).max(0.0).sqrt();

        // Sum the three terms of the left side in the order that avoids cancellation
        let left = if sign(l2) == sign(l0) {
            stable_sum(l2 * cosine_squared + l0, l1 * cosine, EPSILON12)
        } else if sign(l0) == sign(l1 * cosine) {
            stable_sum(l2 * cosine_squared, l1 * cosine + l0, EPSILON12)
        } else {
            stable_sum(l2 * cosine_squared + l1 * cosine, l0, EPSILON12)
        };

        let right = stable_sum(r1 * cosine, r0, EPSILON15);
        let product = left * right;

        if product < 0.0 {
            solutions.push(V::new(x, w * cosine, w * sine));
        } else if product > 0.0 {
            solutions.push(V::new(x, w * cosine, w * -sine));
        } else if sine != 0.0 {
            solutions.push(V::new(x, w * cosine, w * -sine));
            solutions.push(V::new(x, w * cosine, w * sine));
        } else {
            solutions.push(V::new(x, w * cosine, w * sine));
        }
    }

    solutions
}
