//! Rays and parametric intervals along them.

use georay_math::{Vec3, Vector};

/// A ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray<V = Vec3> {
    /// Origin point of the ray.
    pub origin: V,
    /// Direction of the ray; unit length unless it is the zero vector.
    pub direction: V,
}

impl<V: Vector> Ray<V> {
    /// Create a new ray from origin and direction.
    ///
    /// A non-zero direction is normalized. The zero vector means "no
    /// direction" and is kept as is.
    pub fn new(origin: V, direction: V) -> Self {
        let direction = if direction.is_zero() {
            direction
        } else {
            direction.normalize()
        };
        Self { origin, direction }
    }

    /// Create a ray whose direction the caller guarantees is already unit length.
    #[inline]
    pub fn from_unit(origin: V, direction: V) -> Self {
        debug_assert!(
            direction.is_zero() || (direction.magnitude_squared() - 1.0).abs() < 1e-9,
            "direction must be unit length"
        );
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> V {
        self.origin + self.direction * t
    }
}

/// A parametric range `[start, stop]` along a ray.
///
/// Intersection routines return `Option<Interval>`; a miss is `None`, so an
/// interval that exists always has `start <= stop`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// Entry parameter.
    pub start: f64,
    /// Exit parameter.
    pub stop: f64,
}

impl Interval {
    /// Create an interval.
    #[inline]
    pub fn new(start: f64, stop: f64) -> Self {
        debug_assert!(start <= stop, "interval start {start} exceeds stop {stop}");
        Self { start, stop }
    }

    /// Degenerate interval holding a single parameter (a tangent touch).
    #[inline]
    pub fn point(t: f64) -> Self {
        Self { start: t, stop: t }
    }

    /// `stop - start`.
    #[inline]
    pub fn length(&self) -> f64 {
        self.stop - self.start
    }

    /// Whether `t` lies in the closed range.
    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        self.start <= t && t <= self.stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let p = ray.at(5.0);
        assert!((p.x - 5.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
        assert!(p.z.abs() < 1e-12);
    }

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(Vec3::zeros(), Vec3::new(3.0, 0.0, 4.0));
        assert!((ray.direction.norm() - 1.0).abs() < 1e-15);
        assert!((ray.direction.x - 0.6).abs() < 1e-15);
    }

    #[test]
    fn test_ray_zero_direction_kept() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::zeros());
        assert_eq!(ray.direction, Vec3::zeros());
        assert_eq!(ray.at(10.0), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_interval_helpers() {
        let i = Interval::new(4.0, 6.0);
        assert_eq!(i.length(), 2.0);
        assert!(i.contains(4.0));
        assert!(i.contains(5.5));
        assert!(!i.contains(6.5));

        let p = Interval::point(3.0);
        assert_eq!(p.start, p.stop);
        assert_eq!(p.length(), 0.0);
        assert!(p.contains(3.0));
    }
}
