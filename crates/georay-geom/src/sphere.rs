//! Bounding spheres.

use georay_math::{Vec3, Vector};

use crate::error::{GeomError, Result};

/// A sphere with center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere<V = Vec3> {
    /// Center point.
    pub center: V,
    /// Radius, expected positive.
    pub radius: f64,
}

impl<V: Vector> Sphere<V> {
    /// Create a sphere. `radius` must be positive.
    #[inline]
    pub fn new(center: V, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self { center, radius }
    }

    /// Create a sphere, rejecting a non-finite center or a radius that is
    /// not positive and finite.
    pub fn try_new(center: V, radius: f64) -> Result<Self> {
        if !center.is_finite() {
            return Err(GeomError::NonFinite("sphere center"));
        }
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(GeomError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Whether `point` lies inside or on the sphere.
    pub fn contains(&self, point: &V) -> bool {
        (*point - self.center).magnitude_squared() <= self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new() {
        assert!(Sphere::try_new(Vec3::zeros(), 1.0).is_ok());
        assert_eq!(Sphere::try_new(Vec3::zeros(), 0.0), Err(GeomError::InvalidRadius(0.0)));
        assert_eq!(Sphere::try_new(Vec3::zeros(), -2.0), Err(GeomError::InvalidRadius(-2.0)));
        assert!(matches!(
            Sphere::try_new(Vec3::zeros(), f64::NAN),
            Err(GeomError::InvalidRadius(_))
        ));
        assert!(Sphere::try_new(Vec3::new(f64::INFINITY, 0.0, 0.0), 1.0).is_err());
    }

    #[test]
    fn test_contains() {
        let s = Sphere::new(Vec3::new(1.0, 0.0, 0.0), 2.0);
        assert!(s.contains(&Vec3::new(3.0, 0.0, 0.0)));
        assert!(s.contains(&Vec3::new(1.0, 1.0, 1.0)));
        assert!(!s.contains(&Vec3::new(-1.5, 0.0, 0.0)));
    }
}
