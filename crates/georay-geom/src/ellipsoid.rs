//! Axis-aligned ellipsoids centred at the origin, and geodetic positions on them.
//!
//! An ellipsoid `x²/a² + y²/b² + z²/c² = 1` maps to the unit sphere by scaling
//! each coordinate with the reciprocal radius ("scaled space"). Intersection
//! routines work in that space; the geodesy helpers here convert between
//! cartesian and cartographic (longitude, latitude, height) positions.

use georay_math::epsilon::{EPSILON1, EPSILON12, EPSILON14};
use georay_math::{sign, Vec3, Vector};
use log::trace;

use crate::error::{GeomError, Result};

/// Newton iterations allowed when projecting onto the surface.
const MAX_SURFACE_ITERATIONS: usize = 64;

/// A position relative to an ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cartographic {
    /// Longitude in radians, east positive.
    pub longitude: f64,
    /// Geodetic latitude in radians, north positive.
    pub latitude: f64,
    /// Height above the surface along the geodetic normal.
    pub height: f64,
}

impl Cartographic {
    /// Create a cartographic position from radians.
    pub fn new(longitude: f64, latitude: f64, height: f64) -> Self {
        Self {
            longitude,
            latitude,
            height,
        }
    }

    /// Create a cartographic position from degrees.
    pub fn from_degrees(longitude: f64, latitude: f64, height: f64) -> Self {
        Self::new(longitude.to_radians(), latitude.to_radians(), height)
    }
}

/// An origin-centred ellipsoid with its derived per-axis factors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsoid<V = Vec3> {
    radii: V,
    radii_squared: V,
    one_over_radii: V,
    one_over_radii_squared: V,
}

impl<V: Vector> Ellipsoid<V> {
    /// Create an ellipsoid. Every radius must be positive.
    pub fn new(radii: V) -> Self {
        debug_assert!(
            radii.x() > 0.0 && radii.y() > 0.0 && radii.z() > 0.0,
            "ellipsoid radii must be positive"
        );
        let (x, y, z) = (radii.x(), radii.y(), radii.z());
        Self {
            radii,
            radii_squared: V::new(x * x, y * y, z * z),
            one_over_radii: V::new(1.0 / x, 1.0 / y, 1.0 / z),
            one_over_radii_squared: V::new(1.0 / (x * x), 1.0 / (y * y), 1.0 / (z * z)),
        }
    }

    /// Create an ellipsoid, rejecting radii that are not positive and finite.
    pub fn try_new(radii: V) -> Result<Self> {
        let valid = |r: f64| r > 0.0 && r.is_finite();
        if !(valid(radii.x()) && valid(radii.y()) && valid(radii.z())) {
            return Err(GeomError::InvalidRadii(radii.x(), radii.y(), radii.z()));
        }
        Ok(Self::new(radii))
    }

    /// The unit sphere.
    pub fn unit_sphere() -> Self {
        Self::new(V::new(1.0, 1.0, 1.0))
    }

    /// The WGS84 reference ellipsoid, in metres.
    pub fn wgs84() -> Self {
        Self::new(V::new(6378137.0, 6378137.0, 6356752.3142451793))
    }

    /// Radii along x, y, z.
    #[inline]
    pub fn radii(&self) -> V {
        self.radii
    }

    /// Squared radii.
    #[inline]
    pub fn radii_squared(&self) -> V {
        self.radii_squared
    }

    /// Reciprocal radii.
    #[inline]
    pub fn one_over_radii(&self) -> V {
        self.one_over_radii
    }

    /// Reciprocal squared radii.
    #[inline]
    pub fn one_over_radii_squared(&self) -> V {
        self.one_over_radii_squared
    }

    /// Map a world position into the space where the ellipsoid is the unit sphere.
    #[inline]
    pub fn transform_position_to_scaled_space(&self, position: &V) -> V {
        position.component_mul(&self.one_over_radii)
    }

    /// Inverse of [`Ellipsoid::transform_position_to_scaled_space`].
    #[inline]
    pub fn transform_position_from_scaled_space(&self, position: &V) -> V {
        position.component_mul(&self.radii)
    }

    /// Outward normal of the surface through `position`'s geodetic projection.
    ///
    /// `None` at the centre, where no normal is defined.
    pub fn geodetic_surface_normal(&self, position: &V) -> Option<V> {
        let near_zero = |v: f64| v.abs() <= EPSILON14;
        if near_zero(position.x()) && near_zero(position.y()) && near_zero(position.z()) {
            return None;
        }
        Some(position.component_mul(&self.one_over_radii_squared).normalize())
    }

    /// Outward surface normal at a cartographic position.
    pub fn geodetic_surface_normal_cartographic(&self, cartographic: &Cartographic) -> V {
        let (sin_lon, cos_lon) = cartographic.longitude.sin_cos();
        let (sin_lat, cos_lat) = cartographic.latitude.sin_cos();
        V::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat).normalize()
    }

    /// Project `position` onto the surface along the geodetic normal.
    ///
    /// Points within `sqrt(0.1)` of the centre in scaled space are projected
    /// radially instead. Returns `None` for the centre itself.
    pub fn scale_to_geodetic_surface(&self, position: &V) -> Option<V> {
        let (px, py, pz) = (position.x(), position.y(), position.z());
        let inv2 = self.one_over_radii_squared;

        let x2 = px * px * inv2.x();
        let y2 = py * py * inv2.y();
        let z2 = pz * pz * inv2.z();

        // Squared norm in scaled space
        let squared_norm = x2 + y2 + z2;
        let ratio = (1.0 / squared_norm).sqrt();

        // Radial projection, the Newton starting point
        let intersection = *position * ratio;

        if squared_norm < EPSILON1 {
            return if ratio.is_finite() {
                Some(intersection)
            } else {
                None
            };
        }

        let gradient = V::new(
            intersection.x() * inv2.x() * 2.0,
            intersection.y() * inv2.y() * 2.0,
            intersection.z() * inv2.z() * 2.0,
        );

        let mut lambda = (1.0 - ratio) * position.magnitude() / (0.5 * gradient.magnitude());
        let mut correction = 0.0;
        let mut multipliers = (1.0, 1.0, 1.0);

        for iteration in 0..MAX_SURFACE_ITERATIONS {
            lambda -= correction;

            let xm = 1.0 / (1.0 + lambda * inv2.x());
            let ym = 1.0 / (1.0 + lambda * inv2.y());
            let zm = 1.0 / (1.0 + lambda * inv2.z());
            multipliers = (xm, ym, zm);

            let (xm2, ym2, zm2) = (xm * xm, ym * ym, zm * zm);
            let func = x2 * xm2 + y2 * ym2 + z2 * zm2 - 1.0;

            if func.abs() <= EPSILON12 {
                return Some(V::new(px * xm, py * ym, pz * zm));
            }

            let denominator =
                x2 * xm2 * xm * inv2.x() + y2 * ym2 * ym * inv2.y() + z2 * zm2 * zm * inv2.z();
            let derivative = -2.0 * denominator;
            correction = func / derivative;

            if iteration + 1 == MAX_SURFACE_ITERATIONS {
                trace!("surface projection stopped at residual {func:e}");
            }
        }

        let (xm, ym, zm) = multipliers;
        Some(V::new(px * xm, py * ym, pz * zm))
    }

    /// Convert a cartesian position to cartographic.
    ///
    /// `None` for the centre of the ellipsoid.
    pub fn cartesian_to_cartographic(&self, position: &V) -> Option<Cartographic> {
        let surface = self.scale_to_geodetic_surface(position)?;
        let normal = self.geodetic_surface_normal(&surface)?;
        let offset = *position - surface;

        Some(Cartographic {
            longitude: normal.y().atan2(normal.x()),
            latitude: normal.z().clamp(-1.0, 1.0).asin(),
            height: sign(offset.dot(position)) * offset.magnitude(),
        })
    }

    /// Convert a cartographic position to cartesian.
    pub fn cartographic_to_cartesian(&self, cartographic: &Cartographic) -> V {
        let normal = self.geodetic_surface_normal_cartographic(cartographic);
        let k = self.radii_squared.component_mul(&normal);
        let gamma = normal.dot(&k).sqrt();
        k * (1.0 / gamma) + normal * cartographic.height
    }
}
