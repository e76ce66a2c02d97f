//! The glam backend gives the same answers as nalgebra.
#![cfg(feature = "glam")]

use approx::assert_relative_eq;
use georay::{
    grazing_altitude_location, ray_ellipsoid, ray_triangle_parametric, triangle_plane_intersection,
    Ellipsoid, Plane, Ray, Vec3, Vector,
};
use glam::DVec3;

fn to_glam(v: Vec3) -> DVec3 {
    DVec3::new(v.x, v.y, v.z)
}

#[test]
fn test_ellipsoid_queries_match() {
    let radii = Vec3::new(3.0, 2.0, 1.0);
    let origin = Vec3::new(-6.0, 1.5, 0.25);
    let direction = Vec3::new(1.0, -0.1, 0.05);

    let na = Ellipsoid::new(radii);
    let gl = Ellipsoid::new(to_glam(radii));
    let na_ray = Ray::new(origin, direction);
    let gl_ray = Ray::new(to_glam(origin), to_glam(direction));

    let a = ray_ellipsoid(&na_ray, &na).unwrap();
    let b = ray_ellipsoid(&gl_ray, &gl).unwrap();
    assert_relative_eq!(a.start, b.start, epsilon = 1e-12);
    assert_relative_eq!(a.stop, b.stop, epsilon = 1e-12);

    let a = grazing_altitude_location(&na_ray, &na).unwrap();
    let b = grazing_altitude_location(&gl_ray, &gl).unwrap();
    assert_relative_eq!(a.x, b.x(), epsilon = 1e-9);
    assert_relative_eq!(a.y, b.y(), epsilon = 1e-9);
    assert_relative_eq!(a.z, b.z(), epsilon = 1e-9);
}

#[test]
fn test_triangle_queries_match() {
    let v = [
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let g = v.map(to_glam);

    let na_ray = Ray::new(Vec3::new(0.2, 0.1, 2.0), Vec3::new(0.0, 0.0, -1.0));
    let gl_ray = Ray::new(DVec3::new(0.2, 0.1, 2.0), DVec3::new(0.0, 0.0, -1.0));
    let a = ray_triangle_parametric(&na_ray, &v[0], &v[1], &v[2], true).unwrap();
    let b = ray_triangle_parametric(&gl_ray, &g[0], &g[1], &g[2], true).unwrap();
    assert_relative_eq!(a, b, epsilon = 1e-12);

    let na_plane = Plane::new(Vec3::new(1.0, 0.0, 0.0), -0.5);
    let gl_plane = Plane::new(DVec3::X, -0.5);
    let a = triangle_plane_intersection(&v[0], &v[1], &v[2], &na_plane).unwrap();
    let b = triangle_plane_intersection(&g[0], &g[1], &g[2], &gl_plane).unwrap();
    assert_eq!(a.indices, b.indices);
    for (p, q) in a.positions.iter().zip(b.positions) {
        assert_relative_eq!(p.x, q.x(), epsilon = 1e-12);
        assert_relative_eq!(p.y, q.y(), epsilon = 1e-12);
        assert_relative_eq!(p.z, q.z(), epsilon = 1e-12);
    }
}
