//! End-to-end checks across the intersection routines.

use approx::assert_relative_eq;
use georay_geom::{Ellipsoid, Plane, Ray, Sphere, Vec3, Vector};
use georay_intersect::{
    grazing_altitude_location, ray_ellipsoid, ray_sphere, ray_triangle, ray_triangle_parametric,
    triangle_plane_intersection,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_vec(rng: &mut ChaCha20Rng, extent: f64) -> Vec3 {
    Vec3::new(
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
    )
}

fn area(t: &[Vec3; 3]) -> f64 {
    0.5 * (t[1] - t[0]).cross(&(t[2] - t[0])).norm()
}

#[test]
fn test_ray_through_unit_sphere() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
    let sphere = Sphere::new(Vec3::zeros(), 1.0);

    let hit = ray_sphere(&ray, &sphere).unwrap();
    assert_eq!(hit.start, 4.0);
    assert_eq!(hit.stop, 6.0);
}

#[test]
fn test_ray_down_onto_triangle() {
    let v0 = Vec3::new(-1.0, -1.0, 0.0);
    let v1 = Vec3::new(1.0, -1.0, 0.0);
    let v2 = Vec3::new(0.0, 1.0, 0.0);

    // Straight down the z axis
    let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
    for cull in [false, true] {
        let t = ray_triangle_parametric(&ray, &v0, &v1, &v2, cull).unwrap();
        assert_relative_eq!(t, 1.0, epsilon = 1e-12);
        let p = ray_triangle(&ray, &v0, &v1, &v2, cull).unwrap();
        assert_relative_eq!(p, Vec3::new(0.0, 0.0, 0.0), epsilon = 1e-12);
    }

    // Down through the centroid
    let centroid = (v0 + v1 + v2) / 3.0;
    assert_relative_eq!(centroid, Vec3::new(0.0, -1.0 / 3.0, 0.0), epsilon = 1e-15);
    let ray = Ray::new(centroid + Vec3::z(), Vec3::new(0.0, 0.0, -1.0));
    let t = ray_triangle_parametric(&ray, &v0, &v1, &v2, true).unwrap();
    assert_relative_eq!(t, 1.0, epsilon = 1e-12);
    let p = ray_triangle(&ray, &v0, &v1, &v2, true).unwrap();
    assert_relative_eq!(p, centroid, epsilon = 1e-12);
}

#[test]
fn test_split_with_one_vertex_below() {
    init_logging();

    let plane = Plane::new(Vec3::z(), 0.0);
    let v0 = Vec3::new(1.0, 1.0, 2.0);
    let v1 = Vec3::new(-1.0, 0.5, -1.5);
    let v2 = Vec3::new(2.0, -1.0, 1.0);

    let split = triangle_plane_intersection(&v0, &v1, &v2, &plane).unwrap();
    assert_eq!(split.positions.len(), 5);
    assert_eq!(split.indices.len(), 9);
    assert!(split.indices.iter().all(|&i| i < 5));

    let triangles: Vec<_> = split.triangles().collect();
    assert_eq!(triangles.len(), 3);
    assert!(triangles.iter().all(|t| area(t) > 1e-6));

    let total: f64 = triangles.iter().map(area).sum();
    assert_relative_eq!(total, area(&[v0, v1, v2]), epsilon = 1e-12);
}

#[test]
fn test_unit_ellipsoid_matches_unit_sphere() {
    init_logging();

    let mut rng = ChaCha20Rng::from_seed([7; 32]);
    let ellipsoid = Ellipsoid::<Vec3>::unit_sphere();
    let sphere = Sphere::new(Vec3::zeros(), 1.0);

    let mut hits = 0;
    for _ in 0..10_000 {
        let origin = random_vec(&mut rng, 4.0);
        let direction = random_vec(&mut rng, 1.0);
        if direction.norm() < 1e-3 {
            continue;
        }
        let ray = Ray::new(origin, direction);

        // Skip near-tangent rays and origins near the surface, where the two
        // routines use different tolerances
        let closest = ray.at(-origin.dot(&ray.direction));
        if (closest.norm() - 1.0).abs() < 1e-4 || (origin.norm() - 1.0).abs() < 1e-4 {
            continue;
        }

        let from_ellipsoid = ray_ellipsoid(&ray, &ellipsoid);
        let from_sphere = ray_sphere(&ray, &sphere);
        match (from_ellipsoid, from_sphere) {
            (Some(e), Some(s)) => {
                hits += 1;
                assert_relative_eq!(e.start, s.start, epsilon = 1e-9);
                assert_relative_eq!(e.stop, s.stop, epsilon = 1e-9);
            }
            (None, None) => {}
            other => panic!("routines disagree for {ray:?}: {other:?}"),
        }
    }
    assert!(hits > 100);
}

#[test]
fn test_culling_only_removes_hits() {
    let mut rng = ChaCha20Rng::from_seed([11; 32]);

    let mut culled_hits = 0;
    for _ in 0..10_000 {
        let v0 = random_vec(&mut rng, 2.0);
        let v1 = random_vec(&mut rng, 2.0);
        let v2 = random_vec(&mut rng, 2.0);
        let origin = random_vec(&mut rng, 5.0);
        let target = random_vec(&mut rng, 1.0);
        let ray = Ray::new(origin, target - origin);

        let culled = ray_triangle_parametric(&ray, &v0, &v1, &v2, true);
        let unculled = ray_triangle_parametric(&ray, &v0, &v1, &v2, false);

        if let Some(t) = culled {
            culled_hits += 1;
            let u = unculled.unwrap();
            assert_relative_eq!(t, u, epsilon = 1e-9, max_relative = 1e-9);
        }
    }
    assert!(culled_hits > 100);
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let ellipsoid = Ellipsoid::<Vec3>::wgs84();
    let ray = Ray::new(
        Vec3::new(7_000_000.0, -1_000_000.0, 2_000_000.0),
        Vec3::new(-1.0, 0.1, -0.2),
    );

    let first = (
        ray_ellipsoid(&ray, &ellipsoid),
        grazing_altitude_location(&ray, &ellipsoid),
    );
    for _ in 0..3 {
        let again = (
            ray_ellipsoid(&ray, &ellipsoid),
            grazing_altitude_location(&ray, &ellipsoid),
        );
        assert_eq!(first, again);
    }
    assert!(first.0.is_some());
    assert!(first.1.is_some_and(|p| p.is_finite()));
}
