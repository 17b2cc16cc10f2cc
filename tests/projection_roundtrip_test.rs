use approx::assert_relative_eq;
use itertools::iproduct;

use astrolens::tangent_plane::{plane_to_sphere, sphere_to_plane, ProjectionScale};

/// Smallest signed angular difference between two right ascensions, degrees.
fn ra_difference(a: f64, b: f64) -> f64 {
    (a - b + 180.0).rem_euclid(360.0) - 180.0
}

#[test]
fn round_trip_over_sky_grid() {
    let ras = [0.0, 45.0, 120.0, 210.5, 359.0];
    let decs = [-80.0, -45.0, 0.0, 30.0, 75.0];
    let ra_tangents = [0.0, 100.0, 250.0];
    let dec_tangents = [-60.0, 0.0, 60.0];

    let mut checked = 0usize;
    for (ra, dec, ra_z, dec_z) in iproduct!(ras, decs, ra_tangents, dec_tangents) {
        for scale in [ProjectionScale::Arcsec, ProjectionScale::Mas] {
            // points in the singular zone (>= 90 deg from the tangent point)
            // are rejected by the forward transform and not round-trippable
            let Ok((xi, eta)) = sphere_to_plane(ra, dec, ra_z, dec_z, scale) else {
                continue;
            };
            let (ra_back, dec_back) = plane_to_sphere(xi, eta, ra_z, dec_z, scale);
            assert!(
                ra_difference(ra_back, ra).abs() < 1e-9,
                "ra {ra} -> {ra_back} about ({ra_z}, {dec_z})"
            );
            assert_relative_eq!(dec_back, dec, epsilon = 1e-9);
            checked += 1;
        }
    }
    // the grid must actually exercise the transform, not skip everything
    assert!(checked > 100, "only {checked} grid points round-tripped");
}

#[test]
fn forward_identity_is_exact_everywhere_on_grid() {
    for (ra, dec) in iproduct!([0.0, 90.0, 180.1, 271.3, 359.9], [-85.0, -30.0, 0.0, 42.0, 89.0]) {
        let (xi, eta) = sphere_to_plane(ra, dec, ra, dec, ProjectionScale::Arcsec).unwrap();
        assert_eq!((xi, eta), (0.0, 0.0));
    }
}
