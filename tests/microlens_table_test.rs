//! Einstein radii and centroid shifts against Table 2 of Proft et al. (2011).

use approx::assert_abs_diff_eq;

use astrolens::microlens::{centroid_shift, einstein_radius, CentroidShiftParams};

#[test]
fn einstein_radius_reference_table() {
    // (lens mass [Msun], lens distance [pc], Einstein radius [mas])
    let table = [
        (0.3, 57.7, 6.507),
        (0.3, 26.1, 9.678),
        (0.3, 169.3, 3.797),
        (0.55, 192.3, 4.824),
        (0.6, 5.6, 29.560),
        (0.35, 19.3, 12.141),
        (0.45, 42.9, 9.243),
        (0.3, 92.5, 5.138),
        (0.35, 55.7, 7.149),
    ];
    for (mass, dist, expected) in table {
        assert_abs_diff_eq!(einstein_radius(mass, dist, None), expected, epsilon = 0.1);
    }
}

#[test]
fn centroid_shift_dark_lens_reference_values() {
    // u = 10.7 Einstein radii at closest approach
    let shift = centroid_shift(&CentroidShiftParams::dark(0.3, 57.7, 69.6249));
    assert_abs_diff_eq!(shift, 0.597, epsilon = 0.1);

    let table = [
        (0.45, 42.9, 27.729, 2.5186456989891184),
        (0.6, 5.6, 44.34, 10.419810074509936),
    ];
    for (mass, dist, min_sep, expected) in table {
        assert_abs_diff_eq!(
            centroid_shift(&CentroidShiftParams::dark(mass, dist, min_sep)),
            expected,
            epsilon = 1e-9
        );
    }
}

#[test]
fn centroid_shift_luminous_lens_reference_value() {
    let params = CentroidShiftParams {
        lens_mass: 0.3,
        lens_dist: 57.7,
        min_sep: 69.6249,
        source_dist: None,
        lens_mag: Some(15.3),
        source_mag: Some(18.5),
    };
    assert_abs_diff_eq!(centroid_shift(&params), 0.030, epsilon = 0.01);
}

#[test]
fn centroid_shift_finite_source_distance() {
    let params = CentroidShiftParams {
        lens_mass: 0.3,
        lens_dist: 57.7,
        min_sep: 40.0,
        source_dist: Some(2000.0),
        lens_mag: None,
        source_mag: None,
    };
    assert_abs_diff_eq!(centroid_shift(&params), 0.9768701015588689, epsilon = 1e-9);
}
