//! # Tangent-plane (gnomonic) projection
//!
//! Conversion between spherical equatorial coordinates and rectangular
//! offsets in the plane tangent to the celestial sphere at a chosen reference
//! point. The forward and inverse transforms follow the Starlink
//! `sla_S2TP` / `sla_TP2S` routines.
//!
//! ## Conventions
//!
//! - All spherical coordinates are in **degrees**; right ascensions returned
//!   by the inverse transform are normalized to [0°, 360°).
//! - Tangent-plane offsets `(xi, eta)` grow toward increasing right ascension
//!   (east) and increasing declination (north) respectively; their unit is
//!   selected with [`ProjectionScale`].
//! - Projecting the tangent point onto itself gives exactly `(0, 0)`.
//!
//! ## Errors
//!
//! The forward projection is undefined for points 90° or more from the
//! tangent point (the gnomonic denominator vanishes). That zone is reported
//! as [`AstrolensError::ProjectionUndefined`] rather than returning a wrapped
//! or infinite offset.

use crate::astrolens_errors::AstrolensError;
use crate::constants::{Degree, DPI, RADEG, RAD_TO_ARCSEC, RAD_TO_MAS};

/// Angular unit of the tangent-plane offsets.
///
/// The two call sites of the projector in this crate use different units:
/// catalog-level work is done in arcseconds, the trajectory model in
/// milliarcseconds. The scale is therefore an explicit parameter of both
/// transforms instead of a hard-coded factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionScale {
    Arcsec,
    Mas,
}

impl ProjectionScale {
    /// Radian → output-unit conversion factor.
    fn factor(self) -> f64 {
        match self {
            ProjectionScale::Arcsec => RAD_TO_ARCSEC,
            ProjectionScale::Mas => RAD_TO_MAS,
        }
    }
}

/// Singular-zone guard for the gnomonic denominator (sla_S2TP's TINY).
const TINY: f64 = 1e-6;

/// Project a point of the celestial sphere onto a tangent plane.
///
/// Arguments
/// ---------
/// * `ra`: right ascension of the point to project [degrees]
/// * `dec`: declination of the point to project [degrees]
/// * `ra_z`: right ascension of the tangent point [degrees]
/// * `dec_z`: declination of the tangent point [degrees]
/// * `scale`: angular unit of the returned offsets
///
/// Return
/// ------
/// * the rectangular tangent-plane offsets `(xi, eta)` in the unit selected
///   by `scale`, or [`AstrolensError::ProjectionUndefined`] if the point lies
///   90° or more from the tangent point.
pub fn sphere_to_plane(
    ra: Degree,
    dec: Degree,
    ra_z: Degree,
    dec_z: Degree,
    scale: ProjectionScale,
) -> Result<(f64, f64), AstrolensError> {
    let ra_r = ra * RADEG;
    let ra_z_r = ra_z * RADEG;
    let dec_r = dec * RADEG;
    let dec_z_r = dec_z * RADEG;

    let sin_dec_z = dec_z_r.sin();
    let sin_dec = dec_r.sin();
    let cos_dec_z = dec_z_r.cos();
    let cos_dec = dec_r.cos();
    let ra_diff = ra_r - ra_z_r;
    let sin_ra_diff = ra_diff.sin();
    let cos_ra_diff = ra_diff.cos();

    // Cosine of the angular distance to the tangent point
    let denom = sin_dec * sin_dec_z + cos_dec * cos_dec_z * cos_ra_diff;
    if denom <= TINY {
        return Err(AstrolensError::ProjectionUndefined {
            ra,
            dec,
            ra_z,
            dec_z,
        });
    }

    let k = scale.factor();
    let xi = k * cos_dec * sin_ra_diff / denom;
    let eta = k * (sin_dec * cos_dec_z - cos_dec * sin_dec_z * cos_ra_diff) / denom;
    Ok((xi, eta))
}

/// Map rectangular tangent-plane offsets back onto the celestial sphere.
///
/// Exact algebraic inverse of [`sphere_to_plane`] for every point accepted by
/// the forward transform.
///
/// Arguments
/// ---------
/// * `xi`: east-west tangent-plane offset, in the unit selected by `scale`
/// * `eta`: north-south tangent-plane offset, in the unit selected by `scale`
/// * `ra_z`: right ascension of the tangent point [degrees]
/// * `dec_z`: declination of the tangent point [degrees]
/// * `scale`: angular unit of the input offsets
///
/// Return
/// ------
/// * the spherical coordinates `(ra, dec)` in degrees, with `ra` normalized
///   to [0°, 360°).
pub fn plane_to_sphere(
    xi: f64,
    eta: f64,
    ra_z: Degree,
    dec_z: Degree,
    scale: ProjectionScale,
) -> (Degree, Degree) {
    let k = scale.factor();
    let xi_r = xi / k;
    let eta_r = eta / k;

    let sin_dec_z = (dec_z * RADEG).sin();
    let cos_dec_z = (dec_z * RADEG).cos();

    let denom = cos_dec_z - eta_r * sin_dec_z;

    let ra = (xi_r.atan2(denom) + ra_z * RADEG).rem_euclid(DPI);
    let dec = (sin_dec_z + eta_r * cos_dec_z).atan2(xi_r.hypot(denom));

    (ra / RADEG, dec / RADEG)
}
