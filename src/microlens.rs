//! # Microlensing observables
//!
//! Closed-form observables of a lens-source system, consuming the minimum
//! separation produced by [`crate::closest_approach`]:
//!
//! - [`einstein_radius`] – characteristic angular scale of the lens
//! - [`einstein_time`] – Einstein-radius crossing time
//! - [`centroid_shift`] – apparent displacement of the blended image
//!   centroid, for a dark or a luminous lens
//! - [`astrometric_signal_duration`] – time the centroid shift spends above
//!   a detection threshold
//! - [`distance_pc`] – parallax → distance inversion
//!
//! Reference values for the Einstein radius and the centroid shift follow
//! Proft et al. (2011), Table 2.

use serde::{Deserialize, Serialize};

use crate::astrolens_errors::AstrolensError;
use crate::constants::{Mas, MasPerYear, Parsec, SolarMass};

/// Einstein radius of a 1 solar-mass lens at 1 pc with the source at
/// infinity, in mas: sqrt(4GM☉/(c²·1pc)) in angular units.
const EINSTEIN_COEFF: f64 = 90.2;

/// Einstein radius of a lens-source system, in mas.
///
/// Arguments
/// ---------
/// * `lens_mass`: mass of the foreground lens [solar masses]
/// * `lens_dist`: distance to the lens [pc]
/// * `source_dist`: distance to the source [pc]; `None` places the source at
///   infinity
pub fn einstein_radius(
    lens_mass: SolarMass,
    lens_dist: Parsec,
    source_dist: Option<Parsec>,
) -> Mas {
    match source_dist {
        None => EINSTEIN_COEFF * (lens_mass / lens_dist).sqrt(),
        Some(source_dist) => {
            EINSTEIN_COEFF * ((lens_mass / lens_dist) * (1.0 - lens_dist / source_dist)).sqrt()
        }
    }
}

/// Einstein-radius crossing time, in Julian years.
///
/// Arguments
/// ---------
/// * `einstein_radius`: angular Einstein radius [mas]
/// * `relative_pm`: relative lens-source proper motion [mas/yr]
pub fn einstein_time(einstein_radius: Mas, relative_pm: MasPerYear) -> f64 {
    einstein_radius / relative_pm
}

/// Inputs of [`centroid_shift`].
///
/// `source_dist` absent means the source is at infinity. The lens is treated
/// as dark unless **both** magnitudes are present, in which case the shift is
/// attenuated by the blending of the two images.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CentroidShiftParams {
    /// Mass of the foreground lens [solar masses].
    pub lens_mass: SolarMass,
    /// Distance to the lens [pc].
    pub lens_dist: Parsec,
    /// Minimum lens-source angular separation [mas].
    pub min_sep: Mas,
    /// Distance to the source [pc]; `None` → infinity.
    pub source_dist: Option<Parsec>,
    /// Apparent magnitude of the lens, if luminous.
    pub lens_mag: Option<f64>,
    /// Apparent magnitude of the source.
    pub source_mag: Option<f64>,
}

impl CentroidShiftParams {
    /// Dark lens with the source at infinity.
    pub fn dark(lens_mass: SolarMass, lens_dist: Parsec, min_sep: Mas) -> Self {
        Self {
            lens_mass,
            lens_dist,
            min_sep,
            source_dist: None,
            lens_mag: None,
            source_mag: None,
        }
    }
}

/// Expected astrometric centroid shift of a lens-source system, in mas.
///
/// For a dark lens the shift is `u·θE / (u² + 2)` with `u` the minimum
/// separation in Einstein radii. When both magnitudes are given, the shift is
/// divided by the luminosity factor `1 + 10^((m_lens − m_source)/−2.5)`
/// accounting for the light of the lens diluting the centroid displacement.
pub fn centroid_shift(params: &CentroidShiftParams) -> Mas {
    let theta_e = einstein_radius(params.lens_mass, params.lens_dist, params.source_dist);
    let u = params.min_sep / theta_e;
    let dark_shift = u * theta_e / (u * u + 2.0);

    match (params.lens_mag, params.source_mag) {
        (Some(lens_mag), Some(source_mag)) => {
            let lum_factor = 1.0 + 10f64.powf((lens_mag - source_mag) / -2.5);
            dark_shift / lum_factor
        }
        _ => dark_shift,
    }
}

/// Duration of the astrometric signal above a detection threshold, in years.
///
/// Models the dark-lens shift along a uniform relative trajectory with impact
/// parameter `min_sep`: the shift `δ(u) = u·θE/(u²+2)` stays above
/// `threshold` while `u` is below the larger root of
/// `u²·δ − u·θE + 2·δ = 0`, giving a duration of
/// `2·(θE/μ)·sqrt(u_thr² − u0²)`.
///
/// Arguments
/// ---------
/// * `einstein_radius`: angular Einstein radius θE [mas]
/// * `min_sep`: minimum lens-source separation [mas]
/// * `relative_pm`: relative proper motion μ [mas/yr]
/// * `threshold`: detection threshold on the centroid shift [mas]
///
/// Return
/// ------
/// * the time spent above the threshold, in years; `0.0` when the shift
///   never reaches it along this trajectory
///
/// Errors
/// ------
/// * [`AstrolensError::SignalBelowThreshold`] if the threshold exceeds the
///   peak shift `θE/(2√2)` reachable by any trajectory of this lens.
pub fn astrometric_signal_duration(
    einstein_radius: Mas,
    min_sep: Mas,
    relative_pm: MasPerYear,
    threshold: Mas,
) -> Result<f64, AstrolensError> {
    let discriminant = einstein_radius * einstein_radius - 8.0 * threshold * threshold;
    if discriminant < 0.0 {
        return Err(AstrolensError::SignalBelowThreshold {
            threshold_mas: threshold,
            peak_mas: einstein_radius / (2.0 * std::f64::consts::SQRT_2),
        });
    }

    let u_threshold = (einstein_radius + discriminant.sqrt()) / (2.0 * threshold);
    let u_0 = min_sep / einstein_radius;
    if u_threshold * u_threshold <= u_0 * u_0 {
        return Ok(0.0);
    }

    Ok(2.0 * (u_threshold * u_threshold - u_0 * u_0).sqrt() * einstein_radius / relative_pm)
}

/// Distance from an annual parallax, `1000 / parallax`, in pc.
///
/// Errors
/// ------
/// * [`AstrolensError::ZeroParallax`] for a parallax of exactly zero. A
///   negative parallax is passed through (the caller gets a negative
///   distance), mirroring the absence of validation on catalog parallaxes.
pub fn distance_pc(parallax: Mas) -> Result<Parsec, AstrolensError> {
    if parallax == 0.0 {
        return Err(AstrolensError::ZeroParallax);
    }
    Ok(1000.0 / parallax)
}
