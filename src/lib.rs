//! # astrolens
//!
//! Astrometric modeling of microlensing events between two point sources on
//! the celestial sphere: a foreground **lens** and a background **source**,
//! each moving under proper motion and annual parallax.
//!
//! ## Overview
//!
//! - [`tangent_plane`] – gnomonic projection between spherical coordinates and
//!   a flat tangent-plane system about a reference point
//! - [`parallax`] – low-order analytic solar model and the west/north parallax
//!   factors that scale an annual parallax into an apparent displacement
//! - [`sky_object`] – the trajectory model: reference position + proper motion
//!   + parallax composed into a time-parameterized tangent-plane position
//! - [`closest_approach`] – pairing of a lens and a source in a common frame
//!   and the bounded search for their epoch of minimum angular separation
//! - [`microlens`] – closed-form lensing observables (Einstein radius and
//!   time, centroid shift, astrometric-signal duration)
//! - [`minimize`] – derivative-free bounded scalar minimizer driving the
//!   closest-approach search
//! - [`time`] – decimal Julian year, MJD and JD conversions
//!
//! The solar model is a low-order analytic approximation, not a full JPL
//! ephemeris; no light-travel-time or relativistic corrections are applied.

pub mod astrolens_errors;
pub mod closest_approach;
pub mod constants;
pub mod microlens;
pub mod minimize;
pub mod parallax;
pub mod sky_object;
pub mod tangent_plane;
pub mod time;
