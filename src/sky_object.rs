//! # Sky objects and their astrometric trajectories
//!
//! A [`SkyObject`] is a point source defined by a catalog reference position,
//! a reference epoch, proper motion and parallax. Its apparent position at an
//! arbitrary epoch is the composition of the linear proper-motion drift with
//! the annual parallax wiggle from the [`crate::parallax`] model, expressed
//! in the tangent plane of a [`ReferenceFrame`].
//!
//! ## Frames
//!
//! Positions are measured in the frame stored on the object, which is its own
//! reference position at construction time. To compare two objects their
//! tangent-plane offsets must live in a **common** frame:
//! [`SkyObject::aligned_to`] returns a copy whose origin offset has been
//! re-projected into another frame. The operation is idempotent and never
//! mutates the receiver, so one catalog object can safely participate in
//! several pairings at once.
//!
//! ## Units
//!
//! - Positions: **degrees**; epochs: **decimal Julian years**.
//! - Proper motions: **mas/yr**, with `pmra` already including the cos δ
//!   factor (μ_α·cos δ, the catalog convention matching the projection).
//! - Parallax: **mas**. A non-positive parallax is accepted unvalidated, as
//!   catalogs do publish malformed or negative values.

use serde::{Deserialize, Serialize};

use crate::astrolens_errors::AstrolensError;
use crate::constants::{
    DecimalYear, Degree, Mas, MasPerYear, ObjectId, MAS_PER_DEG, RADEG,
};
use crate::parallax::{parallax_factor_north, parallax_factor_west};
use crate::tangent_plane::{plane_to_sphere, sphere_to_plane, ProjectionScale};
use crate::time::decimal_year_to_mjd;

/// Tangent point of a tangent-plane coordinate system, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceFrame {
    ra: Degree,
    dec: Degree,
}

impl ReferenceFrame {
    /// Build a reference frame, normalizing the right ascension to
    /// [0°, 360°).
    ///
    /// Errors
    /// ------
    /// * [`AstrolensError::InvalidCoordinates`] if `dec` is not strictly
    ///   inside (-90°, 90°); the projection is undefined at the poles.
    pub fn new(ra: Degree, dec: Degree) -> Result<Self, AstrolensError> {
        if !(dec > -90.0 && dec < 90.0) {
            return Err(AstrolensError::InvalidCoordinates(format!(
                "declination {dec} deg outside (-90, 90)"
            )));
        }
        Ok(Self {
            ra: ra.rem_euclid(360.0),
            dec,
        })
    }

    pub fn ra(&self) -> Degree {
        self.ra
    }

    pub fn dec(&self) -> Degree {
        self.dec
    }
}

/// Rectangular offset from a [`ReferenceFrame`] origin, in milliarcseconds.
///
/// `xi` grows toward increasing right ascension (east), `eta` toward
/// increasing declination (north).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TangentPlanePoint {
    pub xi: Mas,
    pub eta: Mas,
}

impl TangentPlanePoint {
    /// Euclidean distance to another point of the same frame, in mas.
    pub fn separation(&self, other: &TangentPlanePoint) -> Mas {
        (self.xi - other.xi).hypot(self.eta - other.eta)
    }
}

/// A point source on the celestial sphere with its astrometric parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyObject {
    /// Caller-assigned identifier, carried through untouched.
    pub id: ObjectId,
    /// Reference right ascension [degrees].
    pub ra_0: Degree,
    /// Reference declination [degrees].
    pub dec_0: Degree,
    /// Epoch of the reference position [decimal Julian year].
    pub epoch_0: DecimalYear,
    /// Proper motion in right ascension, μ_α·cos δ [mas/yr].
    pub pmra: MasPerYear,
    /// Proper motion in declination [mas/yr].
    pub pmdec: MasPerYear,
    /// Annual parallax [mas]. Not validated; catalogs publish negative values.
    pub parallax: Mas,
    /// Apparent photometric magnitude, if known.
    pub magnitude: Option<f64>,
    /// Frame the stored origin offset is expressed in.
    frame: ReferenceFrame,
    /// Tangent-plane offset of the reference position in `frame` [mas].
    xi_0: Mas,
    /// Tangent-plane offset of the reference position in `frame` [mas].
    eta_0: Mas,
}

impl SkyObject {
    /// Build a static, non-parallactic object at a reference position.
    ///
    /// Proper motion and parallax default to zero; use
    /// [`with_proper_motion`](Self::with_proper_motion),
    /// [`with_parallax`](Self::with_parallax) and
    /// [`with_magnitude`](Self::with_magnitude) to supply them. The stored
    /// tangent-plane origin is the projection of the reference position onto
    /// its own frame, which is `(0, 0)` by construction; it becomes non-zero
    /// only after [`aligned_to`](Self::aligned_to).
    ///
    /// Arguments
    /// ---------
    /// * `id`: opaque caller-assigned identifier
    /// * `ra_0`: reference right ascension [degrees]
    /// * `dec_0`: reference declination [degrees]
    /// * `epoch_0`: epoch of the reference position [decimal Julian year]
    ///
    /// Errors
    /// ------
    /// * [`AstrolensError::InvalidCoordinates`] for a polar declination.
    pub fn new(
        id: impl Into<ObjectId>,
        ra_0: Degree,
        dec_0: Degree,
        epoch_0: DecimalYear,
    ) -> Result<Self, AstrolensError> {
        let frame = ReferenceFrame::new(ra_0, dec_0)?;
        Ok(Self {
            id: id.into(),
            ra_0,
            dec_0,
            epoch_0,
            pmra: 0.0,
            pmdec: 0.0,
            parallax: 0.0,
            magnitude: None,
            frame,
            xi_0: 0.0,
            eta_0: 0.0,
        })
    }

    /// Set the proper motion (μ_α·cos δ, μ_δ) in mas/yr.
    pub fn with_proper_motion(mut self, pmra: MasPerYear, pmdec: MasPerYear) -> Self {
        self.pmra = pmra;
        self.pmdec = pmdec;
        self
    }

    /// Set the annual parallax in mas.
    pub fn with_parallax(mut self, parallax: Mas) -> Self {
        self.parallax = parallax;
        self
    }

    /// Set the apparent magnitude.
    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    /// Frame of this object's own reference position.
    pub fn reference_frame(&self) -> ReferenceFrame {
        // Constructed from the same values already validated by `new`.
        ReferenceFrame {
            ra: self.ra_0.rem_euclid(360.0),
            dec: self.dec_0,
        }
    }

    /// Frame the stored origin offset (and hence [`position_at`](Self::position_at))
    /// is currently expressed in.
    pub fn frame(&self) -> ReferenceFrame {
        self.frame
    }

    /// Re-express this object's tangent-plane origin in another frame.
    ///
    /// Returns a copy whose stored origin offset is the forward projection of
    /// the reference position onto `frame`; the receiver is left untouched.
    /// The projection always starts from the catalog position, so aligning an
    /// already-aligned copy to the same frame is a no-op and an object can be
    /// aligned to any number of frames independently.
    ///
    /// Errors
    /// ------
    /// * [`AstrolensError::ProjectionUndefined`] if the reference position is
    ///   90° or more from the target frame's tangent point.
    pub fn aligned_to(&self, frame: &ReferenceFrame) -> Result<SkyObject, AstrolensError> {
        let (xi_0, eta_0) = sphere_to_plane(
            self.ra_0,
            self.dec_0,
            frame.ra(),
            frame.dec(),
            ProjectionScale::Mas,
        )?;
        let mut aligned = self.clone();
        aligned.frame = *frame;
        aligned.xi_0 = xi_0;
        aligned.eta_0 = eta_0;
        Ok(aligned)
    }

    /// Apparent tangent-plane position at an epoch, in the object's stored
    /// frame.
    ///
    /// The position composes the linear proper-motion drift since `epoch_0`
    /// with the annual parallax displacement at that date. With a non-zero
    /// parallax this is not a straight line: the parallax term is periodic
    /// with a one-year period.
    ///
    /// Arguments
    /// ---------
    /// * `epoch`: evaluation epoch [decimal Julian year]
    ///
    /// Return
    /// ------
    /// * the apparent offset from the stored frame's origin, in mas
    pub fn position_at(&self, epoch: DecimalYear) -> TangentPlanePoint {
        let mjd = decimal_year_to_mjd(epoch);
        let dt = epoch - self.epoch_0;

        let xi = self.parallax * parallax_factor_west(mjd, self.ra_0) + self.pmra * dt + self.xi_0;
        let eta = self.parallax * parallax_factor_north(mjd, self.ra_0, self.dec_0)
            + self.pmdec * dt
            + self.eta_0;

        TangentPlanePoint { xi, eta }
    }

    /// Apparent equatorial position at an epoch, exact form.
    ///
    /// Evaluates [`position_at`](Self::position_at) and maps the result back
    /// onto the sphere through the inverse projection about the stored frame.
    /// This is the authoritative variant: it includes parallax and is valid
    /// at any declination the projection accepts.
    pub fn equatorial_position_at(&self, epoch: DecimalYear) -> (Degree, Degree) {
        let position = self.position_at(epoch);
        plane_to_sphere(
            position.xi,
            position.eta,
            self.frame.ra(),
            self.frame.dec(),
            ProjectionScale::Mas,
        )
    }

    /// Apparent equatorial position at an epoch, linear approximation.
    ///
    /// Quick-look variant applying the proper motion directly in degrees
    /// (`pmra` is divided back by cos δ) and **ignoring parallax**. Use
    /// [`equatorial_position_at`](Self::equatorial_position_at) whenever the
    /// parallax displacement matters.
    pub fn equatorial_position_linear(&self, epoch: DecimalYear) -> (Degree, Degree) {
        let dt = epoch - self.epoch_0;
        let ra = self.ra_0 + self.pmra * dt / (MAS_PER_DEG * (self.dec_0 * RADEG).cos());
        let dec = self.dec_0 + self.pmdec * dt / MAS_PER_DEG;
        (ra, dec)
    }
}

#[cfg(test)]
mod sky_object_test {
    use super::*;
    use approx::assert_relative_eq;

    fn moving_object() -> SkyObject {
        SkyObject::new(123456789u64, 30.0, 60.0, 2015.0)
            .unwrap()
            .with_proper_motion(100.0, 100.0)
            .with_parallax(200.0)
    }

    #[test]
    fn test_new_defaults() {
        let obj = SkyObject::new(123456789u64, 30.0, 60.0, 2015.0).unwrap();
        assert_eq!(obj.id, ObjectId::Int(123456789));
        assert_eq!(obj.ra_0, 30.0);
        assert_eq!(obj.dec_0, 60.0);
        assert_eq!(obj.epoch_0, 2015.0);
        assert_eq!(obj.pmra, 0.0);
        assert_eq!(obj.pmdec, 0.0);
        assert_eq!(obj.parallax, 0.0);
        assert_eq!(obj.magnitude, None);
    }

    #[test]
    fn test_builder_fields() {
        let obj = moving_object().with_magnitude(11.5);
        assert_eq!(obj.pmra, 100.0);
        assert_eq!(obj.pmdec, 100.0);
        assert_eq!(obj.parallax, 200.0);
        assert_eq!(obj.magnitude, Some(11.5));
    }

    #[test]
    fn test_polar_declination_rejected() {
        assert!(SkyObject::new(1u64, 10.0, 90.0, 2015.0).is_err());
        assert!(SkyObject::new(1u64, 10.0, -93.0, 2015.0).is_err());
    }

    #[test]
    fn test_static_object_stays_at_origin() {
        let obj = SkyObject::new(1u64, 30.0, 60.0, 2015.0).unwrap();
        let position = obj.position_at(2020.0);
        assert_eq!(position.xi, 0.0);
        assert_eq!(position.eta, 0.0);
    }

    #[test]
    fn test_position_at_reference_epoch_is_pure_parallax() {
        let obj = moving_object();
        let position = obj.position_at(2015.0);
        assert_relative_eq!(position.xi, -174.46171327620277, max_relative = 1e-12);
        assert_relative_eq!(position.eta, -144.54070602980374, max_relative = 1e-12);
    }

    #[test]
    fn test_position_at_composes_drift_and_parallax() {
        let obj = moving_object();
        let position = obj.position_at(2016.5);
        assert_relative_eq!(position.xi, 324.687249036876, max_relative = 1e-12);
        assert_relative_eq!(position.eta, 294.9496996072643, max_relative = 1e-12);
    }

    #[test]
    fn test_equatorial_position_exact() {
        let obj = moving_object();
        let (ra, dec) = obj.equatorial_position_at(2016.5);
        assert_relative_eq!(ra, 30.00018038225178, epsilon = 1e-11);
        assert_relative_eq!(dec, 60.00008193034915, epsilon = 1e-11);
    }

    #[test]
    fn test_equatorial_position_linear() {
        let obj = moving_object();
        let (ra, dec) = obj.equatorial_position_linear(2016.5);
        assert_relative_eq!(ra, 30.000083333333333, epsilon = 1e-12);
        assert_relative_eq!(dec, 60.00004166666667, epsilon = 1e-12);

        let (ra5, dec5) = obj.equatorial_position_linear(2020.0);
        assert_relative_eq!(ra5, 30.00027777777778, epsilon = 1e-12);
        assert_relative_eq!(dec5, 60.00013888888889, epsilon = 1e-12);
    }

    #[test]
    fn test_aligned_to_is_idempotent() {
        let lens = SkyObject::new(1u64, 30.0, 60.0, 2015.0).unwrap();
        let source = SkyObject::new(2u64, 30.0002, 59.99995, 2015.0).unwrap();

        let once = source.aligned_to(&lens.reference_frame()).unwrap();
        let twice = once.aligned_to(&lens.reference_frame()).unwrap();
        assert_eq!(once, twice);
        // the receiver is untouched
        assert_eq!(source.position_at(2015.0).xi, 0.0);

        let origin = once.position_at(2015.0);
        assert_relative_eq!(origin.xi, 360.0005441432681, max_relative = 1e-12);
        assert_relative_eq!(origin.eta, -179.99945582961303, max_relative = 1e-12);
    }

    #[test]
    fn test_separation_norm() {
        let a = TangentPlanePoint { xi: 3.0, eta: 0.0 };
        let b = TangentPlanePoint { xi: 0.0, eta: 4.0 };
        assert_eq!(a.separation(&b), 5.0);
    }
}
