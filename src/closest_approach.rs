//! # Closest approach between a lens and a source
//!
//! A [`LensSourcePair`] binds a foreground lens and a background source into
//! a single tangent-plane frame (the lens's) so their apparent positions
//! become subtractable. The frame alignment happens **once**, at pairing
//! time, on a private copy of the source; the caller's objects are never
//! mutated and a source can participate in any number of pairings
//! concurrently.
//!
//! The epoch of minimum angular separation is located with a bounded
//! derivative-free search ([`crate::minimize`]). Over windows spanning many
//! years the separation is non-convex (the annual parallax term is
//! periodic), so the minimum found is the one inside the window, with no
//! global-optimality guarantee. Pick the window from the astrophysics of the
//! pair, not wider than needed.

use serde::{Deserialize, Serialize};

use crate::astrolens_errors::AstrolensError;
use crate::constants::{DecimalYear, Mas};
use crate::minimize::{brent_minimize, MinimizeOptions};
use crate::sky_object::SkyObject;

/// Epoch interval searched for the closest approach, in decimal Julian years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchWindow {
    pub start: DecimalYear,
    pub end: DecimalYear,
}

impl SearchWindow {
    pub fn new(start: DecimalYear, end: DecimalYear) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Symmetric window of `half_span` years around an epoch.
    pub fn around(epoch: DecimalYear, half_span: f64) -> Self {
        Self::new(epoch - half_span, epoch + half_span)
    }
}

/// Result of a closest-approach search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosestApproach {
    /// Epoch of minimum separation [decimal Julian year].
    pub epoch: DecimalYear,
    /// Minimum angular separation [mas].
    pub separation: Mas,
}

/// A lens and a source sharing the lens's tangent-plane frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LensSourcePair {
    lens: SkyObject,
    source: SkyObject,
}

impl LensSourcePair {
    /// Pair a lens with a source, aligning the source into the lens frame.
    ///
    /// The source is cloned and its tangent-plane origin re-projected about
    /// the lens's reference position; the caller's `source` is untouched.
    ///
    /// Errors
    /// ------
    /// * [`AstrolensError::DegenerateTrajectories`] if the pair has zero
    ///   relative proper motion and equal parallax: the separation is then
    ///   constant in time and an "epoch of closest approach" is meaningless.
    /// * [`AstrolensError::ProjectionUndefined`] if the source lies 90° or
    ///   more from the lens (no common tangent plane exists).
    pub fn new(lens: SkyObject, source: &SkyObject) -> Result<Self, AstrolensError> {
        if lens.pmra == source.pmra
            && lens.pmdec == source.pmdec
            && lens.parallax == source.parallax
        {
            return Err(AstrolensError::DegenerateTrajectories);
        }
        let source = source.aligned_to(&lens.reference_frame())?;
        Ok(Self { lens, source })
    }

    pub fn lens(&self) -> &SkyObject {
        &self.lens
    }

    /// The frame-aligned copy of the source used by the pair.
    pub fn source(&self) -> &SkyObject {
        &self.source
    }

    /// Angular separation between lens and source at an epoch, in mas.
    pub fn separation_at(&self, epoch: DecimalYear) -> Mas {
        self.lens
            .position_at(epoch)
            .separation(&self.source.position_at(epoch))
    }

    /// Default search window: lens reference epoch ± 50 years.
    pub fn default_window(&self) -> SearchWindow {
        SearchWindow::around(self.lens.epoch_0, 50.0)
    }

    /// Epoch and magnitude of the minimum separation inside a window.
    pub fn closest_approach(
        &self,
        window: &SearchWindow,
    ) -> Result<ClosestApproach, AstrolensError> {
        self.closest_approach_with(window, &MinimizeOptions::default())
    }

    /// Same as [`closest_approach`](Self::closest_approach) with an explicit
    /// convergence budget.
    pub fn closest_approach_with(
        &self,
        window: &SearchWindow,
        options: &MinimizeOptions,
    ) -> Result<ClosestApproach, AstrolensError> {
        brent_minimize(
            |epoch| self.separation_at(epoch),
            window.start,
            window.end,
            options,
        )
        .map(|(epoch, separation)| ClosestApproach { epoch, separation })
    }
}

/// Epoch of minimum separation between two objects.
///
/// One-shot convenience over [`LensSourcePair`]; `window` defaults to the
/// lens reference epoch ± 50 years.
pub fn time_of_closest_approach(
    lens: &SkyObject,
    source: &SkyObject,
    window: Option<SearchWindow>,
) -> Result<DecimalYear, AstrolensError> {
    let pair = LensSourcePair::new(lens.clone(), source)?;
    let window = window.unwrap_or_else(|| pair.default_window());
    pair.closest_approach(&window).map(|approach| approach.epoch)
}

/// Minimum angular separation between two objects, in mas.
pub fn minimum_separation(
    lens: &SkyObject,
    source: &SkyObject,
    window: Option<SearchWindow>,
) -> Result<Mas, AstrolensError> {
    let pair = LensSourcePair::new(lens.clone(), source)?;
    let window = window.unwrap_or_else(|| pair.default_window());
    pair.closest_approach(&window)
        .map(|approach| approach.separation)
}

#[cfg(test)]
mod closest_approach_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degenerate_pair_rejected() {
        let lens = SkyObject::new(1u64, 30.0, 60.0, 2015.0)
            .unwrap()
            .with_proper_motion(12.0, -7.0);
        let source = SkyObject::new(2u64, 30.01, 60.01, 2015.0)
            .unwrap()
            .with_proper_motion(12.0, -7.0);
        assert_eq!(
            LensSourcePair::new(lens, &source),
            Err(AstrolensError::DegenerateTrajectories)
        );
    }

    #[test]
    fn test_separation_vanishes_at_coincidence() {
        let lens = SkyObject::new(1u64, 30.0, 60.0, 2015.0)
            .unwrap()
            .with_proper_motion(250.0, -80.0);
        let source = SkyObject::new(2u64, 30.0, 60.0, 2015.0).unwrap();
        let pair = LensSourcePair::new(lens, &source).unwrap();
        assert_eq!(pair.separation_at(2015.0), 0.0);
        assert!(pair.separation_at(2016.0) > 0.0);
    }

    #[test]
    fn test_window_normalization() {
        let window = SearchWindow::new(2030.0, 2010.0);
        assert_eq!(window.start, 2010.0);
        assert_eq!(window.end, 2030.0);
        let around = SearchWindow::around(2015.0, 50.0);
        assert_eq!(around.start, 1965.0);
        assert_eq!(around.end, 2065.0);
    }

    #[test]
    fn test_pure_proper_motion_matches_analytic_minimum() {
        // zero parallax: the relative trajectory is a straight line and the
        // minimum has a closed form to compare against
        let lens = SkyObject::new(1u64, 30.0, 60.0, 2015.0)
            .unwrap()
            .with_proper_motion(250.0, -80.0);
        let source = SkyObject::new(2u64, 30.0002, 59.99995, 2015.0).unwrap();
        let pair = LensSourcePair::new(lens, &source).unwrap();

        let approach = pair
            .closest_approach(&SearchWindow::new(2010.0, 2020.0))
            .unwrap();
        assert_relative_eq!(approach.epoch, 2016.5152408200609, epsilon = 1e-5);
        assert_relative_eq!(approach.separation, 61.71640061583928, epsilon = 1e-6);
    }
}
