//! # Constants and type definitions for astrolens
//!
//! This module centralizes the **conversion factors** and **common type
//! definitions** used throughout the `astrolens` library.
//!
//! ## Overview
//!
//! - Angle conversions (degrees ↔ radians ↔ arcseconds ↔ milliarcseconds)
//! - Calendar anchors (J2000.0, JD ↔ MJD offset, Julian year length)
//! - Core type aliases used across the crate
//! - Identifier type for catalog objects
//!
//! These definitions are used by all main modules, including the tangent-plane
//! projector, the solar parallax model and the closest-approach solver.

use serde::{Deserialize, Serialize};

// -------------------------------------------------------------------------------------------------
// Angle and calendar conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds per degree
pub const ARCSEC_PER_DEG: f64 = 3600.0;

/// Milliarcseconds per degree
pub const MAS_PER_DEG: f64 = 3_600_000.0;

/// Radians → arcseconds
pub const RAD_TO_ARCSEC: f64 = 180.0 / std::f64::consts::PI * ARCSEC_PER_DEG;

/// Radians → milliarcseconds
pub const RAD_TO_MAS: f64 = 180.0 / std::f64::consts::PI * MAS_PER_DEG;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00)
pub const T2000: f64 = 51544.5;

/// Decimal Julian year of the J2000.0 epoch
pub const Y2000: f64 = 2000.0;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Number of days in a Julian year
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in milliarcseconds
pub type Mas = f64;
/// Angle in radians
pub type Radian = f64;
/// Angular rate in milliarcseconds per Julian year
pub type MasPerYear = f64;
/// Distance in parsecs
pub type Parsec = f64;
/// Mass in solar masses
pub type SolarMass = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
/// Epoch as a decimal Julian year (e.g. 2015.5)
pub type DecimalYear = f64;

// -------------------------------------------------------------------------------------------------
// Identifiers
// -------------------------------------------------------------------------------------------------

/// Identifier of a catalog object.
///
/// This can be:
/// - A numeric catalog identifier (e.g. a Gaia source id)
/// - A string designation (e.g. `"LAWD 37"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObjectId {
    /// Integer-based catalog identifier
    Int(u64),
    /// String-based designation
    String(String),
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectId::Int(n) => write!(f, "{n}"),
            ObjectId::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for ObjectId {
    fn from(n: u64) -> Self {
        ObjectId::Int(n)
    }
}

impl From<String> for ObjectId {
    fn from(s: String) -> Self {
        ObjectId::String(s)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        ObjectId::String(s.to_string())
    }
}

impl std::str::FromStr for ObjectId {
    type Err = std::num::ParseIntError;

    /// Try to parse an `ObjectId` from a string.
    /// - Pure digits → `Int(u64)`
    /// - Otherwise  → `String(String)`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u64>() {
            Ok(n) => Ok(ObjectId::Int(n)),
            Err(e) => {
                if s.chars().any(|c| !c.is_ascii_digit()) {
                    Ok(ObjectId::String(s.to_string()))
                } else {
                    Err(e)
                }
            }
        }
    }
}

#[cfg(test)]
mod constants_test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_object_id_from() {
        assert_eq!(ObjectId::from(4_472_832_130_942_575_872), ObjectId::Int(4_472_832_130_942_575_872));
        assert_eq!(ObjectId::from("LAWD 37"), ObjectId::String("LAWD 37".to_string()));
        assert_eq!(ObjectId::from_str("123456789").unwrap(), ObjectId::Int(123456789));
        assert_eq!(
            ObjectId::from_str("Stein 2051 B").unwrap(),
            ObjectId::String("Stein 2051 B".to_string())
        );
    }

    #[test]
    fn test_conversion_factors() {
        assert_eq!(MAS_PER_DEG, 3600.0 * 1000.0);
        assert_eq!(RAD_TO_MAS, 180.0 / std::f64::consts::PI * MAS_PER_DEG);
        assert_eq!(RAD_TO_ARCSEC, 180.0 / std::f64::consts::PI * ARCSEC_PER_DEG);
    }
}
