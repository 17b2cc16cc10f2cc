use hifitime::Epoch;
use std::str::FromStr;

use crate::astrolens_errors::AstrolensError;
use crate::constants::{DecimalYear, DAYS_PER_JULIAN_YEAR, JDTOMJD, MJD, T2000, Y2000};

/// Transformation from a decimal Julian year to a modified Julian date (MJD)
///
/// The Julian-epoch convention is used: year 2000.0 is J2000.0 (MJD 51544.5)
/// and one year is exactly 365.25 days. Exact inverse of [`mjd_to_decimal_year`].
///
/// Argument
/// --------
/// * `epoch`: an epoch expressed as a decimal Julian year (e.g. 2015.25)
///
/// Return
/// ------
/// * the same epoch in modified Julian date
pub fn decimal_year_to_mjd(epoch: DecimalYear) -> MJD {
    (epoch - Y2000) * DAYS_PER_JULIAN_YEAR + T2000
}

/// Transformation from a modified Julian date (MJD) to a decimal Julian year
///
/// Exact inverse of [`decimal_year_to_mjd`].
pub fn mjd_to_decimal_year(mjd: MJD) -> DecimalYear {
    Y2000 + (mjd - T2000) / DAYS_PER_JULIAN_YEAR
}

/// Transformation from modified Julian date (MJD) to julian date (JD)
pub fn mjd_to_jd(mjd: MJD) -> f64 {
    mjd + JDTOMJD
}

/// Transformation from julian date (JD) to modified Julian date (MJD)
pub fn jd_to_mjd(jd: f64) -> MJD {
    jd - JDTOMJD
}

/// Transformation from a date in the format YYYY-MM-ddTHH:mm:ss to modified julian date (MJD)
///
/// Argument
/// --------
/// * `date`: a date string in the format YYYY-MM-ddTHH:mm:ss (UTC)
///
/// Return
/// ------
/// * the input date in modified Julian date (MJD)
pub fn date_to_mjd(date: &str) -> Result<MJD, AstrolensError> {
    Epoch::from_str(date)
        .map(|epoch| epoch.to_mjd_utc_days())
        .map_err(|err| AstrolensError::InvalidDateFormat(format!("{date}: {err}")))
}
