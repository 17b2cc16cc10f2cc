use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstrolensError {
    #[error(
        "Tangent-plane projection undefined: ({ra}, {dec}) deg lies 90 deg or more from the tangent point ({ra_z}, {dec_z}) deg"
    )]
    ProjectionUndefined {
        ra: f64,
        dec: f64,
        ra_z: f64,
        dec_z: f64,
    },

    #[error("Invalid sky coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Lens and source trajectories are degenerate: zero relative proper motion and equal parallax")]
    DegenerateTrajectories,

    #[error("Scalar minimization did not converge within {iterations} iterations")]
    NonConvergence { iterations: usize },

    #[error("Cannot convert a zero parallax to a distance")]
    ZeroParallax,

    #[error(
        "Detection threshold {threshold_mas} mas exceeds the peak centroid shift {peak_mas} mas"
    )]
    SignalBelowThreshold { threshold_mas: f64, peak_mas: f64 },
}
