//! Perihelion: Earth orbital position calculations via Kepler's equation
//!
//! This crate computes the Earth's position on its elliptical orbit at a
//! given instant. It evaluates the Meeus Table 31.A orbital elements for a
//! time expressed in Julian centuries from J2000.0, solves Kepler's
//! equation `E = M + e sin E` for the eccentric anomaly with two competing
//! iterative methods, and propagates the result through the true-anomaly,
//! radius-vector and planar-coordinate formulas.
//!
//! All anomalies are carried in degrees; every trigonometric evaluation
//! converts its argument to radians at the call site.

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod earth;
pub mod kepler;
pub mod orbit;
pub mod time;

// Re-export commonly used types
pub use coordinates::angle::Angle;
pub use coordinates::cartesian::Cartesian2;
pub use earth::Earth;
pub use kepler::Solution;
pub use time::Moment;

/// Main error type for the perihelion library
#[derive(Debug, Error)]
pub enum PerihelionError {
    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Time error: {0}")]
    TimeError(String),
}

/// Result type for perihelion operations
pub type Result<T> = std::result::Result<T, PerihelionError>;
