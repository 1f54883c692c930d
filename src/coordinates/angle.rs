//! # Angle Representation Module
//!
//! This module provides the degree/radian conversion utilities used by the
//! whole crate and an immutable [`Angle`] value that carries both
//! representations of a single angular measurement.
//!
//! ## Unit Policy
//!
//! Anomalies and longitudes move through the computation pipeline in
//! degrees. Trigonometric functions take radians, so every call site
//! converts with [`to_radians`] immediately before evaluating. Angles are
//! reduced to their canonical representative in `[0, 360)` with
//! [`to_coterminal`] before being reported or compared; raw polynomial
//! output can accumulate many whole revolutions for epochs far from
//! J2000.0.
//!
//! ## Examples
//!
//! ```rust
//! use perihelion::coordinates::angle::{to_coterminal, Angle};
//!
//! // Centuries of mean motion reduce back into [0, 360)
//! let reduced = to_coterminal(36_100.5);
//! assert!((reduced - 100.5).abs() < 1e-9);
//!
//! // Right ascension 13h 07m 31s as an angle
//! let ra = Angle::from_hms(13.0, 7.0, 31.0);
//! assert!((ra.degrees() - 13.12527777777778).abs() < 1e-12);
//! ```

use crate::constants::{DEG2RAD, FULL_CIRCLE_DEG, RAD2DEG};

/// Converts an angle in degrees to radians
///
/// Total over the reals; non-finite inputs propagate unchanged.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * DEG2RAD
}

/// Converts an angle in radians to degrees
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * RAD2DEG
}

/// Reduces an angle in degrees to its coterminal representative in `[0, 360)`
///
/// Works for inputs of any magnitude and sign, including the very large
/// mean longitudes produced by the element polynomials for epochs far
/// from J2000.0. Idempotent: reducing an already reduced angle returns
/// it unchanged.
///
/// # Examples
///
/// ```rust
/// use perihelion::coordinates::angle::to_coterminal;
///
/// assert_eq!(to_coterminal(725.0), 5.0);
/// assert_eq!(to_coterminal(-30.0), 330.0);
/// assert_eq!(to_coterminal(359.9), 359.9);
/// ```
#[inline]
pub fn to_coterminal(degrees: f64) -> f64 {
    let mut d = degrees % FULL_CIRCLE_DEG;
    if d < 0.0 {
        d += FULL_CIRCLE_DEG;
    }
    d
}

/// An angular measurement carrying both unit representations
///
/// Both fields are fixed at construction and kept consistent under the
/// invariant `radians = degrees * π/180`. The value is immutable; build
/// a new `Angle` rather than mutating one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    degrees: f64,
    radians: f64,
}

impl Angle {
    /// Creates an angle from a decimal degree value, e.g. 28°.5793
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            degrees,
            radians: to_radians(degrees),
        }
    }

    /// Creates an angle from an hour/minute/second triple, e.g. R.A. 13h 07m 31s
    ///
    /// The triple is treated as decimal hours (`h + m/60 + s/3600`) and
    /// the result expressed in degrees.
    pub fn from_hms(hours: f64, minutes: f64, seconds: f64) -> Self {
        let degrees = hours + minutes / 60.0 + seconds / 3600.0;
        Angle {
            degrees,
            radians: to_radians(degrees),
        }
    }

    /// Returns the angle value in degrees
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Returns the angle value in radians
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// Returns a new angle reduced to `[0, 360)` degrees
    pub fn coterminal(&self) -> Self {
        Angle::from_degrees(to_coterminal(self.degrees))
    }
}
