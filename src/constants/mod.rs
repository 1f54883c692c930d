//! Constants module for orbital calculations

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Degrees in a full circle
pub const FULL_CIRCLE_DEG: f64 = 360.0;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Days in a Julian century
pub const JULIAN_CENTURY_DAYS: f64 = 36_525.0;

// Earth orbital elements, Meeus "Astronomical Algorithms" Table 31.A.
// Each polynomial is a0 + a1*T + a2*T^2 + a3*T^3 with T in Julian
// centuries from J2000.0.
/// Mean longitude L coefficients, degrees
pub const MEAN_LONGITUDE_COEFFS: [f64; 4] = [100.466457, 36_000.769_827_8, 0.000_303_22, 0.000_000_020];
/// Perihelion longitude ϖ coefficients, degrees
pub const PERIHELION_LONGITUDE_COEFFS: [f64; 4] = [102.937348, 1.719_536_6, 0.000_456_88, -0.000_000_018];
/// Eccentricity e coefficients, dimensionless
pub const ECCENTRICITY_COEFFS: [f64; 4] = [0.016_708_63, -0.000_042_037, -0.000_000_126_7, -0.000_000_000_14];

/// Semi-major axis of the Earth's orbit in AU (Meeus Table 31.A)
pub const SEMI_MAJOR_AXIS_AU: f64 = 1.000_001_018;
