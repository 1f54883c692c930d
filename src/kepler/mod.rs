//! Kepler equation solvers
//!
//! Two independent iterative methods for Kepler's equation
//! `E = M + e sin E`, with the mean anomaly `M` and the returned
//! eccentric anomaly `E` both in degrees.
//!
//! With degree-valued anomalies the additive correction term carries the
//! eccentricity scaled to degrees (`e·180/π`, the Meeus convention),
//! while the Newton denominator `1 − e cos E` is a pure ratio and uses
//! the dimensionless `e`. Each trigonometric call converts its degree
//! argument to radians at the call site.
//!
//! Both methods run a residual-tolerance loop bounded by a fixed
//! iteration cap (the classic budgets: 120 for the fixed-point method,
//! 5 for Newton–Raphson) and report the iterations used together with
//! the achieved residual. Hitting the cap is not an error; callers that
//! care inspect [`Solution::residual`].

use crate::coordinates::angle::{to_degrees, to_radians};
use crate::{PerihelionError, Result};

/// Iteration cap for the fixed-point method (Meeus's first method)
pub const FIXED_POINT_MAX_ITER: usize = 120;
/// Iteration cap for the Newton–Raphson method (Meeus's second method)
pub const NEWTON_MAX_ITER: usize = 5;
/// Convergence tolerance on the Kepler residual, degrees
pub const RESIDUAL_TOLERANCE_DEG: f64 = 1e-12;

/// Result of a Kepler equation solve
#[derive(Debug, Clone, Copy)]
pub struct Solution {
    /// Eccentric anomaly E in degrees, unreduced
    pub eccentric_anomaly: f64,
    /// Iterations actually performed
    pub iterations: usize,
    /// Achieved residual `|M + e_deg·sin E − E|` in degrees
    pub residual: f64,
}

/// Residual of Kepler's equation at a trial E, in degrees
fn kepler_residual(eccentricity: f64, mean_anomaly: f64, trial: f64) -> f64 {
    let e_deg = to_degrees(eccentricity);
    mean_anomaly + e_deg * to_radians(trial).sin() - trial
}

/// Rejects inputs outside the solvers' domain
fn check_inputs(eccentricity: f64, mean_anomaly: f64) -> Result<()> {
    if !eccentricity.is_finite() || !mean_anomaly.is_finite() {
        return Err(PerihelionError::InvalidInput(format!(
            "eccentricity and mean anomaly must be finite, got e = {}, M = {}",
            eccentricity, mean_anomaly
        )));
    }
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(PerihelionError::DomainError(format!(
            "eccentricity {} is outside the elliptical range [0, 1)",
            eccentricity
        )));
    }
    Ok(())
}

/// Solves Kepler's equation by direct functional iteration
///
/// Meeus's first method: seed `E = M` and repeat
/// `E ← M + e_deg·sin E`. Linearly convergent with ratio ≈ e, so the
/// 120-iteration cap is generous for planetary eccentricities and the
/// loop usually exits early on the residual tolerance. For `e = 0` the
/// first update already returns `E == M` exactly.
pub fn solve_fixed_point(eccentricity: f64, mean_anomaly: f64) -> Result<Solution> {
    check_inputs(eccentricity, mean_anomaly)?;

    let e_deg = to_degrees(eccentricity);
    let mut e_anomaly = mean_anomaly;
    let mut iterations = 0;

    for i in 1..=FIXED_POINT_MAX_ITER {
        e_anomaly = mean_anomaly + e_deg * to_radians(e_anomaly).sin();
        iterations = i;
        if kepler_residual(eccentricity, mean_anomaly, e_anomaly).abs() <= RESIDUAL_TOLERANCE_DEG {
            break;
        }
    }

    Ok(Solution {
        eccentric_anomaly: e_anomaly,
        iterations,
        residual: kepler_residual(eccentricity, mean_anomaly, e_anomaly).abs(),
    })
}

/// Solves Kepler's equation by Newton–Raphson iteration
///
/// Meeus's second method: seed `E = M` and repeat
/// `E ← E + (M + e_deg·sin E − E) / (1 − e·cos E)`. Quadratically
/// convergent; five iterations are ample anywhere in the low-eccentricity
/// regime. The denominator can only approach zero as `e → 1`, which the
/// domain check excludes, but a non-finite update still aborts the solve
/// rather than propagating.
pub fn solve_newton(eccentricity: f64, mean_anomaly: f64) -> Result<Solution> {
    check_inputs(eccentricity, mean_anomaly)?;

    let e_deg = to_degrees(eccentricity);
    let mut e_anomaly = mean_anomaly;
    let mut iterations = 0;

    for i in 1..=NEWTON_MAX_ITER {
        let e_rad = to_radians(e_anomaly);
        let correction = (mean_anomaly + e_deg * e_rad.sin() - e_anomaly)
            / (1.0 - eccentricity * e_rad.cos());
        let next = e_anomaly + correction;
        if !next.is_finite() {
            return Err(PerihelionError::DomainError(format!(
                "Newton-Raphson update diverged at iteration {} (e = {}, M = {})",
                i, eccentricity, mean_anomaly
            )));
        }
        e_anomaly = next;
        iterations = i;
        if kepler_residual(eccentricity, mean_anomaly, e_anomaly).abs() <= RESIDUAL_TOLERANCE_DEG {
            break;
        }
    }

    Ok(Solution {
        eccentric_anomaly: e_anomaly,
        iterations,
        residual: kepler_residual(eccentricity, mean_anomaly, e_anomaly).abs(),
    })
}
