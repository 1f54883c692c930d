//! Earth orbital element calculations
//!
//! Evaluates the Meeus Table 31.A cubic polynomials for the Earth's mean
//! longitude, perihelion longitude and eccentricity at a given time, and
//! derives the mean anomaly and the orbit's semi-axes. Every accessor
//! recomputes from the stored time scalar; nothing is cached or mutated.

use crate::constants::{
    ECCENTRICITY_COEFFS, MEAN_LONGITUDE_COEFFS, PERIHELION_LONGITUDE_COEFFS, SEMI_MAJOR_AXIS_AU,
};
use crate::time::Moment;
use crate::{PerihelionError, Result};

/// Evaluates a cubic `a0 + a1*T + a2*T^2 + a3*T^3` by Horner's scheme
fn polynomial(coeffs: &[f64; 4], t: f64) -> f64 {
    coeffs[0] + t * (coeffs[1] + t * (coeffs[2] + t * coeffs[3]))
}

/// The Earth's orbital elements at a fixed instant
///
/// A pure function of the construction-time `T` (Julian centuries from
/// J2000.0); build a new value for a different instant.
#[derive(Debug, Clone, Copy)]
pub struct Earth {
    time_t: f64,
}

impl Earth {
    /// Creates the element set for the given moment
    pub fn new(moment: &Moment) -> Self {
        Earth {
            time_t: moment.time_t(),
        }
    }

    /// Creates the element set directly from a time scalar
    ///
    /// `time_t` is Julian centuries from J2000.0, any sign or magnitude.
    /// Non-finite input is rejected rather than letting NaN run the
    /// whole element pipeline.
    pub fn from_time_t(time_t: f64) -> Result<Self> {
        if !time_t.is_finite() {
            return Err(PerihelionError::InvalidInput(format!(
                "time T must be finite, got {}",
                time_t
            )));
        }
        Ok(Earth { time_t })
    }

    /// The time scalar this element set was built for
    pub fn time_t(&self) -> f64 {
        self.time_t
    }

    /// Mean longitude L in degrees, unreduced
    pub fn mean_longitude(&self) -> f64 {
        polynomial(&MEAN_LONGITUDE_COEFFS, self.time_t)
    }

    /// Longitude of the perihelion ϖ in degrees, unreduced
    pub fn perihelion_longitude(&self) -> f64 {
        polynomial(&PERIHELION_LONGITUDE_COEFFS, self.time_t)
    }

    /// Mean anomaly M = L − ϖ in degrees, unreduced
    ///
    /// For epochs far from J2000.0 the value accumulates many whole
    /// revolutions; reduce with
    /// [`to_coterminal`](crate::coordinates::angle::to_coterminal) before
    /// display or comparison.
    pub fn mean_anomaly(&self) -> f64 {
        self.mean_longitude() - self.perihelion_longitude()
    }

    /// Orbital eccentricity e, dimensionless
    pub fn eccentricity(&self) -> f64 {
        polynomial(&ECCENTRICITY_COEFFS, self.time_t)
    }

    /// Semi-major axis a in AU, constant by definition
    pub fn semi_major_axis(&self) -> f64 {
        SEMI_MAJOR_AXIS_AU
    }

    /// Semi-minor axis b = a·√(1 − e²) in AU
    ///
    /// Errors when the eccentricity polynomial leaves the elliptical
    /// regime (e ≥ 1), where the square root argument is non-positive.
    pub fn semi_minor_axis(&self) -> Result<f64> {
        let a = self.semi_major_axis();
        let e = self.eccentricity();
        if e >= 1.0 {
            return Err(PerihelionError::DomainError(format!(
                "eccentricity {} is outside the elliptical regime (e < 1)",
                e
            )));
        }
        Ok(a * (1.0 - e * e).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_elements_at_epoch() {
        // At T = 0 each polynomial collapses to its a0 coefficient
        let earth = Earth::from_time_t(0.0).unwrap();
        assert_eq!(earth.mean_longitude(), 100.466457);
        assert_eq!(earth.perihelion_longitude(), 102.937348);
        assert_eq!(earth.eccentricity(), 0.01670863);
        assert_relative_eq!(
            earth.mean_anomaly(),
            100.466457 - 102.937348,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_polynomial_matches_power_form() {
        let t = 0.192_648_3;
        let earth = Earth::from_time_t(t).unwrap();
        let expected = 100.466457 + 36_000.769_827_8 * t + 0.000_303_22 * t * t
            + 0.000_000_020 * t * t * t;
        assert_relative_eq!(earth.mean_longitude(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_eccentricity_drifts_down() {
        // The linear term is negative, so e shrinks with advancing T
        let now = Earth::from_time_t(0.2).unwrap();
        let later = Earth::from_time_t(1.2).unwrap();
        assert!(later.eccentricity() < now.eccentricity());
        assert!(now.eccentricity() > 0.016 && now.eccentricity() < 0.017);
    }

    #[test]
    fn test_semi_minor_axis() {
        let earth = Earth::from_time_t(0.0).unwrap();
        let a = earth.semi_major_axis();
        let e = earth.eccentricity();
        let b = earth.semi_minor_axis().unwrap();
        assert_relative_eq!(b, a * (1.0 - e * e).sqrt(), epsilon = 1e-15);
        assert!(b < a);
    }

    #[test]
    fn test_mean_anomaly_from_moment() {
        let moment = Moment::from_calendar(2019, 4, 7, 21, 0, 0.0).unwrap();
        let earth = Earth::new(&moment);
        // About 0.1926 centuries of mean motion past J2000.0
        let m = crate::coordinates::angle::to_coterminal(earth.mean_anomaly());
        assert!((0.0..360.0).contains(&m));
        // e stays Earth-like close to the epoch
        let e = earth.eccentricity();
        assert!(e > 0.0166 && e < 0.0168);
    }

    #[test]
    fn test_non_finite_time_rejected() {
        assert!(Earth::from_time_t(f64::NAN).is_err());
        assert!(Earth::from_time_t(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_hyperbolic_eccentricity_rejected() {
        // Far enough from the epoch the cubic is meaningless; force a
        // value that drives e past 1 and check the guard fires.
        let earth = Earth::from_time_t(-400_000.0).unwrap();
        assert!(earth.eccentricity() >= 1.0);
        assert!(matches!(
            earth.semi_minor_axis(),
            Err(crate::PerihelionError::DomainError(_))
        ));
    }
}
