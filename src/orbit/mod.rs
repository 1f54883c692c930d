//! True anomaly, radius vector and orbital-plane coordinates
//!
//! The final stages of the position pipeline: series expansions for the
//! true anomaly, the focus-to-body distance, and the planar Cartesian
//! position of the orbiting body. All functions are pure and total over
//! finite inputs; angle arguments are in degrees and convert to radians
//! at each trigonometric call.

use crate::constants::{DEG2RAD, SEMI_MAJOR_AXIS_AU};
use crate::coordinates::angle::to_radians;
use crate::coordinates::cartesian::Cartesian2;

/// True anomaly v from the mean anomaly, degrees
///
/// Fourier expansion of the equation of the center truncated at e³:
/// `v = M + (2e − e³/4)·sin M + (5/4)e²·sin 2M + 1.08333·e³·sin 3M`.
/// Accurate for small-to-moderate eccentricity; the truncation error
/// grows as e approaches 1.
pub fn true_anomaly_from_mean(eccentricity: f64, mean_anomaly: f64) -> f64 {
    let e = eccentricity;
    let m = to_radians(mean_anomaly);
    mean_anomaly
        + (2.0 * e - 0.25 * e.powi(3)) * m.sin()
        + 1.25 * e.powi(2) * (2.0 * m).sin()
        + 1.08333 * e.powi(3) * (3.0 * m).sin()
}

/// True anomaly v from the eccentric anomaly, degrees
///
/// Companion series in e and E (Smart pp. 118-119):
/// `v = E + (e + e³/4)·sin E + (e²/4)·sin 2E + 0.083333·e³·sin 3E`.
pub fn true_anomaly_from_eccentric(eccentricity: f64, eccentric_anomaly: f64) -> f64 {
    let e = eccentricity;
    let big_e = to_radians(eccentric_anomaly);
    eccentric_anomaly
        + (e + 0.25 * e.powi(3)) * big_e.sin()
        + 0.25 * e.powi(2) * (2.0 * big_e).sin()
        + 0.083333 * e.powi(3) * (3.0 * big_e).sin()
}

/// Radius vector r in AU from eccentricity and true anomaly
///
/// The ellipse focal equation, Meeus (25.5):
/// `r = a(1 − e²) / (1 + e·cos v)` with a the Earth's semi-major axis.
pub fn radius_vector(eccentricity: f64, true_anomaly: f64) -> f64 {
    let e = eccentricity;
    SEMI_MAJOR_AXIS_AU * (1.0 - e * e) / (1.0 + e * to_radians(true_anomaly).cos())
}

/// Radius vector variant without the denominator parentheses
///
/// Evaluates `a(1 − e²)/1 + e·cos v`, i.e. `a(1 − e²) + e·cos v` — the
/// alternate reading of Meeus (25.5) as sometimes transcribed with the
/// division binding only to the literal 1. Kept as an explicit named
/// variant; prefer [`radius_vector`] for the focal equation.
pub fn radius_vector_raw(eccentricity: f64, true_anomaly: f64) -> f64 {
    let e = eccentricity;
    SEMI_MAJOR_AXIS_AU * (1.0 - e * e) / 1.0 + e * to_radians(true_anomaly).cos()
}

/// Planar position from the semi-axes and the eccentric anomaly
///
/// `x = a·cos(E − e·π/180)`, `y = b·sin E`, with E in degrees. The x
/// term offsets the eccentric anomaly by the eccentricity pushed through
/// the degree→radian scale — the convention of the Meeus-derived sample
/// formulas. For the standard focus-relative parameterization see
/// [`position_from_focus`]; the two coincide for a circular orbit.
pub fn position(
    semi_major_axis: f64,
    semi_minor_axis: f64,
    eccentricity: f64,
    eccentric_anomaly: f64,
) -> Cartesian2 {
    let e_rad = to_radians(eccentric_anomaly);
    Cartesian2::new(
        semi_major_axis * (e_rad - eccentricity * DEG2RAD).cos(),
        semi_minor_axis * e_rad.sin(),
    )
}

/// Standard focus-relative planar position
///
/// `x = a(cos E − e)`, `y = b·sin E`: the textbook parameterization of
/// an ellipse about its occupied focus, with the dimensionless e
/// subtracted directly from cos E.
pub fn position_from_focus(
    semi_major_axis: f64,
    semi_minor_axis: f64,
    eccentricity: f64,
    eccentric_anomaly: f64,
) -> Cartesian2 {
    let e_rad = to_radians(eccentric_anomaly);
    Cartesian2::new(
        semi_major_axis * (e_rad.cos() - eccentricity),
        semi_minor_axis * e_rad.sin(),
    )
}
