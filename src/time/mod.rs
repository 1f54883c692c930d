//! Time module for orbital calculations
//!
//! This module provides the [`Moment`] type: a calendar instant reduced to
//! a Julian Day number and to `T`, the count of Julian centuries elapsed
//! since the reference epoch J2000.0. The element polynomials consume `T`
//! as an opaque scalar; any real value is meaningful, negative values
//! addressing instants before the epoch.

use crate::constants::{J2000, JULIAN_CENTURY_DAYS};
use crate::{PerihelionError, Result};
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::fmt;

/// Julian day number for a Gregorian calendar date
///
/// Follows the algorithm in the Explanatory Supplement to the
/// Astronomical Almanac 15.11. The returned integer addresses the date
/// at noon.
fn julian_day_number(year: i32, month: u32, day: u32) -> i32 {
    let janfeb = month <= 2;
    let g = year + 4716 - if janfeb { 1 } else { 0 };
    let f = (month + 9) % 12;
    let e = 1461 * g / 4 + day as i32 - 1402;
    let j = e + (153 * f as i32 + 2) / 5;

    // Gregorian correction
    j + 38 - (g + 184) / 100 * 3 / 4
}

/// A calendar instant reduced to astronomical time scales
///
/// Immutable after construction; both the Julian Day and the derived
/// centuries-since-J2000.0 value are fixed when the moment is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moment {
    julian_day: f64,
    utc: Option<DateTime<Utc>>,
}

impl Moment {
    /// Creates a moment from a UTC Gregorian calendar date and time
    ///
    /// Seconds may carry a fractional part. Returns a `TimeError` for
    /// out-of-range calendar fields.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(PerihelionError::TimeError(format!(
                "invalid calendar date {:04}-{:02}-{:02}",
                year, month, day
            )));
        }
        if hour >= 24 || minute >= 60 || !(0.0..61.0).contains(&second) {
            return Err(PerihelionError::TimeError(format!(
                "invalid time of day {:02}:{:02}:{}",
                hour, minute, second
            )));
        }

        // The day number addresses noon; shift to midnight before adding
        // the time-of-day fraction.
        let jdn = julian_day_number(year, month, day) as f64;
        let day_fraction = (hour as f64 + minute as f64 / 60.0 + second / 3600.0) / 24.0;
        Ok(Moment {
            julian_day: jdn - 0.5 + day_fraction,
            utc: None,
        })
    }

    /// Creates a moment from a chrono UTC datetime
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        // chrono guarantees the calendar fields are in range
        let second = dt.second() as f64 + dt.nanosecond() as f64 / 1_000_000_000.0;
        let jdn = julian_day_number(dt.year(), dt.month(), dt.day()) as f64;
        let day_fraction =
            (dt.hour() as f64 + dt.minute() as f64 / 60.0 + second / 3600.0) / 24.0;
        Moment {
            julian_day: jdn - 0.5 + day_fraction,
            utc: Some(dt),
        }
    }

    /// Creates a moment for the current instant
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Creates a moment directly from a Julian Day number
    ///
    /// Rejects non-finite input; a NaN time scalar would otherwise
    /// contaminate every later stage of the pipeline.
    pub fn from_julian_day(julian_day: f64) -> Result<Self> {
        if !julian_day.is_finite() {
            return Err(PerihelionError::InvalidInput(format!(
                "Julian Day must be finite, got {}",
                julian_day
            )));
        }
        Ok(Moment {
            julian_day,
            utc: None,
        })
    }

    /// The Julian Day number of this moment
    pub fn julian_day(&self) -> f64 {
        self.julian_day
    }

    /// Julian centuries elapsed since J2000.0 (Meeus 22.1)
    ///
    /// Negative before the epoch. This is the `T` consumed by the
    /// orbital-element polynomials.
    pub fn time_t(&self) -> f64 {
        (self.julian_day - J2000) / JULIAN_CENTURY_DAYS
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.utc {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S UTC")),
            None => write!(f, "JD {:.6}", self.julian_day),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    #[test]
    fn test_j2000_epoch() {
        // J2000.0 is 2000-01-01 12:00
        let moment = Moment::from_calendar(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert_relative_eq!(moment.julian_day(), 2_451_545.0, epsilon = 1e-9);
        assert_relative_eq!(moment.time_t(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_known_julian_days() {
        // Meeus example 7.a: 1987-04-10 0h
        let moment = Moment::from_calendar(1987, 4, 10, 0, 0, 0.0).unwrap();
        assert_relative_eq!(moment.julian_day(), 2_446_895.5, epsilon = 1e-9);

        // 1999-01-01 0h
        let moment = Moment::from_calendar(1999, 1, 1, 0, 0, 0.0).unwrap();
        assert_relative_eq!(moment.julian_day(), 2_451_179.5, epsilon = 1e-9);

        // 2019-04-07 21h, the sample instant from the squarewidget writeup
        let moment = Moment::from_calendar(2019, 4, 7, 21, 0, 0.0).unwrap();
        assert_relative_eq!(moment.julian_day(), 2_458_581.375, epsilon = 1e-9);
        assert_relative_eq!(moment.time_t(), 0.192_645_4, epsilon = 1e-6);
    }

    #[test]
    fn test_time_t_sign_before_epoch() {
        let moment = Moment::from_calendar(1990, 6, 15, 0, 0, 0.0).unwrap();
        assert!(moment.time_t() < 0.0);
    }

    #[test]
    fn test_from_datetime_matches_calendar() {
        let dt = Utc.with_ymd_and_hms(2019, 4, 7, 21, 0, 0).unwrap();
        let from_dt = Moment::from_datetime(dt);
        let from_cal = Moment::from_calendar(2019, 4, 7, 21, 0, 0.0).unwrap();
        assert_relative_eq!(from_dt.julian_day(), from_cal.julian_day(), epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_calendar_rejected() {
        assert!(Moment::from_calendar(2019, 13, 1, 0, 0, 0.0).is_err());
        assert!(Moment::from_calendar(2019, 0, 1, 0, 0, 0.0).is_err());
        assert!(Moment::from_calendar(2019, 4, 32, 0, 0, 0.0).is_err());
        assert!(Moment::from_calendar(2019, 4, 7, 24, 0, 0.0).is_err());
        assert!(Moment::from_calendar(2019, 4, 7, 0, 0, -1.0).is_err());
    }

    #[test]
    fn test_non_finite_julian_day_rejected() {
        assert!(Moment::from_julian_day(f64::NAN).is_err());
        assert!(Moment::from_julian_day(f64::INFINITY).is_err());
        assert!(Moment::from_julian_day(2_451_545.0).is_ok());
    }

    #[test]
    fn test_display() {
        let moment = Moment::from_julian_day(2_451_545.0).unwrap();
        assert_eq!(format!("{}", moment), "JD 2451545.000000");
    }
}
