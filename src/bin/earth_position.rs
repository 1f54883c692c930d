//! Earth Position Calculator
//!
//! Solves Kepler's equation for a given instant and reports the Earth's
//! orbital elements, eccentric anomaly (by both classic methods), true
//! anomaly, radius vector and orbital-plane coordinates.
//!
//! Usage:
//!   cargo run --bin earth_position -- [--date 2019-04-07T21:00:00] [--julian-day 2458581.375]

use std::time::Instant;

use chrono::{NaiveDateTime, TimeZone, Utc};
use clap::Parser;

use perihelion::coordinates::angle::to_coterminal;
use perihelion::{kepler, orbit, Earth, Moment};

/// Type alias for the error type used throughout this binary
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Earth Position Calculator
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Computes the Earth's orbital position by solving Kepler's equation",
    long_about = None
)]
struct Args {
    /// UTC instant as YYYY-MM-DDTHH:MM:SS (defaults to now)
    #[arg(short, long)]
    date: Option<String>,

    /// Julian Day number (takes precedence over --date)
    #[arg(short, long)]
    julian_day: Option<f64>,
}

/// Resolve the moment to compute for from the command line
fn resolve_moment(args: &Args) -> Result<Moment> {
    if let Some(jd) = args.julian_day {
        return Ok(Moment::from_julian_day(jd)?);
    }
    if let Some(date) = &args.date {
        let naive = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S")?;
        return Ok(Moment::from_datetime(Utc.from_utc_datetime(&naive)));
    }
    Ok(Moment::now())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let moment = resolve_moment(&args)?;

    println!("Solving Kepler's Equation for moment {}", moment);
    println!("Reference epoch: J2000.0");
    println!("Julian Day Number: {}", moment.julian_day());
    println!("Time T: {}", moment.time_t());
    println!();

    let earth = Earth::new(&moment);
    let e = earth.eccentricity();
    let a = earth.semi_major_axis();
    let b = earth.semi_minor_axis()?;
    let m = earth.mean_anomaly();

    println!("Earth eccentricity e: {}", e);
    println!("Earth semi-major axis a: {}", a);
    println!("Earth semi-minor axis b: {}", b);
    println!("Earth mean anomaly M: {}", to_coterminal(m));
    println!();

    let start = Instant::now();
    let fixed_point = kepler::solve_fixed_point(e, m)?;
    let elapsed = start.elapsed();
    println!(
        "After {} iterations ({:.3}ms, residual {:e})",
        fixed_point.iterations,
        elapsed.as_secs_f64() * 1e3,
        fixed_point.residual
    );
    println!(
        "E for fixed-point method: {}",
        to_coterminal(fixed_point.eccentric_anomaly)
    );
    println!();

    let start = Instant::now();
    let newton = kepler::solve_newton(e, m)?;
    let elapsed = start.elapsed();
    println!(
        "After {} iterations ({:.3}ms, residual {:e})",
        newton.iterations,
        elapsed.as_secs_f64() * 1e3,
        newton.residual
    );
    println!(
        "E for Newton-Raphson method: {}",
        to_coterminal(newton.eccentric_anomaly)
    );
    println!();

    let v = orbit::true_anomaly_from_mean(e, m);
    println!("True anomaly v from M: {}", to_coterminal(v));
    println!();

    let v = orbit::true_anomaly_from_eccentric(e, newton.eccentric_anomaly);
    println!("True anomaly v from E: {}", to_coterminal(v));
    println!();

    let r = orbit::radius_vector(e, v);
    println!("Radius vector r from e and v: {}", r);
    println!();

    let coordinates = orbit::position(a, b, e, newton.eccentric_anomaly);
    println!(
        "Earth coordinates x: {} and y: {}",
        coordinates.x, coordinates.y
    );

    Ok(())
}
