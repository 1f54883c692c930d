//! # Planar Cartesian Coordinate Module
//!
//! This module provides the 2D Cartesian representation of a position in
//! the orbital plane, expressed in the same units as the orbit's
//! semi-axes (AU for the Earth).
//!
//! ## Coordinate System Convention
//!
//! - **X-axis**: toward perihelion, in the orbital plane
//! - **Y-axis**: 90° ahead of perihelion in the direction of motion
//!
//! The origin follows the parameterization used to build the point; see
//! [`crate::orbit::position`] and [`crate::orbit::position_from_focus`].
//!
//! ## Internal Storage
//!
//! Components are stored as two `f64` values with no normalization or
//! conversion at construction, and convert losslessly to nalgebra types
//! for downstream linear algebra.

use nalgebra::{Point2, Vector2};

/// Two-dimensional Cartesian coordinate in the orbital plane
///
/// Created once per position query and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartesian2 {
    /// X-component, toward perihelion (AU)
    pub x: f64,
    /// Y-component, 90° ahead of perihelion (AU)
    pub y: f64,
}

impl Cartesian2 {
    /// Creates a new planar coordinate
    pub fn new(x: f64, y: f64) -> Self {
        Cartesian2 { x, y }
    }

    /// Distance from the coordinate origin in AU
    pub fn distance_from_origin(&self) -> f64 {
        Vector2::new(self.x, self.y).norm()
    }

    /// View of this coordinate as an nalgebra point
    pub fn to_point(self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

impl From<Point2<f64>> for Cartesian2 {
    fn from(p: Point2<f64>) -> Self {
        Cartesian2 { x: p.x, y: p.y }
    }
}

impl From<Cartesian2> for Point2<f64> {
    fn from(c: Cartesian2) -> Self {
        Point2::new(c.x, c.y)
    }
}
