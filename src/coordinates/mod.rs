pub mod angle;
pub mod cartesian;

pub use angle::{to_coterminal, to_degrees, to_radians, Angle};
pub use cartesian::Cartesian2;
