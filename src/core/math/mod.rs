//! Geometry primitives: 2D vectors, lines, orientation and bisector
//! construction.
mod line;
mod vector2;

pub use line::{angular_bisector, left_of_ray, Line};
pub use vector2::Vector2;
