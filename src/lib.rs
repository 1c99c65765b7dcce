//! 2D polygon inward offsetting ("buffering") by an event-driven straight
//! skeleton shrink.
//!
//! The boundary of a simple counter-clockwise polygon is treated as a
//! wavefront of vertices traveling along their angular bisectors at unit
//! speed. The engine tracks the discrete topological events that occur as the
//! wavefront shrinks (adjacent edges collapsing to a point, reflex vertices
//! splitting the boundary into independent loops) and stops once a target
//! offset distance is consumed.
//!
//! # Examples
//!
//! ```
//! use straight_skeleton::{polygon, shrink_polygon};
//!
//! // 4x4 square centered at the origin, offset inward by 0.5
//! let square = polygon![(-2.0, 2.0), (-2.0, -2.0), (2.0, -2.0), (2.0, 2.0)];
//! let rings = shrink_polygon::<f64>(&square, 0.5).unwrap();
//!
//! assert_eq!(rings.len(), 1);
//! assert_eq!(rings[0].len(), 4);
//! // every corner pulled in to the 3x3 square
//! for p in rings[0].iter() {
//!     assert!((p.x.abs() - 1.5).abs() < 1e-8 && (p.y.abs() - 1.5).abs() < 1e-8);
//! }
//! ```

#[macro_use]
mod macros;

mod error;

pub mod core;
pub mod skeleton;

pub use crate::core::math::{Line, Vector2};
pub use crate::error::ShrinkError;
pub use crate::skeleton::{initialize_ring_set, shrink, shrink_polygon, Ring, RingSet};
