//! Planar geometry toolkit: points/vectors, infinite lines, line segments, and simple polygons.
//!
//! Intersections are computed exactly (no epsilon) and report "no answer" through `Option` or
//! the [LineIntr]/[SegIntr] result enums. Tolerant comparisons are available through the `_eps`
//! methods and the [core::traits::FuzzyEq] trait.
//!
//! # Examples
//!
//! ```
//! use planar_geom::*;
//! use planar_geom::core::math::*;
//! use planar_geom::polygon::*;
//!
//! let square = Polygon::from_aabb(&AABB::new(0.0, 0.0, 4.0, 4.0));
//! let cut = LineSegment::new(Vector2::new(-1.0, 2.0), Vector2::new(5.0, 2.0));
//! assert_eq!(square.segment_intersections(&cut).len(), 2);
//!
//! let inset = square.inset(&EdgeInsets::uniform(-1.0)).unwrap();
//! assert!(inset.fuzzy_eq(&polygon![(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0)]));
//! ```
#[macro_use]
mod macros;
pub mod core;
mod line;
mod line_segment;
pub mod polygon;

pub use static_aabb2d_index::AABB;

pub use crate::line::*;
pub use crate::line_segment::*;
pub use crate::polygon::Polygon;
