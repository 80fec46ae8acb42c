//! Point/vector algebra, rectangles, and affine transforms the geometry types are built from.
mod aabb;
mod affine;
mod base_math;
mod vector2;

pub use aabb::*;
pub use affine::Affine2;
pub use base_math::*;
pub use vector2::{vec2, Vector2};
