use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per side offsets for [Polygon::inset](super::Polygon::inset).
///
/// Sides are named for a polygon built with
/// [Polygon::from_aabb](super::Polygon::from_aabb) in a y down coordinate space: edge 0 runs along
/// `min_x` (left), edge 1 along `max_y` (bottom), edge 2 along `max_x` (right), and edge 3 along
/// `min_y` (top). See [EdgeInsets::to_edge_offsets].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct EdgeInsets<T = f64> {
    pub top: T,
    pub left: T,
    pub bottom: T,
    pub right: T,
}

impl<T> EdgeInsets<T>
where
    T: Real,
{
    #[inline]
    pub fn new(top: T, left: T, bottom: T, right: T) -> Self {
        EdgeInsets {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same offset on every side.
    #[inline]
    pub fn uniform(value: T) -> Self {
        EdgeInsets::new(value, value, value, value)
    }

    /// Every side offset negated.
    #[inline]
    pub fn negated(&self) -> Self {
        EdgeInsets::new(-self.top, -self.left, -self.bottom, -self.right)
    }

    /// Offsets in polygon edge order: `[left, bottom, right, top]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_geom::polygon::*;
    /// let insets = EdgeInsets::new(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(insets.to_edge_offsets(), [2.0, 3.0, 4.0, 1.0]);
    /// ```
    #[inline]
    pub fn to_edge_offsets(&self) -> [T; 4] {
        [self.left, self.bottom, self.right, self.top]
    }
}
