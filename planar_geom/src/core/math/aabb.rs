//! Axis aligned rectangle helpers. Rectangles are [AABB] values from `static_aabb2d_index`.
use super::{min_max, Vector2};
use crate::core::traits::Real;
use static_aabb2d_index::AABB;

/// Minimal rectangle containing both `p0` and `p1` (in any order).
#[inline]
pub fn aabb_from_corners<T>(p0: Vector2<T>, p1: Vector2<T>) -> AABB<T>
where
    T: Real,
{
    let (min_x, max_x) = min_max(p0.x, p1.x);
    let (min_y, max_y) = min_max(p0.y, p1.y);
    AABB::new(min_x, min_y, max_x, max_y)
}

/// Minimal rectangle spanning all `points`, or `None` if there are no points.
///
/// # Examples
///
/// ```
/// # use planar_geom::core::math::*;
/// let points = [Vector2::new(1.0, 5.0), Vector2::new(-2.0, 3.0), Vector2::new(0.0, 7.0)];
/// let aabb = aabb_from_points(points).unwrap();
/// assert_eq!((aabb.min_x, aabb.min_y, aabb.max_x, aabb.max_y), (-2.0, 3.0, 1.0, 7.0));
/// assert!(aabb_from_points(Vec::<Vector2>::new()).is_none());
/// ```
pub fn aabb_from_points<T, I>(points: I) -> Option<AABB<T>>
where
    T: Real,
    I: IntoIterator<Item = Vector2<T>>,
{
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let mut result = AABB::new(first.x, first.y, first.x, first.y);
    for p in iter {
        result.min_x = num_traits::Float::min(result.min_x, p.x);
        result.min_y = num_traits::Float::min(result.min_y, p.y);
        result.max_x = num_traits::Float::max(result.max_x, p.x);
        result.max_y = num_traits::Float::max(result.max_y, p.y);
    }

    Some(result)
}

/// Width and height of the rectangle as a vector.
#[inline]
pub fn aabb_size<T>(aabb: &AABB<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(aabb.max_x - aabb.min_x, aabb.max_y - aabb.min_y)
}

/// Geometric center of the rectangle.
#[inline]
pub fn aabb_center<T>(aabb: &AABB<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(
        (aabb.min_x + aabb.max_x) / T::two(),
        (aabb.min_y + aabb.max_y) / T::two(),
    )
}

/// Rectangle with the same size as `aabb` but with its minimum corner at the origin.
#[inline]
pub fn aabb_at_origin<T>(aabb: &AABB<T>) -> AABB<T>
where
    T: Real,
{
    let size = aabb_size(aabb);
    AABB::new(T::zero(), T::zero(), size.x, size.y)
}

/// The four corners of the rectangle in the order `(min_x, min_y)`, `(min_x, max_y)`,
/// `(max_x, max_y)`, `(max_x, min_y)`.
///
/// This is the vertex order used by [Polygon::from_aabb](crate::polygon::Polygon::from_aabb).
#[inline]
pub fn aabb_corners<T>(aabb: &AABB<T>) -> [Vector2<T>; 4]
where
    T: Real,
{
    [
        Vector2::new(aabb.min_x, aabb.min_y),
        Vector2::new(aabb.min_x, aabb.max_y),
        Vector2::new(aabb.max_x, aabb.max_y),
        Vector2::new(aabb.max_x, aabb.min_y),
    ]
}
