use crate::{
    core::{math::Vector2, traits::Real},
    LineSegment,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Infinite line in one of two parametrizations.
///
/// A `Regular` line never holds an infinite or NaN slope, lines through two points with the same
/// `x` are represented as `Vertical` instead (see [Line::from_points]).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Line<T = f64> {
    /// All points satisfying `y = slope * x + intercept`.
    Regular { slope: T, intercept: T },
    /// All points satisfying `x = x`.
    Vertical { x: T },
}

/// Holds the result of intersecting two infinite lines.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LineIntr<T = f64> {
    /// Lines are parallel and distinct.
    NoIntersect,
    /// Lines cross at a single point.
    Intersect(Vector2<T>),
    /// Both lines describe the same set of points.
    Coincident,
}

impl<T> Line<T>
where
    T: Real,
{
    /// Line satisfying `y = slope * x + intercept`.
    ///
    /// `slope` must be finite, use [Line::vertical] for vertical lines.
    #[inline]
    pub fn regular(slope: T, intercept: T) -> Self {
        debug_assert!(slope.is_finite(), "regular line slope must be finite");
        Line::Regular { slope, intercept }
    }

    /// Line satisfying `x = x`.
    #[inline]
    pub fn vertical(x: T) -> Self {
        Line::Vertical { x }
    }

    /// Line passing through `a` and `b`.
    ///
    /// If the slope between the points is not finite (`a.x == b.x`) a vertical line through `a` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_geom::*;
    /// # use planar_geom::core::math::*;
    /// let line = Line::from_points(Vector2::new(0.0, 1.0), Vector2::new(2.0, 5.0));
    /// assert_eq!(line, Line::Regular { slope: 2.0, intercept: 1.0 });
    ///
    /// let line = Line::from_points(Vector2::new(3.0, 1.0), Vector2::new(3.0, 5.0));
    /// assert_eq!(line, Line::Vertical { x: 3.0 });
    /// ```
    pub fn from_points(a: Vector2<T>, b: Vector2<T>) -> Self {
        let slope = (b.y - a.y) / (b.x - a.x);
        if slope.is_finite() {
            Line::Regular {
                slope,
                intercept: a.y - slope * a.x,
            }
        } else {
            Line::Vertical { x: a.x }
        }
    }

    /// Line containing `segment`.
    #[inline]
    pub fn from_segment(segment: &LineSegment<T>) -> Self {
        Line::from_points(segment.a, segment.b)
    }

    /// Orientation of the line in radians, `atan(slope)` for regular lines and `PI / 2` for vertical
    /// lines.
    ///
    /// Lines have no direction so the result is only meaningful modulo `PI`.
    #[inline]
    pub fn angle(&self) -> T {
        match *self {
            Line::Regular { slope, .. } => slope.atan(),
            Line::Vertical { .. } => T::frac_pi_2(),
        }
    }

    /// Classify the intersection between this line and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_geom::*;
    /// # use planar_geom::core::math::*;
    /// let diagonal = Line::regular(1.0, 0.0);
    /// assert_eq!(
    ///     diagonal.intersect(&Line::vertical(2.0)),
    ///     LineIntr::Intersect(Vector2::new(2.0, 2.0))
    /// );
    /// assert_eq!(diagonal.intersect(&Line::regular(1.0, 3.0)), LineIntr::NoIntersect);
    /// assert_eq!(diagonal.intersect(&diagonal), LineIntr::Coincident);
    /// ```
    pub fn intersect(&self, other: &Line<T>) -> LineIntr<T> {
        use LineIntr::*;

        match (*self, *other) {
            (Line::Vertical { x: x1 }, Line::Vertical { x: x2 }) => {
                if x1 == x2 {
                    Coincident
                } else {
                    NoIntersect
                }
            }
            (Line::Vertical { x }, Line::Regular { slope, intercept })
            | (Line::Regular { slope, intercept }, Line::Vertical { x }) => {
                Intersect(Vector2::new(x, slope * x + intercept))
            }
            (
                Line::Regular {
                    slope: m1,
                    intercept: b1,
                },
                Line::Regular {
                    slope: m2,
                    intercept: b2,
                },
            ) => {
                if m1 == m2 {
                    return if b1 == b2 { Coincident } else { NoIntersect };
                }

                let x = (b2 - b1) / (m1 - m2);
                // slopes that differ only in the last bits can still overflow
                if !x.is_finite() {
                    return NoIntersect;
                }

                Intersect(Vector2::new(x, m1 * x + b1))
            }
        }
    }

    /// Intersection point with `other`, `None` unless the lines cross at exactly one point.
    ///
    /// Parallel lines and a line intersected with itself (see [LineIntr::Coincident]) both return
    /// `None`.
    #[inline]
    pub fn intersection(&self, other: &Line<T>) -> Option<Vector2<T>> {
        match self.intersect(other) {
            LineIntr::Intersect(point) => Some(point),
            LineIntr::NoIntersect | LineIntr::Coincident => None,
        }
    }

    /// Returns true if `point` satisfies the line equation exactly.
    ///
    /// No tolerance is applied, see [Line::contains_eps].
    #[inline]
    pub fn contains(&self, point: Vector2<T>) -> bool {
        match *self {
            Line::Vertical { x } => point.x == x,
            Line::Regular { slope, intercept } => point.y == slope * point.x + intercept,
        }
    }

    /// Same as [Line::contains] but comparing with `eps` tolerance.
    #[inline]
    pub fn contains_eps(&self, point: Vector2<T>, eps: T) -> bool {
        match *self {
            Line::Vertical { x } => point.x.fuzzy_eq_eps(x, eps),
            Line::Regular { slope, intercept } => {
                point.y.fuzzy_eq_eps(slope * point.x + intercept, eps)
            }
        }
    }

    /// Perpendicular distance from `point` to the line.
    pub fn distance_to(&self, point: Vector2<T>) -> T {
        match *self {
            Line::Vertical { x } => Vector2::new(x, point.y).distance_to(point),
            Line::Regular { slope, intercept } => {
                (slope * point.x - point.y + intercept).abs() / (slope * slope + T::one()).sqrt()
            }
        }
    }
}

impl<T> From<LineSegment<T>> for Line<T>
where
    T: Real,
{
    #[inline]
    fn from(segment: LineSegment<T>) -> Self {
        Line::from_segment(&segment)
    }
}

impl<T> From<&LineSegment<T>> for Line<T>
where
    T: Real,
{
    #[inline]
    fn from(segment: &LineSegment<T>) -> Self {
        Line::from_segment(segment)
    }
}
