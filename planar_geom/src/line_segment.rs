use crate::{
    core::{
        math::{aabb_from_corners, midpoint, Vector2},
        traits::Real,
    },
    Line,
};
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bounded line between the two end points `a` and `b`.
///
/// Direction (`a` to `b`) matters for [LineSegment::angle] and [LineSegment::translated] but not
/// for equality, intersection, or containment: a segment compares equal to its reverse.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone)]
pub struct LineSegment<T = f64> {
    pub a: Vector2<T>,
    pub b: Vector2<T>,
}

/// Holds the result of intersecting two line segments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SegIntr<T = f64> {
    /// Segments are parallel (or collinear).
    NoIntersect,
    /// The segments cross within both of their bounds.
    TrueIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
    /// The lines cross but one or both of the segments must be extended to reach the intersect.
    FalseIntersect {
        /// Parametric value for intersect on first segment.
        seg1_t: T,
        /// Parametric value for intersect on second segment.
        seg2_t: T,
    },
}

impl<T> LineSegment<T>
where
    T: Real,
{
    #[inline]
    pub fn new(a: Vector2<T>, b: Vector2<T>) -> Self {
        LineSegment { a, b }
    }

    /// Distance between the end points.
    #[inline]
    pub fn length(&self) -> T {
        self.a.distance_to(self.b)
    }

    /// Angle of the vector from `b` to `a` (`(a - b).angle()`).
    ///
    /// Note the direction is `b -> a`, [LineSegment::translated] depends on this convention.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_geom::*;
    /// # use planar_geom::core::math::*;
    /// # use planar_geom::core::traits::*;
    /// use std::f64::consts::PI;
    /// let seg = LineSegment::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
    /// assert!(seg.angle().fuzzy_eq(PI));
    /// ```
    #[inline]
    pub fn angle(&self) -> T {
        (self.a - self.b).angle()
    }

    /// Direction vector `b - a`.
    #[inline]
    pub fn direction(&self) -> Vector2<T> {
        self.b - self.a
    }

    /// Point at parametric value `t`, `a` at 0 and `b` at 1.
    #[inline]
    pub fn point_at(&self, t: T) -> Vector2<T> {
        self.a + self.direction().scale(t)
    }

    #[inline]
    pub fn midpoint(&self) -> Vector2<T> {
        midpoint(self.a, self.b)
    }

    /// Same segment with `a` and `b` swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        LineSegment::new(self.b, self.a)
    }

    /// Minimal axis aligned rectangle containing both end points.
    #[inline]
    pub fn bounds(&self) -> AABB<T> {
        aabb_from_corners(self.a, self.b)
    }

    /// Infinite line containing this segment.
    #[inline]
    pub fn line(&self) -> Line<T> {
        Line::from_segment(self)
    }

    /// Classify the intersection with `other` using the parametric form `a + t * (b - a)` of both
    /// segments.
    ///
    /// A zero determinant (parallel or collinear segments) is [SegIntr::NoIntersect]. Otherwise the
    /// result is a [SegIntr::TrueIntersect] if both parametric values are in `[0, 1]` and a
    /// [SegIntr::FalseIntersect] if not.
    pub fn intersect(&self, other: &LineSegment<T>) -> SegIntr<T> {
        let d1 = self.b - self.a;
        let d2 = other.b - other.a;
        let d3 = self.a - other.a;

        let denom = d2.y * d1.x - d2.x * d1.y;
        if denom == T::zero() {
            return SegIntr::NoIntersect;
        }

        let seg1_t = (d2.x * d3.y - d2.y * d3.x) / denom;
        let seg2_t = (d1.x * d3.y - d1.y * d3.x) / denom;

        let in_bounds = |t: T| t >= T::zero() && t <= T::one();
        if in_bounds(seg1_t) && in_bounds(seg2_t) {
            SegIntr::TrueIntersect { seg1_t, seg2_t }
        } else {
            SegIntr::FalseIntersect { seg1_t, seg2_t }
        }
    }

    /// Intersection point with `other` if the segments cross within both of their bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_geom::*;
    /// # use planar_geom::core::math::*;
    /// let s1 = LineSegment::new(Vector2::new(0.0, 0.0), Vector2::new(2.0, 2.0));
    /// let s2 = LineSegment::new(Vector2::new(0.0, 2.0), Vector2::new(2.0, 0.0));
    /// assert_eq!(s1.intersection(&s2), Some(Vector2::new(1.0, 1.0)));
    ///
    /// let s3 = LineSegment::new(Vector2::new(3.0, 0.0), Vector2::new(3.0, 1.0));
    /// assert_eq!(s1.intersection(&s3), None);
    /// ```
    pub fn intersection(&self, other: &LineSegment<T>) -> Option<Vector2<T>> {
        match self.intersect(other) {
            SegIntr::TrueIntersect { seg1_t, .. } => Some(self.point_at(seg1_t)),
            SegIntr::NoIntersect | SegIntr::FalseIntersect { .. } => None,
        }
    }

    /// Distance from `point` to the line supporting this segment.
    ///
    /// The result is not clamped to the segment's extent: a point beyond an end point gets its
    /// distance to the infinite line, not to the end point. A zero length segment has no defined
    /// distance (the result is NaN or infinite).
    pub fn distance_to(&self, point: Vector2<T>) -> T {
        ((self.b - self.a).cross(point) + self.a.cross(self.b)).abs() / self.length()
    }

    /// Returns true if `point` lies on the segment, i.e. `|a - point| + |point - b| == |a - b|`.
    ///
    /// No tolerance is applied, see [LineSegment::contains_eps].
    #[inline]
    pub fn contains(&self, point: Vector2<T>) -> bool {
        self.a.distance_to(point) + point.distance_to(self.b) == self.length()
    }

    /// Same as [LineSegment::contains] but comparing the distance sums with `eps` tolerance.
    #[inline]
    pub fn contains_eps(&self, point: Vector2<T>, eps: T) -> bool {
        (self.a.distance_to(point) + point.distance_to(self.b)).fuzzy_eq_eps(self.length(), eps)
    }

    /// Returns this segment shifted perpendicular to itself by the signed `distance`.
    ///
    /// Both end points move by the vector of length `distance` at `self.angle() - PI / 2`, so length
    /// and angle are preserved. With the `b -> a` angle convention a positive distance moves the
    /// segment to the left of the `a -> b` direction when the y axis points up.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_geom::*;
    /// # use planar_geom::core::math::*;
    /// let seg = LineSegment::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
    /// let moved = seg.translated(2.0);
    /// assert!(moved.a.fuzzy_eq(Vector2::new(0.0, 2.0)));
    /// assert!(moved.b.fuzzy_eq(Vector2::new(1.0, 2.0)));
    /// ```
    pub fn translated(&self, distance: T) -> Self {
        let offset = Vector2::from_polar(self.angle() - T::frac_pi_2(), distance);
        LineSegment::new(self.a + offset, self.b + offset)
    }
}

impl<T> PartialEq for LineSegment<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{math::vec2, traits::FuzzyEq};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
        LineSegment::new(vec2(x1, y1), vec2(x2, y2))
    }

    #[test]
    fn length_angle_bounds() {
        let s = seg(1.0, 1.0, 4.0, 5.0);
        assert_eq!(s.length(), 5.0);
        assert!(seg(0.0, 0.0, 0.0, 1.0).angle().fuzzy_eq(-FRAC_PI_2));
        assert!(seg(1.0, 0.0, 0.0, 0.0).angle().fuzzy_eq(0.0));

        let bounds = seg(4.0, -1.0, 1.0, 3.0).bounds();
        assert_eq!(
            (bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y),
            (1.0, -1.0, 4.0, 3.0)
        );
    }

    #[test]
    fn equality_ignores_direction() {
        let s = seg(0.0, 0.0, 1.0, 2.0);
        assert_eq!(s, s.reversed());
        assert_ne!(s, seg(0.0, 0.0, 1.0, 3.0));
    }

    #[test]
    fn crossing_intersect() {
        let s1 = seg(0.0, 0.0, 2.0, 2.0);
        let s2 = seg(0.0, 2.0, 2.0, 0.0);
        assert_eq!(
            s1.intersect(&s2),
            SegIntr::TrueIntersect {
                seg1_t: 0.5,
                seg2_t: 0.5
            }
        );
        assert_eq!(s1.intersection(&s2), Some(vec2(1.0, 1.0)));
        assert_eq!(s2.intersection(&s1), Some(vec2(1.0, 1.0)));
        assert_eq!(s1.reversed().intersection(&s2), Some(vec2(1.0, 1.0)));
    }

    #[test]
    fn off_center_intersect_uses_own_direction() {
        // t along s1 is 0.25, point must be a + t * (b - a)
        let s1 = seg(0.0, 0.0, 4.0, 0.0);
        let s2 = seg(1.0, -1.0, 1.0, 3.0);
        assert_eq!(s1.intersection(&s2), Some(vec2(1.0, 0.0)));
        match s1.intersect(&s2) {
            SegIntr::TrueIntersect { seg1_t, seg2_t } => {
                assert!(seg1_t.fuzzy_eq(0.25));
                assert!(seg2_t.fuzzy_eq(0.25));
            }
            r => panic!("expected true intersect, got {:?}", r),
        }
    }

    #[test]
    fn end_point_touch_is_intersect() {
        let s1 = seg(0.0, 0.0, 1.0, 0.0);
        let s2 = seg(1.0, 0.0, 1.0, 1.0);
        assert_eq!(s1.intersection(&s2), Some(vec2(1.0, 0.0)));
    }

    #[test]
    fn parallel_is_no_intersect() {
        let s1 = seg(0.0, 0.0, 1.0, 0.0);
        let s2 = seg(0.0, 1.0, 1.0, 1.0);
        assert_eq!(s1.intersect(&s2), SegIntr::NoIntersect);
        assert_eq!(s1.intersection(&s2), None);

        // collinear overlap is also reported as no intersect
        let s3 = seg(0.5, 0.0, 2.0, 0.0);
        assert_eq!(s1.intersect(&s3), SegIntr::NoIntersect);
    }

    #[test]
    fn out_of_bounds_is_false_intersect() {
        let s1 = seg(0.0, 0.0, 1.0, 0.0);
        // crosses the x axis at x = 2, beyond s1
        let s2 = seg(2.0, -1.0, 2.0, 1.0);
        assert!(matches!(s1.intersect(&s2), SegIntr::FalseIntersect { .. }));
        assert_eq!(s1.intersection(&s2), None);

        // lines cross at (0.5, 0) but s2 stops short of the x axis
        let s3 = seg(0.5, 0.5, 0.5, 2.0);
        assert!(matches!(s1.intersect(&s3), SegIntr::FalseIntersect { .. }));
        assert_eq!(s1.intersection(&s3), None);
    }

    #[test]
    fn distance_to_supporting_line() {
        let s = seg(0.0, 0.0, 2.0, 0.0);
        assert_eq!(s.distance_to(vec2(1.0, 3.0)), 3.0);
        assert_eq!(s.distance_to(vec2(1.0, -3.0)), 3.0);
        // beyond the end point, still measured to the infinite line
        assert_eq!(s.distance_to(vec2(10.0, 1.0)), 1.0);

        let diag = seg(0.0, 0.0, 1.0, 1.0);
        assert!(diag.distance_to(vec2(0.0, 2.0)).fuzzy_eq(2.0f64.sqrt()));
    }

    #[test]
    fn contains_end_points_and_between() {
        let s = seg(0.0, 0.0, 4.0, 0.0);
        assert!(s.contains(vec2(0.0, 0.0)));
        assert!(s.contains(vec2(4.0, 0.0)));
        assert!(s.contains(vec2(1.0, 0.0)));
        assert!(!s.contains(vec2(5.0, 0.0)));
        assert!(!s.contains(vec2(2.0, 0.1)));
        assert!(s.contains_eps(vec2(2.0, 1e-6), 1e-9));
    }

    #[test]
    fn translated_preserves_length_and_angle() {
        let s = seg(1.0, 1.0, 3.0, 2.0);
        let t = s.translated(1.5);
        assert!(t.length().fuzzy_eq(s.length()));
        assert!(t.angle().fuzzy_eq(s.angle()));
        assert!(s.line().distance_to(t.a).fuzzy_eq(1.5));
        assert!(s.line().distance_to(t.b).fuzzy_eq(1.5));
    }

    #[test]
    fn translated_sign_convention() {
        // a -> b pointing up, positive distance moves toward -x
        let up = seg(0.0, 0.0, 0.0, 1.0);
        let moved = up.translated(1.0);
        assert!(moved.a.fuzzy_eq(vec2(-1.0, 0.0)));
        assert!(moved.b.fuzzy_eq(vec2(-1.0, 1.0)));

        // a -> b pointing left, positive distance moves toward -y
        let left = seg(1.0, 0.0, 0.0, 0.0);
        let moved = left.translated(1.0);
        assert!(moved.a.fuzzy_eq(vec2(1.0, -1.0)));
        assert!(left.angle().fuzzy_eq(0.0) || left.angle().fuzzy_eq(2.0 * PI));

        let back = up.translated(1.0).translated(-1.0);
        assert!(back.a.fuzzy_eq(up.a));
        assert!(back.b.fuzzy_eq(up.b));
    }
}
