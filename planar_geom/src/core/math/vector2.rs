use super::aabb_from_corners;
use crate::core::traits::Real;
use static_aabb2d_index::AABB;
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D point/vector with `x` and `y` components.
///
/// Points and vectors share this one type; equality is exact and component wise.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Create the point at `distance` from the origin in the direction of `angle` (radians).
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_geom::core::math::*;
    /// # use planar_geom::core::traits::*;
    /// use std::f64::consts::FRAC_PI_2;
    /// let p = Vector2::from_polar(FRAC_PI_2, 2.0);
    /// assert!(p.fuzzy_eq(Vector2::new(0.0, 2.0)));
    /// ```
    #[inline]
    pub fn from_polar(angle: T, distance: T) -> Self {
        Vector2::from_polar_about(angle, distance, Vector2::zero())
    }

    /// Create the point at `distance` from `origin` in the direction of `angle` (radians).
    #[inline]
    pub fn from_polar_about(angle: T, distance: T, origin: Self) -> Self {
        let (s, c) = angle.sin_cos();
        Vector2::new(origin.x + c * distance, origin.y + s * distance)
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (`self.x * other.y - self.y * other.x`).
    ///
    /// Positive when `other` is counter clockwise from `self`.
    #[inline]
    pub fn cross(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the vector.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector (distance of the point from the origin).
    #[inline]
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Angle in radians of the direction from the origin to this point, in `(-PI, PI]`.
    #[inline]
    pub fn angle(&self) -> T {
        self.y.atan2(self.x)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: Self) -> T {
        (self - other).length()
    }

    /// Normalize the vector (length = 1).
    #[inline]
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.length())
    }

    /// Create perpendicular vector (rotated a quarter turn counter clockwise).
    #[inline]
    pub fn perp(&self) -> Self {
        vec2(-self.y, self.x)
    }

    /// Rotate this point around an `origin` point by some `angle` in radians.
    pub fn rotate_about(&self, origin: Self, angle: T) -> Self {
        let translated = self - origin;
        let (s, c) = angle.sin_cos();
        let rotated = vec2(
            translated.x * c - translated.y * s,
            translated.x * s + translated.y * c,
        );

        rotated + origin
    }

    /// Bounding rectangle of the circle with `radius` centered at this point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_geom::core::math::*;
    /// let bounds = Vector2::new(1.0, 2.0).circle_bounds(0.5);
    /// assert_eq!((bounds.min_x, bounds.min_y), (0.5, 1.5));
    /// assert_eq!((bounds.max_x, bounds.max_y), (1.5, 2.5));
    /// ```
    #[inline]
    pub fn circle_bounds(&self, radius: T) -> AABB<T> {
        aabb_from_corners(
            vec2(self.x - radius, self.y - radius),
            vec2(self.x + radius, self.y + radius),
        )
    }

    /// Fuzzy equal comparison with another vector using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'a, 'b, T: Real> ops::$op_trait<&'b Vector2<T>> for &'a Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &'b Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

macro_rules! ImplScalarOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<T> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: T) -> Self::Output {
                Vector2::new(self.x $op rhs, self.y $op rhs)
            }
        }

        impl<T: Real> ops::$op_trait<T> for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: T) -> Self::Output {
                Vector2::new(self.x $op rhs, self.y $op rhs)
            }
        }
    };
}

ImplScalarOp!(Mul, mul, *);
ImplScalarOp!(Div, div, /);

macro_rules! ImplAssignOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            fn $op_func(&mut self, rhs: Vector2<T>) {
                *self = Vector2::new(self.x $op rhs.x, self.y $op rhs.y);
            }
        }
    };
}

ImplAssignOp!(AddAssign, add_assign, +);
ImplAssignOp!(SubAssign, sub_assign, -);

macro_rules! ImplUnaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self) -> Self::Output {
                Vector2::new($op self.x, $op self.y)
            }
        }

        impl<T: Real> ops::$op_trait for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self) -> Self::Output {
                Vector2::new($op self.x, $op self.y)
            }
        }

    };
}

ImplUnaryOp!(Neg, neg, -);
