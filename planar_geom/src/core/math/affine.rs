use super::Vector2;
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D affine transform.
///
/// A point `(x, y)` maps to `(a * x + c * y + tx, b * x + d * y + ty)`, i.e. the matrix
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// | 0  0  1  |
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine2<T = f64> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
    pub tx: T,
    pub ty: T,
}

impl<T> Default for Affine2<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Affine2<T>
where
    T: Real,
{
    #[inline]
    pub fn new(a: T, b: T, c: T, d: T, tx: T, ty: T) -> Self {
        Affine2 { a, b, c, d, tx, ty }
    }

    #[inline]
    pub fn identity() -> Self {
        Affine2::new(T::one(), T::zero(), T::zero(), T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn translation(tx: T, ty: T) -> Self {
        Affine2::new(T::one(), T::zero(), T::zero(), T::one(), tx, ty)
    }

    #[inline]
    pub fn scaling(sx: T, sy: T) -> Self {
        Affine2::new(sx, T::zero(), T::zero(), sy, T::zero(), T::zero())
    }

    /// Counter clockwise rotation about the origin by `angle` radians.
    #[inline]
    pub fn rotation(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Affine2::new(c, s, -s, c, T::zero(), T::zero())
    }

    /// Returns the transform that applies `self` first and then `next`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_geom::core::math::*;
    /// let t = Affine2::scaling(2.0, 2.0).then(&Affine2::translation(1.0, 0.0));
    /// assert_eq!(t.transform_point(Vector2::new(1.0, 1.0)), Vector2::new(3.0, 2.0));
    /// ```
    pub fn then(&self, next: &Self) -> Self {
        Affine2::new(
            next.a * self.a + next.c * self.b,
            next.b * self.a + next.d * self.b,
            next.a * self.c + next.c * self.d,
            next.b * self.c + next.d * self.d,
            next.a * self.tx + next.c * self.ty + next.tx,
            next.b * self.tx + next.d * self.ty + next.ty,
        )
    }

    #[inline]
    pub fn determinant(&self) -> T {
        self.a * self.d - self.b * self.c
    }

    /// Inverse transform, `None` if the transform is singular (determinant is zero).
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::zero() {
            return None;
        }

        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        Some(Affine2::new(
            a,
            b,
            c,
            d,
            -(a * self.tx + c * self.ty),
            -(b * self.tx + d * self.ty),
        ))
    }

    #[inline]
    pub fn transform_point(&self, point: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            self.a * point.x + self.c * point.y + self.tx,
            self.b * point.x + self.d * point.y + self.ty,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn rotation_quarter_turn() {
        let p = Affine2::rotation(FRAC_PI_2).transform_point(Vector2::new(1.0, 0.0));
        assert!(p.fuzzy_eq(Vector2::new(0.0, 1.0)));
    }

    #[test]
    fn inverse_round_trip() {
        let t = Affine2::rotation(0.3)
            .then(&Affine2::scaling(2.0, 0.5))
            .then(&Affine2::translation(-4.0, 7.0));
        let inv = t.inverse().unwrap();
        let p = Vector2::new(3.0, -2.0);
        assert!(inv.transform_point(t.transform_point(p)).fuzzy_eq(p));
    }

    #[test]
    fn singular_has_no_inverse() {
        assert!(Affine2::scaling(0.0, 1.0).inverse().is_none());
    }
}
