use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number scalar used for all coordinates, slopes, and offsets.
///
/// Built on [num_traits::Float] so finiteness checks (needed to detect vertical lines) are
/// available, and on [IndexableNum] so values can be used directly in
/// [AABB](static_aabb2d_index::AABB) rectangles.
pub trait Real:
    num_traits::Float + FuzzyOrd + std::default::Default + std::fmt::Debug + IndexableNum + 'static
{
    fn pi() -> Self;

    fn two() -> Self;

    #[inline]
    fn tau() -> Self {
        Self::two() * Self::pi()
    }

    /// Quarter turn (`PI / 2`), the angle reported for vertical lines.
    #[inline]
    fn frac_pi_2() -> Self {
        Self::pi() / Self::two()
    }
}

impl Real for f32 {
    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn tau() -> Self {
        std::f32::consts::TAU
    }

    #[inline]
    fn frac_pi_2() -> Self {
        std::f32::consts::FRAC_PI_2
    }
}

impl Real for f64 {
    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn tau() -> Self {
        std::f64::consts::TAU
    }

    #[inline]
    fn frac_pi_2() -> Self {
        std::f64::consts::FRAC_PI_2
    }
}
