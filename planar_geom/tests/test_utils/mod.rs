#![allow(dead_code)]

use planar_geom::{
    core::{
        math::{vec2, Affine2, Vector2},
        traits::FuzzyEq,
    },
    Polygon, AABB,
};
use std::f64::consts::{FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, FRAC_PI_8};

/// Rotation angles used to check results hold for lines that are neither horizontal nor vertical.
///
/// Quarter turns are left out: sin/cos round off turns vertical edges into regular lines with
/// slopes near 1e16, which slope/intercept form can not intersect accurately.
pub const TEST_ROTATION_ANGLES: &[f64] = &[FRAC_PI_8, FRAC_PI_6, FRAC_PI_4, FRAC_PI_3];

/// Epsilon for comparing positions that went through several trig/division steps.
pub const POS_EQ_EPS: f64 = 1e-9;

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// True if every point in `left` has a fuzzy equal point in `right` and the counts match.
pub fn point_sets_match(left: &[Vector2<f64>], right: &[Vector2<f64>], eps: f64) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .all(|l| right.iter().any(|r| l.fuzzy_eq_eps(*r, eps)))
}

/// State applied to a polygon in a [ModifiedPolygonSet].
#[derive(Debug, Copy, Clone)]
pub struct ModifiedPolygonState {
    pub rotation: f64,
    pub translation: Vector2<f64>,
}

/// Copies of a polygon rotated about its center and translated, visited in turn so a test can
/// assert a property holds independent of placement.
pub struct ModifiedPolygonSet {
    polygons: Vec<(Polygon<f64>, ModifiedPolygonState)>,
}

impl ModifiedPolygonSet {
    pub fn new(polygon: &Polygon<f64>) -> Self {
        let center = polygon.center();
        let translations = [vec2(0.0, 0.0), vec2(-7.5, 3.25), vec2(120.0, -40.0)];
        let mut polygons = Vec::new();
        for &translation in translations.iter() {
            for &rotation in std::iter::once(&0.0).chain(TEST_ROTATION_ANGLES.iter()) {
                let transform = Affine2::translation(-center.x, -center.y)
                    .then(&Affine2::rotation(rotation))
                    .then(&Affine2::translation(
                        center.x + translation.x,
                        center.y + translation.y,
                    ));
                polygons.push((
                    polygon.applying(&transform),
                    ModifiedPolygonState {
                        rotation,
                        translation,
                    },
                ));
            }
        }

        Self { polygons }
    }

    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&Polygon<f64>, ModifiedPolygonState),
    {
        for (polygon, state) in self.polygons.iter() {
            visit(polygon, *state);
        }
    }
}
