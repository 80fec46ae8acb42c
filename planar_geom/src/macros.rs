/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct a polygon with the vertexes given as a list of (x, y) tuples.
///
/// # Panics
///
/// Panics if no vertexes are given.
///
/// # Examples
///
/// ```
/// # use planar_geom::polygon;
/// # use planar_geom::core::math::*;
/// let triangle = polygon![(0.0, 0.0), (2.0, 0.0), (1.0, 1.0)];
/// assert_eq!(triangle.vertex_count(), 3);
/// assert_eq!(triangle[1], Vector2::new(2.0, 0.0));
/// ```
#[macro_export]
macro_rules! polygon {
    ($( $x:expr ),* $(,)?) => {
        $crate::polygon::Polygon::new(vec![
            $( $crate::core::math::Vector2::new($x.0, $x.1) ),*
        ])
    };
}
