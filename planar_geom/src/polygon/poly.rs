use super::{EdgeInsets, PolygonError};
use crate::{
    core::{
        math::{aabb_at_origin, aabb_center, aabb_corners, aabb_from_points, Affine2, Vector2},
        traits::Real,
    },
    Line, LineSegment,
};
use static_aabb2d_index::AABB;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed polygon stored as an ordered sequence of vertexes.
///
/// The last vertex implicitly connects back to the first. Edges are not stored, they are derived
/// from the vertexes on demand (edge `i` runs from vertex `i` to vertex `(i + 1) % n`). A polygon
/// always has at least one vertex. Equality compares the vertex sequences exactly.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        try_from = "PolygonData<T>",
        bound(deserialize = "T: Real + Deserialize<'de>")
    )
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T = f64> {
    vertexes: Vec<Vector2<T>>,
}

/// Unvalidated serialized form of [Polygon].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PolygonData<T> {
    vertexes: Vec<Vector2<T>>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<PolygonData<T>> for Polygon<T>
where
    T: Real,
{
    type Error = PolygonError;

    fn try_from(data: PolygonData<T>) -> Result<Self, Self::Error> {
        Polygon::try_new(data.vertexes)
    }
}

/// Check that every edge ends where the next edge starts, including the last edge wrapping around
/// to the first.
///
/// # Examples
///
/// ```
/// # use planar_geom::*;
/// # use planar_geom::polygon::*;
/// # use planar_geom::core::math::*;
/// let a = Vector2::new(0.0, 0.0);
/// let b = Vector2::new(1.0, 0.0);
/// let c = Vector2::new(0.0, 1.0);
/// let closed = [LineSegment::new(a, b), LineSegment::new(b, c), LineSegment::new(c, a)];
/// assert_eq!(validate_edge_chain(&closed), Ok(()));
///
/// let open = [LineSegment::new(a, b), LineSegment::new(b, c), LineSegment::new(c, b)];
/// assert_eq!(
///     validate_edge_chain(&open),
///     Err(PolygonError::DisconnectedEdges { index: 2, next_index: 0 })
/// );
/// ```
pub fn validate_edge_chain<T>(edges: &[LineSegment<T>]) -> Result<(), PolygonError>
where
    T: Real,
{
    let n = edges.len();
    for index in 0..n {
        let next_index = (index + 1) % n;
        if edges[index].b != edges[next_index].a {
            return Err(PolygonError::DisconnectedEdges { index, next_index });
        }
    }

    Ok(())
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Create a polygon from its vertexes.
    ///
    /// # Panics
    ///
    /// Panics if `vertexes` is empty, use [Polygon::try_new] to get an error instead.
    pub fn new(vertexes: Vec<Vector2<T>>) -> Self {
        match Polygon::try_new(vertexes) {
            Ok(polygon) => polygon,
            Err(err) => panic!("invalid polygon vertexes: {err}"),
        }
    }

    /// Create a polygon from its vertexes, failing if `vertexes` is empty.
    pub fn try_new(vertexes: Vec<Vector2<T>>) -> Result<Self, PolygonError> {
        if vertexes.is_empty() {
            return Err(PolygonError::EmptyVertexes);
        }

        Ok(Polygon { vertexes })
    }

    /// Create a polygon from a closed chain of edges, the start point of each edge becomes a
    /// vertex.
    ///
    /// # Panics
    ///
    /// Panics if the edges are not a closed chain (see [validate_edge_chain]) or if `edges` is
    /// empty. Use [Polygon::try_from_edges] to get an error instead.
    pub fn from_edges(edges: &[LineSegment<T>]) -> Self {
        match Polygon::try_from_edges(edges) {
            Ok(polygon) => polygon,
            Err(err) => panic!("invalid polygon edges: {err}"),
        }
    }

    /// Same as [Polygon::from_edges] but returns an error instead of panicking.
    pub fn try_from_edges(edges: &[LineSegment<T>]) -> Result<Self, PolygonError> {
        validate_edge_chain(edges)?;
        Polygon::try_new(edges.iter().map(|edge| edge.a).collect())
    }

    /// Four vertex polygon with the corners of `aabb` (see [aabb_corners] for the order).
    #[inline]
    pub fn from_aabb(aabb: &AABB<T>) -> Self {
        Polygon {
            vertexes: aabb_corners(aabb).to_vec(),
        }
    }

    #[inline]
    pub fn vertexes(&self) -> &[Vector2<T>] {
        &self.vertexes
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertexes.len()
    }

    #[inline]
    pub fn into_vertexes(self) -> Vec<Vector2<T>> {
        self.vertexes
    }

    /// Iterate the derived edges, including the edge from the last vertex back to the first.
    pub fn iter_edges(&self) -> impl Iterator<Item = LineSegment<T>> + '_ {
        let n = self.vertexes.len();
        self.vertexes
            .iter()
            .enumerate()
            .map(move |(i, &v)| LineSegment::new(v, self.vertexes[(i + 1) % n]))
    }

    /// Derived edges, edge `i` runs from vertex `i` to vertex `(i + 1) % n`.
    #[inline]
    pub fn edges(&self) -> Vec<LineSegment<T>> {
        self.iter_edges().collect()
    }

    /// Replace the vertexes with the start points of `edges`.
    ///
    /// # Panics
    ///
    /// Panics if the edges are not a closed chain (see [validate_edge_chain]) or if `edges` is
    /// empty.
    pub fn set_edges(&mut self, edges: &[LineSegment<T>]) {
        *self = Polygon::from_edges(edges);
    }

    /// Minimal axis aligned rectangle enclosing all vertexes.
    pub fn frame(&self) -> AABB<T> {
        match aabb_from_points(self.vertexes.iter().copied()) {
            Some(aabb) => aabb,
            None => unreachable!("internal library error: polygon has no vertexes"),
        }
    }

    /// [Polygon::frame] moved so its minimum corner is at the origin.
    #[inline]
    pub fn bounds(&self) -> AABB<T> {
        aabb_at_origin(&self.frame())
    }

    /// Center of [Polygon::frame].
    #[inline]
    pub fn center(&self) -> Vector2<T> {
        aabb_center(&self.frame())
    }

    /// All points where `segment` crosses the polygon boundary.
    ///
    /// Each edge contributes its [LineSegment::intersection] with `segment`. A point hit by more
    /// than one edge (e.g. at a shared vertex) is reported once: each edge computes the point
    /// along its own direction, so hits within `T::fuzzy_epsilon()` of an already reported point
    /// are dropped.
    pub fn segment_intersections(&self, segment: &LineSegment<T>) -> Vec<Vector2<T>> {
        collect_unique(
            self.iter_edges()
                .filter_map(|edge| edge.intersection(segment)),
        )
    }

    /// All points where the infinite `line` crosses the polygon boundary.
    ///
    /// The line containing each edge is intersected with `line` and the point kept only if it
    /// lies on the edge itself ([LineSegment::contains]). Hits within `T::fuzzy_epsilon()` of an
    /// already reported point are dropped, so a shared vertex is reported once.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_geom::*;
    /// # use planar_geom::core::math::*;
    /// let square = polygon![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
    /// let hits = square.line_intersections(&Line::regular(0.0, 0.5));
    /// assert_eq!(hits, vec![Vector2::new(0.0, 0.5), Vector2::new(1.0, 0.5)]);
    /// ```
    pub fn line_intersections(&self, line: &Line<T>) -> Vec<Vector2<T>> {
        collect_unique(self.iter_edges().filter_map(|edge| {
            edge.line()
                .intersection(line)
                .filter(|&point| edge.contains(point))
        }))
    }

    /// New polygon with every vertex mapped through `transform`.
    #[inline]
    pub fn applying(&self, transform: &Affine2<T>) -> Self {
        self.map(|v| transform.transform_point(v))
    }

    /// New polygon with every vertex mapped through `f`, vertex order and count are preserved.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(Vector2<T>) -> Vector2<T>,
    {
        Polygon {
            vertexes: self.vertexes.iter().copied().map(f).collect(),
        }
    }

    /// Same as [Polygon::map] with a fallible `f`, returns the first error encountered.
    pub fn try_map<F, E>(&self, f: F) -> Result<Self, E>
    where
        F: FnMut(Vector2<T>) -> Result<Vector2<T>, E>,
    {
        let vertexes = self
            .vertexes
            .iter()
            .copied()
            .map(f)
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Polygon { vertexes })
    }

    /// Inset a four sided polygon by moving each edge perpendicular to itself.
    ///
    /// `insets` are applied in edge order `[left, bottom, right, top]` (see
    /// [EdgeInsets::to_edge_offsets]). Returns `None` if the polygon does not have exactly four
    /// edges or if any two adjacent offset edges do not cross at a single point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_geom::*;
    /// # use planar_geom::polygon::*;
    /// # use planar_geom::core::math::*;
    /// let rect = Polygon::from_aabb(&AABB::new(0.0, 0.0, 10.0, 10.0));
    /// let grown = rect.inset(&EdgeInsets::uniform(1.0)).unwrap();
    /// assert!(grown.fuzzy_eq(&polygon![(-1.0, -1.0), (-1.0, 11.0), (11.0, 11.0), (11.0, -1.0)]));
    ///
    /// let triangle = polygon![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
    /// assert!(triangle.inset(&EdgeInsets::uniform(1.0)).is_none());
    /// ```
    #[inline]
    pub fn inset(&self, insets: &EdgeInsets<T>) -> Option<Self> {
        self.inset_edges(insets.to_edge_offsets())
    }

    /// Same as [Polygon::inset] with the offsets already in edge order.
    ///
    /// Edge `i` is moved by `offsets[i]` using [LineSegment::translated] and the new vertex `i` is
    /// the intersection of the lines through offset edges `i - 1` and `i`.
    pub fn inset_edges(&self, offsets: [T; 4]) -> Option<Self> {
        if self.vertex_count() != 4 {
            return None;
        }

        let lines = self
            .iter_edges()
            .zip(offsets)
            .map(|(edge, offset)| edge.translated(offset).line())
            .collect::<Vec<_>>();

        let n = lines.len();
        let vertexes = (0..n)
            .filter_map(|i| lines[(i + n - 1) % n].intersection(&lines[i]))
            .collect::<Vec<_>>();

        if vertexes.len() != 4 {
            return None;
        }

        Some(Polygon { vertexes })
    }

    /// Fuzzy equal comparison of the vertex sequences using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: &Self, fuzzy_epsilon: T) -> bool {
        self.vertexes.len() == other.vertexes.len()
            && self
                .vertexes
                .iter()
                .zip(&other.vertexes)
                .all(|(v1, v2)| v1.fuzzy_eq_eps(*v2, fuzzy_epsilon))
    }

    /// Fuzzy equal comparison of the vertex sequences using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

fn collect_unique<T, I>(points: I) -> Vec<Vector2<T>>
where
    T: Real,
    I: Iterator<Item = Vector2<T>>,
{
    let mut result: Vec<Vector2<T>> = Vec::new();
    for point in points {
        if !result.iter().any(|p| p.fuzzy_eq(point)) {
            result.push(point);
        }
    }

    result
}

impl<T> Index<usize> for Polygon<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vertexes[index]
    }
}

impl<T> TryFrom<Vec<Vector2<T>>> for Polygon<T>
where
    T: Real,
{
    type Error = PolygonError;

    #[inline]
    fn try_from(vertexes: Vec<Vector2<T>>) -> Result<Self, Self::Error> {
        Polygon::try_new(vertexes)
    }
}

impl<T> From<&AABB<T>> for Polygon<T>
where
    T: Real,
{
    #[inline]
    fn from(aabb: &AABB<T>) -> Self {
        Polygon::from_aabb(aabb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    fn unit_square() -> Polygon {
        Polygon::from_aabb(&AABB::new(0.0, 0.0, 1.0, 1.0))
    }

    #[test]
    fn edges_wrap_around() {
        let square = unit_square();
        let edges = square.edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].a, vec2(1.0, 0.0));
        assert_eq!(edges[3].b, vec2(0.0, 0.0));
        for i in 0..edges.len() {
            assert_eq!(edges[i].b, edges[(i + 1) % edges.len()].a);
        }
    }

    #[test]
    fn single_vertex_has_degenerate_edge() {
        let point = Polygon::new(vec![vec2(2.0, 3.0)]);
        let edges = point.edges();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].a, edges[0].b);
    }

    #[test]
    fn empty_vertexes_is_error() {
        assert_eq!(
            Polygon::<f64>::try_new(Vec::new()),
            Err(PolygonError::EmptyVertexes)
        );
        assert_eq!(
            Polygon::<f64>::try_from_edges(&[]),
            Err(PolygonError::EmptyVertexes)
        );
    }

    #[test]
    fn edges_round_trip() {
        let square = unit_square();
        let rebuilt = Polygon::from_edges(&square.edges());
        assert_eq!(rebuilt, square);
    }

    #[test]
    fn set_edges_replaces_vertexes() {
        let mut polygon = unit_square();
        let a = vec2(0.0, 0.0);
        let b = vec2(2.0, 0.0);
        let c = vec2(1.0, 2.0);
        polygon.set_edges(&[
            LineSegment::new(a, b),
            LineSegment::new(b, c),
            LineSegment::new(c, a),
        ]);
        assert_eq!(polygon.vertexes(), &[a, b, c]);
    }

    #[test]
    #[should_panic(expected = "edge 1 does not end where edge 2 starts")]
    fn set_edges_rejects_gap() {
        let mut polygon = unit_square();
        let mut edges = polygon.edges();
        edges[1].b = vec2(5.0, 5.0);
        polygon.set_edges(&edges);
    }

    #[test]
    fn frame_bounds_center() {
        let polygon = polygon![(2.0, 1.0), (4.0, 3.0), (3.0, 5.0)];
        let frame = polygon.frame();
        assert_eq!(
            (frame.min_x, frame.min_y, frame.max_x, frame.max_y),
            (2.0, 1.0, 4.0, 5.0)
        );
        let bounds = polygon.bounds();
        assert_eq!(
            (bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y),
            (0.0, 0.0, 2.0, 4.0)
        );
        assert_eq!(polygon.center(), vec2(3.0, 3.0));
    }

    #[test]
    fn shared_vertex_hit_reported_once() {
        let square = unit_square();
        let diagonal = Line::regular(1.0, 0.0);
        let hits = square.line_intersections(&diagonal);
        assert_eq!(hits, vec![vec2(0.0, 0.0), vec2(1.0, 1.0)]);
    }

    #[test]
    fn try_map_stops_at_error() {
        let square = unit_square();
        let result: Result<Polygon, &str> = square.try_map(|v| {
            if v.x > 0.5 && v.y > 0.5 {
                Err("upper right")
            } else {
                Ok(v)
            }
        });
        assert_eq!(result, Err("upper right"));

        let shifted: Result<Polygon, &str> = square.try_map(|v| Ok(v + vec2(1.0, 0.0)));
        assert_eq!(shifted.unwrap()[0], vec2(1.0, 0.0));
    }

    #[test]
    fn index_matches_vertexes() {
        let square = unit_square();
        assert_eq!(square[2], vec2(1.0, 1.0));
        assert_eq!(square.vertex_count(), 4);
        assert_eq!(square.clone().into_vertexes(), square.vertexes().to_vec());
    }
}
