use planar_geom::{
    core::math::Vector2,
    polygon, Line, LineIntr, LineSegment, SegIntr,
};

fn main() {
    line_intersections();
    segment_intersections();
    polygon_intersections();
}

fn line_intersections() {
    println!("Line intersections...");

    let l1 = Line::regular(2.0, -1.0);
    let l2 = Line::regular(-1.0, 5.0);
    match l1.intersect(&l2) {
        LineIntr::Intersect(point) => println!("  {l1:?} and {l2:?} cross at {point:?}"),
        r => unreachable!("expected a single intersect, got {r:?}"),
    }

    let parallel = Line::regular(2.0, 3.0);
    assert_eq!(l1.intersect(&parallel), LineIntr::NoIntersect);
    println!("  {l1:?} and {parallel:?} are parallel");

    let vertical = Line::vertical(1.0);
    assert_eq!(vertical.intersect(&vertical), LineIntr::Coincident);
    println!("  a line intersected with itself is coincident, not a point");
}

fn segment_intersections() {
    println!("Segment intersections...");

    let s1 = LineSegment::new(Vector2::new(0.0, 0.0), Vector2::new(2.0, 2.0));
    let s2 = LineSegment::new(Vector2::new(0.0, 2.0), Vector2::new(2.0, 0.0));
    let point = s1.intersection(&s2);
    assert_eq!(point, Some(Vector2::new(1.0, 1.0)));
    println!("  diagonals cross at {point:?}");

    let short = LineSegment::new(Vector2::new(3.0, 0.0), Vector2::new(3.0, 1.0));
    match s1.intersect(&short) {
        SegIntr::FalseIntersect { seg1_t, seg2_t } => {
            println!("  lines cross outside the segments (seg1_t: {seg1_t}, seg2_t: {seg2_t})")
        }
        r => unreachable!("expected false intersect, got {r:?}"),
    }
}

fn polygon_intersections() {
    println!("Polygon intersections...");

    let square = polygon![(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)];
    let through_center = Line::regular(0.25, 1.5);
    let hits = square.line_intersections(&through_center);
    assert_eq!(hits.len(), 2);
    println!("  line {through_center:?} crosses the square at {hits:?}");

    let probe = LineSegment::new(Vector2::new(2.0, 2.0), Vector2::new(2.0, 10.0));
    let hits = square.segment_intersections(&probe);
    assert_eq!(hits.len(), 1);
    println!("  segment from the center leaves the square at {hits:?}");
}
