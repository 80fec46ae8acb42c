use planar_geom::{
    core::{
        math::{aabb_center, aabb_corners, Affine2, Vector2},
        traits::FuzzyEq,
    },
    Line, LineSegment, Polygon, AABB,
};
use std::f64::consts::FRAC_PI_4;

fn main() {
    points();
    lines_and_segments();
    polygon_basics();
}

fn points() {
    println!("Point algebra...");

    let p = Vector2::new(3.0, 4.0);
    println!("  {p:?} is {} from the origin at angle {}", p.length(), p.angle());

    let polar = Vector2::from_polar_about(FRAC_PI_4, 2.0f64.sqrt(), Vector2::new(1.0, 1.0));
    assert!(polar.fuzzy_eq(Vector2::new(2.0, 2.0)));
    println!("  polar point from (1, 1): {polar:?}");

    let cross = Vector2::new(1.0, 0.0).cross(Vector2::new(0.0, 1.0));
    println!("  x axis cross y axis: {cross}");

    let circle_bounds = p.circle_bounds(1.0);
    println!("  bounds of radius 1 circle around {p:?}: {circle_bounds:?}");
}

fn lines_and_segments() {
    println!("Lines and segments...");

    let seg = LineSegment::new(Vector2::new(0.0, 1.0), Vector2::new(4.0, 3.0));
    println!(
        "  segment length {}, angle {}, bounds {:?}",
        seg.length(),
        seg.angle(),
        seg.bounds()
    );

    let line = seg.line();
    println!("  supporting line: {line:?} (angle {})", line.angle());
    assert!(line.contains(seg.a));

    let vertical = Line::from_segment(&LineSegment::new(
        Vector2::new(2.0, -5.0),
        Vector2::new(2.0, 5.0),
    ));
    assert_eq!(vertical, Line::vertical(2.0));
    println!("  segment with equal x builds {vertical:?}");

    let shifted = seg.translated(1.0);
    println!("  segment translated by 1: {shifted:?}");
    assert!(line.distance_to(shifted.a).fuzzy_eq(1.0));
}

fn polygon_basics() {
    println!("Polygon basics...");

    let rect = AABB::new(-1.0, -2.0, 3.0, 2.0);
    let polygon = Polygon::from_aabb(&rect);
    assert_eq!(polygon.vertexes(), &aabb_corners(&rect));
    assert_eq!(polygon.center(), aabb_center(&rect));

    for (i, edge) in polygon.iter_edges().enumerate() {
        println!("  edge {i}: {:?} -> {:?}", edge.a, edge.b);
    }

    let rotated = polygon.applying(&Affine2::rotation(FRAC_PI_4));
    println!("  rotated frame: {:?}", rotated.frame());
    println!("  rotated bounds: {:?}", rotated.bounds());
}
