#![cfg(feature = "serde")]

use planar_geom::{core::math::vec2, polygon, polygon::EdgeInsets, Line, LineSegment, Polygon};

#[test]
fn polygon_json_round_trip() {
    let quad = polygon![(0.0, 0.0), (1.0, 8.0), (9.0, 7.0), (7.0, -1.0)];
    let json = serde_json::to_string(&quad).unwrap();
    let back: Polygon = serde_json::from_str(&json).unwrap();
    assert_eq!(back, quad);
}

#[test]
fn polygon_without_vertexes_rejected() {
    let result = serde_json::from_str::<Polygon>(r#"{"vertexes":[]}"#);
    let err = result.unwrap_err();
    assert!(err
        .to_string()
        .contains("polygon must have at least one vertex"));
}

#[test]
fn line_variants_tagged() {
    assert_eq!(
        serde_json::to_string(&Line::vertical(2.0)).unwrap(),
        r#"{"vertical":{"x":2.0}}"#
    );
    let regular: Line = serde_json::from_str(r#"{"regular":{"slope":0.5,"intercept":-1.0}}"#).unwrap();
    assert_eq!(regular, Line::regular(0.5, -1.0));
}

#[test]
fn segment_and_insets_deserialize() {
    let seg: LineSegment = serde_json::from_str(r#"{"a":{"x":0.0,"y":1.0},"b":{"x":2.0,"y":3.0}}"#).unwrap();
    assert_eq!(seg, LineSegment::new(vec2(0.0, 1.0), vec2(2.0, 3.0)));

    let insets: EdgeInsets =
        serde_json::from_str(r#"{"top":1.0,"left":2.0,"bottom":3.0,"right":4.0}"#).unwrap();
    assert_eq!(insets.to_edge_offsets(), [2.0, 3.0, 4.0, 1.0]);
}
