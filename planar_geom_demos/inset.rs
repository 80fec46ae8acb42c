use planar_geom::{
    core::math::Affine2,
    polygon,
    polygon::{EdgeInsets, Polygon},
    AABB,
};

fn main() {
    rect_inset();
    rotated_inset();
    inset_failures();
}

fn rect_inset() {
    println!("Rectangle inset...");

    let rect = Polygon::from_aabb(&AABB::new(0.0, 0.0, 20.0, 10.0));
    let insets = EdgeInsets::new(-1.0, -2.0, -1.0, -2.0);
    let Some(inset) = rect.inset(&insets) else {
        unreachable!("rectangle edges are never parallel to their neighbors");
    };
    println!("  {:?}\n  -> {:?}", rect.vertexes(), inset.vertexes());

    let restored = inset.inset(&insets.negated());
    assert!(restored.is_some_and(|p| p.fuzzy_eq(&rect)));
    println!("  negated insets restore the original rectangle");
}

fn rotated_inset() {
    println!("Rotated quadrilateral inset...");

    let quad = polygon![(0.0, 0.0), (1.0, 8.0), (9.0, 7.0), (7.0, -1.0)]
        .applying(&Affine2::rotation(0.4).then(&Affine2::translation(50.0, -20.0)));
    if let Some(inset) = quad.inset(&EdgeInsets::uniform(0.5)) {
        println!("  frame before: {:?}", quad.frame());
        println!("  frame after:  {:?}", inset.frame());
    }
}

fn inset_failures() {
    println!("Inset failures...");

    let triangle = polygon![(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)];
    assert!(triangle.inset(&EdgeInsets::uniform(0.5)).is_none());
    println!("  only four sided polygons can be inset");

    let collinear = polygon![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (1.0, 1.0)];
    assert!(collinear.inset(&EdgeInsets::uniform(0.5)).is_none());
    println!("  adjacent parallel edges have no corner to recompute");
}
