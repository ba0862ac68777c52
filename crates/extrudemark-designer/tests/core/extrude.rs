use extrudemark_designer::{
    build_extrusion, flatten_outline, Contour, PathCommand, Point, FACE_EPSILON,
};
use proptest::prelude::*;

fn plain(_face: usize, _glyph: usize) -> String {
    "#000000".to_string()
}

#[test]
fn test_curved_outline_extrusion() {
    // closed lens made of two quadratic arcs
    let commands = vec![
        PathCommand::MoveTo(Point::new(0.0, 0.0)),
        PathCommand::QuadTo {
            ctrl: Point::new(50.0, -40.0),
            to: Point::new(100.0, 0.0),
        },
        PathCommand::QuadTo {
            ctrl: Point::new(50.0, 40.0),
            to: Point::new(0.0, 0.0),
        },
        PathCommand::Close,
    ];
    let contours = flatten_outline(&commands, 12).unwrap();
    assert_eq!(contours.len(), 1);
    assert_eq!(contours[0].len(), 25);

    let geometry = build_extrusion(commands, contours, Point::new(12.0, -5.0), 0, &plain);
    assert_eq!(geometry.faces.len(), 24);
    assert_eq!(
        geometry.back[1],
        PathCommand::QuadTo {
            ctrl: Point::new(62.0, -45.0),
            to: Point::new(112.0, -5.0),
        }
    );
    for face in &geometry.faces {
        assert_eq!(face.corners[0], face.corners[3] + Point::new(12.0, -5.0));
        assert_eq!(face.corners[1], face.corners[2] + Point::new(12.0, -5.0));
    }
}

fn polyline() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-50.0..50.0f64, -50.0..50.0f64), 0..40)
        .prop_map(|pts| pts.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

proptest! {
    #[test]
    fn prop_open_contour_faces_bounded(points in polyline()) {
        let n = points.len();
        let contour = Contour::new(points, false);
        let geometry = build_extrusion(Vec::new(), vec![contour], Point::new(3.0, 4.0), 0, &plain);
        prop_assert!(geometry.faces.len() <= n.saturating_sub(1));
        for face in &geometry.faces {
            prop_assert!(face.corners[2].distance_to(&face.corners[3]) >= FACE_EPSILON);
        }
    }
}
