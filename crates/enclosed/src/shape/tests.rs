use super::*;
use crate::geom2::Range1;
use nalgebra::vector;

const DELTA: f64 = 0.01;

fn reference_path() -> Vec<Point> {
    vec![
        vector![-20.0, -10.0],
        vector![-10.0, 55.0],
        vector![70.0, 55.0],
        vector![75.0, -25.0],
    ]
}

fn reference_shape() -> EnclosedShape {
    EnclosedShape::new(&reference_path()).expect("valid path")
}

fn assert_path_close(actual: &[Point], expected: &[[f64; 2]]) {
    assert_eq!(actual.len(), expected.len(), "path length");
    for (i, (p, q)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (p.x - q[0]).abs() <= DELTA && (p.y - q[1]).abs() <= DELTA,
            "point {i}: got ({}, {}), expected ({}, {})",
            p.x,
            p.y,
            q[0],
            q[1]
        );
    }
}

#[test]
fn construction_closes_open_path() {
    let shape = reference_shape();
    assert_eq!(shape.point_count(), 5);
    assert_eq!(shape.path()[4], vector![-20.0, -10.0]);
    assert_eq!(shape.original_path(), shape.path());
    assert_eq!(shape.edges().count(), 4);
}

#[test]
fn construction_keeps_closed_path() {
    let mut path = reference_path();
    path.push(path[0]);
    let shape = EnclosedShape::new(&path).unwrap();
    assert_eq!(shape.point_count(), 5);
}

#[test]
fn construction_rejects_bad_input() {
    assert_eq!(EnclosedShape::new(&[]).unwrap_err(), ShapeError::EmptyPath);
    let bad = vec![vector![0.0, 0.0], vector![f64::NAN, 1.0], vector![1.0, 0.0]];
    assert_eq!(
        EnclosedShape::new(&bad).unwrap_err(),
        ShapeError::NonFinite { index: 1 }
    );
    let inf = [[0.0, 0.0], [1.0, f64::INFINITY]];
    assert!(matches!(
        EnclosedShape::from_coords(&inf),
        Err(ShapeError::NonFinite { index: 1 })
    ));
}

#[test]
fn bounding_box_of_reference() {
    let b = reference_shape().bounding_box();
    assert_eq!(b.x, Range1::new(-20.0, 75.0));
    assert_eq!(b.y, Range1::new(-25.0, 55.0));
}

#[test]
fn scale_to_target_size() {
    let mut shape = reference_shape();
    shape
        .scale_to(vector![50.0, 40.0], TargetSize::both(190.0, 40.0))
        .unwrap();
    assert_path_close(
        shape.path(),
        &[[-90.0, 15.0], [-70.0, 47.5], [90.0, 47.5], [100.0, 7.5], [-90.0, 15.0]],
    );
    let size = shape.bounding_box().size();
    assert_eq!(size.x, 190.0);
    assert_eq!(size.y, 40.0);
}

#[test]
fn scale_to_single_axis_is_uniform() {
    let mut shape = reference_shape();
    // width 95 -> 190 doubles both axes
    shape
        .scale_to(vector![0.0, 0.0], TargetSize::width(190.0))
        .unwrap();
    let size = shape.bounding_box().size();
    assert!((size.x - 190.0).abs() < 1e-9);
    assert!((size.y - 160.0).abs() < 1e-9);

    shape.reset();
    shape
        .scale_to(vector![0.0, 0.0], TargetSize::height(40.0))
        .unwrap();
    let size = shape.bounding_box().size();
    assert!((size.x - 47.5).abs() < 1e-9);
    assert!((size.y - 40.0).abs() < 1e-9);
}

#[test]
fn scale_to_errors_leave_shape_untouched() {
    let mut shape = reference_shape();
    let before = shape.path().to_vec();
    assert_eq!(
        shape
            .scale_to(vector![0.0, 0.0], TargetSize::default())
            .unwrap_err(),
        ShapeError::MissingTargetSize
    );
    assert_eq!(
        shape
            .scale_to(vector![0.0, 0.0], TargetSize::both(f64::NAN, 1.0))
            .unwrap_err(),
        ShapeError::NonFiniteTarget
    );
    assert_eq!(shape.path(), &before[..]);

    // a horizontal segment has no height to scale
    let mut flat = EnclosedShape::from_coords(&[[0.0, 1.0], [4.0, 1.0]]).unwrap();
    assert_eq!(
        flat.scale_to(vector![0.0, 0.0], TargetSize::both(8.0, 2.0))
            .unwrap_err(),
        ShapeError::DegenerateExtent { axis: 1 }
    );
    // width-only works and keeps the line flat
    flat.scale_to(vector![0.0, 0.0], TargetSize::width(8.0))
        .unwrap();
    assert_eq!(flat.bounding_box().size(), vector![8.0, 0.0]);
}

#[test]
fn reset_restores_original() {
    let mut shape = reference_shape();
    shape
        .scale_to(vector![50.0, 40.0], TargetSize::both(190.0, 40.0))
        .unwrap()
        .rotate(vector![1.0, 2.0], 0.7)
        .move_to(vector![0.0, 0.0], vector![5.0, 5.0]);
    shape.reset();
    assert_path_close(
        shape.path(),
        &[[-20.0, -10.0], [-10.0, 55.0], [70.0, 55.0], [75.0, -25.0], [-20.0, -10.0]],
    );
    let b = shape.bounding_box();
    assert_eq!(b.x, Range1::new(-20.0, 75.0));
    assert_eq!(b.y, Range1::new(-25.0, 55.0));
    // the stored original is untouched by later transforms
    shape.move_to(vector![0.0, 0.0], vector![1.0, 1.0]);
    assert_eq!(shape.original_path()[0], vector![-20.0, -10.0]);
}

#[test]
fn scale_by_multiplier() {
    let mut shape = reference_shape();
    shape
        .scale_by(vector![50.0, 40.0], vector![1.5, 2.0])
        .unwrap();
    assert_path_close(
        shape.path(),
        &[[-55.0, -60.0], [-40.0, 70.0], [80.0, 70.0], [87.5, -90.0], [-55.0, -60.0]],
    );
    let b = shape.bounding_box();
    assert_eq!(b.x, Range1::new(-55.0, 87.5));
    assert_eq!(b.y, Range1::new(-90.0, 70.0));
    assert_eq!(
        shape
            .scale_by(vector![0.0, 0.0], vector![f64::INFINITY, 1.0])
            .unwrap_err(),
        ShapeError::NonFiniteTarget
    );
}

#[test]
fn move_then_rotate() {
    let mut shape = reference_shape();
    shape.move_to(vector![50.0, 40.0], vector![150.0, -20.0]);
    assert_path_close(
        shape.path(),
        &[[80.0, -70.0], [90.0, -5.0], [170.0, -5.0], [175.0, -85.0], [80.0, -70.0]],
    );
    let b = shape.bounding_box();
    assert_eq!(b.x, Range1::new(80.0, 175.0));
    assert_eq!(b.y, Range1::new(-85.0, -5.0));

    shape.rotate(vector![50.0, 40.0], -std::f64::consts::PI / 12.0);
    assert_path_close(
        shape.path(),
        &[
            [50.508, -74.016],
            [76.990, -13.819],
            [154.264, -34.525],
            [138.388, -113.093],
            [50.508, -74.016],
        ],
    );
    let b = shape.bounding_box();
    assert!((b.x.min - 50.508).abs() <= DELTA && (b.x.max - 154.264).abs() <= DELTA);
    assert!((b.y.min + 113.093).abs() <= DELTA && (b.y.max + 13.819).abs() <= DELTA);
}

#[test]
fn rotate_quarter_turn_is_counterclockwise() {
    let mut shape = EnclosedShape::from_coords(&[[1.0, 0.0], [2.0, 0.0], [2.0, 1.0]]).unwrap();
    shape.rotate(vector![0.0, 0.0], std::f64::consts::FRAC_PI_2);
    let p = shape.path()[0];
    assert!(p.x.abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);
}

#[test]
fn inside_queries() {
    let shape = reference_shape();
    assert!(shape.is_inside(vector![15.0, 25.0]));
    assert!(!shape.is_inside(vector![-25.0, 90.0]));
    // on the top edge
    assert!(shape.is_inside(vector![-5.0, 55.0]));
    // far right, same height as the inside point
    assert!(!shape.is_inside(vector![200.0, 25.0]));
    // below everything
    assert!(!shape.is_inside(vector![15.0, -40.0]));
}

#[test]
fn inside_boundary_policy() {
    let shape = reference_shape();
    // on the left edge AB, interpolation lands exactly on p.x
    assert!(shape.is_inside(vector![-15.0, 22.5]));
    // on the right edge CD: counted together with AB, so even
    assert!(!shape.is_inside(vector![72.5, 15.0]));
    // top-right vertex C
    assert!(!shape.is_inside(vector![70.0, 55.0]));
    // ray passes through A; only CD and DA straddle
    assert!(!shape.is_inside(vector![100.0, -10.0]));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "negative distance")]
fn closer_than_rejects_negative_distance() {
    reference_shape().is_closer_than(vector![0.0, 0.0], -1.0);
}

#[test]
fn inside_follows_transforms() {
    let mut shape = reference_shape();
    shape.move_to(vector![0.0, 0.0], vector![1000.0, 0.0]);
    assert!(!shape.is_inside(vector![15.0, 25.0]));
    assert!(shape.is_inside(vector![1015.0, 25.0]));
}

#[test]
fn closer_than_queries() {
    let shape = reference_shape();
    assert!(shape.is_closer_than(vector![-5.0, 35.0], 10.0));
    assert!(!shape.is_closer_than(vector![-5.0, 35.0], 5.0));
    assert!(!shape.is_closer_than(vector![-25.0, -15.0], 5.0));
    assert!(shape.is_closer_than(vector![-25.0, -15.0], 10.0));
}

#[test]
fn single_point_shape() {
    let mut shape = EnclosedShape::from_coords(&[[2.0, 3.0]]).unwrap();
    assert_eq!(shape.point_count(), 1);
    assert_eq!(shape.edges().count(), 0);
    assert!(!shape.is_inside(vector![2.0, 3.0]));
    assert!(!shape.is_closer_than(vector![2.0, 3.0], 1.0));
    shape.move_to(vector![0.0, 0.0], vector![1.0, 1.0]);
    assert_eq!(shape.bounding_box().center(), vector![3.0, 4.0]);
}

#[test]
fn error_messages() {
    assert_eq!(
        ShapeError::MissingTargetSize.to_string(),
        "at least one of the scale dimensions must be given"
    );
    assert_eq!(
        ShapeError::DegenerateExtent { axis: 0 }.to_string(),
        "cannot scale along axis x (current extent is zero)"
    );
}
