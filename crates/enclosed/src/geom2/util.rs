use super::types::{BBox2, Point, Seg2};

/// Bounding box of a path in one pass; `None` for an empty path.
pub fn path_bounding_box(path: &[Point]) -> Option<BBox2> {
    let (first, rest) = path.split_first()?;
    let mut bbox = BBox2::from_point(*first);
    for p in rest {
        bbox.include(*p);
    }
    Some(bbox)
}

/// Squared Euclidean distance `dx² + dy²`.
#[inline]
pub fn points_distance2(a: Point, b: Point) -> f64 {
    (a - b).norm_squared()
}

/// True iff the shortest distance from `p` to `seg` is strictly below `distance`.
///
/// Works on squared distances throughout. A degenerate segment is a point.
/// Otherwise `p` is projected onto the supporting line and the parameter is
/// clamped to `[0, 1]`, so the nearest point may be interior or an endpoint.
/// `distance` must be non-negative.
pub fn is_point_segment_closer_than(p: Point, seg: Seg2, distance: f64) -> bool {
    debug_assert!(distance >= 0.0, "negative distance {distance}");
    let d2 = distance * distance;
    if seg.is_degenerate() {
        return points_distance2(p, seg.a) < d2;
    }
    let ab = seg.b - seg.a;
    let t = (p - seg.a).dot(&ab) / points_distance2(seg.a, seg.b);
    let t01 = t.clamp(0.0, 1.0);
    points_distance2(p, seg.a + ab * t01) < d2
}

/// Consecutive point pairs of `path` as segments (no wrap-around).
pub fn edges(path: &[Point]) -> impl Iterator<Item = Seg2> + '_ {
    path.windows(2).map(|w| Seg2::new(w[0], w[1]))
}
