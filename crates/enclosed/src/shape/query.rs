//! Read-only queries against the current path.

use crate::geom2::{is_point_segment_closer_than, Point, Seg2};

use super::EnclosedShape;

impl EnclosedShape {
    /// Point-in-polygon test by crossing number (odd ⇒ inside).
    ///
    /// Counts edges crossed by the horizontal ray from `p` towards −x. The
    /// comparisons on x are non-strict, and an edge straddles when one end is
    /// strictly below `p.y` and the other at or above it. Together this makes
    /// points lying on those edges count as inside (e.g. a point on a left
    /// edge or on a horizontal top edge). Keep the comparison structure as is.
    pub fn is_inside(&self, p: Point) -> bool {
        let mut crossings = 0usize;
        for Seg2 { a, b } in self.edges() {
            let straddles = (a.y < p.y && b.y >= p.y) || (a.y >= p.y && b.y < p.y);
            if !straddles || !(a.x <= p.x || b.x <= p.x) {
                continue;
            }
            // b.y != a.y here: straddling puts them on different sides of p.y
            if (a.x <= p.x && b.x <= p.x)
                || (p.y - a.y) / (b.y - a.y) * (b.x - a.x) + a.x <= p.x
            {
                crossings += 1;
            }
        }
        crossings & 1 == 1
    }

    /// True iff some edge of the current path passes strictly within `distance` of `p`.
    ///
    /// Edges whose endpoints both lie beyond `p ± distance` on one axis are
    /// skipped before the exact segment test; the result is the same either way.
    /// `distance` must be non-negative.
    pub fn is_closer_than(&self, p: Point, distance: f64) -> bool {
        debug_assert!(distance >= 0.0, "negative distance {distance}");
        self.edges()
            .filter(|seg| seg.may_be_closer_than(p, distance))
            .any(|seg| is_point_segment_closer_than(p, seg, distance))
    }
}
