//! Clipping paths to a polygon boundary.
//!
//! A path is walked point by point; whenever it crosses the polygon
//! boundary the exact crossing point is inserted and the path is split.
//! The output is zero or more sub-paths lying entirely inside the
//! polygon. Degenerate inputs never fail, they just contribute nothing.

use log::warn;

use crate::model::{ClippedSegment, Path, PlanarPoint, Polygon};

/// Absolute determinant tolerance below which two segments are treated
/// as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-10;

/// Even-odd ray-casting containment test.
///
/// Casts a horizontal ray from `point` and toggles on every edge
/// crossing. Points exactly on the boundary may classify either way;
/// the clipper tolerates both outcomes.
pub fn contains(point: PlanarPoint, polygon: &Polygon) -> bool {
    let mut inside = false;
    for (vi, vj) in polygon.edges() {
        let straddles = (vi.y > point.y) != (vj.y > point.y);
        if straddles && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x {
            inside = !inside;
        }
    }
    inside
}

/// Intersection of segments `(a1, a2)` and `(b1, b2)`.
///
/// Solves the parametric form with the determinant formula. Returns
/// `None` for (near-)parallel segments or when the intersection falls
/// outside either segment. The result has z = 0; callers that care
/// about elevation assign it afterwards.
pub fn segment_intersection(
    a1: PlanarPoint,
    a2: PlanarPoint,
    b1: PlanarPoint,
    b2: PlanarPoint,
) -> Option<PlanarPoint> {
    let d1x = a2.x - a1.x;
    let d1y = a2.y - a1.y;
    let d2x = b2.x - b1.x;
    let d2y = b2.y - b1.y;

    let denom = d1x * d2y - d1y * d2x;
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = ((b1.x - a1.x) * d2y - (b1.y - a1.y) * d2x) / denom;
    let u = ((b1.x - a1.x) * d1y - (b1.y - a1.y) * d1x) / denom;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }

    Some(PlanarPoint::new(a1.x + t * d1x, a1.y + t * d1y))
}

/// Exact crossing point between an inside point and an outside point.
///
/// Scans the polygon edges in order and takes the first hit. A miss
/// means the inside/outside classification contradicts the polygon
/// (non-simple boundary or numeric noise); the inside point is returned
/// unchanged and the condition is logged as a data-quality signal.
///
/// The crossing carries the z of the inside point; z is not
/// interpolated along the segment.
pub fn boundary_crossing(
    inside: PlanarPoint,
    outside: PlanarPoint,
    polygon: &Polygon,
) -> PlanarPoint {
    for (vi, vj) in polygon.edges() {
        if let Some(mut hit) = segment_intersection(inside, outside, *vi, *vj) {
            hit.z = inside.z;
            return hit;
        }
    }
    warn!(
        "no boundary crossing between ({}, {}) and ({}, {}); keeping the inside point",
        inside.x, inside.y, outside.x, outside.y
    );
    inside
}

/// Splits `path` into the sub-segments lying inside `polygon`.
///
/// Point order is never changed, only truncated at the ends of each
/// sub-segment where the exact boundary crossing is inserted. Segments
/// that end up with fewer than 2 points are dropped. A path entirely
/// outside the polygon yields an empty result.
pub fn clip_path(path: &Path, polygon: &Polygon) -> Vec<ClippedSegment> {
    let mut segments = Vec::new();
    let mut current: Vec<PlanarPoint> = Vec::new();
    let mut previous: Option<(PlanarPoint, bool)> = None;

    for &point in &path.points {
        let inside = contains(point, polygon);
        match previous {
            None => {
                if inside {
                    current.push(point);
                }
            }
            Some((prev_point, prev_inside)) => {
                if inside && !prev_inside {
                    // Entering: open a new segment at the exact crossing.
                    current.push(boundary_crossing(point, prev_point, polygon));
                    current.push(point);
                } else if inside {
                    current.push(point);
                } else if prev_inside {
                    // Leaving: close the segment at the exact crossing.
                    current.push(boundary_crossing(prev_point, point, polygon));
                    flush_segment(&mut segments, &mut current, path);
                }
            }
        }
        previous = Some((point, inside));
    }

    // The path ended while still inside.
    flush_segment(&mut segments, &mut current, path);
    segments
}

fn flush_segment(segments: &mut Vec<ClippedSegment>, current: &mut Vec<PlanarPoint>, source: &Path) {
    if current.len() >= 2 {
        segments.push(ClippedSegment {
            points: std::mem::take(current),
            category: source.category.clone(),
            weight: source.weight,
        });
    } else {
        current.clear();
    }
}
