//! Equirectangular projection around a fixed reference point.
//!
//! The longitude compression term uses the *center's* latitude, not the
//! point's, so the approximation only holds within a few kilometers of
//! the center. That is the operating range of a single city scene.

use geo::Point;

use crate::METERS_PER_DEGREE;
use crate::model::PlanarPoint;

/// Projects a geodetic coordinate to planar meters relative to `center`.
///
/// Pure and total: non-finite inputs propagate into the output,
/// validation is the caller's concern.
pub fn project(point: Point<f64>, center: Point<f64>) -> PlanarPoint {
    let x = (point.x() - center.x()) * METERS_PER_DEGREE * center.y().to_radians().cos();
    let y = (point.y() - center.y()) * METERS_PER_DEGREE;
    PlanarPoint::new(x, y)
}

/// Exact inverse of [`project`].
///
/// Used by interactive perimeter tools to map clicked scene positions
/// back to geodetic space.
pub fn unproject(point: PlanarPoint, center: Point<f64>) -> Point<f64> {
    let lon = center.x() + point.x / (METERS_PER_DEGREE * center.y().to_radians().cos());
    let lat = center.y() + point.y / METERS_PER_DEGREE;
    Point::new(lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundredth_of_a_degree_at_the_equator() {
        let planar = project(Point::new(0.01, 0.0), Point::new(0.0, 0.0));
        assert!((planar.x - 1110.0).abs() < 1e-6);
        assert!(planar.y.abs() < 1e-12);
        assert_eq!(planar.z, 0.0);
    }

    #[test]
    fn round_trips_near_the_center() {
        let center = Point::new(-73.98, 40.75);
        for (lon, lat) in [(-73.95, 40.78), (-74.05, 40.70), (-73.98, 40.75)] {
            let point = Point::new(lon, lat);
            let back = unproject(project(point, center), center);
            assert!((back.x() - lon).abs() < 1e-9);
            assert!((back.y() - lat).abs() < 1e-9);
        }
    }

    #[test]
    fn latitude_compresses_longitude() {
        // One degree of longitude covers less ground away from the equator.
        let at_equator = project(Point::new(1.0, 0.0), Point::new(0.0, 0.0));
        let at_60_north = project(Point::new(1.0, 60.0), Point::new(0.0, 60.0));
        assert!(at_60_north.x < at_equator.x);
        assert!((at_60_north.x - at_equator.x * 0.5).abs() < 1.0);
    }
}
