//! Network-level types: categorized paths, clipped segments, and the
//! memoized clip boundary.

use std::sync::OnceLock;

use geo::Point;
use serde::Serialize;

use super::{PlanarPoint, Polygon};
use crate::Error;
use crate::algo::projection::project;

/// Categorized polyline in planar coordinates.
///
/// Always holds at least 2 points; ways that resolve to fewer are
/// discarded during assembly.
#[derive(Debug, Clone, Serialize)]
pub struct Path {
    pub points: Vec<PlanarPoint>,
    /// Raw category tag value, e.g. `"primary"`.
    pub category: String,
    /// Rendering weight derived from the category.
    pub weight: f64,
}

/// Portion of a [`Path`] lying inside a clip boundary.
///
/// Category and weight are copied verbatim from the source path; one
/// path can yield several segments when it crosses the boundary more
/// than once.
#[derive(Debug, Clone, Serialize)]
pub struct ClippedSegment {
    pub points: Vec<PlanarPoint>,
    pub category: String,
    pub weight: f64,
}

impl From<Path> for ClippedSegment {
    fn from(path: Path) -> Self {
        Self {
            points: path.points,
            category: path.category,
            weight: path.weight,
        }
    }
}

/// Geodetic clip perimeter with a memoized planar projection.
///
/// Projecting the perimeter is deterministic and the boundary rarely
/// changes within a session, so the planar polygon is computed at most
/// once. The first call to [`ClipBoundary::projected`] fixes the
/// projection center; the pipeline always passes its configured center,
/// so later calls reuse the cached polygon.
#[derive(Debug)]
pub struct ClipBoundary {
    geodetic: Vec<Point<f64>>,
    projected: OnceLock<Polygon>,
}

impl ClipBoundary {
    /// # Errors
    ///
    /// Returns an error for fewer than 3 perimeter vertices
    pub fn new(geodetic: Vec<Point<f64>>) -> Result<Self, Error> {
        if geodetic.len() < 3 {
            return Err(Error::InvalidData(format!(
                "clip boundary needs at least 3 vertices, got {}",
                geodetic.len()
            )));
        }
        Ok(Self {
            geodetic,
            projected: OnceLock::new(),
        })
    }

    /// The perimeter as a planar polygon relative to `center`.
    pub fn projected(&self, center: Point<f64>) -> &Polygon {
        self.projected.get_or_init(|| {
            let vertices = self
                .geodetic
                .iter()
                .map(|vertex| project(*vertex, center))
                .collect();
            Polygon::new_unchecked(vertices)
        })
    }
}
