//! Planar geometry primitives

use itertools::Itertools;
use serde::Serialize;

use crate::Error;

/// Coordinate in meters relative to the projection center.
///
/// Never mutated after creation. The z component exists for downstream
/// 3D consumers and stays 0 unless the caller supplies an elevation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Simple polygon used as a clipping boundary, implicitly closed
/// (the last vertex connects back to the first).
#[derive(Debug, Clone, Serialize)]
pub struct Polygon {
    vertices: Vec<PlanarPoint>,
}

impl Polygon {
    /// # Errors
    ///
    /// Returns an error for fewer than 3 vertices
    pub fn new(vertices: Vec<PlanarPoint>) -> Result<Self, Error> {
        if vertices.len() < 3 {
            return Err(Error::InvalidData(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        Ok(Self { vertices })
    }

    // Vertex count was validated by the boundary constructor
    pub(crate) fn new_unchecked(vertices: Vec<PlanarPoint>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[PlanarPoint] {
        &self.vertices
    }

    /// Iterates the edges in vertex order, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (&PlanarPoint, &PlanarPoint)> + '_ {
        self.vertices.iter().circular_tuple_windows()
    }
}
