//! Data model for the extraction pipeline
//!
//! Geodetic coordinates are `geo::Point<f64>` (x = lon, y = lat);
//! everything after projection uses the planar types defined here.

pub mod network;
pub mod primitives;

pub use network::{ClipBoundary, ClippedSegment, Path};
pub use primitives::{PlanarPoint, Polygon};
