//! Road-network extraction for 3D city visualizations.
//!
//! Turns a flat OSM-style element list (nodes + ways) into categorized,
//! planar path segments clipped to an area of interest:
//!
//! 1. graph assembly — resolve way node references against the node map
//! 2. projection — equirectangular lon/lat → local meters
//! 3. polygon clipping — split paths at the boundary of the area
//! 4. classification — category tag → rendering weight
//!
//! The output contract is deliberately small: ordered planar points
//! plus a category string and a rendering weight, handed to whatever
//! renderer sits downstream. The core performs no I/O beyond reading
//! an already-fetched JSON document and never raises user-facing
//! errors; incomplete data degrades to an incomplete (or empty)
//! network.

pub mod algo;
pub mod error;
pub mod loading;
pub mod model;
pub mod pipeline;
pub mod prelude;
pub mod style;

pub use error::Error;
pub use loading::NetworkConfig;
pub use model::{ClipBoundary, ClippedSegment, Path, PlanarPoint, Polygon};
pub use pipeline::extract_network;

/// Meters per degree of latitude, the equirectangular scale constant.
/// Longitude is additionally compressed by the cosine of the center's
/// latitude.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Rendering weight for categories missing from the weight table.
pub const DEFAULT_ROAD_WEIGHT: f64 = 5.0;
