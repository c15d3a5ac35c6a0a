// Re-export of the pipeline entry points
pub use crate::loading::{NetworkConfig, RawGraph, load_graph_file, parse_boundary};
pub use crate::pipeline::extract_network;

// Core geometry types
pub use crate::model::{ClipBoundary, ClippedSegment, Path, PlanarPoint, Polygon};

// Geometry primitives for callers composing their own pipelines
pub use crate::algo::clip::{clip_path, contains, segment_intersection};
pub use crate::algo::projection::{project, unproject};

// Classification
pub use crate::style::{WeightTable, is_sidewalk_type};

pub use crate::{DEFAULT_ROAD_WEIGHT, METERS_PER_DEGREE};
