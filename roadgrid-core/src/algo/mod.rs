//! Geometry algorithms: projection and polygon clipping

pub mod clip;
pub mod projection;

pub use clip::{boundary_crossing, clip_path, contains, segment_intersection};
pub use projection::{project, unproject};
