//! Top-level extraction pipeline: assembly → projection → clipping.

use log::info;
use rayon::prelude::*;

use crate::algo::clip::clip_path;
use crate::loading::{NetworkConfig, RawGraph, assemble_paths};
use crate::model::{ClipBoundary, ClippedSegment};

/// Runs the full pipeline over an already-parsed graph document.
///
/// Paths are assembled and projected around the configured center,
/// then clipped to `boundary` when one is given; without a boundary
/// every path passes through as a single segment. Clipping never
/// fails — paths wholly outside the boundary simply contribute
/// nothing, and an empty result is a valid outcome.
pub fn extract_network(
    graph: &RawGraph,
    config: &NetworkConfig,
    boundary: Option<&ClipBoundary>,
) -> Vec<ClippedSegment> {
    let paths = assemble_paths(graph, config);

    let segments: Vec<ClippedSegment> = match boundary {
        Some(boundary) => {
            let polygon = boundary.projected(config.center);
            paths
                .par_iter()
                .flat_map_iter(|path| clip_path(path, polygon))
                .collect()
        }
        None => paths.into_iter().map(ClippedSegment::from).collect(),
    };

    info!("extracted {} renderable segments", segments.len());
    segments
}
