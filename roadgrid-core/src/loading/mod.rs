//! This module is responsible for decoding the raw graph and boundary
//! JSON and assembling categorized paths from it.

mod config;
mod elements;
mod graph;

pub use config::NetworkConfig;
pub use elements::{RawElement, RawGraph, load_graph_file, parse_boundary};
pub use graph::{assemble_paths, build_node_map};
