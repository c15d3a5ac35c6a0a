//! Tolerant decoding of the Overpass-style graph document and the
//! boundary perimeter array.
//!
//! The fetch layer delivers already-retrieved JSON; a malformed
//! top-level document is its failure to handle and surfaces as an
//! error here. Individual malformed *elements* are a data-quality
//! problem instead: they are skipped and counted, never aborting the
//! batch.

use std::path::Path;

use geo::Point;
use hashbrown::HashMap;
use log::warn;
use serde::Deserialize;
use serde_json::Value;

use crate::Error;
use crate::model::ClipBoundary;

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    elements: Vec<Value>,
}

/// One element of the flat graph document.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawElement {
    Node { id: i64, lon: f64, lat: f64 },
    Way {
        #[serde(default)]
        nodes: Vec<i64>,
        #[serde(default)]
        tags: HashMap<String, String>,
    },
    /// Anything else in the feed (relations and the like); ignored by
    /// assembly.
    #[serde(other)]
    Other,
}

/// Parsed graph document: `{ "elements": [...] }` with malformed
/// entries already dropped.
#[derive(Debug, Clone)]
pub struct RawGraph {
    pub elements: Vec<RawElement>,
}

impl RawGraph {
    /// # Errors
    ///
    /// Returns an error if the top-level document is not valid JSON
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let document: RawDocument = serde_json::from_str(json)?;
        Ok(Self::from_values(document.elements))
    }

    fn from_values(values: Vec<Value>) -> Self {
        let total = values.len();
        let elements: Vec<RawElement> = values
            .into_iter()
            .map(serde_json::from_value)
            .filter_map(Result::ok)
            .collect();

        let skipped = total - elements.len();
        if skipped > 0 {
            warn!("skipped {skipped} malformed graph elements out of {total}");
        }
        Self { elements }
    }
}

/// Reads and parses a graph document from a static data file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the top-level
/// document is not valid JSON
pub fn load_graph_file(path: &Path) -> Result<RawGraph, Error> {
    let contents = std::fs::read_to_string(path)?;
    RawGraph::from_json_str(&contents)
}

#[derive(Debug, Deserialize)]
struct BoundaryVertex {
    lat: f64,
    lon: f64,
}

/// Parses a boundary perimeter from an ordered `[{lat, lon}, ...]`
/// array.
///
/// # Errors
///
/// Returns an error for invalid JSON or fewer than 3 vertices
pub fn parse_boundary(json: &str) -> Result<ClipBoundary, Error> {
    let vertices: Vec<BoundaryVertex> = serde_json::from_str(json)?;
    ClipBoundary::new(
        vertices
            .into_iter()
            .map(|vertex| Point::new(vertex.lon, vertex.lat))
            .collect(),
    )
}
