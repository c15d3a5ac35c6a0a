//! Way → path assembly over the flat element list.

use geo::Point;
use hashbrown::HashMap;
use log::{debug, info};
use rayon::prelude::*;

use super::config::NetworkConfig;
use super::elements::{RawElement, RawGraph};
use crate::algo::projection::project;
use crate::model::{Path, PlanarPoint};

/// Builds the node-id lookup from all node elements.
///
/// Duplicate ids are last-write-wins: well-formed feeds do not contain
/// them, and when they occur the later coordinate silently replaces the
/// earlier one.
pub fn build_node_map(graph: &RawGraph) -> HashMap<i64, Point<f64>> {
    let mut nodes = HashMap::new();
    for element in &graph.elements {
        if let RawElement::Node { id, lon, lat } = element {
            nodes.insert(*id, Point::new(*lon, *lat));
        }
    }
    nodes
}

/// Resolves every candidate way into a projected, categorized [`Path`].
///
/// A way qualifies when it carries the configured category tag key and
/// at least 2 of its node references resolve. Unresolvable references
/// are dropped from the point list, which can leave discontinuities in
/// ways spanning missing nodes; that is accepted data-quality noise,
/// not an error. Ways are independent once the node map exists, so
/// resolution runs in parallel.
pub fn assemble_paths(graph: &RawGraph, config: &NetworkConfig) -> Vec<Path> {
    let nodes = build_node_map(graph);

    let paths: Vec<Path> = graph
        .elements
        .par_iter()
        .filter_map(|element| assemble_way(element, &nodes, config))
        .collect();

    let way_count = graph
        .elements
        .iter()
        .filter(|element| matches!(element, RawElement::Way { .. }))
        .count();
    info!(
        "assembled {} paths from {} ways ({} nodes indexed)",
        paths.len(),
        way_count,
        nodes.len()
    );
    paths
}

fn assemble_way(
    element: &RawElement,
    nodes: &HashMap<i64, Point<f64>>,
    config: &NetworkConfig,
) -> Option<Path> {
    let RawElement::Way {
        nodes: node_ids,
        tags,
    } = element
    else {
        return None;
    };
    let category = tags.get(&config.category_key)?;
    if node_ids.is_empty() {
        return None;
    }

    let points: Vec<PlanarPoint> = node_ids
        .iter()
        .filter_map(|id| nodes.get(id))
        .map(|coord| project(*coord, config.center))
        .collect();

    let unresolved = node_ids.len() - points.len();
    if unresolved > 0 {
        debug!(
            "way with category {category}: {unresolved} of {} node refs unresolved",
            node_ids.len()
        );
    }
    if points.len() < 2 {
        return None;
    }

    Some(Path {
        points,
        category: category.clone(),
        weight: config.weights.weight_for(category),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: i64, lon: f64, lat: f64) -> RawElement {
        RawElement::Node { id, lon, lat }
    }

    fn way(node_ids: &[i64], tags: &[(&str, &str)]) -> RawElement {
        RawElement::Way {
            nodes: node_ids.to_vec(),
            tags: tags
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    fn config() -> NetworkConfig {
        NetworkConfig::new(Point::new(0.0, 0.0))
    }

    #[test]
    fn duplicate_node_ids_are_last_write_wins() {
        let graph = RawGraph {
            elements: vec![node(1, 0.0, 0.0), node(1, 0.5, 0.5)],
        };
        let nodes = build_node_map(&graph);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[&1], Point::new(0.5, 0.5));
    }

    #[test]
    fn assembles_the_documented_scenario() {
        let graph = RawGraph {
            elements: vec![
                node(1, 0.0, 0.0),
                node(2, 0.01, 0.0),
                way(&[1, 2], &[("highway", "primary")]),
            ],
        };

        let paths = assemble_paths(&graph, &config());
        assert_eq!(paths.len(), 1);
        let path = &paths[0];
        assert_eq!(path.points.len(), 2);
        assert!((path.points[1].x - 1110.0).abs() < 1e-6);
        assert!(path.points[1].y.abs() < 1e-12);
        assert_eq!(path.category, "primary");
        assert_eq!(path.weight, 12.0);
    }

    #[test]
    fn missing_node_refs_are_dropped_not_fatal() {
        let graph = RawGraph {
            elements: vec![
                node(1, 0.0, 0.0),
                node(3, 0.02, 0.0),
                way(&[1, 2, 3], &[("highway", "residential")]),
            ],
        };

        let paths = assemble_paths(&graph, &config());
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].points.len(), 2);
    }

    #[test]
    fn way_with_all_nodes_missing_produces_nothing() {
        let graph = RawGraph {
            elements: vec![way(&[7, 8, 9], &[("highway", "primary")])],
        };
        assert!(assemble_paths(&graph, &config()).is_empty());
    }

    #[test]
    fn way_without_the_category_tag_is_skipped() {
        let graph = RawGraph {
            elements: vec![
                node(1, 0.0, 0.0),
                node(2, 0.01, 0.0),
                way(&[1, 2], &[("waterway", "river")]),
            ],
        };
        assert!(assemble_paths(&graph, &config()).is_empty());
    }

    #[test]
    fn uncategorized_weight_falls_back_to_the_default() {
        let graph = RawGraph {
            elements: vec![
                node(1, 0.0, 0.0),
                node(2, 0.01, 0.0),
                way(&[1, 2], &[("highway", "bridleway")]),
            ],
        };

        let paths = assemble_paths(&graph, &config());
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].weight, crate::DEFAULT_ROAD_WEIGHT);
    }
}
