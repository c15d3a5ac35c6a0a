use geo::Point;

use crate::style::WeightTable;

/// Configuration for a network extraction run.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Projection center; all planar coordinates are meters from here.
    pub center: Point<f64>,
    /// Tag key selecting candidate ways, usually `"highway"`.
    pub category_key: String,
    /// Category → rendering weight lookup.
    pub weights: WeightTable,
}

impl NetworkConfig {
    pub fn new(center: Point<f64>) -> Self {
        Self {
            center,
            category_key: "highway".to_string(),
            weights: WeightTable::default(),
        }
    }
}
