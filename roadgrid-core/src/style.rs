//! Category classification and rendering-weight lookup

use hashbrown::HashMap;

use crate::DEFAULT_ROAD_WEIGHT;

/// Default rendering widths per highway category. Categories missing
/// from the table fall back to [`DEFAULT_ROAD_WEIGHT`].
const DEFAULT_WEIGHTS: &[(&str, f64)] = &[
    ("motorway", 20.0),
    ("trunk", 16.0),
    ("primary", 12.0),
    ("secondary", 9.0),
    ("tertiary", 7.0),
    ("residential", 6.0),
    ("unclassified", 5.0),
    ("living_street", 5.0),
    ("service", 4.0),
    ("pedestrian", 3.0),
    ("cycleway", 2.0),
    ("footway", 2.0),
    ("steps", 2.0),
    ("path", 1.5),
];

/// Category → rendering weight lookup with a fixed fallback.
#[derive(Debug, Clone)]
pub struct WeightTable {
    table: HashMap<String, f64>,
    fallback: f64,
}

impl WeightTable {
    pub fn new(table: HashMap<String, f64>, fallback: f64) -> Self {
        Self { table, fallback }
    }

    /// Total lookup: unknown categories get the fallback weight.
    pub fn weight_for(&self, category: &str) -> f64 {
        self.table.get(category).copied().unwrap_or(self.fallback)
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            table: DEFAULT_WEIGHTS
                .iter()
                .map(|(category, weight)| ((*category).to_string(), *weight))
                .collect(),
            fallback: DEFAULT_ROAD_WEIGHT,
        }
    }
}

/// Whether a category belongs to the pedestrian rendering style group.
///
/// Consumers use this to pick sidewalk styling; the pipeline itself
/// does not branch on it.
pub fn is_sidewalk_type(category: &str) -> bool {
    matches!(
        category,
        "footway" | "path" | "pedestrian" | "steps" | "cycleway"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_uses_the_table() {
        let table = WeightTable::default();
        assert_eq!(table.weight_for("primary"), 12.0);
    }

    #[test]
    fn unknown_category_falls_back() {
        let table = WeightTable::default();
        assert_eq!(table.weight_for("unknown_type"), DEFAULT_ROAD_WEIGHT);

        let custom = WeightTable::new(HashMap::new(), 2.5);
        assert_eq!(custom.weight_for("primary"), 2.5);
    }

    #[test]
    fn sidewalk_membership() {
        assert!(is_sidewalk_type("footway"));
        assert!(is_sidewalk_type("pedestrian"));
        assert!(!is_sidewalk_type("primary"));
        assert!(!is_sidewalk_type(""));
    }
}
