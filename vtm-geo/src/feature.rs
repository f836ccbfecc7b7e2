/// GeoJSON feature model for the street and tree datasets
use serde::Deserialize;
use serde_json::{Map, Value};

/// Geometry variants that occur in the two source datasets. Streets are
/// (multi) line strings, trees are points.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
    MultiLineString { coordinates: Vec<Vec<[f64; 2]>> },
}

impl Geometry {
    /// Every `[lon, lat]` position in this geometry, in order.
    pub fn positions(&self) -> Box<dyn Iterator<Item = [f64; 2]> + '_> {
        match self {
            Geometry::Point { coordinates } => Box::new(std::iter::once(*coordinates)),
            Geometry::LineString { coordinates } => Box::new(coordinates.iter().copied()),
            Geometry::MultiLineString { coordinates } => {
                Box::new(coordinates.iter().flat_map(|line| line.iter().copied()))
            }
        }
    }

    /// The position of a point geometry, `None` for line geometry.
    pub fn point(&self) -> Option<[f64; 2]> {
        match self {
            Geometry::Point { coordinates } => Some(*coordinates),
            _ => None,
        }
    }
}

/// A single feature with free-form properties.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

/// Top-level GeoJSON document.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl Feature {
    fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(key)
    }

    /// Numeric property, accepting both JSON numbers and numeric strings.
    fn numeric_property(&self, key: &str) -> Option<f64> {
        match self.property(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn tree_id(&self) -> Option<i64> {
        self.numeric_property("TreeID").map(|id| id as i64)
    }

    pub fn tree_type(&self) -> Option<&str> {
        self.property("TreeType")?.as_str()
    }

    pub fn planting_year(&self) -> Option<i64> {
        self.numeric_property("PlantingYear").map(|year| year as i64)
    }

    /// Trunk circumference in centimeters.
    pub fn trunk_size(&self) -> Option<f64> {
        self.numeric_property("TrunkSize")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STR_RESULT: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [[[16.36, 48.20], [16.37, 48.21]], [[16.38, 48.21], [16.39, 48.22]]]
                },
                "properties": null
            },
            {
                "type": "Feature",
                "geometry": { "type": "LineString", "coordinates": [[16.36, 48.20], [16.37, 48.21]] },
                "properties": {}
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [16.3738, 48.2082] },
                "properties": { "TreeID": 1581, "TreeType": "Tilia cordata 'Greenspire' (Stadtlinde)", "PlantingYear": 1995, "TrunkSize": 40 }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [16.37, 48.21] },
                "properties": { "TreeID": "77", "PlantingYear": "1890", "TrunkSize": "312.5" }
            }
        ]
    }"#;

    #[test]
    fn test_parse_collection() {
        let collection: FeatureCollection = serde_json::from_str(STR_RESULT).unwrap();
        assert_eq!(collection.features.len(), 4);
        assert!(matches!(
            collection.features[0].geometry,
            Geometry::MultiLineString { .. }
        ));
        assert!(matches!(
            collection.features[2].geometry,
            Geometry::Point { .. }
        ));
    }

    #[test]
    fn test_typed_accessors() {
        let collection: FeatureCollection = serde_json::from_str(STR_RESULT).unwrap();
        let tree = &collection.features[2];
        assert_eq!(tree.tree_id(), Some(1581));
        assert_eq!(
            tree.tree_type(),
            Some("Tilia cordata 'Greenspire' (Stadtlinde)")
        );
        assert_eq!(tree.planting_year(), Some(1995));
        assert_eq!(tree.trunk_size(), Some(40.0));
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let collection: FeatureCollection = serde_json::from_str(STR_RESULT).unwrap();
        let tree = &collection.features[3];
        assert_eq!(tree.tree_id(), Some(77));
        assert_eq!(tree.planting_year(), Some(1890));
        assert_eq!(tree.trunk_size(), Some(312.5));
        assert_eq!(tree.tree_type(), None);
    }

    #[test]
    fn test_missing_properties() {
        let collection: FeatureCollection = serde_json::from_str(STR_RESULT).unwrap();
        let street = &collection.features[0];
        assert_eq!(street.tree_id(), None);
        assert_eq!(street.trunk_size(), None);
    }

    #[test]
    fn test_positions_cover_all_lines() {
        let collection: FeatureCollection = serde_json::from_str(STR_RESULT).unwrap();
        assert_eq!(collection.features[0].geometry.positions().count(), 4);
        assert_eq!(collection.features[1].geometry.positions().count(), 2);
        assert_eq!(collection.features[2].geometry.positions().count(), 1);
    }

    #[test]
    fn test_point_accessor() {
        let collection: FeatureCollection = serde_json::from_str(STR_RESULT).unwrap();
        assert_eq!(
            collection.features[2].geometry.point(),
            Some([16.3738, 48.2082])
        );
        assert_eq!(collection.features[0].geometry.point(), None);
    }
}
