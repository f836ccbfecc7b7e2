/// Working-set filter for the tree layer
use crate::feature::Feature;

/// Species drawn regardless of planting year.
pub const ALWAYS_SHOWN_SPECIES: [&str; 2] = [
    "Sophora japonica (Schnurbaum)",
    "Tilia cordata 'Greenspire' (Stadtlinde)",
];

/// A tree is drawn when it was planted strictly between 1920 and 2020,
/// or when its species is one of the always-shown ones. Trees missing
/// both properties are dropped.
pub fn is_displayed(feature: &Feature) -> bool {
    let year_in_window = feature
        .planting_year()
        .map(|year| year > 1920 && year < 2020)
        .unwrap_or(false);
    let always_shown = feature
        .tree_type()
        .map(|species| ALWAYS_SHOWN_SPECIES.contains(&species))
        .unwrap_or(false);
    year_in_window || always_shown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(properties: &str) -> Feature {
        let json = format!(
            r#"{{ "geometry": {{ "type": "Point", "coordinates": [16.37, 48.21] }},
                 "properties": {properties} }}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_year_window_is_exclusive() {
        assert!(!is_displayed(&tree(r#"{ "PlantingYear": 1920 }"#)));
        assert!(is_displayed(&tree(r#"{ "PlantingYear": 1921 }"#)));
        assert!(is_displayed(&tree(r#"{ "PlantingYear": 2019 }"#)));
        assert!(!is_displayed(&tree(r#"{ "PlantingYear": 2020 }"#)));
    }

    #[test]
    fn test_always_shown_species_ignore_the_year() {
        let pagoda = tree(
            r#"{ "PlantingYear": 1890, "TreeType": "Sophora japonica (Schnurbaum)" }"#,
        );
        assert!(is_displayed(&pagoda));
        let linden = tree(
            r#"{ "TreeType": "Tilia cordata 'Greenspire' (Stadtlinde)" }"#,
        );
        assert!(is_displayed(&linden));
    }

    #[test]
    fn test_other_species_still_need_the_year_window() {
        let maple = tree(r#"{ "PlantingYear": 1890, "TreeType": "Acer platanoides" }"#);
        assert!(!is_displayed(&maple));
    }

    #[test]
    fn test_missing_properties_drop_the_tree() {
        assert!(!is_displayed(&tree("{}")));
        assert!(!is_displayed(&tree(r#"{ "TrunkSize": 120 }"#)));
    }
}
