/// Screen-space markers for the displayed trees
use crate::feature::FeatureCollection;
use crate::filter::is_displayed;
use crate::projection::Projection;
use crate::scale::{TrunkBucket, TrunkRadiusScale};

/// One tree circle, resolved to screen coordinates and tooltip text.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeMarker {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub bucket: TrunkBucket,
    pub tree_id: String,
    pub species: String,
    pub planting_year: String,
}

/// Projects the displayed trees into screen space. The radius scale is
/// sized over the whole collection before the working-set filter runs.
/// Features without a point geometry or a trunk size are skipped.
pub fn build_markers(collection: &FeatureCollection, projection: &Projection) -> Vec<TreeMarker> {
    let radius_scale = TrunkRadiusScale::from_collection(collection);
    collection
        .features
        .iter()
        .filter(|feature| is_displayed(feature))
        .filter_map(|feature| {
            let point = feature.geometry.point()?;
            let trunk_size = feature.trunk_size()?;
            let (x, y) = projection.project(point);
            Some(TreeMarker {
                x,
                y,
                radius: radius_scale.radius(trunk_size),
                bucket: TrunkBucket::for_size(trunk_size),
                tree_id: feature
                    .tree_id()
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
                species: feature.tree_type().unwrap_or_default().to_owned(),
                planting_year: feature
                    .planting_year()
                    .map(|year| year.to_string())
                    .unwrap_or_default(),
            })
        })
        .collect()
}
