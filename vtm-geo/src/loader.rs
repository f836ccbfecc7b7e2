/// Remote GeoJSON loading for the two map datasets
use crate::error::Result;
use crate::feature::FeatureCollection;
use reqwest::Client;

/// Street centerlines of Vienna's old town.
pub const STREETS_URL: &str = "https://raw.githubusercontent.com/RassCrom/geovisual_vienna_trees/refs/heads/main/streets-oldtown.geojson.geojson";

/// Tree cadastre points for the same district.
pub const TREES_URL: &str = "https://raw.githubusercontent.com/RassCrom/geovisual_vienna_trees/main/streets.geojson";

/// Fetches a GeoJSON document and parses it into a feature collection.
pub async fn fetch_feature_collection(client: &Client, url: &str) -> Result<FeatureCollection> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(crate::error::LoadError::HttpStatus(status.as_u16()));
    }
    let body = response.text().await?;
    let collection = parse_feature_collection(&body)?;
    log::info!("loaded {} features from {url}", collection.features.len());
    Ok(collection)
}

pub fn parse_feature_collection(body: &str) -> Result<FeatureCollection> {
    Ok(serde_json::from_str(body)?)
}
