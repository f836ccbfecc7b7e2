//! Trees in Vienna's Old Town
//!
//! Interactive map of the street-tree cadastre around Vienna's first
//! district: street centerlines plus one circle per tree, sized by trunk
//! circumference and stroked by trunk-size bucket.
//!
//! Data flow:
//! 1. On mount: fetch the street GeoJSON, fit the conic projection to it,
//!    and turn each street into an SVG path.
//! 2. Then fetch the tree GeoJSON and project the filtered working set
//!    into screen-space circle markers.
//! 3. Hover, click, and zoom all run client-side against the shared
//!    `MapState`; nothing is re-fetched after load.

use dioxus::prelude::*;
use vtm_geo::loader::{self, STREETS_URL, TREES_URL};
use vtm_geo::marker::build_markers;
use vtm_geo::path::line_path;
use vtm_geo::projection::Projection;
use vtm_map_ui::components::{
    ErrorDisplay, Legend, LoadingSpinner, MapControls, MapView, TreeTooltip, MAP_HEIGHT, MAP_WIDTH,
};
use vtm_map_ui::state::MapState;

/// Alert text when the street dataset cannot be loaded.
const STREET_LOAD_ERROR: &str = "There are some problems with the street dataset :(";

/// Alert text when the tree dataset cannot be loaded.
const TREE_LOAD_ERROR: &str = "There was an error loading the tree data.";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("tree-map-root"))
        .launch(App);
}

/// Browser alert, shown at most once per failing dataset.
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(MapState::new);

    // ─── Load both datasets once on mount ───
    // The tree phase waits for the street phase to settle so the
    // projection fit always happens before trees are projected. A street
    // failure skips only the street layer.
    use_effect(move || {
        spawn(async move {
            let client = reqwest::Client::new();
            let mut projection = Projection::vienna_old_town(MAP_WIDTH, MAP_HEIGHT);

            match loader::fetch_feature_collection(&client, STREETS_URL).await {
                Ok(streets) => {
                    projection.fit_size(MAP_WIDTH, MAP_HEIGHT, &streets);
                    let paths: Vec<String> = streets
                        .features
                        .iter()
                        .map(|feature| line_path(&feature.geometry, &projection))
                        .collect();
                    state.street_paths.set(paths);
                }
                Err(err) => {
                    log::error!("street dataset failed to load: {err}");
                    state.street_error.set(Some(STREET_LOAD_ERROR.to_string()));
                    alert(STREET_LOAD_ERROR);
                }
            }
            state.loading.set(false);

            match loader::fetch_feature_collection(&client, TREES_URL).await {
                Ok(trees) => {
                    state.set_markers(build_markers(&trees, &projection));
                }
                Err(err) => {
                    log::error!("tree dataset failed to load: {err}");
                    state.tree_error.set(Some(TREE_LOAD_ERROR.to_string()));
                    alert(TREE_LOAD_ERROR);
                }
            }
        });
    });

    // ─── Render ───
    rsx! {
        div {
            style: "position: relative; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.street_error.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }
            if let Some(err) = state.tree_error.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                MapControls {}
                MapView {}
            }

            Legend {}
            TreeTooltip {}
        }
    }
}
