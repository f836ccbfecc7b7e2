//! Zoom buttons and view reset.

use dioxus::prelude::*;
use vtm_geo::transform::ZoomTransform;

use super::map_view::{MAP_HEIGHT, MAP_WIDTH};
use crate::state::MapState;

/// Programmatic zoom animates briefly; the reset takes longer.
const BUTTON_ZOOM_MS: u32 = 250;
const RESET_MS: u32 = 500;

/// Zoom in/out about the viewport center, and reset to the identity view.
#[component]
pub fn MapControls() -> Element {
    let mut state = use_context::<MapState>();

    let on_zoom_in = move |_| {
        let current = *state.transform.read();
        state.zoom_animation_ms.set(BUTTON_ZOOM_MS);
        state
            .transform
            .set(current.scaled_about(2.0, MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0));
    };

    let on_zoom_out = move |_| {
        let current = *state.transform.read();
        state.zoom_animation_ms.set(BUTTON_ZOOM_MS);
        state
            .transform
            .set(current.scaled_about(0.5, MAP_WIDTH / 2.0, MAP_HEIGHT / 2.0));
    };

    let on_reset = move |_| {
        state.zoom_animation_ms.set(RESET_MS);
        state.transform.set(ZoomTransform::IDENTITY);
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px;",
            button { onclick: on_zoom_in, "Zoom in" }
            button { onclick: on_zoom_out, "Zoom out" }
            button { id: "resetButton", onclick: on_reset, "Reset view" }
        }
    }
}
