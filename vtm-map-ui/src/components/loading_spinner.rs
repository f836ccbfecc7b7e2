//! Loading indicator component.

use dioxus::prelude::*;

/// Shown while the street dataset is in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading map data..."
        }
    }
}
