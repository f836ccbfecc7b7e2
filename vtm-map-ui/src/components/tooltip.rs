//! Hover tooltip with the details of one tree.

use dioxus::prelude::*;

use crate::state::MapState;

/// Floating table describing the hovered tree. Always mounted so the
/// opacity fade can run; hiding just fades back to 0.
#[component]
pub fn TreeTooltip() -> Element {
    let state = use_context::<MapState>();
    let tooltip = state.tooltip.read().clone();

    let opacity = if tooltip.visible { 0.9 } else { 0.0 };
    let style = format!(
        "position: absolute; left: {}px; top: {}px; opacity: {}; \
         transition: opacity {}ms; pointer-events: none; \
         background: #fff; border: 1px solid #999; border-radius: 4px; \
         padding: 6px 8px; font-size: 12px;",
        tooltip.page_x, tooltip.page_y, opacity, tooltip.fade_ms
    );

    rsx! {
        div {
            class: "tooltip",
            style: "{style}",
            table {
                tr {
                    th { "Attribute" }
                    th { "Individual {tooltip.tree_id}" }
                }
                tr {
                    td { "Species: " }
                    td { "{tooltip.species}" }
                }
                tr {
                    td { "Planting Year: " }
                    td { "{tooltip.planting_year}" }
                }
            }
        }
    }
}
