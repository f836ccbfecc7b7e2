//! Interactive map canvas: street paths and tree circles in one
//! zoom/pan group.

use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use vtm_geo::marker::TreeMarker;

use crate::interaction::{circle_paint, wheel_exponent, CircleActivity, FlashPhase, HoverPhase};
use crate::state::MapState;

/// Map viewport size in CSS pixels; the projection is fitted to it.
pub const MAP_WIDTH: f64 = 900.0;
pub const MAP_HEIGHT: f64 = 850.0;

const CONTAINER_ID: &str = "mapContainer";

/// Pointer movement below this many pixels still counts as a click.
const DRAG_THRESHOLD: f64 = 3.0;

/// Get the bounding client rect of the map container element.
fn container_rect() -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONTAINER_ID)?;
    Some(element.get_bounding_client_rect())
}

/// Street band as raw SVG markup, one path per street with the fixed
/// street styling. The path data is already projected.
fn street_band_markup(paths: &[String]) -> String {
    let mut markup = String::with_capacity(paths.len() * 64);
    for d in paths {
        markup.push_str(&format!(
            r##"<path d="{d}" fill="none" stroke="#708090" stroke-width="0.25" stroke-opacity="0.9"/>"##
        ));
    }
    markup
}

/// The map viewport. Wheel zooms about the pointer, left-drag pans,
/// and every tree circle carries its own hover/click handlers.
#[component]
pub fn MapView() -> Element {
    let mut state = use_context::<MapState>();

    // Drag state, local to the view
    let mut dragging = use_signal(|| false);
    let mut drag_start = use_signal(|| (0.0_f64, 0.0_f64));
    let mut drag_start_translate = use_signal(|| (0.0_f64, 0.0_f64));

    let markers = state.markers.read().clone();
    let activity = state.activity.read().clone();
    let order = state.draw_order.read().clone();
    let street_markup = street_band_markup(&state.street_paths.read());
    let transform = *state.transform.read();
    let animation_ms = *state.zoom_animation_ms.read();

    let below = order.below_streets();
    let above = order.above_streets(markers.len());

    let mut group_style = format!("transform: {}; transform-origin: 0 0;", transform.css());
    if animation_ms > 0 {
        group_style.push_str(&format!(" transition: transform {animation_ms}ms;"));
    }

    rsx! {
        div {
            id: CONTAINER_ID,
            style: "position: relative; width: {MAP_WIDTH}px; height: {MAP_HEIGHT}px;",

            onwheel: move |evt: Event<WheelData>| {
                evt.prevent_default();

                let exponent = wheel_exponent(evt.data().delta());
                if exponent == 0.0 {
                    return;
                }
                let Some(rect) = container_rect() else { return };
                let client = evt.data().client_coordinates();
                let cx = client.x - rect.left();
                let cy = client.y - rect.top();

                let current = *state.transform.read();
                state.zoom_animation_ms.set(0);
                state
                    .transform
                    .set(current.scaled_about(2f64.powf(exponent), cx, cy));
            },

            onmousedown: move |evt: Event<MouseData>| {
                // Only track drag for the left mouse button
                if evt.trigger_button() != Some(MouseButton::Primary) {
                    return;
                }
                let client = evt.client_coordinates();
                dragging.set(true);
                state.did_pan.set(false);
                drag_start.set((client.x, client.y));
                let transform = *state.transform.read();
                drag_start_translate.set((transform.x, transform.y));
            },

            onmousemove: move |evt: Event<MouseData>| {
                if !*dragging.read() {
                    return;
                }
                let client = evt.client_coordinates();
                let (start_x, start_y) = *drag_start.read();
                let dx = client.x - start_x;
                let dy = client.y - start_y;

                if !*state.did_pan.read()
                    && (dx.abs() > DRAG_THRESHOLD || dy.abs() > DRAG_THRESHOLD)
                {
                    state.did_pan.set(true);
                }
                if *state.did_pan.read() {
                    let (tx, ty) = *drag_start_translate.read();
                    let current = *state.transform.read();
                    state.zoom_animation_ms.set(0);
                    state.transform.set(current.translated_to(tx + dx, ty + dy));
                }
            },

            onmouseup: move |_| {
                dragging.set(false);
            },

            onmouseleave: move |_| {
                dragging.set(false);
            },

            svg {
                width: "{MAP_WIDTH}",
                height: "{MAP_HEIGHT}",
                view_box: "0 0 {MAP_WIDTH} {MAP_HEIGHT}",
                preserve_aspect_ratio: "xMidYMid",
                title { "Trees in Vienna" }

                g {
                    style: "{group_style}",

                    // Paint order: lowered circles, streets, remaining
                    // circles, the raised circle last
                    g {
                        for index in below {
                            TreeCircle {
                                key: "{index}",
                                index,
                                marker: markers[index].clone(),
                                activity: activity[index],
                            }
                        }
                    }
                    g { dangerous_inner_html: "{street_markup}" }
                    g {
                        for index in above {
                            TreeCircle {
                                key: "{index}",
                                index,
                                marker: markers[index].clone(),
                                activity: activity[index],
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One tree circle. The dynamic paint lives in the style attribute so
/// CSS transitions animate hover, pulse, and flash changes.
#[component]
fn TreeCircle(index: usize, marker: TreeMarker, activity: CircleActivity) -> Element {
    let mut state = use_context::<MapState>();

    let paint = circle_paint(&marker, activity);
    let stroke = marker.bucket.stroke_color();
    let style = format!(
        "fill: {}; stroke-width: {}px; r: {}px; transition: {}; cursor: pointer;",
        paint.fill, paint.stroke_width, paint.radius, paint.transition
    );

    let tree_id = marker.tree_id.clone();
    let species = marker.species.clone();
    let planting_year = marker.planting_year.clone();

    rsx! {
        circle {
            cx: "{marker.x}",
            cy: "{marker.y}",
            r: "{marker.radius}",
            stroke: stroke,
            stroke_opacity: "0.5",
            fill_opacity: "0.5",
            style: "{style}",

            onmouseenter: move |evt: Event<MouseData>| {
                let page = evt.page_coordinates();
                state.activity.write()[index].hover = HoverPhase::Hovered;
                state.draw_order.write().raise(index);

                let mut tooltip = state.tooltip.write();
                tooltip.visible = true;
                tooltip.fade_ms = 200;
                tooltip.page_x = page.x + 20.0;
                tooltip.page_y = page.y + 20.0;
                tooltip.tree_id = tree_id.clone();
                tooltip.species = species.clone();
                tooltip.planting_year = planting_year.clone();
            },

            onmouseleave: move |_| {
                state.activity.write()[index].hover = HoverPhase::Left;
                state.draw_order.write().lower(index);

                let mut tooltip = state.tooltip.write();
                tooltip.visible = false;
                tooltip.fade_ms = 10;
            },

            onclick: move |_| {
                // A mouseup that ends a pan still fires a click; swallow it
                if *state.did_pan.read() {
                    return;
                }
                state.activity.write()[index].pulsing = true;
                spawn(async move {
                    TimeoutFuture::new(150).await;
                    state.activity.write()[index].pulsing = false;
                });
            },

            ondoubleclick: move |_| {
                state.activity.write()[index].flash = FlashPhase::Active;
                spawn(async move {
                    // 150ms fade in plus a 150ms hold, then fade back
                    TimeoutFuture::new(300).await;
                    state.activity.write()[index].flash = FlashPhase::Clearing;
                    TimeoutFuture::new(150).await;
                    state.activity.write()[index].flash = FlashPhase::None;
                });
            },
        }
    }
}
